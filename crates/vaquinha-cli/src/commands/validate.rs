//! `vaquinha validate`: run every check without recording anything.

use serde::Serialize;
use vaquinha_adapters::InMemoryDonationRepository;
use vaquinha_core::application::{ApplicationError, DonationService};

use crate::{
    cli::ValidateArgs,
    commands::donation_from_form,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct Report<'a> {
    valid: bool,
    messages: &'a [String],
}

pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let mut donation = donation_from_form(args.form)?;
    // Nothing is saved, so a throwaway store is enough.
    let service = DonationService::new(Box::new(InMemoryDonationRepository::new()));
    let findings = service.check(&mut donation);

    if output.is_json() {
        output.json(&Report {
            valid: findings.is_empty(),
            messages: &findings,
        })?;
    } else if findings.is_empty() {
        output.success("Doação válida")?;
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(CliError::Core(
            ApplicationError::DonationRejected { messages: findings }.into(),
        ))
    }
}
