//! `vaquinha donate`: validate a donation and record it.

use tracing::instrument;
use vaquinha_core::domain::format_brl;

use crate::{
    cli::DonateArgs,
    commands::{donation_from_form, open_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: DonateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let donation = donation_from_form(args.form)?;
    let service = open_service(&config);

    let record = service.submit(donation)?;

    if output.is_json() {
        output.json(&record)?;
        return Ok(());
    }

    output.success(&format!(
        "Doação de {} registrada em nome de {}",
        format_brl(record.amount),
        record.display_name,
    ))?;
    output.field("Campanha:", &config.campaign.name)?;
    output.field("Recibo:", &record.id.to_string())?;
    Ok(())
}
