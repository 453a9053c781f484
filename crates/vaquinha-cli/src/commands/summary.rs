//! `vaquinha summary`: campaign totals against the goal.

use rust_decimal::Decimal;
use serde::Serialize;
use vaquinha_core::domain::{CampaignSummary, format_brl, messages, parse_amount};

use crate::{
    cli::SummaryArgs,
    commands::open_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct SummaryView<'a> {
    campaign: &'a str,
    #[serde(flatten)]
    summary: &'a CampaignSummary,
}

pub fn execute(args: SummaryArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let goal = match args.goal.as_deref() {
        Some(raw) => parse_amount(raw)?,
        None => config.campaign.goal,
    };
    if goal <= Decimal::ZERO {
        return Err(CliError::InvalidInput {
            message: format!("campaign goal must be positive, got {}", format_brl(goal)),
            source: None,
        });
    }

    let summary = open_service(&config).summary(goal)?;

    if output.is_json() {
        output.json(&SummaryView {
            campaign: &config.campaign.name,
            summary: &summary,
        })?;
        return Ok(());
    }

    output.header(&config.campaign.name)?;
    output.field(messages::RAISED_LABEL, &format_brl(summary.total_raised))?;
    output.field(messages::REMAINING_LABEL, &format_brl(summary.remaining))?;
    output.field("Meta:", &format_brl(summary.goal))?;
    output.field("Doações:", &summary.donor_count.to_string())?;
    output.field("Progresso:", &format!("{}%", summary.progress_percent))?;

    if !summary.has_donations() {
        output.info(messages::NO_DONATIONS_YET)?;
    } else if summary.is_goal_reached() {
        output.success("Meta atingida!")?;
    }
    Ok(())
}
