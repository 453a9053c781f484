//! `vaquinha donors`: the public donor list.

use vaquinha_core::application::DonorEntry;
use vaquinha_core::domain::messages;

use crate::{
    cli::{DonorsArgs, DonorsFormat},
    commands::open_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: DonorsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut donors = open_service(&config).donors()?;
    if let Some(limit) = args.limit {
        donors.truncate(limit);
    }

    // JSON and CSV are for machines and stay parseable when empty.
    match args.format {
        DonorsFormat::Json => output.json(&donors)?,
        DonorsFormat::Csv => {
            output.data("name,amount,date,message")?;
            for d in &donors {
                output.data(&csv_row(d))?;
            }
        }
        DonorsFormat::List if !donors.is_empty() => {
            for d in &donors {
                output.data(&d.name)?;
            }
        }
        DonorsFormat::Table if !donors.is_empty() => {
            output.header(messages::DONORS_HEADER)?;
            let width = donors.iter().map(|d| d.name.chars().count()).max().unwrap_or(0);
            for d in &donors {
                output.data(&format!(
                    "  {}  {:<width$}  {:>14}",
                    d.date, d.name, d.amount
                ))?;
                if let Some(message) = &d.message {
                    output.print(&format!("              \u{201c}{message}\u{201d}"))?;
                }
            }
        }
        DonorsFormat::List | DonorsFormat::Table => {
            output.info(messages::NO_DONATIONS_YET)?;
        }
    }
    Ok(())
}

fn csv_row(d: &DonorEntry) -> String {
    [
        d.name.as_str(),
        d.amount.as_str(),
        d.date.as_str(),
        d.message.as_deref().unwrap_or(""),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field when it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_with_commas_are_quoted() {
        let entry = DonorEntry {
            name: "Ana".into(),
            amount: "R$ 1.234,56".into(),
            date: "01/03/2024".into(),
            message: Some("Diga \"sim\"".into()),
        };
        assert_eq!(
            csv_row(&entry),
            "Ana,\"R$ 1.234,56\",01/03/2024,\"Diga \"\"sim\"\"\""
        );
    }

    #[test]
    fn plain_fields_are_left_alone() {
        assert_eq!(csv_field("Anônimo"), "Anônimo");
    }
}
