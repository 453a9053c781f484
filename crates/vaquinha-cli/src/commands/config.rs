//! `vaquinha config`: inspect the merged configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised = config
                    .to_toml()
                    .with_cli_context(|| "Failed to serialise config")?;
                output.header("Current Configuration:")?;
                output.data(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "campaign.name" => Ok(config.campaign.name.clone()),
        "campaign.goal" => Ok(config.campaign.goal.to_string()),
        "storage.data_file" => Ok(config.storage.data_file.display().to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::UnknownConfigKey { key: key.to_owned() }),
    }
}
