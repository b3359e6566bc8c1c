//! Configuration commands — `jobdeck config`.

use anyhow::Result;
use console::style;

use super::super::ConfigCommands;

use jobdeck::config::Config;
use jobdeck::ui::icons::{CHECK, WARN};

pub fn cmd_config(config: &Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Resolved configuration");
            println!("======================");
            println!();
            println!("api_base  = {}", config.api_base);
            println!("login_url = {}", config.login_url);
            println!("data_dir  = {}", config.data_dir.display());
            let path = config.config_path();
            if path.exists() {
                println!();
                println!("Config file: {}", path.display());
            } else {
                println!();
                println!(
                    "No config file. Run 'jobdeck config init' to create {}",
                    path.display()
                );
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            let path = config.write_default_file()?;
            println!("{}Created {}", CHECK, path.display());
        }
        Some(ConfigCommands::Validate) => {
            let warnings = config.validate();
            if warnings.is_empty() {
                println!("{}Configuration looks good", CHECK);
            } else {
                for warning in &warnings {
                    println!("{}{}", WARN, style(warning).yellow());
                }
                anyhow::bail!("{} configuration warning(s)", warnings.len());
            }
        }
    }
    Ok(())
}
