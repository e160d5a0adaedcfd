pub mod cli;
pub mod core;

use crate::core::ConversionDirection;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

pub enum AppCommand {
    /// Convert a single amount given as text
    Convert {
        amount: String,
        direction: Option<ConversionDirection>,
        json: bool,
    },
    /// Print the official fixed rate
    Rate,
    /// Start an interactive session reading from stdin
    Interactive,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let stdout = std::io::stdout();
    run_command_with_output(command, config_path, &mut stdout.lock())
}

/// Runs `command`, writing everything meant for the user to `out`.
pub fn run_command_with_output(
    command: AppCommand,
    config_path: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    info!("BGN/EUR calculator starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert {
            amount,
            direction,
            json,
        } => cli::convert::run(
            &amount,
            direction.unwrap_or(config.default_direction),
            json,
            config.raw_precision(),
            out,
        ),
        AppCommand::Rate => {
            writeln!(out, "{}", cli::ui::rate_banner())?;
            Ok(())
        }
        AppCommand::Interactive => {
            cli::interactive::run(&config, std::io::stdin().lock(), out)
        }
    }
}
