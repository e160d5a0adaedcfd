use anyhow::Result;
use bgneur::core::ConversionDirection;
use bgneur::core::log::init_logging;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    /// Leva to euro
    #[value(alias = "bgn")]
    BgnToEur,
    /// Euro to leva
    #[value(alias = "eur")]
    EurToBgn,
}

impl From<Direction> for ConversionDirection {
    fn from(direction: Direction) -> ConversionDirection {
        match direction {
            Direction::BgnToEur => ConversionDirection::BgnToEur,
            Direction::EurToBgn => ConversionDirection::EurToBgn,
        }
    }
}

impl From<Commands> for bgneur::AppCommand {
    fn from(cmd: Commands) -> bgneur::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                direction,
                json,
            } => bgneur::AppCommand::Convert {
                amount,
                direction: direction.map(Into::into),
                json,
            },
            Commands::Rate => bgneur::AppCommand::Rate,
            Commands::Interactive => bgneur::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert a single amount
    Convert {
        /// Amount in the source currency
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Conversion direction (defaults to the configured one)
        #[arg(short, long, value_enum)]
        direction: Option<Direction>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display the official fixed rate
    Rate,
    /// Start an interactive session (default)
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => bgneur::cli::setup::setup(),
        Some(cmd) => bgneur::run_command(cmd.into(), cli.config_path.as_deref()),
        None => bgneur::run_command(bgneur::AppCommand::Interactive, cli.config_path.as_deref()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
