//! CLI Adapter.

mod launch;
mod params;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

use crate::domain::AppError;
use crate::domain::configuration::load_config;

#[derive(Parser)]
#[command(name = "rnafusion-launcher")]
#[command(version)]
#[command(
    about = "Provision shared storage and launch the nf-core/rnafusion pipeline",
    long_about = None
)]
struct Cli {
    /// Launcher configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the shared storage volume and print its name
    #[clap(visible_alias = "init")]
    Initialize,
    /// Launch the pipeline on an existing volume
    Launch {
        /// Volume returned by `initialize`
        #[arg(long)]
        volume: String,
        #[command(flatten)]
        args: launch::ParameterArgs,
    },
    /// Provision a volume, then launch the pipeline on it
    Run {
        #[command(flatten)]
        args: launch::ParameterArgs,
    },
    /// List the declared pipeline parameters
    Params {
        /// Output format
        #[arg(long, value_enum, default_value_t = params::FormatArg::Text)]
        format: params::FormatArg,
    },
    /// Print the pipeline command line without running anything
    Command {
        /// Volume the command would run against
        #[arg(long)]
        volume: String,
        #[command(flatten)]
        args: launch::ParameterArgs,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<i32, AppError> =
        load_config(cli.config.as_deref()).and_then(|config| match cli.command {
            Commands::Initialize => launch::run_initialize(&config).map(|_| 0),
            Commands::Launch { volume, args } => launch::run_launch(&config, &volume, args),
            Commands::Run { args } => launch::run_full(&config, args),
            Commands::Params { format } => params::run_params(format).map(|_| 0),
            Commands::Command { volume, args } => {
                launch::run_command_preview(&config, &volume, args).map(|_| 0)
            }
        });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
