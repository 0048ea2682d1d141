mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::PartialAppConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🧬 protkit CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let Cli {
        command,
        config,
        set_values,
        ..
    } = cli;
    let partial_config = PartialAppConfig::load(config.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command_result = match command {
        Commands::Names(args) => {
            info!("Dispatching to 'names' command.");
            commands::names::run(args, partial_config, &set_values, &mut out)
        }
        Commands::Lookup(args) => {
            info!("Dispatching to 'lookup' command.");
            commands::lookup::run(args, partial_config, &set_values, &mut out)
        }
        Commands::Render(args) => {
            info!("Dispatching to 'render' command.");
            commands::render::run(args, partial_config, &set_values, &mut out)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
