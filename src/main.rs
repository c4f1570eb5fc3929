use anyhow::Context;
use clap::Parser;

use adder::cli::commands;
use adder::cli::{Cli, Commands};
use adder::{AdderError, Settings, logging};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<AdderError>()
            .map_or(1, AdderError::exit_code);
        std::process::exit(i32::from(code));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Settings::load().context("Failed to load configuration")?,
    };

    logging::init_with_config(&settings.logging);
    tracing::debug!("[cli] settings: {settings:?}");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(settings.overflow)?,
        Commands::Sum {
            values,
            initial,
            policy,
            json,
        } => commands::sum::run(
            initial.unwrap_or(settings.initial),
            &values,
            policy.unwrap_or(settings.overflow),
            json,
        )?,
        Commands::Factorial { n, json } => commands::factorial::run(n, json)?,
        Commands::Init { force } => {
            let root = std::env::current_dir().context("Cannot determine current directory")?;
            commands::init::run_init(&root, force)?
        }
        Commands::Config => commands::init::run_config(&settings)?,
    }

    Ok(())
}
