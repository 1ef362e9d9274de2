use anyhow::Result;
use clap::Parser;

use folder_structure::cli::{Cli, Command};
use folder_structure::commands;
use folder_structure::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Dispatch to subcommand
    match cli.command {
        Command::Generate(args) => {
            let config = Config::load(cli.config.as_deref())?;
            tracing::debug!(?config, "Loaded configuration");
            tracing::info!(?args, "Starting generate");
            commands::generate::run(args, &config, cli.quiet)?;
        }
        Command::Completions(args) => {
            commands::completions::run(args.shell)?;
        }
        Command::Man => {
            commands::completions::run_man()?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folder_structure={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
