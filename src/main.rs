use anyhow::Result;
use clap::{CommandFactory, Parser};

use dirtree_icons::cli::{Cli, Command};
use dirtree_icons::commands;
use dirtree_icons::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::List(args) => {
            tracing::info!(?args, "Listing icon sets");
            commands::list::run(args, &config)?;
        }
        Command::Show(args) => {
            tracing::info!(?args, "Showing icon set");
            commands::show::run(args, &config)?;
        }
        Command::Export(args) => {
            tracing::info!(?args, "Exporting icon set");
            commands::export::run(args, &config)?;
        }
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "dirtree-icons",
                &mut std::io::stdout(),
            );
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
        .unwrap_or_else(|_| EnvFilter::new(format!("dirtree_icons={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
