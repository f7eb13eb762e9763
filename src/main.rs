//! tfdoc CLI entry point.
//!
//! This binary provides the command-line interface for tfdoc.

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tfdoc::cli::{Cli, Commands, OpenArgs, UrlArgs};
use tfdoc::host::{Editor, TerminalHost, TextDocument};
use tfdoc::types::OutputFormat;
use tfdoc::{Config, DocsCommand, TfdocError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("Error: {e}");

            // Print error chain (cause chain)
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut i = 0;
                while let Some(cause) = source {
                    eprintln!("  {i}: {cause}");
                    source = cause.source();
                    i += 1;
                }
            }

            let code = e
                .downcast_ref::<TfdocError>()
                .map_or(1, TfdocError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        // First try to use RUST_LOG from environment, otherwise use verbose flag
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let base_level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(format!("warn,tfdoc={base_level}"))
        })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Open(args) => open(args, &load_config(cli.config.as_deref())?).await,
        Commands::Url(args) => url(args, &load_config(cli.config.as_deref())?),

        Commands::Init => {
            let config_path = Path::new("tfdoc.yaml");
            if config_path.exists() {
                anyhow::bail!("Configuration file already exists: {}", config_path.display());
            }

            std::fs::write(config_path, Config::example_yaml())?;
            println!("Created example configuration: tfdoc.yaml");
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate(args) => match Config::from_file(&args.config) {
            Ok(_) => {
                println!("Configuration is valid: {}", args.config.display());
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("Configuration error: {e}");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

/// Configuration for the docs subcommands; `init` and `validate` never load it.
fn load_config(explicit: Option<&Path>) -> tfdoc::Result<Config> {
    tracing::debug!("Loading configuration");
    Config::discover(explicit)
}

async fn open(args: OpenArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let editor = match &args.file {
        Some(path) => Some(Editor::new(TextDocument::open(path)?, args.cursor.position())),
        None => None,
    };

    let host = TerminalHost::new(editor, config);
    match DocsCommand::new(config).run(&host).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already reported through the host.
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

fn url(args: UrlArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let editor = Editor::new(TextDocument::open(&args.file)?, args.cursor.position());

    let link = match DocsCommand::new(config).locate(&editor) {
        Ok(link) => link,
        Err(failure) => {
            eprintln!("{failure}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match args.format {
        OutputFormat::Text => println!("{}", link.url),
        OutputFormat::Json => {
            let json = if config.output.pretty {
                serde_json::to_string_pretty(&link)?
            } else {
                serde_json::to_string(&link)?
            };
            println!("{json}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
