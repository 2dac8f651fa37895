//! gdswift CLI - Swift declarations from the engine API description
//!
//! Commands:
//! - `gdswift generate` - Generate Swift declarations
//! - `gdswift check` - Validate a gdswift.toml config and the API description

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod config;
mod generate;

#[derive(Parser)]
#[command(name = "gdswift")]
#[command(author, version, about = "Swift declaration generator for the engine API", long_about = None)]
struct Cli {
    /// Log at debug level (overrides GDSWIFT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Swift declarations
    Generate {
        /// Path to extension_api.json
        #[arg(short, long)]
        api: Option<PathBuf>,

        /// Output directory for generated code
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Engine doc/ directory (containing classes/*.xml)
        #[arg(short, long)]
        docs: Option<PathBuf>,

        /// Path to gdswift.toml (default: ./gdswift.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write one file per built-in and per class
        #[arg(long)]
        per_type: bool,

        /// Build configuration whose type sizes are used (e.g., float_64)
        #[arg(short, long)]
        build_configuration: Option<String>,
    },

    /// Validate a gdswift.toml config and the API description it names
    Check {
        /// Path to extension_api.json
        #[arg(short, long)]
        api: Option<PathBuf>,

        /// Path to gdswift.toml (default: ./gdswift.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            api,
            output,
            docs,
            config,
            per_type,
            build_configuration,
        } => {
            let overrides = config::Overrides {
                api,
                output,
                doc_root: docs,
                build_configuration,
                per_type,
            };
            generate::run(config, overrides)?;
        }
        Commands::Check { api, config } => {
            check::run(config, api)?;
        }
    }

    Ok(())
}

/// Log to stderr; GDSWIFT_LOG selects the filter, default "info".
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("GDSWIFT_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
