mod commands;
mod format;
mod param;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{classify::ClassifyArgs, types::TypesArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kvparams-inspect",
    about = "Inspect key/value classification of command parameters"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each parameter as key, value, or neither
    Classify(ClassifyArgs),
    /// Print the role types resolved from a codec
    Types(TypesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => args.run(),
        Commands::Types(args) => args.run(),
    }
}
