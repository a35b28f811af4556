mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio navigation tracker")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded scroll trace through the navigation controller
    Replay(commands::replay::ReplayArgs),
    /// Resolve the active section for a single scroll position
    Resolve(commands::resolve::ResolveArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
    /// List the registered sections
    Sections(commands::sections::SectionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Sections(args) => commands::sections::run(args),
    }
}
