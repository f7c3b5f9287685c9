mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio page content and motion tool")]
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
    /// Show a summary of the page content
    Content(commands::content::ContentArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
    /// Load and validate a config file
    Check(commands::check::CheckArgs),
    /// Run the project carousel headlessly
    Carousel(commands::carousel::CarouselArgs),
    /// Scroll a synthetic page and report active-section changes
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
        Commands::Content(args) => commands::content::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Carousel(args) => commands::carousel::run(args),
        Commands::Sections(args) => commands::sections::run(args),
    }
}
