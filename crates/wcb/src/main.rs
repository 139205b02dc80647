//! Web Context Bootstrap - Entry Point
//!
//! Starts the web application contexts against the in-memory host, prints
//! the registration surface and stops on Ctrl-C.

use clap::Parser;
use wcb_server::run;

/// Command line interface for Web Context Bootstrap
#[derive(Parser, Debug)]
#[command(name = "wcb")]
#[command(about = "Web Context Bootstrap - Container, dispatcher and security filter wiring")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Start, print the registration surface, then stop without waiting
    #[arg(long)]
    pub dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.dry_run).await
}
