//! # Paradise Nursery Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # Start an interactive shopping session
//! paradise-nursery
//!
//! # Print the catalog
//! paradise-nursery catalog
//!
//! # Print aromatic plants as JSON
//! paradise-nursery catalog --category aromatic --json
//!
//! # Show the configuration (after PARADISE_* overrides)
//! paradise-nursery config
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging, to stderr)
//! 3. Run the requested command

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use paradise_core::Category;

#[derive(Parser)]
#[command(name = "paradise-nursery")]
#[command(author, version, about = "Paradise Nursery plant shop")]
struct Cli {
    /// Log debug messages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shopping session (default)
    Shop,
    /// Print the catalog and exit
    Catalog {
        /// Only show one category (`air-purifying`, `aromatic`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration as JSON
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    paradise_terminal_lib::init_tracing(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Shop) {
        Commands::Shop => paradise_terminal_lib::run_shop(),
        Commands::Catalog { category, json } => {
            paradise_terminal_lib::print_catalog(category, json, io::stdout().lock())
        }
        Commands::Config => paradise_terminal_lib::print_config(io::stdout().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
