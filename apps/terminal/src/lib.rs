//! # Paradise Terminal Library
//!
//! The terminal storefront: state handles, commands, rendering and the
//! interactive shell.
//!
//! ## Module Organization
//! ```text
//! paradise_terminal_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & entry points)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session handle (cart + view)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── cart.rs       ◄─── Cart manipulation commands
//! │   ├── catalog.rs    ◄─── Plant listing commands
//! │   ├── config.rs     ◄─── Configuration command
//! │   └── navigation.rs ◄─── Page selection commands
//! ├── render.rs       ◄─── Views as text
//! ├── shell.rs        ◄─── Read-apply-render loop
//! └── error.rs        ◄─── Command and run error types
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::RunError;
use paradise_core::{CartTotals, Catalog, Category};
use state::{ConfigState, SessionState};

/// Runs an interactive shopping session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration (PARADISE_* env vars over defaults)              │
/// │  2. Create the session over the built-in catalog                        │
/// │  3. Run the shell until quit or end of input                            │
/// │  4. Drop the session (nothing persists)                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run_shop() -> Result<(), RunError> {
    let config = ConfigState::from_env();
    info!(store_name = %config.store_name, "Starting Paradise Nursery");

    let session = SessionState::new(Catalog::builtin());

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_shell(&session, &config, stdin.lock(), stdout.lock())
}

/// Prints the catalog, as text or JSON, and returns.
pub fn print_catalog<W: Write>(
    category: Option<Category>,
    json: bool,
    mut output: W,
) -> Result<(), RunError> {
    let config = ConfigState::from_env();
    let plants = commands::catalog::list_plants(Catalog::builtin(), category);

    if json {
        serde_json::to_writer_pretty(&mut output, &plants)?;
        writeln!(output)?;
    } else {
        let totals = CartTotals::default();
        writeln!(output, "{}", render::render_catalog(&config, &plants, &totals))?;
    }

    Ok(())
}

/// Prints the resolved configuration as JSON.
pub fn print_config<W: Write>(mut output: W) -> Result<(), RunError> {
    let config = commands::config::get_config(&ConfigState::from_env());
    serde_json::to_writer_pretty(&mut output, &config)?;
    writeln!(output)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with rendered views.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=paradise=trace` - Show trace for paradise crates only
/// - Default: WARN, with INFO for paradise crates (DEBUG when `verbose`)
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,paradise=debug"
    } else {
        "warn,paradise=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_catalog_json_filters_category() {
        let mut out = Vec::new();
        print_catalog(Some(Category::AirPurifying), true, &mut out).unwrap();

        let plants: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let names: Vec<&str> = plants
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Snake Plant", "Spider Plant"]);
        assert_eq!(plants[0]["price"], 2999);
        assert_eq!(plants[0]["category"], "air_purifying");
    }

    #[test]
    fn test_print_config_json() {
        let mut out = Vec::new();
        print_config(&mut out).unwrap();

        let config: ConfigState = serde_json::from_slice(&out).unwrap();
        assert_eq!(config.currency_code, "USD");
    }

    #[test]
    fn test_print_catalog_text() {
        let mut out = Vec::new();
        print_catalog(None, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Aloe Vera"));
        assert!(text.contains("Cart (0)"));
    }
}
