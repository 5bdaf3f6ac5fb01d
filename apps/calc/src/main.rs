//! # calc - Interactive Calculator
//!
//! The main binary for the calc engine.
//!
//! This application provides:
//! - Interactive menu-driven console
//! - One-shot calculations for scripting
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/calc (THE BINARY)           │
//! │                                               │
//! │   ┌─────────────┐        ┌─────────────┐      │
//! │   │   Console   │        │    CLI      │      │
//! │   │ (menu loop) │        │   (clap)    │      │
//! │   └──────┬──────┘        └──────┬──────┘      │
//! │          └───────────┬──────────┘             │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │   calc-core   │                │
//! │              │  (THE LOGIC)  │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive console
//! calc
//!
//! # One-shot operations
//! calc eval 4 10 4
//! calc --json eval 6 16
//! calc ops
//! ```

use calc::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries results. CALC_LOG_FORMAT=json for machine-parseable output.
    let log_format = std::env::var("CALC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "calc=debug,calc_core=debug"
    } else {
        "calc=warn,calc_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "calc starting");

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
