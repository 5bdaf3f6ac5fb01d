//! # calc CLI Module
//!
//! This module implements the command-line interface for calc.
//!
//! ## Available Commands
//!
//! - `repl` - Interactive console (default)
//! - `eval` - Perform one calculation
//! - `ops` - List available operations

mod commands;

use crate::config::Config;
use crate::error::AppError;
use calc_core::CalculatorEngine;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// calc - interactive arithmetic calculator
///
/// Twelve operations selected by number, with a bounded in-memory history.
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the history capacity from the configuration
    #[arg(long, global = true)]
    pub history_size: Option<usize>,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive console
    Repl,

    /// Perform a single calculation
    Eval {
        /// Operation selector (see `calc ops`)
        #[arg(allow_negative_numbers = true)]
        selector: i32,

        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand (ignored by unary operations, default 0)
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,
    },

    /// List available operations
    Ops,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(history_size) = cli.history_size {
        config.history_size = history_size;
    }
    config.validate()?;

    let engine = CalculatorEngine::with_history_size(config.history_size)?;
    let json_mode = cli.json_mode;
    let stdout = io::stdout();

    match cli.command {
        Some(Commands::Eval { selector, a, b }) => {
            cmd_eval(&engine, &config, &mut stdout.lock(), json_mode, selector, a, b)
        }
        Some(Commands::Ops) => cmd_ops(&engine, &mut stdout.lock(), json_mode),
        Some(Commands::Repl) | None => {
            // No subcommand - interactive console by default
            cmd_repl(&engine, &config, io::stdin().lock(), stdout.lock(), cli.quiet)
        }
    }
}
