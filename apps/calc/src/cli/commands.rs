//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Commands write to the given writer so they can run against a buffer.

use crate::config::Config;
use crate::console::Console;
use crate::error::AppError;
use calc_core::{CalculatorEngine, Selector};
use std::io::{BufRead, Write};

// =============================================================================
// REPL COMMAND
// =============================================================================

/// Run the interactive console until exit or end of input.
pub fn cmd_repl<R: BufRead, W: Write>(
    engine: &CalculatorEngine,
    config: &Config,
    input: R,
    output: W,
    quiet: bool,
) -> Result<(), AppError> {
    Console::new(engine, input, output)
        .with_precision(config.precision)
        .with_recent_count(config.recent_count)
        .quiet(quiet)
        .run()?;
    Ok(())
}

// =============================================================================
// EVAL COMMAND
// =============================================================================

/// Perform one calculation and print the detailed result.
pub fn cmd_eval<W: Write>(
    engine: &CalculatorEngine,
    config: &Config,
    out: &mut W,
    json_mode: bool,
    selector: i32,
    a: f64,
    b: Option<f64>,
) -> Result<(), AppError> {
    let selector = Selector(selector);
    let b = b.unwrap_or(0.0);

    tracing::debug!(%selector, a, b, "eval command");
    let detailed = engine.calculate_with_details(selector, a, b)?;

    if json_mode {
        writeln!(out, "{}", serde_json::to_string_pretty(&detailed)?)?;
        return Ok(());
    }

    writeln!(out, "{:.p$}", detailed, p = config.precision)?;
    Ok(())
}

// =============================================================================
// OPS COMMAND
// =============================================================================

/// List the registered operations.
pub fn cmd_ops<W: Write>(
    engine: &CalculatorEngine,
    out: &mut W,
    json_mode: bool,
) -> Result<(), AppError> {
    let registry = engine.registry();

    if json_mode {
        let operations: Vec<_> = registry
            .iter()
            .map(|(selector, op)| {
                serde_json::json!({
                    "selector": selector.value(),
                    "name": op.name(),
                    "symbol": op.symbol(),
                    "category": op.category().name(),
                    "unary": op.is_unary()
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&operations)?)?;
        return Ok(());
    }

    writeln!(out, "Available Operations")?;
    writeln!(out, "====================")?;
    for (selector, op) in registry.iter() {
        writeln!(
            out,
            "{:>3}  {:<18} {:<4} {}",
            selector.value(),
            op.name(),
            op.symbol(),
            op.category()
        )?;
    }
    Ok(())
}
