//! # calc-core
//!
//! The calculation engine for calc - THE LOGIC.
//!
//! This crate resolves an integer selector to one of twelve numeric
//! operations, executes it on two operands, and records every successful
//! calculation in a bounded history.
//!
//! ## Components
//!
//! - `registry`: immutable selector -> operation table
//! - `operation`: the operations and their numeric failure policy
//! - `engine`: lookup, execution and recording as one call
//! - `history`: fixed-capacity FIFO buffer, safe under concurrent access
//!
//! ## Architectural Constraints
//!
//! - No async, no I/O; every call returns or fails synchronously
//! - The history buffer is the only shared mutable state
//! - Errors are values (`CalcError`); the core never panics
//!
//! ```
//! use calc_core::{CalculatorEngine, Selector};
//!
//! let engine = CalculatorEngine::new();
//! assert_eq!(engine.calculate(Selector(1), 5.0, 3.0), Ok(8.0));
//! assert_eq!(engine.history().size(), 1);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod engine;
pub mod history;
pub mod operation;
pub mod primitives;
pub mod registry;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{CalcError, CalculationRecord, DetailedResult, Selector};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use engine::CalculatorEngine;
pub use history::{HistoryBuffer, HistoryView};
pub use operation::{Operation, OperationCategory};
pub use registry::Registry;

// =============================================================================
// RE-EXPORTS: Primitives
// =============================================================================

pub use primitives::{DEFAULT_HISTORY_SIZE, MIN_HISTORY_SIZE, ZERO_EPSILON};
