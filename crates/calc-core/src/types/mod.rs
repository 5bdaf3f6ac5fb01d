//! # Core Type Definitions
//!
//! This module contains the value types shared by the registry, the engine
//! and the history buffer:
//! - Operation selectors (`Selector`)
//! - Completed calculations (`CalculationRecord`, `DetailedResult`)
//! - Error types (`CalcError`)
//!
//! ## Immutability
//!
//! Records and detailed results are plain values. Once constructed they are
//! never mutated; the history buffer hands out clones, never references.

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Timestamp layout used by the record display formats.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Decimal places used when a format string gives no precision.
const DEFAULT_DISPLAY_PRECISION: usize = 4;

// =============================================================================
// SELECTOR
// =============================================================================

/// Integer key identifying one operation within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Selector(pub i32);

impl Selector {
    /// Get the raw selector value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Selector {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CALCULATION RECORD
// =============================================================================

/// Immutable snapshot of one completed calculation.
///
/// Created by the engine right after a successful execution and retained
/// only by the history buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRecord {
    #[serde(serialize_with = "serialize_number")]
    operand1: f64,
    #[serde(serialize_with = "serialize_number")]
    operand2: f64,
    operation_name: String,
    operation_symbol: String,
    #[serde(serialize_with = "serialize_number")]
    result: f64,
    timestamp: DateTime<Local>,
}

impl CalculationRecord {
    /// Create a record stamped with the current local time.
    #[must_use]
    pub fn new(
        operand1: f64,
        operand2: f64,
        operation_name: impl Into<String>,
        operation_symbol: impl Into<String>,
        result: f64,
    ) -> Self {
        Self::with_timestamp(
            operand1,
            operand2,
            operation_name,
            operation_symbol,
            result,
            Local::now(),
        )
    }

    /// Create a record with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(
        operand1: f64,
        operand2: f64,
        operation_name: impl Into<String>,
        operation_symbol: impl Into<String>,
        result: f64,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            operand1,
            operand2,
            operation_name: operation_name.into(),
            operation_symbol: operation_symbol.into(),
            result,
            timestamp,
        }
    }

    #[must_use]
    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    #[must_use]
    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    #[must_use]
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    #[must_use]
    pub fn operation_symbol(&self) -> &str {
        &self.operation_symbol
    }

    #[must_use]
    pub fn result(&self) -> f64 {
        self.result
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// A record with no operation identity carries no calculation.
    ///
    /// The history buffer refuses to store such records.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.operation_name.trim().is_empty() || self.operation_symbol.trim().is_empty()
    }

    /// Render the record with the operation name after the timestamp.
    ///
    /// `[2026-01-28 10:00:00] Addition: 5.0000 + 3.0000 = 8.0000`
    #[must_use]
    pub fn to_formatted_string(&self, precision: usize) -> String {
        format!(
            "[{}] {}: {:.p$} {} {:.p$} = {:.p$}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.operation_name,
            self.operand1,
            self.operation_symbol,
            self.operand2,
            self.result,
            p = precision
        )
    }
}

impl fmt::Display for CalculationRecord {
    /// `[2026-01-28 10:00:00] 5.0000 + 3.0000 = 8.0000`; `{:.2}` narrows the numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "[{}] {:.p$} {} {:.p$} = {:.p$}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.operand1,
            self.operation_symbol,
            self.operand2,
            self.result,
        )
    }
}

// =============================================================================
// DETAILED RESULT
// =============================================================================

/// Outcome of `CalculatorEngine::calculate_with_details`.
///
/// Echoes the operands and operation identity next to the result, plus the
/// wall-clock time the calculation took.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedResult {
    /// First operand as given.
    #[serde(serialize_with = "serialize_number")]
    pub operand1: f64,
    /// Second operand as given (ignored by unary operations).
    #[serde(serialize_with = "serialize_number")]
    pub operand2: f64,
    /// Numeric result; may be infinite or NaN.
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
    /// Name of the executed operation.
    pub operation_name: String,
    /// Display symbol of the executed operation.
    pub operation_symbol: String,
    /// Monotonic execution time; may be zero on fast systems.
    #[serde(rename = "execution_time_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl DetailedResult {
    /// Execution time in fractional milliseconds.
    #[must_use]
    pub fn execution_time_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for DetailedResult {
    /// `Addition: 5.0000 + 3.0000 = 8.0000 (executed in 0.002 ms)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "{}: {:.p$} {} {:.p$} = {:.p$} (executed in {:.3} ms)",
            self.operation_name,
            self.operand1,
            self.operation_symbol,
            self.operand2,
            self.result,
            self.execution_time_ms(),
        )
    }
}

/// Finite numbers stay numbers; `inf`, `-inf` and `NaN` become strings.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    if value.is_finite() {
        serializer.serialize_f64(value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the calculation engine.
///
/// Every variant is terminal for a single calculation and never fatal to the
/// process. The engine propagates them unchanged and writes no history record
/// for a failed calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The selector is not registered.
    #[error("Invalid operation code: {0}")]
    InvalidOperation(Selector),

    /// Division or modulus with a divisor within epsilon of zero.
    #[error("{0}")]
    DivisionByZero(String),

    /// Square root of a negative number.
    #[error("Cannot calculate square root of negative number: {0:.2}")]
    NegativeInput(f64),

    /// Argument outside an operation's domain (natural log of a non-positive number).
    #[error("{0}")]
    InvalidInput(String),

    /// Invalid construction parameter or blank history record.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CalcError {
    /// True for failures caused by the calculation request itself.
    ///
    /// A console reports these and keeps reading input.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, Self::InvalidArgument(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
