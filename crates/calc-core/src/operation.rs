//! # Operation Module
//!
//! The closed set of numeric operations.
//!
//! Every operation is a pure function `(a, b) -> f64` with a name and a
//! display symbol. Unary operations (square root, trigonometry, logarithm)
//! ignore `b` without validating it.
//!
//! ## Numeric Policy
//!
//! | Operation | Formula | Failure |
//! |-----------|---------|---------|
//! | Division | `a / b` | `DivisionByZero` when `|b| < ZERO_EPSILON` |
//! | Modulus | `a % b` (sign follows dividend) | `DivisionByZero` when `|b| < ZERO_EPSILON` |
//! | SquareRoot | `√a` | `NegativeInput` when `a < 0` |
//! | NaturalLog | `ln a` | `InvalidInput` when `a <= 0` |
//!
//! All other operations never fail. Infinite or NaN results from Power and
//! Tangent are valid results.

use crate::primitives::ZERO_EPSILON;
use crate::CalcError;
use serde::Serialize;
use std::fmt;

// =============================================================================
// OPERATION CATEGORY
// =============================================================================

/// Menu grouping of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OperationCategory {
    /// Addition, Subtraction, Multiplication, Division.
    Basic,
    /// Power, SquareRoot, Modulus, Percentage.
    Advanced,
    /// Sine, Cosine, Tangent, NaturalLog.
    Scientific,
}

impl OperationCategory {
    /// Human-readable name for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Scientific => "Scientific",
        }
    }
}

impl fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// OPERATION
// =============================================================================

/// A stateless numeric operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Power,
    SquareRoot,
    Modulus,
    Percentage,
    Sine,
    Cosine,
    Tangent,
    NaturalLog,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 12] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
        Self::Power,
        Self::SquareRoot,
        Self::Modulus,
        Self::Percentage,
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::NaturalLog,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
            Self::Power => "Power",
            Self::SquareRoot => "Square Root",
            Self::Modulus => "Modulus",
            Self::Percentage => "Percentage",
            Self::Sine => "Sine",
            Self::Cosine => "Cosine",
            Self::Tangent => "Tangent",
            Self::NaturalLog => "Natural Logarithm",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Power => "^",
            Self::SquareRoot => "√",
            Self::Modulus => "%",
            Self::Percentage => "%of",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::NaturalLog => "ln",
        }
    }

    /// `"<name> (<symbol>)"`, e.g. `"Addition (+)"`.
    ///
    /// Percentage reads `"Percentage (b% of a)"`.
    #[must_use]
    pub fn description(self) -> String {
        match self {
            Self::Percentage => format!("{} (b% of a)", self.name()),
            _ => format!("{} ({})", self.name(), self.symbol()),
        }
    }

    #[must_use]
    pub const fn category(self) -> OperationCategory {
        match self {
            Self::Addition | Self::Subtraction | Self::Multiplication | Self::Division => {
                OperationCategory::Basic
            }
            Self::Power | Self::SquareRoot | Self::Modulus | Self::Percentage => {
                OperationCategory::Advanced
            }
            Self::Sine | Self::Cosine | Self::Tangent | Self::NaturalLog => {
                OperationCategory::Scientific
            }
        }
    }

    /// True when the operation reads only its first operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(
            self,
            Self::SquareRoot | Self::Sine | Self::Cosine | Self::Tangent | Self::NaturalLog
        )
    }

    /// Execute the operation.
    ///
    /// Pure: no state is read or written. Fails only under the policy in the
    /// module table; unary operations ignore `b`.
    pub fn execute(self, a: f64, b: f64) -> Result<f64, CalcError> {
        tracing::debug!(operation = self.name(), a, b, "executing operation");

        let result = match self {
            Self::Addition => a + b,
            Self::Subtraction => a - b,
            Self::Multiplication => a * b,
            Self::Division => {
                if is_zero_divisor(b) {
                    return Err(CalcError::DivisionByZero(format!(
                        "Cannot divide {a:.2} by zero"
                    )));
                }
                a / b
            }
            Self::Power => a.powf(b),
            Self::SquareRoot => {
                if a < 0.0 {
                    return Err(CalcError::NegativeInput(a));
                }
                a.sqrt()
            }
            Self::Modulus => {
                if is_zero_divisor(b) {
                    return Err(CalcError::DivisionByZero(format!(
                        "Cannot calculate modulus with divisor zero: {a:.2} % 0"
                    )));
                }
                a % b
            }
            Self::Percentage => (a * b) / 100.0,
            Self::Sine => a.to_radians().sin(),
            Self::Cosine => a.to_radians().cos(),
            Self::Tangent => {
                let result = a.to_radians().tan();
                if result.is_infinite() {
                    tracing::warn!(angle = a, "tangent is infinite for this angle");
                }
                result
            }
            Self::NaturalLog => {
                if a <= 0.0 {
                    return Err(CalcError::InvalidInput(format!(
                        "Cannot calculate logarithm of non-positive number: {a:.2}"
                    )));
                }
                a.ln()
            }
        };

        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Epsilon comparison instead of `== 0.0`; absorbs floating-point noise.
fn is_zero_divisor(b: f64) -> bool {
    b.abs() < ZERO_EPSILON
}

// =============================================================================
// TESTS
// =============================================================================
