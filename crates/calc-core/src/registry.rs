//! # Registry Module
//!
//! Maps selectors to operations.
//!
//! A registry is built once, eagerly, and is immutable afterwards. It holds
//! no interior mutability, so a shared reference can be used from any number
//! of threads without locking.
//!
//! ## Standard Table
//!
//! | Selector | Operation | Selector | Operation |
//! |----------|-----------|----------|-----------|
//! | 1 | Addition | 7 | Modulus |
//! | 2 | Subtraction | 8 | Percentage |
//! | 3 | Multiplication | 11 | Sine |
//! | 4 | Division | 12 | Cosine |
//! | 5 | Power | 13 | Tangent |
//! | 6 | SquareRoot | 14 | NaturalLog |

use crate::{CalcError, Operation, Selector};
use std::collections::{BTreeMap, BTreeSet};

/// Selector assignment of the standard operation set.
pub const STANDARD_OPERATIONS: [(i32, Operation); 12] = [
    (1, Operation::Addition),
    (2, Operation::Subtraction),
    (3, Operation::Multiplication),
    (4, Operation::Division),
    (5, Operation::Power),
    (6, Operation::SquareRoot),
    (7, Operation::Modulus),
    (8, Operation::Percentage),
    (11, Operation::Sine),
    (12, Operation::Cosine),
    (13, Operation::Tangent),
    (14, Operation::NaturalLog),
];

/// Name reported for selectors that are not registered.
pub const UNKNOWN_OPERATION_NAME: &str = "Unknown";

/// Immutable selector -> operation table.
///
/// Uses BTreeMap so iteration follows ascending selector order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    operations: BTreeMap<Selector, Operation>,
}

impl Registry {
    /// Build the standard twelve-operation registry.
    #[must_use]
    pub fn standard() -> Self {
        let operations: BTreeMap<Selector, Operation> = STANDARD_OPERATIONS
            .iter()
            .map(|&(code, op)| (Selector(code), op))
            .collect();

        tracing::info!(operations = operations.len(), "operation registry initialized");
        Self { operations }
    }

    /// Build a registry from an alternate operation set.
    ///
    /// Returns `CalcError::InvalidArgument` if a selector or an operation
    /// appears twice; the mapping stays one-to-one.
    pub fn from_entries<I>(entries: I) -> Result<Self, CalcError>
    where
        I: IntoIterator<Item = (Selector, Operation)>,
    {
        let mut operations = BTreeMap::new();
        let mut seen = BTreeSet::new();
        for (selector, operation) in entries {
            if !seen.insert(operation) {
                return Err(CalcError::InvalidArgument(format!(
                    "duplicate operation: {operation} (selector {selector})"
                )));
            }
            if operations.insert(selector, operation).is_some() {
                return Err(CalcError::InvalidArgument(format!(
                    "duplicate operation selector: {selector}"
                )));
            }
        }
        Ok(Self { operations })
    }

    /// Resolve a selector to its operation.
    pub fn lookup(&self, selector: Selector) -> Result<Operation, CalcError> {
        self.operations.get(&selector).copied().ok_or_else(|| {
            tracing::debug!(%selector, "unknown operation selector");
            CalcError::InvalidOperation(selector)
        })
    }

    #[must_use]
    pub fn is_valid(&self, selector: Selector) -> bool {
        self.operations.contains_key(&selector)
    }

    /// All registered selectors.
    #[must_use]
    pub fn selectors(&self) -> BTreeSet<Selector> {
        self.operations.keys().copied().collect()
    }

    /// Operation name for a selector, or `"Unknown"`.
    #[must_use]
    pub fn operation_name(&self, selector: Selector) -> &'static str {
        self.operations
            .get(&selector)
            .map_or(UNKNOWN_OPERATION_NAME, |op| op.name())
    }

    /// `(selector, operation)` pairs in ascending selector order.
    pub fn iter(&self) -> impl Iterator<Item = (Selector, Operation)> + '_ {
        self.operations.iter().map(|(&s, &op)| (s, op))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// TESTS
// =============================================================================
