//! # Engine Module
//!
//! End-to-end execution of one calculation.
//!
//! ```text
//! calculate(selector, a, b)
//!     -> Registry::lookup(selector)
//!     -> Operation::execute(a, b)
//!     -> HistoryBuffer::append(record)
//!     -> result
//! ```
//!
//! Errors from lookup or execution propagate unchanged. Exactly one record is
//! appended per successful calculation and none per failed one.

use crate::history::{HistoryBuffer, HistoryView};
use crate::{CalcError, CalculationRecord, DetailedResult, Operation, Registry, Selector};
use std::time::Instant;

/// Calculation engine owning a registry and a history buffer.
///
/// All methods take `&self`; the engine is `Send + Sync` and can be shared
/// across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct CalculatorEngine {
    registry: Registry,
    history: HistoryBuffer,
}

impl CalculatorEngine {
    /// Standard registry, history capacity of 100.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard registry with a custom history capacity.
    pub fn with_history_size(max_history_size: usize) -> Result<Self, CalcError> {
        Self::with_registry(Registry::standard(), max_history_size)
    }

    /// Custom registry and history capacity.
    pub fn with_registry(registry: Registry, max_history_size: usize) -> Result<Self, CalcError> {
        let history = HistoryBuffer::new(max_history_size)?;
        tracing::info!(
            operations = registry.len(),
            max_history_size,
            "calculator engine initialized"
        );
        Ok(Self { registry, history })
    }

    /// Perform a calculation and record it.
    pub fn calculate(&self, selector: Selector, a: f64, b: f64) -> Result<f64, CalcError> {
        self.run(selector, a, b).map(|(_, result)| result)
    }

    /// Perform a calculation, record it once, and report timing.
    pub fn calculate_with_details(
        &self,
        selector: Selector,
        a: f64,
        b: f64,
    ) -> Result<DetailedResult, CalcError> {
        let started = Instant::now();
        let (operation, result) = self.run(selector, a, b)?;
        let elapsed = started.elapsed();

        Ok(DetailedResult {
            operand1: a,
            operand2: b,
            result,
            operation_name: operation.name().to_string(),
            operation_symbol: operation.symbol().to_string(),
            elapsed,
        })
    }

    #[must_use]
    pub fn is_valid_operation(&self, selector: Selector) -> bool {
        self.registry.is_valid(selector)
    }

    /// Read-only view of the calculation history.
    #[must_use]
    pub fn history(&self) -> HistoryView<'_> {
        HistoryView::new(&self.history)
    }

    pub fn clear_history(&self) {
        self.history.clear();
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Lookup, execute, record. The single path every calculation takes.
    fn run(&self, selector: Selector, a: f64, b: f64) -> Result<(Operation, f64), CalcError> {
        tracing::debug!(%selector, a, b, "calculating");

        let operation = self.registry.lookup(selector).inspect_err(|e| {
            tracing::error!(%selector, error = %e, "calculation failed");
        })?;
        let result = operation.execute(a, b).inspect_err(|e| {
            tracing::error!(operation = operation.name(), error = %e, "calculation failed");
        })?;

        tracing::info!(
            "calculation successful: {} {} {} = {}",
            a,
            operation.symbol(),
            b,
            result
        );

        self.history.append(CalculationRecord::new(
            a,
            b,
            operation.name(),
            operation.symbol(),
            result,
        ))?;

        Ok((operation, result))
    }
}

// =============================================================================
// TESTS
// =============================================================================
