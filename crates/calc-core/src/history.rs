//! # History Module
//!
//! Bounded, insertion-ordered history of completed calculations.
//!
//! - Capacity is fixed at construction (`>= 1`, default 100).
//! - Appending past capacity evicts the oldest record (FIFO, not LRU).
//! - Readers receive independent snapshots; later appends never change a
//!   snapshot that was already returned.
//!
//! ## Concurrency
//!
//! One mutex guards the record sequence. Every read and every write goes
//! through it, so `size() <= capacity()` holds at all observable times.

use crate::primitives::{DEFAULT_HISTORY_SIZE, MIN_HISTORY_SIZE};
use crate::{CalcError, CalculationRecord};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

// =============================================================================
// HISTORY BUFFER
// =============================================================================

/// Fixed-capacity FIFO buffer of calculation records.
#[derive(Debug)]
pub struct HistoryBuffer {
    records: Mutex<VecDeque<CalculationRecord>>,
    max_size: usize,
}

impl HistoryBuffer {
    /// Create a buffer holding at most `max_size` records.
    ///
    /// Returns `CalcError::InvalidArgument` if `max_size < 1`.
    pub fn new(max_size: usize) -> Result<Self, CalcError> {
        if max_size < MIN_HISTORY_SIZE {
            return Err(CalcError::InvalidArgument(format!(
                "history size must be at least {MIN_HISTORY_SIZE}, got {max_size}"
            )));
        }

        tracing::info!(max_size, "calculation history initialized");
        Ok(Self {
            records: Mutex::new(VecDeque::new()),
            max_size,
        })
    }

    /// Append a record, evicting from the head while over capacity.
    ///
    /// Returns `CalcError::InvalidArgument` for a blank record (no operation
    /// name or symbol).
    pub fn append(&self, record: CalculationRecord) -> Result<(), CalcError> {
        if record.is_blank() {
            return Err(CalcError::InvalidArgument(
                "cannot add a record without an operation to history".to_string(),
            ));
        }

        let mut records = self.lock();
        tracing::debug!(%record, "added record to history");
        records.push_back(record);

        while records.len() > self.max_size {
            if let Some(evicted) = records.pop_front() {
                tracing::debug!(record = %evicted, "evicted oldest record");
            }
        }
        Ok(())
    }

    /// Snapshot of every record, oldest first.
    #[must_use]
    pub fn all(&self) -> Vec<CalculationRecord> {
        self.lock().iter().cloned().collect()
    }

    /// The last `min(count, size)` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<CalculationRecord> {
        let records = self.lock();
        let skip = records.len().saturating_sub(count);
        records.iter().skip(skip).cloned().collect()
    }

    /// Remove every record. Idempotent.
    pub fn clear(&self) {
        let mut records = self.lock();
        let removed = records.len();
        records.clear();
        tracing::info!(removed, "cleared calculation history");
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Poisoning is ignored; no mutation can be interrupted halfway.
    fn lock(&self) -> MutexGuard<'_, VecDeque<CalculationRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            max_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

// =============================================================================
// HISTORY VIEW
// =============================================================================

/// Read-only handle to an engine's history.
///
/// Mutation stays with the engine; callers only observe.
#[derive(Debug, Clone, Copy)]
pub struct HistoryView<'a> {
    buffer: &'a HistoryBuffer,
}

impl<'a> HistoryView<'a> {
    pub(crate) fn new(buffer: &'a HistoryBuffer) -> Self {
        Self { buffer }
    }

    #[must_use]
    pub fn all(&self) -> Vec<CalculationRecord> {
        self.buffer.all()
    }

    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<CalculationRecord> {
        self.buffer.recent(count)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

// =============================================================================
// TESTS
// =============================================================================
