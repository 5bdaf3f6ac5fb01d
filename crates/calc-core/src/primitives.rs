//! # Numeric Primitives
//!
//! Fixed constants of the calculation engine.
//!
//! These values are compiled into the binary and are immutable at runtime.
//!
//! ## Primitives
//!
//! 1. **Zero Epsilon**: divisors closer to zero than this are treated as zero.
//! 2. **History Bounds**: default and minimum capacity of the history buffer.

/// Threshold under which a divisor is considered zero.
///
/// - Applies to Division and Modulus.
/// - Compared as `divisor.abs() < ZERO_EPSILON`, so `1e-11` fails the same
///   way `0.0` does while `1e-9` divides normally.
pub const ZERO_EPSILON: f64 = 1e-10;

/// Number of records the history buffer keeps when no capacity is given.
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Smallest capacity a history buffer may be constructed with.
pub const MIN_HISTORY_SIZE: usize = 1;
