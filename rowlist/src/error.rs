// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition failures reported by [`crate::VirtualList`].

use core::fmt;

/// Errors returned by [`crate::VirtualList`] operations.
///
/// These are precondition violations, not transient faults; retrying the same
/// call without changing its inputs fails the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListError {
    /// An index was outside `0..row_count`.
    ///
    /// Row counts may change on refresh, so callers should validate against the
    /// model's current count.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Row count at the time of the call (zero when no model is bound).
        row_count: usize,
    },
    /// A row height was zero, negative, or not finite.
    InvalidRowHeight(f64),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, row_count } => {
                write!(f, "row index {index} out of range for {row_count} rows")
            }
            Self::InvalidRowHeight(height) => {
                write!(f, "row height must be positive and finite, got {height}")
            }
        }
    }
}

impl core::error::Error for ListError {}
