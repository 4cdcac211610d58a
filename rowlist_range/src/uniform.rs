// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of a strip of rows that all share one height.

use crate::{Scalar, VisibleRange, reveal_offset, visible_range};

/// Row count and uniform row extent of a virtualized list.
///
/// Every row `i` occupies `[i * row_extent, (i + 1) * row_extent)` in content
/// coordinates, so hosts can position rows absolutely without consulting their
/// neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRows<S: Scalar> {
    row_count: usize,
    row_extent: S,
}

impl<S: Scalar> UniformRows<S> {
    /// Creates a layout of `row_count` rows, each `row_extent` tall.
    ///
    /// Negative extents are clamped to zero; a zero extent realizes nothing.
    #[must_use]
    pub fn new(row_count: usize, row_extent: S) -> Self {
        Self {
            row_count,
            row_extent: row_extent.max(S::zero()),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Sets the number of rows.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    /// Height shared by every row.
    #[must_use]
    pub const fn row_extent(&self) -> S {
        self.row_extent
    }

    /// Sets the height shared by every row.
    pub fn set_row_extent(&mut self, row_extent: S) {
        debug_assert!(
            row_extent.is_finite(),
            "UniformRows extents must be finite; got {row_extent:?}"
        );
        self.row_extent = row_extent.max(S::zero());
    }

    /// Total height of all rows: `row_count * row_extent`.
    #[must_use]
    pub fn content_extent(&self) -> S {
        S::from_usize(self.row_count) * self.row_extent
    }

    /// Offset of the top edge of row `index`.
    #[must_use]
    pub fn row_top(&self, index: usize) -> S {
        S::from_usize(index) * self.row_extent
    }

    /// Offset of the bottom edge of row `index`.
    #[must_use]
    pub fn row_bottom(&self, index: usize) -> S {
        self.row_top(index) + self.row_extent
    }

    /// Index of the row covering `offset`, or `None` past either end.
    #[must_use]
    pub fn row_at_offset(&self, offset: S) -> Option<usize> {
        if !offset.is_finite()
            || offset < S::zero()
            || !self.row_extent.is_finite()
            || self.row_extent <= S::zero()
        {
            return None;
        }
        let index = (offset / self.row_extent).floor_to_usize();
        (index < self.row_count).then_some(index)
    }

    /// Rows intersecting a viewport at `scroll_offset` that is `viewport_extent` tall.
    #[must_use]
    pub fn visible_range(&self, scroll_offset: S, viewport_extent: S) -> VisibleRange {
        visible_range(
            scroll_offset,
            viewport_extent,
            self.row_extent,
            self.row_count,
        )
    }

    /// Scroll offset that brings row `index` fully into view with minimal movement.
    ///
    /// Returns `None` if `index` is out of bounds or the row is already fully
    /// visible.
    #[must_use]
    pub fn reveal_row(&self, index: usize, scroll_offset: S, viewport_extent: S) -> Option<S> {
        if index >= self.row_count {
            return None;
        }
        reveal_offset(
            self.row_top(index),
            self.row_bottom(index),
            scroll_offset,
            viewport_extent,
        )
    }
}
