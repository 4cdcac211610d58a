// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range computation and range differencing.

use core::iter::Chain;
use core::ops::Range;

use crate::Scalar;

/// A half-open interval `[start, finish)` of row indices intersecting a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisibleRange {
    /// First visible index (inclusive).
    pub start: usize,
    /// One past the last visible index (exclusive).
    pub finish: usize,
}

impl VisibleRange {
    /// The empty range at index zero.
    pub const EMPTY: Self = Self {
        start: 0,
        finish: 0,
    };

    /// Creates a range, collapsing it to `[start, start)` if `finish < start`.
    #[must_use]
    pub const fn new(start: usize, finish: usize) -> Self {
        let finish = if finish < start { start } else { finish };
        Self { start, finish }
    }

    /// Number of indices in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.finish - self.start
    }

    /// Returns `true` if the range holds no indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.finish
    }

    /// Returns `true` if `index` lies in `[start, finish)`.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.finish
    }

    /// Iterates the indices of the range in ascending order.
    pub fn iter(&self) -> Range<usize> {
        self.start..self.finish
    }

    /// Indices in `self` that are not in `other`, in ascending order.
    ///
    /// The difference of two contiguous ranges is at most two contiguous runs,
    /// so walking it costs only the size of the difference.
    pub fn exclusive_of(&self, other: &Self) -> Chain<Range<usize>, Range<usize>> {
        if other.is_empty() || other.finish <= self.start || other.start >= self.finish {
            return self.iter().chain(0..0);
        }
        let head = self.start..other.start.max(self.start).min(self.finish);
        let tail = other.finish.max(self.start).min(self.finish)..self.finish;
        head.chain(tail)
    }
}

impl IntoIterator for VisibleRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute the rows intersecting a viewport over uniform-height rows.
///
/// - `scroll_offset`: top of the viewport in content coordinates.
/// - `viewport_extent`: height of the viewport.
/// - `row_extent`: height shared by every row; must be positive.
/// - `row_count`: number of rows in the model.
///
/// Returns `[floor(s / r), ceil((s + v) / r))` clamped into `0..=row_count`.
/// Using `ceil` for the trailing edge keeps a partially visible last row
/// realized. A non-positive or non-finite `row_extent` yields an empty range.
pub fn visible_range<S: Scalar>(
    scroll_offset: S,
    viewport_extent: S,
    row_extent: S,
    row_count: usize,
) -> VisibleRange {
    if row_count == 0 || !row_extent.is_finite() || row_extent <= S::zero() {
        return VisibleRange::EMPTY;
    }
    let scroll_offset = scroll_offset.max(S::zero());
    let viewport_extent = viewport_extent.max(S::zero());

    let start = (scroll_offset / row_extent).floor_to_usize().min(row_count);
    let finish = ((scroll_offset + viewport_extent) / row_extent)
        .ceil_to_usize()
        .min(row_count);
    VisibleRange::new(start, finish)
}
