// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal scroll adjustments that bring an item into view.

use crate::Scalar;

/// Scroll offset that makes `[item_start, item_end)` fully visible with the
/// smallest change from `view_start`.
///
/// - Returns `None` when the item already lies inside the viewport.
/// - An item above the viewport, or one taller than the viewport, is aligned
///   to the viewport's start.
/// - An item below the viewport is aligned to the viewport's end.
///
/// The result is never negative. Applying it and asking again returns `None`.
pub fn reveal_offset<S: Scalar>(
    item_start: S,
    item_end: S,
    view_start: S,
    view_extent: S,
) -> Option<S> {
    let view_extent = view_extent.max(S::zero());
    let view_end = view_start + view_extent;
    if item_start >= view_start && item_end <= view_end {
        return None;
    }

    let target = if item_start < view_start || item_end - item_start > view_extent {
        item_start
    } else {
        item_end - view_extent
    };
    let target = target.max(S::zero());
    (target != view_start).then_some(target)
}
