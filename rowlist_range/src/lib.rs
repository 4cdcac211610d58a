// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rowlist_range --heading-base-level=0

//! Rowlist Range: index math for uniform-height virtualized lists.
//!
//! This crate answers the two questions a virtualized list asks on every
//! scroll, refresh, or resize:
//!
//! - Which rows intersect the viewport? See [`visible_range`] and
//!   [`UniformRows::visible_range`], which return a half-open [`VisibleRange`].
//! - How far must the viewport move so a row is fully visible? See
//!   [`reveal_offset`] and [`UniformRows::reveal_row`].
//!
//! [`VisibleRange::exclusive_of`] yields the indices that entered or left the
//! range between two draws, so hosts can reconcile realized rows in time
//! proportional to the change rather than to the viewport size.
//!
//! The crate knows nothing about widgets or display trees. See the `rowlist`
//! crate for a host component that owns row components and a scroll surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use rowlist_range::{UniformRows, VisibleRange};
//!
//! // 1000 rows, each 20 logical pixels tall.
//! let rows = UniformRows::new(1000, 20.0_f64);
//! assert_eq!(rows.content_extent(), 20_000.0);
//!
//! // A 200px viewport scrolled to 505px realizes rows 25..36.
//! let range = rows.visible_range(505.0, 200.0);
//! assert_eq!(range, VisibleRange::new(25, 36));
//!
//! // After scrolling a little further, only the delta changes.
//! let next = rows.visible_range(545.0, 200.0);
//! let left: Vec<_> = range.exclusive_of(&next).collect();
//! let entered: Vec<_> = next.exclusive_of(&range).collect();
//! assert_eq!(left, [25, 26]);
//! assert_eq!(entered, [36, 37]);
//! ```
//!
//! All extents and offsets live in one caller-chosen coordinate space
//! (typically logical pixels) and are expected to be finite.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod range;
mod reveal;
mod scalar;
mod uniform;

pub use range::{VisibleRange, visible_range};
pub use reveal::reveal_offset;
pub use scalar::Scalar;
pub use uniform::UniformRows;
