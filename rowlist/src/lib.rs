// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rowlist --heading-base-level=0

//! Rowlist: a virtualized list component.
//!
//! A [`VirtualList`] renders only the rows that intersect a scrolling viewport,
//! backed by a potentially very large [`RowModel`]. Rows share one height, are
//! positioned absolutely at `index * row_height`, and are recycled in place:
//! a row that stays in view across a scroll is never rebuilt.
//!
//! The crate is headless. A host UI framework plugs in through two traits:
//!
//! - [`Surface`]: the scroll container. It reports the scroll offset and
//!   viewport height, takes the total content height, and mounts/unmounts
//!   positioned row wrappers. [`RetainedSurface`] is an in-memory
//!   implementation with hit testing and [`Damage`] tracking.
//! - [`RowComponent`]: the UI component materialized for one row, produced
//!   by a creator installed with [`VirtualList::set_component_creator`].
//!
//! Hosts forward container scroll events to [`VirtualList::handle_scroll`].
//! Binding a model, changing the row height, refreshing, scrolling, and
//! [`VirtualList::ensure_index_visible`] all converge on the same draw, so
//! what is on screen always has a single source of truth.
//!
//! The visible range math lives in the `rowlist_range` crate; its
//! [`VisibleRange`] is re-exported here.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` for Kurbo.
//! - `libm`: builds Kurbo on `libm` for `no_std` targets.
//! - `tracing`: emits draw, model, and row height events through `tracing`
//!   under the `rowlist` target. Draws are logged at trace level; a draw that
//!   runs without a component creator warns.
//!
//! ## Example
//!
//! ```rust
//! use rowlist::{FnModel, RetainedSurface, RowComponent, StaticRow, VirtualList};
//!
//! let mut list = VirtualList::new(RetainedSurface::<String>::new(240.0, 100.0));
//! list.set_model(FnModel::new(10_000, |i: usize| format!("column {i}")));
//! list.set_component_creator(|label: String| -> Box<dyn RowComponent<String>> {
//!     Box::new(StaticRow(label))
//! });
//! list.set_row_height(25.0).unwrap();
//! assert_eq!(list.rendered_indices(), [0, 1, 2, 3]);
//!
//! // Bring a far-away row into view; only the rows that changed are rebuilt.
//! list.ensure_index_visible(500).unwrap();
//! assert_eq!(list.scroll_top(), 12_425.0);
//! assert!(list.is_rendered(500));
//! assert_eq!(list.surface().content_at(500).map(String::as_str), Some("column 500"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod component;
mod damage;
mod error;
mod list;
mod model;
mod retained;
mod surface;

pub use component::{ComponentCreator, RowComponent, StaticRow};
pub use damage::Damage;
pub use error::ListError;
pub use list::{DEFAULT_ROW_HEIGHT, RowDelta, VirtualList};
pub use model::{FnModel, RowModel};
pub use retained::{NodeId, RetainedSurface};
pub use rowlist_range::VisibleRange;
pub use surface::{RowSlot, Surface};
