// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row components realized by [`crate::VirtualList`].

use alloc::boxed::Box;

/// A UI component materialized for one visible row.
///
/// `C` is the surface's content type (see [`crate::Surface::Content`]): the
/// thing the surface mounts inside the row's positioned wrapper.
pub trait RowComponent<C> {
    /// Content to mount for this row. Called once, when the row is inserted.
    fn gui(&self) -> C;

    /// Releases listeners or other resources held by the component.
    ///
    /// Called exactly once, right after the row's node leaves the surface.
    fn destroy(&mut self) {}
}

/// Factory turning a row value into its component.
pub type ComponentCreator<R, C> = Box<dyn FnMut(R) -> Box<dyn RowComponent<C>>>;

/// A [`RowComponent`] that mounts a fixed value and holds no resources.
///
/// Handy for lists of plain labels, where the row value itself is the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRow<C>(pub C);

impl<C: Clone> RowComponent<C> for StaticRow<C> {
    fn gui(&self) -> C {
        self.0.clone()
    }
}
