// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll container a [`crate::VirtualList`] draws into.

/// Placement of one realized row inside the rows container.
///
/// Rows are positioned absolutely, so a row can be inserted without moving or
/// reordering its siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    /// Logical row index.
    pub index: usize,
    /// Offset of the row's top edge from the top of the content: `index * height`.
    pub top: f64,
    /// Row height; hosts also use it as the line height of the row wrapper.
    pub height: f64,
}

/// A scrollable container wrapping a rows container of fixed total height.
///
/// This is the seam between the list and a host UI framework: a DOM element,
/// a retained scene node, or the in-memory [`crate::RetainedSurface`].
/// Hosts forward every scroll event of the container to
/// [`crate::VirtualList::handle_scroll`].
pub trait Surface {
    /// What a row component hands over to be mounted in a row wrapper.
    type Content;
    /// Handle to a mounted, positioned row wrapper.
    type Node;

    /// Current scroll offset of the container.
    fn scroll_top(&self) -> f64;

    /// Moves the scroll offset. Implementations may clamp it to the scrollable extent.
    fn set_scroll_top(&mut self, top: f64);

    /// Height of the visible part of the container.
    fn viewport_height(&self) -> f64;

    /// Sets the total height of the rows container.
    fn set_content_height(&mut self, height: f64);

    /// Mounts `content` in a new wrapper positioned at `slot`.
    fn insert_row(&mut self, slot: RowSlot, content: Self::Content) -> Self::Node;

    /// Unmounts a wrapper previously returned by [`Surface::insert_row`].
    fn remove_row(&mut self, node: Self::Node);
}
