// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] for headless hosts and tests.

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect};

use crate::damage::Damage;
use crate::surface::{RowSlot, Surface};

/// Generational handle of a row wrapper mounted in a [`RetainedSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Mounted rows are bounded by the viewport; 32-bit slots are plenty."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Mounted<C> {
    slot: RowSlot,
    content: C,
}

#[derive(Clone, Debug)]
struct Entry<C> {
    generation: u32,
    mounted: Option<Mounted<C>>,
}

/// A scroll container kept entirely in memory.
///
/// It behaves like a browser scroll container with an absolutely positioned
/// rows child:
/// - the scroll offset is clamped to `0..=max(0, content_height - viewport_height)`
///   and re-clamped whenever the content or viewport shrinks,
/// - every mounted row spans the surface width at `slot.top..slot.top + slot.height`,
/// - mounting and unmounting rows records [`Damage`] for a painter to consume.
#[derive(Clone, Debug)]
pub struct RetainedSurface<C> {
    width: f64,
    viewport_height: f64,
    scroll_top: f64,
    content_height: f64,
    entries: Vec<Entry<C>>,
    free_list: Vec<usize>,
    mounted: usize,
    damage: Damage,
}

impl<C> RetainedSurface<C> {
    /// Creates an empty surface with a `width` × `viewport_height` viewport.
    #[must_use]
    pub fn new(width: f64, viewport_height: f64) -> Self {
        Self {
            width: width.max(0.0),
            viewport_height: viewport_height.max(0.0),
            scroll_top: 0.0,
            content_height: 0.0,
            entries: Vec::new(),
            free_list: Vec::new(),
            mounted: 0,
            damage: Damage::default(),
        }
    }

    /// Width of the viewport and of every row wrapper.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Total height of the rows container.
    #[must_use]
    pub const fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Largest scroll offset the container accepts.
    #[must_use]
    pub fn max_scroll_top(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Resizes the viewport, re-clamping the scroll offset.
    ///
    /// Call [`crate::VirtualList::handle_resize`] afterwards so the list
    /// realizes rows for the new height.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.clamp_scroll();
    }

    /// The visible window in content coordinates.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.scroll_top,
            self.width,
            self.scroll_top + self.viewport_height,
        )
    }

    /// Number of mounted row wrappers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mounted
    }

    /// Returns `true` if no rows are mounted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mounted == 0
    }

    /// Logical indices of mounted rows, ascending.
    #[must_use]
    pub fn mounted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<_> = self.iter_mounted().map(|m| m.slot.index).collect();
        indices.sort_unstable();
        indices
    }

    /// Mounted rows as `(slot, content)` pairs, ordered by row index.
    #[must_use]
    pub fn rows(&self) -> Vec<(RowSlot, &C)> {
        let mut rows: Vec<_> = self.iter_mounted().map(|m| (m.slot, &m.content)).collect();
        rows.sort_unstable_by_key(|(slot, _)| slot.index);
        rows
    }

    /// Content mounted for row `index`, if that row is mounted.
    #[must_use]
    pub fn content_at(&self, index: usize) -> Option<&C> {
        self.iter_mounted()
            .find(|m| m.slot.index == index)
            .map(|m| &m.content)
    }

    /// Content mounted in a live node.
    #[must_use]
    pub fn content_of(&self, node: NodeId) -> Option<&C> {
        self.live(node).map(|m| &m.content)
    }

    /// Content-space bounds of a live node.
    #[must_use]
    pub fn node_bounds(&self, node: NodeId) -> Option<Rect> {
        self.live(node).map(|m| self.row_rect(m.slot))
    }

    /// Row index under a point given in viewport coordinates.
    ///
    /// Only mounted rows are hit; a point over an unrealized gap returns `None`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        if point.x < 0.0
            || point.x >= self.width
            || point.y < 0.0
            || point.y >= self.viewport_height
        {
            return None;
        }
        let content_point = Point::new(point.x, point.y + self.scroll_top);
        self.iter_mounted()
            .find(|m| self.row_rect(m.slot).contains(content_point))
            .map(|m| m.slot.index)
    }

    /// Returns the damage accumulated since the previous call and resets it.
    pub fn take_damage(&mut self) -> Damage {
        mem::take(&mut self.damage)
    }

    fn row_rect(&self, slot: RowSlot) -> Rect {
        Rect::new(0.0, slot.top, self.width, slot.top + slot.height)
    }

    fn iter_mounted(&self) -> impl Iterator<Item = &Mounted<C>> {
        self.entries.iter().filter_map(|e| e.mounted.as_ref())
    }

    fn live(&self, node: NodeId) -> Option<&Mounted<C>> {
        let entry = self.entries.get(node.idx())?;
        if entry.generation != node.1 {
            return None;
        }
        entry.mounted.as_ref()
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll_top();
        if self.scroll_top > max {
            self.scroll_top = max;
        }
    }
}

impl<C> Surface for RetainedSurface<C> {
    type Content = C;
    type Node = NodeId;

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, top: f64) {
        // NaN fails the comparison and lands at the top.
        self.scroll_top = if top > 0.0 {
            top.min(self.max_scroll_top())
        } else {
            0.0
        };
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
        self.clamp_scroll();
    }

    fn insert_row(&mut self, slot: RowSlot, content: C) -> NodeId {
        let rect = self.row_rect(slot);
        self.damage.dirty_rects.push(rect);
        self.mounted += 1;
        let mounted = Some(Mounted { slot, content });
        if let Some(idx) = self.free_list.pop() {
            let entry = &mut self.entries[idx];
            entry.generation += 1;
            entry.mounted = mounted;
            NodeId::new(idx, entry.generation)
        } else {
            self.entries.push(Entry {
                generation: 1,
                mounted,
            });
            NodeId::new(self.entries.len() - 1, 1)
        }
    }

    fn remove_row(&mut self, node: NodeId) {
        let Some(slot) = self.live(node).map(|m| m.slot) else {
            return;
        };
        let rect = self.row_rect(slot);
        self.damage.dirty_rects.push(rect);
        self.entries[node.idx()].mounted = None;
        self.free_list.push(node.idx());
        self.mounted -= 1;
    }
}
