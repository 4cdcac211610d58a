// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The virtualized list component.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use rowlist_range::{UniformRows, VisibleRange, reveal_offset, visible_range};
use smallvec::SmallVec;

use crate::component::{ComponentCreator, RowComponent};
use crate::error::ListError;
use crate::model::RowModel;
use crate::surface::{RowSlot, Surface};

/// Row height used until [`VirtualList::set_row_height`] is called.
pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;

/// What a single draw changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowDelta {
    /// Range of rows that should be realized after the draw.
    pub range: VisibleRange,
    /// Rows created and mounted.
    pub created: usize,
    /// Rows unmounted and destroyed.
    pub destroyed: usize,
    /// Rows in range left empty because no component creator was configured.
    pub skipped: usize,
}

impl RowDelta {
    /// Returns `true` if the draw neither created nor destroyed rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.created == 0 && self.destroyed == 0
    }
}

struct RenderedRow<C, N> {
    component: Box<dyn RowComponent<C>>,
    node: N,
}

/// A list that realizes only the rows intersecting its viewport.
///
/// The list owns a [`Surface`] (the scroll container) and every row component
/// it creates. All triggers, namely binding a model, changing the row height,
/// refreshing, and scrolling, converge on one draw routine:
///
/// 1. read the scroll offset and viewport height from the surface,
/// 2. compute `[floor(top / h), ceil((top + viewport) / h))` clamped to the row count,
/// 3. destroy rows that left that range,
/// 4. create rows that entered it, positioned at `index * h`,
/// 5. leave surviving rows untouched.
///
/// Steps 3 and 4 walk only the difference between the previous and the new
/// range, so a scroll costs time proportional to the rows that changed.
///
/// ```rust
/// use rowlist::{RetainedSurface, RowComponent, StaticRow, Surface, VirtualList};
///
/// let mut list: VirtualList<Vec<String>, RetainedSurface<String>> =
///     VirtualList::new(RetainedSurface::new(300.0, 200.0));
/// list.set_component_creator(|label: String| -> Box<dyn RowComponent<String>> {
///     Box::new(StaticRow(label))
/// });
/// list.set_model((0..1000).map(|i| format!("row {i}")).collect::<Vec<_>>());
/// assert_eq!(list.surface().content_height(), 20_000.0);
///
/// // Forward scroll events from the container.
/// list.surface_mut().set_scroll_top(505.0);
/// list.handle_scroll();
/// assert_eq!(list.rendered_indices(), (25..36).collect::<Vec<_>>());
/// assert_eq!(list.surface().content_at(25).map(String::as_str), Some("row 25"));
/// ```
pub struct VirtualList<M: RowModel, S: Surface> {
    surface: S,
    model: Option<M>,
    creator: Option<ComponentCreator<M::Row, S::Content>>,
    layout: UniformRows<f64>,
    rendered: HashMap<usize, RenderedRow<S::Content, S::Node>>,
    drawn: VisibleRange,
    has_gaps: bool,
    last_delta: RowDelta,
}

impl<M: RowModel, S: Surface> fmt::Debug for VirtualList<M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("row_height", &self.layout.row_extent())
            .field("row_count", &self.layout.row_count())
            .field("drawn", &self.drawn)
            .field("rendered", &self.rendered.len())
            .field("has_model", &self.model.is_some())
            .field("has_creator", &self.creator.is_some())
            .finish_non_exhaustive()
    }
}

impl<M: RowModel, S: Surface> VirtualList<M, S> {
    /// Creates an empty list drawing into `surface` with [`DEFAULT_ROW_HEIGHT`].
    pub fn new(surface: S) -> Self {
        let mut list = Self {
            surface,
            model: None,
            creator: None,
            layout: UniformRows::new(0, DEFAULT_ROW_HEIGHT),
            rendered: HashMap::new(),
            drawn: VisibleRange::EMPTY,
            has_gaps: false,
            last_delta: RowDelta::default(),
        };
        list.sync_content_height();
        list
    }

    /// Creates an empty list with a custom row height.
    pub fn with_row_height(surface: S, row_height: f64) -> Result<Self, ListError> {
        check_row_height(row_height)?;
        let mut list = Self::new(surface);
        list.layout.set_row_extent(row_height);
        list.sync_content_height();
        Ok(list)
    }

    /// Returns the surface the list draws into.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    ///
    /// After moving the scroll offset or resizing the viewport through this
    /// reference, call [`VirtualList::handle_scroll`] or
    /// [`VirtualList::handle_resize`] so the rendered rows follow.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the bound model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    /// Returns the bound model mutably.
    ///
    /// Draws clamp to the model's current row count, so a shrunken model loses
    /// rows on the next scroll. The content height and the values of rows
    /// that stay rendered only follow on [`VirtualList::refresh`].
    pub fn model_mut(&mut self) -> Option<&mut M> {
        self.model.as_mut()
    }

    /// Replaces the backing model and redraws from scratch.
    ///
    /// Every row realized from the previous model is destroyed, even where the
    /// new model's visible indices overlap numerically.
    pub fn set_model(&mut self, model: M) {
        self.clear_rows();
        let row_count = model.row_count();
        rl_debug!(row_count, "set_model");
        self.model = Some(model);
        self.layout.set_row_count(row_count);
        self.sync_content_height();
        self.draw();
    }

    /// Installs the factory that turns a row value into a row component.
    ///
    /// Draws that run without a creator leave their row slots empty; the next
    /// draw after one is installed fills them.
    pub fn set_component_creator<F>(&mut self, creator: F)
    where
        F: FnMut(M::Row) -> Box<dyn RowComponent<S::Content>> + 'static,
    {
        self.creator = Some(Box::new(creator));
    }

    /// Height shared by every row.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.layout.row_extent()
    }

    /// Changes the row height, then refreshes like [`VirtualList::refresh`].
    ///
    /// The row count is re-read from the model, so the content height always
    /// matches `row_count * row_height`. Row positions depend on the height,
    /// so no existing row survives.
    pub fn set_row_height(&mut self, row_height: f64) -> Result<(), ListError> {
        check_row_height(row_height)?;
        rl_debug!(row_height, "set_row_height");
        self.layout.set_row_extent(row_height);
        self.refresh();
        Ok(())
    }

    /// Current scroll offset of the surface.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.surface.scroll_top()
    }

    /// Total height of the rows container: `row_count * row_height`.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.layout.content_extent()
    }

    /// Re-reads the row count, resizes the content, and redraws every row.
    ///
    /// Rows are always rebuilt because the value behind an index may have
    /// changed. Without a model this only clears the rendered rows.
    pub fn refresh(&mut self) {
        let row_count = self.model.as_ref().map_or(0, RowModel::row_count);
        rl_debug!(row_count, "refresh");
        self.layout.set_row_count(row_count);
        self.sync_content_height();
        self.clear_rows();
        self.draw();
    }

    /// Scrolls the minimum distance needed for row `index` to be fully visible.
    ///
    /// Does nothing if the row is already fully visible, so calling this twice
    /// leaves the scroll offset unchanged the second time. When the offset
    /// moves, the list redraws as it would for a scroll event.
    pub fn ensure_index_visible(&mut self, index: usize) -> Result<(), ListError> {
        let row_count = self.model.as_ref().map_or(0, RowModel::row_count);
        if index >= row_count {
            return Err(ListError::IndexOutOfRange { index, row_count });
        }
        let target = reveal_offset(
            self.layout.row_top(index),
            self.layout.row_bottom(index),
            self.surface.scroll_top(),
            self.surface.viewport_height(),
        );
        if let Some(top) = target {
            rl_trace!(index, top, "ensure_index_visible");
            self.surface.set_scroll_top(top);
            self.draw();
        }
        Ok(())
    }

    /// Reconciles rendered rows with the surface's current scroll offset.
    ///
    /// Hosts call this for every scroll event of the container. It runs
    /// synchronously and is cheap enough that no debouncing is needed.
    pub fn handle_scroll(&mut self) -> RowDelta {
        self.draw()
    }

    /// Reconciles rendered rows after the viewport was resized.
    pub fn handle_resize(&mut self) -> RowDelta {
        self.draw()
    }

    /// Range realized by the most recent draw.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.drawn
    }

    /// Outcome of the most recent draw.
    #[must_use]
    pub fn last_delta(&self) -> RowDelta {
        self.last_delta
    }

    /// Number of rows currently realized.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// Returns `true` if row `index` is currently realized.
    #[must_use]
    pub fn is_rendered(&self, index: usize) -> bool {
        self.rendered.contains_key(&index)
    }

    /// Indices of realized rows, ascending.
    #[must_use]
    pub fn rendered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<_> = self.rendered.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Destroys every realized row and unmounts it from the surface.
    ///
    /// The model and creator stay bound; the next scroll or refresh draws again.
    /// Dropping the list does the same.
    pub fn destroy(&mut self) {
        self.clear_rows();
    }

    fn sync_content_height(&mut self) {
        self.surface.set_content_height(self.layout.content_extent());
    }

    fn draw(&mut self) -> RowDelta {
        let row_count = self.model.as_ref().map_or(0, RowModel::row_count);
        let range = visible_range(
            self.surface.scroll_top(),
            self.surface.viewport_height(),
            self.layout.row_extent(),
            row_count,
        );
        let mut delta = RowDelta {
            range,
            ..RowDelta::default()
        };

        for index in self.drawn.exclusive_of(&range) {
            if let Some(row) = self.rendered.remove(&index) {
                self.destroy_row(row);
                delta.destroyed += 1;
            }
        }

        // Gaps left by a missing creator sit inside the old range too.
        let entering = if self.has_gaps {
            range.iter().chain(0..0)
        } else {
            range.exclusive_of(&self.drawn)
        };
        self.has_gaps = false;
        for index in entering {
            if self.rendered.contains_key(&index) {
                continue;
            }
            if self.insert_row(index) {
                delta.created += 1;
            } else {
                delta.skipped += 1;
            }
        }
        if delta.skipped > 0 {
            self.has_gaps = true;
            rl_warn!(
                skipped = delta.skipped,
                "no renderer configured; leaving row slots empty"
            );
        }

        rl_trace!(
            start = range.start,
            finish = range.finish,
            created = delta.created,
            destroyed = delta.destroyed,
            "draw"
        );
        self.drawn = range;
        self.last_delta = delta;
        delta
    }

    fn insert_row(&mut self, index: usize) -> bool {
        let (Some(model), Some(creator)) = (self.model.as_ref(), self.creator.as_mut()) else {
            return false;
        };
        let component = creator(model.row(index));
        let slot = RowSlot {
            index,
            top: self.layout.row_top(index),
            height: self.layout.row_extent(),
        };
        let node = self.surface.insert_row(slot, component.gui());
        self.rendered.insert(index, RenderedRow { component, node });
        true
    }

    fn destroy_row(&mut self, row: RenderedRow<S::Content, S::Node>) {
        let RenderedRow {
            mut component,
            node,
        } = row;
        self.surface.remove_row(node);
        component.destroy();
    }

    fn clear_rows(&mut self) {
        // Tear down in index order so hosts observe a deterministic sequence.
        let mut doomed: SmallVec<[(usize, RenderedRow<S::Content, S::Node>); 32]> =
            self.rendered.drain().collect();
        doomed.sort_unstable_by_key(|(index, _)| *index);
        for (_, row) in doomed {
            self.destroy_row(row);
        }
        self.drawn = VisibleRange::EMPTY;
        self.has_gaps = false;
    }
}

impl<M: RowModel, S: Surface> Drop for VirtualList<M, S> {
    fn drop(&mut self) {
        self.clear_rows();
    }
}

fn check_row_height(row_height: f64) -> Result<(), ListError> {
    if row_height.is_finite() && row_height > 0.0 {
        Ok(())
    } else {
        Err(ListError::InvalidRowHeight(row_height))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use proptest::prelude::*;
    use rowlist_range::VisibleRange;

    use super::{DEFAULT_ROW_HEIGHT, VirtualList};
    use crate::{FnModel, ListError, RetainedSurface, RowComponent, RowModel, Surface};

    #[derive(Default, Debug)]
    struct Log {
        created: Vec<String>,
        destroyed: Vec<String>,
    }

    struct Recorder {
        label: String,
        log: Rc<RefCell<Log>>,
        destroyed: bool,
    }

    impl RowComponent<String> for Recorder {
        fn gui(&self) -> String {
            self.label.clone()
        }

        fn destroy(&mut self) {
            assert!(!self.destroyed, "row {} destroyed twice", self.label);
            self.destroyed = true;
            self.log.borrow_mut().destroyed.push(self.label.clone());
        }
    }

    type TestList<M> = VirtualList<M, RetainedSurface<String>>;

    fn list_with_viewport<M: RowModel<Row = String>>(
        viewport: f64,
    ) -> (TestList<M>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut list: TestList<M> = VirtualList::new(RetainedSurface::new(300.0, viewport));
        let sink = log.clone();
        list.set_component_creator(move |label: String| {
            sink.borrow_mut().created.push(label.clone());
            Box::new(Recorder {
                label,
                log: sink.clone(),
                destroyed: false,
            }) as Box<dyn RowComponent<String>>
        });
        (list, log)
    }

    fn label(index: usize) -> String {
        format!("row {index}")
    }

    fn labels(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix} {i}")).collect()
    }

    fn scroll_to<M: RowModel>(list: &mut VirtualList<M, RetainedSurface<String>>, top: f64) {
        list.surface_mut().set_scroll_top(top);
        list.handle_scroll();
    }

    #[test]
    fn renders_only_the_scrolled_window() {
        let (mut list, log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(1000, label));
        assert_eq!(list.content_height(), 20_000.0);
        assert_eq!(list.surface().content_height(), 20_000.0);
        assert_eq!(list.rendered_indices(), (0..10).collect::<Vec<_>>());

        scroll_to(&mut list, 505.0);
        assert_eq!(list.scroll_top(), 505.0);
        assert_eq!(list.visible_range(), VisibleRange::new(25, 36));
        assert_eq!(list.rendered_indices(), (25..36).collect::<Vec<_>>());
        assert_eq!(list.surface().mounted_indices(), (25..36).collect::<Vec<_>>());
        assert_eq!(log.borrow().destroyed.len(), 10);
    }

    #[test]
    fn rows_are_positioned_absolutely() {
        let (mut list, _log) = list_with_viewport(100.0);
        list.set_model(labels("item", 50));
        scroll_to(&mut list, 230.0);
        for (slot, content) in list.surface().rows() {
            assert_eq!(slot.top, slot.index as f64 * DEFAULT_ROW_HEIGHT);
            assert_eq!(slot.height, DEFAULT_ROW_HEIGHT);
            assert_eq!(*content, format!("item {}", slot.index));
        }
    }

    #[test]
    fn short_list_is_never_recycled() {
        let (mut list, log) = list_with_viewport(200.0);
        list.set_model(labels("row", 5));
        assert_eq!(list.rendered_indices(), [0, 1, 2, 3, 4]);

        let delta = list.handle_scroll();
        assert!(delta.is_empty());
        scroll_to(&mut list, 40.0);
        // Content fits in the viewport, so the container refuses to scroll.
        assert_eq!(list.scroll_top(), 0.0);
        assert_eq!(log.borrow().created.len(), 5);
        assert!(log.borrow().destroyed.is_empty());
    }

    #[test]
    fn scrolling_only_touches_the_range_delta() {
        let (mut list, log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(100, label));
        log.borrow_mut().created.clear();

        scroll_to(&mut list, 40.0);
        let delta = list.last_delta();
        assert_eq!(delta.range, VisibleRange::new(2, 12));
        assert_eq!((delta.created, delta.destroyed), (2, 2));
        assert_eq!(log.borrow().created, ["row 10", "row 11"]);
        let mut destroyed = log.borrow().destroyed.clone();
        destroyed.sort();
        assert_eq!(destroyed, ["row 0", "row 1"]);
    }

    #[test]
    fn jumping_far_replaces_every_row() {
        let (mut list, _log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(1000, label));
        scroll_to(&mut list, 10_000.0);
        let delta = list.last_delta();
        assert_eq!((delta.created, delta.destroyed), (10, 10));
        assert_eq!(list.rendered_indices(), (500..510).collect::<Vec<_>>());
    }

    #[test]
    fn model_swap_discards_overlapping_rows() {
        let (mut list, log) = list_with_viewport(100.0);
        list.set_model(labels("old", 20));
        list.set_model(labels("new", 20));

        assert_eq!(log.borrow().destroyed, labels("old", 5));
        assert_eq!(list.rendered_indices(), [0, 1, 2, 3, 4]);
        assert_eq!(
            list.surface().content_at(0).map(String::as_str),
            Some("new 0")
        );
    }

    #[test]
    fn empty_model_draws_nothing() {
        let (mut list, log) = list_with_viewport(100.0);
        list.set_model(labels("row", 8));
        list.set_model(Vec::new());
        assert_eq!(list.rendered_count(), 0);
        assert!(list.surface().is_empty());
        assert_eq!(list.surface().content_height(), 0.0);
        assert_eq!(log.borrow().destroyed.len(), 5);
    }

    #[test]
    fn refresh_rebuilds_rows_and_content_height() {
        let (mut list, log) = list_with_viewport(100.0);
        list.set_model(labels("row", 3));
        if let Some(rows) = list.model_mut() {
            rows[0] = String::from("edited");
            rows.extend(labels("more", 10));
        }
        // Nothing changes until the list is told to refresh.
        assert_eq!(list.content_height(), 60.0);
        assert_eq!(list.surface().content_at(0).map(String::as_str), Some("row 0"));

        list.refresh();
        assert_eq!(list.content_height(), 260.0);
        assert_eq!(list.surface().content_height(), 260.0);
        assert_eq!(list.rendered_indices(), [0, 1, 2, 3, 4]);
        assert_eq!(list.surface().content_at(0).map(String::as_str), Some("edited"));
        assert_eq!(log.borrow().destroyed, labels("row", 3));
    }

    #[test]
    fn refresh_without_model_is_harmless() {
        let (mut list, log) = list_with_viewport::<Vec<String>>(100.0);
        list.refresh();
        assert_eq!(list.rendered_count(), 0);
        assert!(log.borrow().created.is_empty());
    }

    #[test]
    fn shrinking_model_is_clamped_on_next_draw() {
        let (mut list, log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(100, label));
        if let Some(model) = list.model_mut() {
            model.set_row_count(3);
        }
        list.handle_scroll();
        assert_eq!(list.rendered_indices(), [0, 1, 2]);
        assert_eq!(log.borrow().destroyed.len(), 7);
    }

    #[test]
    fn row_height_change_rereads_row_count() {
        let (mut list, log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(100, label));
        if let Some(model) = list.model_mut() {
            model.set_row_count(3);
        }
        list.set_row_height(10.0).unwrap();
        assert_eq!(list.content_height(), 30.0);
        assert_eq!(list.surface().content_height(), 30.0);
        assert_eq!(list.rendered_indices(), [0, 1, 2]);
        assert_eq!(list.visible_range(), VisibleRange::new(0, 3));
        assert_eq!(log.borrow().destroyed.len(), 10);
    }

    #[test]
    fn row_height_change_redraws_everything() {
        let (mut list, log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(100, label));
        assert_eq!(list.row_height(), DEFAULT_ROW_HEIGHT);

        list.set_row_height(50.0).unwrap();
        assert_eq!(list.row_height(), 50.0);
        assert_eq!(list.surface().content_height(), 5_000.0);
        assert_eq!(list.rendered_indices(), [0, 1, 2, 3]);
        assert_eq!(log.borrow().destroyed.len(), 10);
        assert_eq!(log.borrow().created.len(), 14);
        let (slot, _) = list.surface().rows()[3];
        assert_eq!(slot.top, 150.0);
    }

    #[test]
    fn invalid_row_heights_are_rejected() {
        let (mut list, _log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(10, label));
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                list.set_row_height(bad),
                Err(ListError::InvalidRowHeight(_))
            ));
        }
        assert_eq!(list.row_height(), DEFAULT_ROW_HEIGHT);
        assert!(VirtualList::<Vec<String>, _>::with_row_height(
            RetainedSurface::<String>::new(10.0, 10.0),
            -1.0
        )
        .is_err());
    }

    #[test]
    fn custom_row_height_at_construction() {
        let mut list: TestList<Vec<String>> =
            VirtualList::with_row_height(RetainedSurface::new(300.0, 100.0), 25.0).unwrap();
        list.set_model(labels("row", 10));
        assert_eq!(list.content_height(), 250.0);
        assert_eq!(list.visible_range(), VisibleRange::new(0, 4));
    }

    #[test]
    fn ensure_index_visible_scrolls_minimally() {
        let (mut list, _log) = list_with_viewport(200.0);
        list.set_model(FnModel::new(1000, label));

        list.ensure_index_visible(50).unwrap();
        assert_eq!(list.scroll_top(), 820.0);
        assert_eq!(list.visible_range(), VisibleRange::new(41, 51));
        assert!(list.is_rendered(50));

        // Already visible: nothing moves, nothing redraws.
        list.ensure_index_visible(50).unwrap();
        assert_eq!(list.scroll_top(), 820.0);
        list.ensure_index_visible(45).unwrap();
        assert_eq!(list.scroll_top(), 820.0);

        list.ensure_index_visible(10).unwrap();
        assert_eq!(list.scroll_top(), 200.0);
        assert_eq!(list.rendered_indices(), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn ensure_index_visible_rejects_out_of_range() {
        let (mut list, _log) = list_with_viewport(200.0);
        assert_eq!(
            list.ensure_index_visible(0),
            Err(ListError::IndexOutOfRange {
                index: 0,
                row_count: 0
            })
        );
        list.set_model(labels("row", 5));
        assert_eq!(
            list.ensure_index_visible(5),
            Err(ListError::IndexOutOfRange {
                index: 5,
                row_count: 5
            })
        );
        assert_eq!(list.scroll_top(), 0.0);
    }

    #[test]
    fn missing_creator_leaves_slots_empty_until_installed() {
        let mut list: TestList<Vec<String>> = VirtualList::new(RetainedSurface::new(300.0, 100.0));
        list.set_model(labels("row", 20));
        assert_eq!(list.rendered_count(), 0);
        assert_eq!(list.last_delta().skipped, 5);
        assert_eq!(list.visible_range(), VisibleRange::new(0, 5));

        list.set_component_creator(|label: String| {
            Box::new(crate::StaticRow(label)) as Box<dyn RowComponent<String>>
        });
        let delta = list.handle_scroll();
        assert_eq!(delta.created, 5);
        assert_eq!(list.rendered_indices(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn resize_realizes_more_rows() {
        let (mut list, _log) = list_with_viewport(100.0);
        list.set_model(FnModel::new(100, label));
        list.surface_mut().set_viewport(300.0, 300.0);
        let delta = list.handle_resize();
        assert_eq!(delta.created, 10);
        assert_eq!(list.visible_range(), VisibleRange::new(0, 15));
    }

    #[test]
    fn destroy_and_drop_release_every_row_once() {
        let (mut list, log) = list_with_viewport(100.0);
        list.set_model(FnModel::new(100, label));
        list.destroy();
        assert_eq!(log.borrow().destroyed.len(), 5);
        assert!(list.surface().is_empty());

        list.handle_scroll();
        assert_eq!(list.rendered_count(), 5);
        drop(list);
        assert_eq!(log.borrow().destroyed.len(), 10);
    }

    proptest! {
        #[test]
        fn reconciliation_matches_visible_range(
            row_count in 0_usize..400,
            viewport in 0_u32..300,
            scrolls in proptest::collection::vec(0_u32..10_000, 1..12),
        ) {
            let (mut list, log) = list_with_viewport(f64::from(viewport));
            list.set_model(FnModel::new(row_count, label));
            let height = list.content_height();
            prop_assert_eq!(height, row_count as f64 * DEFAULT_ROW_HEIGHT);

            let mut previous = list.rendered_indices();
            for scroll in scrolls {
                let created_before = log.borrow().created.len();
                let destroyed_before = log.borrow().destroyed.len();
                scroll_to(&mut list, f64::from(scroll));

                let top = list.scroll_top();
                let start = ((top / DEFAULT_ROW_HEIGHT) as usize).min(row_count);
                let finish = (((top + f64::from(viewport)) / DEFAULT_ROW_HEIGHT) as usize
                    + usize::from((top + f64::from(viewport)) % DEFAULT_ROW_HEIGHT != 0.0))
                    .clamp(start, row_count);
                let current = list.rendered_indices();
                prop_assert_eq!(&current, &(start..finish).collect::<Vec<_>>());
                prop_assert_eq!(&list.surface().mounted_indices(), &current);

                let gone = previous.iter().filter(|i| !current.contains(i)).count();
                let came = current.iter().filter(|i| !previous.contains(i)).count();
                prop_assert_eq!(log.borrow().destroyed.len() - destroyed_before, gone);
                prop_assert_eq!(log.borrow().created.len() - created_before, came);
                previous = current;
            }
        }
    }
}
