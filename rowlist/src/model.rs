// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row source consumed by [`crate::VirtualList`].

use alloc::rc::Rc;
use alloc::vec::Vec;

/// A dense, index-addressed source of row values.
///
/// The list sizes its content from [`RowModel::row_count`] when a model is
/// bound, on every [`crate::VirtualList::refresh`], and when the row height
/// changes. Every draw also clamps its range to the current count. Row values
/// are fetched lazily, only for rows entering the visible range, and are never
/// cached across a refresh, so rows that stay rendered keep their old value
/// until the next refresh.
pub trait RowModel {
    /// Value handed to the component creator for a realized row.
    type Row;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Value of row `index`, for `index < row_count()`.
    fn row(&self, index: usize) -> Self::Row;
}

impl<T: Clone> RowModel for Vec<T> {
    type Row = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> RowModel for Rc<[T]> {
    type Row = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> T {
        self[index].clone()
    }
}

/// A [`RowModel`] computed from a closure over row indices.
///
/// Useful for very large or synthetic lists where materializing every value
/// up front would defeat virtualization.
pub struct FnModel<F> {
    row_count: usize,
    row_fn: F,
}

impl<F> core::fmt::Debug for FnModel<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnModel")
            .field("row_count", &self.row_count)
            .finish_non_exhaustive()
    }
}

impl<F> FnModel<F> {
    /// Creates a model of `row_count` rows whose values come from `row_fn`.
    pub fn new<R>(row_count: usize, row_fn: F) -> Self
    where
        F: Fn(usize) -> R,
    {
        Self { row_count, row_fn }
    }

    /// Sets the number of rows.
    ///
    /// A list bound to this model clamps its rendered rows to the new count on
    /// its next draw; the content height follows on the next refresh.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }
}

impl<R, F: Fn(usize) -> R> RowModel for FnModel<F> {
    type Row = R;

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn row(&self, index: usize) -> R {
        (self.row_fn)(index)
    }
}
