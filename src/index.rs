// Copyright 2025 the rectmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common contract shared by every spatial-map backend.

use alloc::vec::Vec;

use crate::error::RectMapError;
use crate::rect::Rect;

/// A spatial map from rectangles to values, maintaining a disjoint partition
/// of the covered region under last-writer-wins overlap semantics.
///
/// See the crate-level docs for the full contract. Implementations are
/// monomorphic in `V`; this trait only exists at composition boundaries
/// (e.g. [`crate::coordinator::Coordinator`]'s per-key factory closures);
/// the two engines never call through it internally.
pub trait SpatialMap<V> {
    /// Insert `value` at `rect`. Any pre-existing rectangle overlapping
    /// `rect` is decomposed into residual fragments retaining its old
    /// value; `rect` itself is committed with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`RectMapError::InvalidRectangle`] if `rect` is not
    /// well-formed (`min_x > max_x` or `min_y > max_y`). The store is left
    /// unmodified on error.
    fn insert(&mut self, rect: Rect, value: V) -> Result<(), RectMapError>;

    /// Every stored `(rect, value)` pair whose rectangle intersects `rect`,
    /// or every stored pair if `rect` is `None`.
    fn query(&self, rect: Option<Rect>) -> Vec<(Rect, V)>;

    /// The number of stored entries.
    fn size(&self) -> usize;

    /// Whether the map holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
