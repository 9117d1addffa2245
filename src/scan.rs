// Copyright 2025 the rectmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered linear-scan spatial map: entries kept sorted by Morton code,
//! inserted by binary search, queried by linear intersection sweep.
//!
//! A self-decomposing, value-carrying store built on a flat sorted `Vec`:
//! every insert finds every pre-existing overlap, subtracts the new
//! rectangle from each, and reinserts the residual fragments in sorted
//! position.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::RectMapError;
use crate::index::SpatialMap;
use crate::morton;
use crate::rect::Rect;

#[derive(Clone, Debug)]
struct ScanEntry<V> {
    rect: Rect,
    value: V,
    code: u32,
}

/// Ordered linear-scan spatial map.
#[derive(Clone, Debug)]
pub struct ScanMap<V> {
    entries: Vec<ScanEntry<V>>,
}

impl<V> Default for ScanMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> ScanMap<V> {
    /// Create an empty ordered-scan map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: Clone + Debug> ScanMap<V> {
    /// Insert `rect` in sorted position by its centroid Morton code. Ties
    /// (equal codes) insert to the right, preserving stable relative order.
    fn insert_sorted(&mut self, rect: Rect, value: V) {
        let code = morton::centroid_code(rect);
        let pos = self.entries.partition_point(|e| e.code <= code);
        self.entries.insert(pos, ScanEntry { rect, value, code });
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> bool {
        let rects: Vec<Rect> = self.entries.iter().map(|e| e.rect).collect();
        crate::rect::all_disjoint(&rects)
            && self
                .entries
                .windows(2)
                .all(|w| w[0].code <= w[1].code)
    }
}

impl<V: Clone + Debug> SpatialMap<V> for ScanMap<V> {
    fn insert(&mut self, rect: Rect, value: V) -> Result<(), RectMapError> {
        rect.validate()?;
        let rect = rect.canonicalize();

        let mut kept = Vec::with_capacity(self.entries.len());
        let mut overlapping = Vec::new();
        for e in self.entries.drain(..) {
            if Rect::intersects(e.rect, rect) {
                overlapping.push(e);
            } else {
                kept.push(e);
            }
        }
        self.entries = kept;

        for e in overlapping {
            if Rect::contains(rect, e.rect) {
                continue;
            }
            for frag in Rect::subtract(e.rect, rect) {
                self.insert_sorted(frag, e.value.clone());
            }
        }

        self.insert_sorted(rect, value);

        #[cfg(debug_assertions)]
        debug_assert!(
            self.check_invariants(),
            "ordered-scan map invariant violated after insert"
        );

        Ok(())
    }

    fn query(&self, rect: Option<Rect>) -> Vec<(Rect, V)> {
        match rect {
            None => self.entries.iter().map(|e| (e.rect, e.value.clone())).collect(),
            Some(q) => self
                .entries
                .iter()
                .filter(|e| Rect::intersects(e.rect, q))
                .map(|e| (e.rect, e.value.clone()))
                .collect(),
        }
    }

    fn size(&self) -> usize {
        self.entries.len()
    }
}
