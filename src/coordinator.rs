// Copyright 2025 the rectmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-partitioned coordinator: one independent spatial map per
//! attribute key, lazily instantiated on first write, joined at query time
//! by sweeping the combined set of sub-index result boundaries.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::RectMapError;
use crate::index::SpatialMap;
use crate::rect::{dec, inc, Rect};

/// A record of attribute values to apply in one [`Coordinator::insert`]
/// call. Only keys yielded by [`PartialRecord::present`] are written;
/// there is no way to represent "explicitly clear this key" through this
/// trait (a partial record only ever adds).
///
/// `alloc::collections::BTreeMap<K, V>` implements this directly, so most
/// callers never need a custom type.
pub trait PartialRecord<K, V> {
    /// Consume this record into the `(key, value)` pairs it sets.
    fn present(self) -> Vec<(K, V)>;
}

impl<K: Ord, V> PartialRecord<K, V> for BTreeMap<K, V> {
    fn present(self) -> Vec<(K, V)> {
        self.into_iter().collect()
    }
}

/// A map from attribute key `K` to one lazily-created [`SpatialMap`] of
/// values `V`, joined at query time into a single disjoint partition
/// tagged with merged per-key attribute sets.
pub struct Coordinator<K, V>
where
    K: Ord + Clone + Debug + 'static,
    V: Clone + Debug + 'static,
{
    factory: Box<dyn Fn() -> Box<dyn SpatialMap<V>>>,
    partitions: BTreeMap<K, Box<dyn SpatialMap<V>>>,
}

impl<K, V> Debug for Coordinator<K, V>
where
    K: Ord + Clone + Debug + 'static,
    V: Clone + Debug + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coordinator")
            .field("keys", &self.partitions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K, V> Coordinator<K, V>
where
    K: Ord + Clone + Debug + 'static,
    V: Clone + Debug + 'static,
{
    /// Create a coordinator with no partitions yet. `factory` is called to
    /// build a fresh sub-index the first time a previously-unseen key is
    /// written via [`Coordinator::set`] or [`Coordinator::insert`].
    pub fn new(factory: impl Fn() -> Box<dyn SpatialMap<V>> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            partitions: BTreeMap::new(),
        }
    }

    /// Insert `value` for attribute `key` at `rect`. Last-writer-wins
    /// within that partition only; other partitions are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RectMapError::InvalidRectangle`] if `rect` is not
    /// well-formed; the targeted partition (and every other partition) is
    /// left unmodified.
    pub fn set(&mut self, rect: Rect, key: K, value: V) -> Result<(), RectMapError> {
        let factory = &self.factory;
        let partition = self
            .partitions
            .entry(key)
            .or_insert_with(|| factory());
        partition.insert(rect, value)
    }

    /// Apply [`Coordinator::set`] for every `(key, value)` present in
    /// `partial`. Keys absent from `partial` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`RectMapError::InvalidRectangle`] encountered;
    /// `rect` is validated identically in every partition it is applied
    /// to, so a rejection from one partition implies rejection from all,
    /// and no partition is left partially written by this call.
    pub fn insert<P: PartialRecord<K, V>>(
        &mut self,
        rect: Rect,
        partial: P,
    ) -> Result<(), RectMapError> {
        for (key, value) in partial.present() {
            self.set(rect, key, value)?;
        }
        Ok(())
    }

    /// Spatial-join query: every sub-rectangle of `rect` covered by at
    /// least one partition, tagged with the merged attribute set covering
    /// it.
    ///
    /// Collects every partition's intersecting results, sweeps the union
    /// of their x and y boundaries into candidate cells, and for each cell
    /// looks up at most one covering result per partition (sound, since
    /// each partition's own results are pairwise disjoint).
    pub fn query(&self, rect: Rect) -> Vec<(Rect, BTreeMap<K, V>)> {
        let per_partition: Vec<(&K, Vec<(Rect, V)>)> = self
            .partitions
            .iter()
            .map(|(k, m)| (k, m.query(Some(rect))))
            .collect();

        let mut xs: BTreeSet<i64> = BTreeSet::new();
        let mut ys: BTreeSet<i64> = BTreeSet::new();
        for (_, results) in &per_partition {
            for (r, _) in results {
                xs.insert(r.min_x);
                xs.insert(inc(r.max_x));
                ys.insert(r.min_y);
                ys.insert(inc(r.max_y));
            }
        }
        let xs: Vec<i64> = xs.into_iter().collect();
        let ys: Vec<i64> = ys.into_iter().collect();

        let mut out = Vec::new();
        for xw in xs.windows(2) {
            for yw in ys.windows(2) {
                let cell = Rect::new(xw[0], yw[0], dec(xw[1]), dec(yw[1]));
                if cell.min_x > cell.max_x || cell.min_y > cell.max_y {
                    continue;
                }
                let mut merged: BTreeMap<K, V> = BTreeMap::new();
                for (key, results) in &per_partition {
                    if let Some((_, value)) = results.iter().find(|(r, _)| Rect::contains(*r, cell)) {
                        merged.insert((*key).clone(), value.clone());
                    }
                }
                if !merged.is_empty() {
                    out.push((cell, merged));
                }
            }
        }
        out
    }

    /// Iterate the keys of every partition created so far, in sorted
    /// order. A key with no writes yet never appears here.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.partitions.keys()
    }

    /// Number of entries stored in the partition for `key`, or `0` if that
    /// key has never been written.
    pub fn size_of(&self, key: &K) -> usize {
        self.partitions.get(key).map_or(0, |m| m.size())
    }

    /// Drop every partition. Subsequent writes re-create partitions from
    /// the factory exactly as on a fresh coordinator.
    pub fn clear(&mut self) {
        self.partitions.clear();
    }

    /// Whether every created partition is empty. A coordinator with no
    /// partitions at all is trivially empty.
    pub fn is_empty(&self) -> bool {
        self.partitions.values().all(|m| m.is_empty())
    }
}
