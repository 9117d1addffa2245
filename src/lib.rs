// Copyright 2025 the rectmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! rectmap: a 2D spatial map from axis-aligned rectangles to values, with
//! last-writer-wins overlap semantics and a disjoint-partition guarantee.
//!
//! After any sequence of inserts, the stored `(rect, value)` pairs never
//! overlap: every `insert` finds each pre-existing rectangle overlapping
//! the new one, decomposes it into the residual fragments it does not
//! share with the new write, and commits the new rectangle over its own
//! footprint. Queries return every stored pair intersecting a query
//! rectangle (or every pair, if none is given).
//!
//! Two interchangeable backends implement [`SpatialMap`]:
//!
//! - [`ScanMap`]: entries kept in a `Vec` sorted by Morton (Z-order) code,
//!   inserted by binary search, queried by linear scan. Simplest, no
//!   spatial pruning.
//! - [`RTreeMap`]: an R*-tree with packed node/entry arenas, minimum-
//!   enlargement subtree choice, and the canonical R* split (perimeter-sum
//!   axis choice, overlap-area split point). Prunes on query; adds a
//!   global-value short-circuit for inserts covering the entire plane.
//!
//! [`Coordinator`] layers an attribute-partitioned map on top: one
//! independent [`SpatialMap`] per attribute key, lazily created on first
//! write, joined at query time into a single disjoint output tagged with
//! merged per-key attribute sets.
//!
//! # Example
//!
//! ```rust
//! use rectmap::{Rect, ScanMap, SpatialMap};
//!
//! let mut m: ScanMap<&str> = ScanMap::new();
//! m.insert(Rect::new(0, 0, 9, 9), "base").unwrap();
//! m.insert(Rect::new(3, 3, 6, 6), "center").unwrap();
//!
//! // `center` fully occupies its footprint; `base` survives as residual
//! // fragments covering the rest of the original rectangle.
//! let hits = m.query(Some(Rect::new(3, 3, 6, 6)));
//! assert!(hits.iter().any(|(r, v)| *r == Rect::new(3, 3, 6, 6) && *v == "center"));
//! ```
//!
//! ## Choosing a backend
//!
//! - [`ScanMap`]: smallest, simplest, good for small sets or workloads
//!   dominated by inserts over queries.
//! - [`RTreeMap`]: general-purpose choice once the set grows large enough
//!   that linear-scan queries dominate; also the only backend with a
//!   universal-rectangle ("global value") fast path.
//!
//! ### Integer coordinates only
//!
//! Rectangles use `i64` coordinates with saturating `±`[`Rect::POS_INF`]/
//! [`Rect::NEG_INF`] sentinels; there is no floating-point coordinate
//! domain.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod coordinator;
pub mod error;
pub mod index;
pub mod morton;
pub mod rect;
pub mod rtree;
pub mod scan;

pub use coordinator::{Coordinator, PartialRecord};
pub use error::RectMapError;
pub use index::SpatialMap;
pub use rect::Rect;
pub use rtree::RTreeMap;
pub use scan::ScanMap;
