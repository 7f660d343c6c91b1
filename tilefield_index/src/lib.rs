// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilefield Index: a uniform-grid spatial index for 2D proximity queries.
//!
//! The plane `[0, width) × [0, height)` is partitioned into fixed-size square
//! tiles. Registered objects land in every tile their extent overlaps, and
//! queries first narrow to a small candidate set through tile lookup before
//! applying exact geometric tests.
//!
//! - Insert, mutate, and remove objects with stable generational [`Key`]s.
//! - Rebuild the tile buckets with [`TileGrid::update`]; buckets are stale
//!   after any mutation until the next rebuild.
//! - Query by tile neighborhood, circle, rectangle, or a line segment with
//!   width. `*_traced` variants additionally report every tile inspected.
//!
//! The crate is `no_std` (with `alloc`) and does not depend on any geometry
//! crate; callers convert their own point and shape types at the boundary.
//!
//! # Example
//!
//! ```rust
//! use tilefield_index::{GridObject, TileGrid};
//!
//! // A 100×100 world cut into 10×10 tiles.
//! let mut grid: TileGrid<u32> = TileGrid::new(100.0, 100.0, 10.0).unwrap();
//! let k = grid.insert(GridObject::circle(25.0, 25.0, 5.0), 7);
//! grid.update();
//!
//! // Exact-tile lookup and a circle probe both find the object.
//! assert_eq!(grid.query_neighbors(25.0, 25.0, 0).len(), 1);
//! assert_eq!(grid.query_circle(25.0, 25.0, 0.0), vec![(k, 7)]);
//!
//! // A zero-width segment across the diagonal passes through its center.
//! let hits = grid.query_segment((0.0, 0.0), (90.0, 90.0), 0.0);
//! assert!(hits.iter().any(|&(key, _)| key == k));
//! ```
//!
//! ## Choosing a tile size
//!
//! Queries visit every candidate bucket in range, so the tile size should be
//! on the order of the largest object extent; much smaller tiles make wide
//! objects register into many buckets, much larger tiles make every bucket a
//! long linear scan. This is a tuning concern only; correctness does not
//! depend on the tile size chosen.
//!
//! ## Float semantics
//!
//! Coordinates are assumed NaN-free. Only arithmetic, comparisons, and
//! cast-based floor/ceil are used, so no `libm` feature is needed.

#![no_std]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod query;
pub mod types;

mod raster;
mod tile;

pub use error::GridError;
pub use grid::{Key, TileGrid};
pub use query::Traced;
pub use types::{Extent, GridObject, TileCoord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_update_and_query_round_trip() {
        let mut grid: TileGrid<u32> = TileGrid::new(100.0, 100.0, 10.0).unwrap();
        let k = grid.insert(GridObject::circle(25.0, 25.0, 5.0), 1);
        grid.update();

        let hits = grid.query_neighbors(25.0, 25.0, 0);
        assert_eq!(hits, [(k, 1)]);
    }

    #[test]
    fn queries_before_any_update_are_empty() {
        let mut grid: TileGrid<u32> = TileGrid::new(100.0, 100.0, 10.0).unwrap();
        let _ = grid.insert(GridObject::point(50.0, 50.0), 1);
        assert!(grid.query_neighbors(50.0, 50.0, 1).is_empty());
        assert!(grid.query_rect(0.0, 0.0, 100.0, 100.0).is_empty());
    }
}
