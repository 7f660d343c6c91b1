// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object and tile primitives.

/// An entity registered with a [`TileGrid`](crate::TileGrid).
///
/// Only the center is required. The optional fields refine the shape:
///
/// - `radius` gives the object a circular hit shape and, absent explicit
///   edges, widens its tile-assignment extent to `center ± radius`.
/// - `left`/`right`/`top`/`bottom` override individual assignment edges
///   (`top`/`bottom` are min/max y; y grows downward by convention, but the
///   math is orientation-agnostic).
///
/// An object with neither radius nor edges occupies exactly the tile
/// containing its center and hit-tests as a point. Coordinates may lie
/// outside the grid; out-of-bounds portions are clipped at assignment time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridObject {
    /// Center x in world units.
    pub x: f64,
    /// Center y in world units.
    pub y: f64,
    /// Circular hit radius, non-negative. `None` hit-tests as radius `0.0`.
    pub radius: Option<f64>,
    /// Explicit left (min x) assignment edge.
    pub left: Option<f64>,
    /// Explicit right (max x) assignment edge.
    pub right: Option<f64>,
    /// Explicit top (min y) assignment edge.
    pub top: Option<f64>,
    /// Explicit bottom (max y) assignment edge.
    pub bottom: Option<f64>,
}

impl GridObject {
    /// A point object at `(x, y)`.
    pub const fn point(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: None,
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// A circular object centered at `(x, y)`.
    pub const fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            radius: Some(radius),
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// An object with all four assignment edges given explicitly.
    pub const fn with_edges(
        x: f64,
        y: f64,
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    ) -> Self {
        Self {
            x,
            y,
            radius: None,
            left: Some(left),
            right: Some(right),
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    /// Radius used by circle and segment filters; `0.0` when absent.
    pub fn hit_radius(&self) -> f64 {
        self.radius.unwrap_or(0.0)
    }

    /// Tile-assignment extent: explicit edges win, otherwise `center ∓ radius`.
    pub fn extent(&self) -> Extent {
        let r = self.hit_radius();
        Extent {
            left: self.left.unwrap_or(self.x - r),
            right: self.right.unwrap_or(self.x + r),
            top: self.top.unwrap_or(self.y - r),
            bottom: self.bottom.unwrap_or(self.y + r),
        }
    }

    /// Edges used by the rectangle filter: explicit edges win, otherwise the
    /// center itself. Unlike [`extent`](Self::extent) the radius is not
    /// consulted; an edge-less circle overlaps a rectangle only through its
    /// center.
    pub fn edges(&self) -> Extent {
        Extent {
            left: self.left.unwrap_or(self.x),
            right: self.right.unwrap_or(self.x),
            top: self.top.unwrap_or(self.y),
            bottom: self.bottom.unwrap_or(self.y),
        }
    }
}

/// Resolved bounding edges of an object or query region.
///
/// `top`/`bottom` are min/max y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    /// Min x.
    pub left: f64,
    /// Max x.
    pub right: f64,
    /// Min y.
    pub top: f64,
    /// Max y.
    pub bottom: f64,
}

impl Extent {
    /// Inclusive AABB overlap against another extent.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.right >= other.left
            && self.left <= other.right
            && self.bottom >= other.top
            && self.top <= other.bottom
    }
}

/// Address of one tile: column `tx`, row `ty`.
///
/// Produced by queries and traces; always within the grid that produced it.
/// Ordered so tile sets can live in a `BTreeSet`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileCoord {
    /// Tile column, `0..x_tiles`.
    pub tx: usize,
    /// Tile row, `0..y_tiles`.
    pub ty: usize,
}
