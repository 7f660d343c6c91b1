// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile addressing: pure world-to-tile math shared by indexing and queries.
//!
//! Registration and every query go through the same mapping; that shared
//! arithmetic is the correctness invariant of the whole index.

use core::ops::RangeInclusive;

use crate::types::{Extent, TileCoord};

/// Fixed tiling of the bounded plane `[0, width) × [0, height)`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TileLayout {
    tile_size: f64,
    x_tiles: usize,
    y_tiles: usize,
}

impl TileLayout {
    pub(crate) fn new(width: f64, height: f64, tile_size: f64) -> Self {
        Self {
            tile_size,
            x_tiles: axis_tiles(width, tile_size),
            y_tiles: axis_tiles(height, tile_size),
        }
    }

    pub(crate) fn tile_size(&self) -> f64 {
        self.tile_size
    }

    pub(crate) fn x_tiles(&self) -> usize {
        self.x_tiles
    }

    pub(crate) fn y_tiles(&self) -> usize {
        self.y_tiles
    }

    pub(crate) fn tile_count(&self) -> usize {
        self.x_tiles * self.y_tiles
    }

    /// World coordinate to unbounded tile index along one axis.
    pub(crate) fn tile_at(&self, coord: f64) -> i64 {
        floor_to_i64(coord / self.tile_size)
    }

    /// Unbounded tile coordinates of the tile containing `(x, y)`.
    pub(crate) fn tile_of(&self, x: f64, y: f64) -> (i64, i64) {
        (self.tile_at(x), self.tile_at(y))
    }

    /// Bounds check and narrowing to a valid [`TileCoord`].
    pub(crate) fn checked(&self, tx: i64, ty: i64) -> Option<TileCoord> {
        if tx < 0 || ty < 0 {
            return None;
        }
        #[allow(
            clippy::cast_sign_loss,
            reason = "negative values are rejected above"
        )]
        let (tx, ty) = (tx as usize, ty as usize);
        (tx < self.x_tiles && ty < self.y_tiles).then_some(TileCoord { tx, ty })
    }

    /// Bounds-checked neighbor of a valid tile.
    pub(crate) fn checked_offset(&self, tile: TileCoord, ox: i64, oy: i64) -> Option<TileCoord> {
        self.checked(tile.tx as i64 + ox, tile.ty as i64 + oy)
    }

    /// Flat bucket index of a valid tile: `ty * x_tiles + tx`.
    pub(crate) fn bucket(&self, tile: TileCoord) -> usize {
        tile.ty * self.x_tiles + tile.tx
    }

    /// Tile rectangle covered by an extent, clipped to grid bounds.
    ///
    /// `None` when the extent misses the grid entirely or the grid has no
    /// tiles; the caller registers or visits nothing in that case.
    pub(crate) fn tile_span(
        &self,
        e: &Extent,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        let xs = clip_axis(self.tile_at(e.left), self.tile_at(e.right), self.x_tiles)?;
        let ys = clip_axis(self.tile_at(e.top), self.tile_at(e.bottom), self.y_tiles)?;
        Some((xs, ys))
    }

    /// Tile-space reach of a circular world-space reach: `ceil(r / tile_size)`.
    pub(crate) fn reach_tiles(&self, reach: f64) -> i64 {
        ceil_to_i64(reach / self.tile_size).max(0)
    }
}

#[allow(
    clippy::cast_sign_loss,
    reason = "non-positive counts collapse to zero tiles"
)]
fn axis_tiles(span: f64, tile_size: f64) -> usize {
    let n = floor_to_i64(span / tile_size);
    if n > 0 { n as usize } else { 0 }
}

#[allow(
    clippy::cast_sign_loss,
    reason = "both ends are clamped into 0..count"
)]
fn clip_axis(lo: i64, hi: i64, count: usize) -> Option<RangeInclusive<usize>> {
    let count = count as i64;
    if count == 0 || hi < 0 || lo >= count {
        return None;
    }
    Some((lo.max(0) as usize)..=(hi.min(count - 1) as usize))
}

/// `floor(v)` as `i64` without float intrinsics, so the crate stays `no_std`.
#[inline]
pub(crate) fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tile indices are intentionally truncated to i64"
    )]
    let i = v as i64;
    if (i as f64) > v { i - 1 } else { i }
}

/// `ceil(v)` as `i64` without float intrinsics.
#[inline]
pub(crate) fn ceil_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tile indices are intentionally truncated to i64"
    )]
    let i = v as i64;
    if (i as f64) < v { i + 1 } else { i }
}
