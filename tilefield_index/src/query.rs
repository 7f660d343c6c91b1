// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The query engine: neighbor, circle, rectangle, and segment queries.
//!
//! Every query derives a candidate tile set, gathers bucket contents
//! deduplicated by slot, then applies its exact geometric predicate.
//! Queries never mutate the store; the `*_traced` variants additionally
//! return the tiles inspected, rebuilt from scratch per call.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::grid::{Key, TileGrid};
use crate::raster::TileWalk;
use crate::types::{Extent, TileCoord};

/// Query hits paired with the tiles the query inspected.
///
/// Returned by the `*_traced` query variants for visualization and tests.
/// `checked_tiles` lists every in-bounds tile visited, in visit order, and
/// has no effect on the hits.
#[derive(Clone, Debug)]
pub struct Traced<P> {
    /// Objects passing the query's geometric filter.
    pub hits: Vec<(Key, P)>,
    /// Every in-bounds tile the query inspected, in visit order.
    pub checked_tiles: Vec<TileCoord>,
}

impl<P: Copy + Debug> TileGrid<P> {
    /// All objects registered in the square tile neighborhood of `(x, y)`.
    ///
    /// Visits the tile containing the point plus every in-bounds tile within
    /// `ring` tiles of it on both axes. No geometric filter is applied;
    /// result order is unspecified. `ring == 0` reads only the containing
    /// tile, which is empty when the point lies outside the grid.
    pub fn query_neighbors(&self, x: f64, y: f64, ring: u32) -> Vec<(Key, P)> {
        let found = self.neighbor_keys(x, y, i64::from(ring), None);
        self.with_payloads(found)
    }

    /// [`query_neighbors`](Self::query_neighbors) plus the inspected tiles.
    pub fn query_neighbors_traced(&self, x: f64, y: f64, ring: u32) -> Traced<P> {
        let mut checked = Vec::new();
        let found = self.neighbor_keys(x, y, i64::from(ring), Some(&mut checked));
        Traced {
            hits: self.with_payloads(found),
            checked_tiles: checked,
        }
    }

    /// Objects whose circle intersects the circle of `radius` at `(x, y)`.
    ///
    /// An object's circle is its center with [`hit_radius`]; boundary contact
    /// counts as intersection, and a radius-less object degrades to a point
    /// containment test. The candidate tile ring is
    /// `ceil(radius / tile_size)`, so the result set is independent of the
    /// tile size chosen.
    ///
    /// [`hit_radius`]: crate::GridObject::hit_radius
    pub fn query_circle(&self, x: f64, y: f64, radius: f64) -> Vec<(Key, P)> {
        self.circle_impl(x, y, radius, None)
    }

    /// [`query_circle`](Self::query_circle) plus the inspected tiles.
    pub fn query_circle_traced(&self, x: f64, y: f64, radius: f64) -> Traced<P> {
        let mut checked = Vec::new();
        let hits = self.circle_impl(x, y, radius, Some(&mut checked));
        Traced {
            hits,
            checked_tiles: checked,
        }
    }

    /// Objects whose [`edges`] overlap `[x, x + width] × [y, y + height]`.
    ///
    /// Overlap is inclusive at boundaries: an object edge exactly touching
    /// the query rectangle counts. Negative `width` or `height` are
    /// normalized so the rectangle covers the same point set as its
    /// swapped-corner form. Zero-size rectangles are valid point or line
    /// probes.
    ///
    /// [`edges`]: crate::GridObject::edges
    pub fn query_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Vec<(Key, P)> {
        self.rect_impl(x, y, width, height, None)
    }

    /// [`query_rect`](Self::query_rect) plus the inspected tiles.
    pub fn query_rect_traced(&self, x: f64, y: f64, width: f64, height: f64) -> Traced<P> {
        let mut checked = Vec::new();
        let hits = self.rect_impl(x, y, width, height, Some(&mut checked));
        Traced {
            hits,
            checked_tiles: checked,
        }
    }

    /// Objects within `width / 2` (plus their own radius) of the segment
    /// `from..to`.
    ///
    /// Candidate tiles come from a Bresenham walk of the segment in tile
    /// space, widened by a square (Chebyshev) neighborhood of
    /// `ceil(width / (2 * tile_size))` tiles. The exact filter measures the
    /// distance from each object center to its closest point on the segment
    /// via clamped projection. A zero-length segment degrades to a circle
    /// query of radius `width / 2` around `from`; negative widths are
    /// treated as zero.
    pub fn query_segment(&self, from: (f64, f64), to: (f64, f64), width: f64) -> Vec<(Key, P)> {
        self.segment_impl(from, to, width, None)
    }

    /// [`query_segment`](Self::query_segment) plus the inspected tiles.
    pub fn query_segment_traced(&self, from: (f64, f64), to: (f64, f64), width: f64) -> Traced<P> {
        let mut checked = Vec::new();
        let hits = self.segment_impl(from, to, width, Some(&mut checked));
        Traced {
            hits,
            checked_tiles: checked,
        }
    }

    fn circle_impl(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        trace: Option<&mut Vec<TileCoord>>,
    ) -> Vec<(Key, P)> {
        let ring = self.layout.reach_tiles(radius);
        let found = self.neighbor_keys(x, y, ring, trace);
        found
            .into_iter()
            .filter_map(|key| {
                let e = self.entry(key)?;
                let dx = e.object.x - x;
                let dy = e.object.y - y;
                let reach = e.object.hit_radius() + radius;
                (dx * dx + dy * dy <= reach * reach).then_some((key, e.payload))
            })
            .collect()
    }

    fn rect_impl(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        mut trace: Option<&mut Vec<TileCoord>>,
    ) -> Vec<(Key, P)> {
        // Normalize so negative sizes describe the same point set.
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        let query = Extent {
            left: x,
            right: x + width,
            top: y,
            bottom: y + height,
        };

        let mut seen = BTreeSet::new();
        let mut found = Vec::new();
        if let Some((xs, ys)) = self.layout.tile_span(&query) {
            for ty in ys {
                for tx in xs.clone() {
                    let tile = TileCoord { tx, ty };
                    if let Some(t) = trace.as_deref_mut() {
                        t.push(tile);
                    }
                    self.gather(tile, &mut seen, &mut found);
                }
            }
        }

        found
            .into_iter()
            .filter_map(|key| {
                let e = self.entry(key)?;
                e.object
                    .edges()
                    .overlaps(&query)
                    .then_some((key, e.payload))
            })
            .collect()
    }

    fn segment_impl(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        mut trace: Option<&mut Vec<TileCoord>>,
    ) -> Vec<(Key, P)> {
        let half = 0.5 * width.max(0.0);
        let (fx, fy) = from;
        let (tox, toy) = to;

        // Phase 1: tiles under the segment, in-bounds only.
        let mut walked = BTreeSet::new();
        for (tx, ty) in TileWalk::new(self.layout.tile_of(fx, fy), self.layout.tile_of(tox, toy)) {
            if let Some(tile) = self.layout.checked(tx, ty) {
                let _ = walked.insert(tile);
            }
        }

        // Phase 2: widen each walked tile by the Chebyshev reach of the
        // half-width.
        let reach = self.layout.reach_tiles(half);
        let mut expanded = BTreeSet::new();
        for &tile in &walked {
            for oy in -reach..=reach {
                for ox in -reach..=reach {
                    if let Some(t) = self.layout.checked_offset(tile, ox, oy) {
                        let _ = expanded.insert(t);
                    }
                }
            }
        }

        // Phase 3: gather candidates and keep those close enough to the
        // segment.
        let mut seen = BTreeSet::new();
        let mut found = Vec::new();
        for &tile in &expanded {
            if let Some(t) = trace.as_deref_mut() {
                t.push(tile);
            }
            self.gather(tile, &mut seen, &mut found);
        }

        let vx = tox - fx;
        let vy = toy - fy;
        let len2 = vx * vx + vy * vy;
        found
            .into_iter()
            .filter_map(|key| {
                let e = self.entry(key)?;
                let (ox, oy) = (e.object.x, e.object.y);
                // Zero-length segments degrade to a circle around `from`.
                let t = if len2 > 0.0 {
                    (((ox - fx) * vx + (oy - fy) * vy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let dx = ox - (fx + t * vx);
                let dy = oy - (fy + t * vy);
                let reach = e.object.hit_radius() + half;
                (dx * dx + dy * dy <= reach * reach).then_some((key, e.payload))
            })
            .collect()
    }

    /// Candidate keys from the square tile neighborhood around `(x, y)`.
    fn neighbor_keys(
        &self,
        x: f64,
        y: f64,
        ring: i64,
        mut trace: Option<&mut Vec<TileCoord>>,
    ) -> Vec<Key> {
        let (cx, cy) = self.layout.tile_of(x, y);
        let mut seen = BTreeSet::new();
        let mut found = Vec::new();
        for oy in -ring..=ring {
            for ox in -ring..=ring {
                let Some(tile) = self.layout.checked(cx + ox, cy + oy) else {
                    continue;
                };
                if let Some(t) = trace.as_deref_mut() {
                    t.push(tile);
                }
                self.gather(tile, &mut seen, &mut found);
            }
        }
        found
    }

    /// Append the live, unseen keys of one bucket. Dedup is by slot so an
    /// object spanning several visited tiles is collected once.
    fn gather(&self, tile: TileCoord, seen: &mut BTreeSet<usize>, found: &mut Vec<Key>) {
        for &key in &self.buckets[self.layout.bucket(tile)] {
            if self.entry(key).is_none() {
                continue;
            }
            if seen.insert(key.idx()) {
                found.push(key);
            }
        }
    }

    fn with_payloads(&self, keys: Vec<Key>) -> Vec<(Key, P)> {
        keys.into_iter()
            .filter_map(|key| self.entry(key).map(|e| (key, e.payload)))
            .collect()
    }
}
