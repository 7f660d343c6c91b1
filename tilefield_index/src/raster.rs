// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer line rasterization over tile coordinates.

/// Bresenham walk between two tile coordinates, endpoints included.
///
/// Classic 8-connected stepping with a `dx - dy` error accumulator.
/// Coordinates are unbounded; the caller clips against the grid.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TileWalk {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl TileWalk {
    pub(crate) fn new(from: (i64, i64), to: (i64, i64)) -> Self {
        let (x, y) = from;
        let (x1, y1) = to;
        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        Self {
            x,
            y,
            x1,
            y1,
            dx,
            dy,
            sx: if x < x1 { 1 } else { -1 },
            sy: if y < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for TileWalk {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(out)
    }
}
