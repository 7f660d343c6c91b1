// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment probe with tile tracing.
//!
//! Cast a widened kurbo `Line` through a field of points and print both the
//! hits and the tiles the query inspected, the data a debug overlay would
//! draw.
//!
//! Run:
//! - `cargo run -p tilefield_demos --example segment_probe`

use kurbo::{Line, Point};
use tilefield_index::{GridObject, TileGrid};

fn main() {
    let mut grid: TileGrid<u32> = TileGrid::new(200.0, 200.0, 20.0).unwrap();

    // A diagonal lattice of points.
    let mut id = 0;
    for y in 0..10 {
        for x in 0..10 {
            let _ = grid.insert(GridObject::point(x as f64 * 20.0 + 10.0, y as f64 * 20.0 + 10.0), id);
            id += 1;
        }
    }
    grid.update();

    let probe = Line::new(Point::new(5.0, 15.0), Point::new(190.0, 170.0));
    for width in [0.0, 25.0] {
        let traced = grid.query_segment_traced(
            (probe.p0.x, probe.p0.y),
            (probe.p1.x, probe.p1.y),
            width,
        );
        println!(
            "width {width}: {} hits through {} tiles",
            traced.hits.len(),
            traced.checked_tiles.len()
        );
        for (key, payload) in &traced.hits {
            let (object, _) = grid.get(*key).unwrap();
            println!("  #{payload} at ({}, {})", object.x, object.y);
        }
    }
}
