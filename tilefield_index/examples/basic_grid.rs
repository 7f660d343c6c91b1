// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Tilefield Index: insert, rebuild, and query.

use tilefield_index::{GridObject, TileGrid};

fn main() {
    let mut grid: TileGrid<u32> = TileGrid::new(100.0, 100.0, 10.0).unwrap();
    let k1 = grid.insert(GridObject::circle(25.0, 25.0, 5.0), 1);
    let _k2 = grid.insert(GridObject::point(70.0, 40.0), 2);
    grid.update();

    // Everything in the tile neighborhood of (25, 25).
    let near: Vec<_> = grid.query_neighbors(25.0, 25.0, 1);
    println!("near (25,25): {near:?}");

    // Move object 1 and rebuild.
    grid.set_object(k1, GridObject::circle(75.0, 45.0, 5.0));
    grid.update();

    let hits = grid.query_circle(72.0, 42.0, 5.0);
    println!("circle hits at (72,42): {hits:?}");
}
