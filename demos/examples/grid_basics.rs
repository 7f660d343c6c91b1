// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid basics.
//!
//! Build a small grid from kurbo shapes, rebuild, and run the four queries.
//!
//! Run:
//! - `cargo run -p tilefield_demos --example grid_basics`

use kurbo::{Circle, Point, Rect};
use tilefield_index::{GridObject, TileGrid};

fn from_circle(c: Circle) -> GridObject {
    GridObject::circle(c.center.x, c.center.y, c.radius)
}

fn from_rect(r: Rect) -> GridObject {
    GridObject::with_edges(
        r.center().x,
        r.center().y,
        r.min_x(),
        r.max_x(),
        r.min_y(),
        r.max_y(),
    )
}

fn main() {
    let mut grid: TileGrid<&str> = TileGrid::new(400.0, 300.0, 25.0).unwrap();
    println!("{} x {} tiles", grid.x_tiles(), grid.y_tiles());

    let _a = grid.insert(from_circle(Circle::new(Point::new(60.0, 60.0), 15.0)), "a");
    let _b = grid.insert(from_rect(Rect::new(150.0, 40.0, 220.0, 110.0)), "b");
    let c = grid.insert(GridObject::point(300.0, 200.0), "c");
    grid.update();

    let near: Vec<_> = grid.query_neighbors(60.0, 60.0, 1);
    println!("neighbors of (60,60): {near:?}");

    let hits = grid.query_circle(180.0, 70.0, 10.0);
    println!("circle (180,70) r10: {hits:?}");

    let hits = grid.query_rect(140.0, 30.0, 100.0, 100.0);
    println!("rect probe: {hits:?}");

    // Move `c` onto the probe segment and rebuild.
    grid.set_object(c, GridObject::point(200.0, 150.0));
    grid.update();
    let hits = grid.query_segment((0.0, 0.0), (400.0, 300.0), 10.0);
    println!("segment hits: {hits:?}");
}
