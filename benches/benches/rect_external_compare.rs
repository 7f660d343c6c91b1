// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tilefield_index::{GridObject, TileGrid};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_lattice_boxes(n: usize, cell: f64) -> Vec<GridObject> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(GridObject::with_edges(
                x0 + cell * 0.5,
                y0 + cell * 0.5,
                x0,
                x0 + cell,
                y0,
                y0 + cell,
            ));
        }
    }
    out
}

fn to_rstar_rects(v: &[GridObject]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|o| {
            let e = o.extent();
            Rectangle::from_corners([e.left, e.top], [e.right, e.bottom])
        })
        .collect()
}

fn bench_rect_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_external_compare");
    for &n in &[64usize, 128] {
        let cell = 10.0;
        let world = n as f64 * cell;
        let objects = gen_lattice_boxes(n, cell);
        let query = (100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("tilefield_build_query_n{}", n), |b| {
            b.iter_batched(
                || TileGrid::<u32>::new(world, world, 32.0).unwrap(),
                |mut grid| {
                    for (i, o) in objects.iter().copied().enumerate() {
                        let _ = grid.insert(o, i as u32);
                    }
                    grid.update();
                    let hits = grid.query_rect(query.0, query.1, query.2, query.3).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&objects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [query.0, query.1],
                        [query.0 + query.2, query.1 + query.3],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rect_external_compare);
criterion_main!(benches);
