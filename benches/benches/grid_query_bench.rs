// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tilefield_index::{GridObject, TileGrid};

const WORLD: f64 = 2000.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_lattice_circles(n: usize, spacing: f64, radius: f64) -> Vec<GridObject> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(GridObject::circle(
                x as f64 * spacing + spacing * 0.5,
                y as f64 * spacing + spacing * 0.5,
                radius,
            ));
        }
    }
    out
}

fn gen_random_circles(count: usize, max_radius: f64) -> Vec<GridObject> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x = rng.next_f64() * WORLD;
        let y = rng.next_f64() * WORLD;
        let r = rng.next_f64() * max_radius;
        out.push(GridObject::circle(x, y, r));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<GridObject> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(GridObject::point(cx + dx, cy + dy));
        }
    }
    out
}

fn build(objects: &[GridObject], tile_size: f64) -> TileGrid<u32> {
    let mut grid = TileGrid::new(WORLD, WORLD, tile_size).unwrap();
    grid.reserve(objects.len());
    for (i, o) in objects.iter().copied().enumerate() {
        let _ = grid.insert(o, i as u32);
    }
    grid.update();
    grid
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &n in &[32usize, 64, 128] {
        let objects = gen_lattice_circles(n, WORLD / n as f64, 6.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_update_n{}", n), |b| {
            b.iter_batched(
                || TileGrid::<u32>::new(WORLD, WORLD, 32.0).unwrap(),
                |mut grid| {
                    for (i, o) in objects.iter().copied().enumerate() {
                        let _ = grid.insert(o, i as u32);
                    }
                    grid.update();
                    black_box(grid.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_circle_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    let objects = gen_random_circles(4096, 12.0);
    for &tile_size in &[16.0, 32.0, 64.0] {
        let grid = build(&objects, tile_size);
        group.bench_function(format!("query_circle_ts{}", tile_size), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * (WORLD / 16.0);
                    let y = (q / 16) as f64 * (WORLD / 16.0);
                    total += grid.query_circle(x, y, 48.0).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_rect_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect");
    let objects = gen_random_circles(4096, 12.0);
    let grid = build(&objects, 32.0);
    group.bench_function("query_rect_random", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * (WORLD / 16.0);
                let y = (q / 16) as f64 * (WORLD / 16.0);
                total += grid.query_rect(x, y, 200.0, 200.0).len();
            }
            black_box(total);
        })
    });
    group.finish();
}

fn bench_segment_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    let objects = gen_clustered_points(16, 256, 128.0);
    let grid = build(&objects, 32.0);
    for &width in &[0.0, 40.0, 160.0] {
        group.bench_function(format!("query_segment_w{}", width), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in 0..64 {
                    let y = q as f64 * (WORLD / 64.0);
                    total += grid
                        .query_segment((0.0, y), (WORLD, WORLD - y), width)
                        .len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_neighbors_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    let objects = gen_random_circles(4096, 12.0);
    let grid = build(&objects, 32.0);
    group.bench_function("query_neighbors_ring1", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * (WORLD / 16.0);
                let y = (q / 16) as f64 * (WORLD / 16.0);
                total += grid.query_neighbors(x, y, 1).len();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rebuild,
    bench_circle_query,
    bench_rect_query,
    bench_segment_query,
    bench_neighbors_query,
);
criterion_main!(benches);
