use anynav_core::prelude::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geo::{Geometry, LineString, point};

/// Square street grid spanning 0.001 degrees per block
fn grid(size: usize) -> Vec<Geometry<f64>> {
    let step = 0.001;
    let mut geometries = Vec::with_capacity(size * 2);
    for i in 0..size {
        let offset = i as f64 * step;
        let row: Vec<(f64, f64)> = (0..size).map(|j| (j as f64 * step, offset)).collect();
        let col: Vec<(f64, f64)> = (0..size).map(|j| (offset, j as f64 * step)).collect();
        geometries.push(Geometry::LineString(LineString::from(row)));
        geometries.push(Geometry::LineString(LineString::from(col)));
    }
    geometries
}

fn bench_rebuild(c: &mut Criterion) {
    let geometries = grid(60);
    let mut graph = NavGraph::default();

    c.bench_function("rebuild_60x60", |b| {
        b.iter(|| graph.rebuild(black_box(&geometries)));
    });
}

fn bench_find_path(c: &mut Criterion) {
    let geometries = grid(60);
    let graph = create_nav_graph(&GraphConfig::default(), &geometries);
    let finder = PathFinder::new(&graph);

    c.bench_function("find_path_corner_to_corner", |b| {
        b.iter(|| {
            finder
                .find_path(
                    black_box(point!(x: 0.0, y: 0.0)),
                    black_box(point!(x: 0.059, y: 0.059)),
                )
                .unwrap()
        });
    });

    c.bench_function("nearest_node", |b| {
        b.iter(|| graph.nearest_node(black_box(&point!(x: 0.0305, y: 0.0212))));
    });
}

criterion_group!(benches, bench_rebuild, bench_find_path);
criterion_main!(benches);
