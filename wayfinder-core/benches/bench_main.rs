use criterion::{Criterion, black_box, criterion_group, criterion_main};

use wayfinder_core::loading::{EdgeRecord, GraphData, NodeRecord, build_graph};
use wayfinder_core::routing::{shortest_distances, shortest_path};

/// Floor plan laid out as a `side` x `side` grid of markers
fn grid_floor(side: usize) -> GraphData {
    let id = |r: usize, c: usize| format!("m{r}_{c}");
    let mut data = GraphData::default();

    for r in 0..side {
        for c in 0..side {
            data.nodes
                .push(NodeRecord::new(&id(r, c), c as f64, r as f64, "Corridor"));
            if c + 1 < side {
                let distance = ((r * 31 + c * 17) % 9 + 1) as f64;
                data.edges
                    .push(EdgeRecord::new(&id(r, c), &id(r, c + 1), distance));
            }
            if r + 1 < side {
                let distance = ((r * 13 + c * 7) % 9 + 1) as f64;
                data.edges
                    .push(EdgeRecord::new(&id(r, c), &id(r + 1, c), distance));
            }
        }
    }

    data
}

fn bench_routing(c: &mut Criterion) {
    let graph = build_graph(&grid_floor(40)).expect("grid floor is valid");
    let target = "m39_39";

    c.bench_function("shortest_path 40x40", |b| {
        b.iter(|| shortest_path(black_box(&graph), black_box("m0_0"), black_box(target)));
    });

    c.bench_function("shortest_distances 40x40", |b| {
        b.iter(|| shortest_distances(black_box(&graph), black_box("m20_20")));
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
