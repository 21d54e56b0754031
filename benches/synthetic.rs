use criterion::{black_box, criterion_group, criterion_main, Criterion};

use linesep::{
    candidates::Candidates,
    connectivity::ConnectivityGraph,
    generators::{diagonal, grid, rings, scrambled},
    separate, PointRegistry, SeparatorConfig,
};

fn config() -> SeparatorConfig {
    SeparatorConfig {
        max_points: 10_000,
        ..SeparatorConfig::default()
    }
}

fn just_the_candidates(c: &mut Criterion) {
    let coords = scrambled(100, 7);
    let reg = PointRegistry::load(coords.len(), &coords, &config()).unwrap();

    c.bench_function("candidates", |b| {
        b.iter(|| black_box(Candidates::generate(&reg)))
    });
}

fn just_the_graph(c: &mut Criterion) {
    c.bench_function("complete graph", |b| {
        b.iter(|| black_box(ConnectivityGraph::new(100)))
    });
}

fn separation(c: &mut Criterion) {
    let config = config();
    let inputs = [
        ("diagonal", diagonal(100)),
        ("grid", grid(10)),
        ("scrambled", scrambled(100, 7)),
        ("rings", rings(5, 5)),
    ];

    for (name, coords) in inputs {
        c.bench_function(&format!("separate {name}"), |b| {
            b.iter(|| black_box(separate(&coords, &config).unwrap()))
        });
    }
}

criterion_group!(benches, just_the_candidates, just_the_graph, separation);
criterion_main!(benches);
