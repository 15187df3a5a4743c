use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphsearch_core::heuristics::manhattan;
use graphsearch_core::{BestFirstEngine, HeuristicTable, WeightedGraph};

const SIDE: i32 = 100;

fn grid() -> (WeightedGraph<(i32, i32)>, HeuristicTable<(i32, i32)>) {
    let mut g = WeightedGraph::new();
    let mut h = HeuristicTable::new();
    let goal = (SIDE - 1, SIDE - 1);
    for x in 0..SIDE {
        for y in 0..SIDE {
            for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
                let (nx, ny) = (x + dx, y + dy);
                if (0..SIDE).contains(&nx) && (0..SIDE).contains(&ny) {
                    g.add_edge((x, y), (nx, ny), 1.0).unwrap();
                }
            }
            h.insert((x, y), manhattan((x, y), goal)).unwrap();
        }
    }
    (g, h)
}

fn bench_search(c: &mut Criterion) {
    let (g, h) = grid();
    let start = (0, 0);
    let goal = (SIDE - 1, SIDE - 1);
    c.bench_function("ucs_grid_100", |b| {
        let engine = BestFirstEngine::new(&g);
        b.iter(|| black_box(engine.search(&start, &goal)))
    });
    c.bench_function("astar_grid_100", |b| {
        let engine = BestFirstEngine::with_heuristic(&g, &h);
        b.iter(|| black_box(engine.search(&start, &goal)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
