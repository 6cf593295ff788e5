use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use named_graph::{AdjacencyGraph, Dijkstra, Traversal};

fn name(row: usize, col: usize) -> String {
    format!("r{}c{}", row, col)
}

/// `size` x `size` grid with edges pointing right and down.
fn grid(size: usize) -> AdjacencyGraph<usize> {
    let mut graph = AdjacencyGraph::new();

    for row in 0..size {
        for col in 0..size {
            graph.add_vertex(name(row, col), row * size + col).unwrap();
        }
    }

    for row in 0..size {
        for col in 0..size {
            let cost = ((row * 7 + col * 13) % 10 + 1) as i64;
            if col + 1 < size {
                graph
                    .add_directed_edge(name(row, col), name(row, col + 1), cost)
                    .unwrap();
            }
            if row + 1 < size {
                graph
                    .add_directed_edge(name(row, col), name(row + 1, col), cost)
                    .unwrap();
            }
        }
    }

    graph
}

pub fn dijkstra_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [10, 50, 100] {
        let graph = grid(size);
        let target = name(size - 1, size - 1);

        group.sample_size(10);
        group.bench_with_input(BenchmarkId::new("corner_to_corner", size), &graph, |b, g| {
            b.iter(|| g.dijkstra("r0c0", &target))
        });
    }

    group.finish();
}

pub fn traversal_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [10, 50, 100] {
        let graph = grid(size);

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| g.breadth_first_search("r0c0", |_, _| {}))
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| g.depth_first_search("r0c0", |_, _| {}))
        });
    }

    group.finish();
}

criterion_group!(benches, dijkstra_bench, traversal_bench);
criterion_main!(benches);
