use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kruskal_mst::{Edge, Graph, MstConfig, TieBreak, UnionFind, compute_mst_with_config};

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn xorshift(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545f4914f6cdd1d)
}

/// Ring over all vertices plus 4n random chords.
fn make_graph(n: usize) -> Graph {
    let mut state = 0x9e3779b97f4a7c15 ^ n as u64;
    let mut edges = Vec::with_capacity(5 * n);
    for v in 0..n {
        edges.push(Edge::new(v, (v + 1) % n, (xorshift(&mut state) % 1000) as i64));
    }
    for _ in 0..4 * n {
        let src = (xorshift(&mut state) % n as u64) as usize;
        let dest = (xorshift(&mut state) % n as u64) as usize;
        edges.push(Edge::new(src, dest, (xorshift(&mut state) % 1000) as i64));
    }
    Graph::from_edges(n, edges).expect("benchmark graph is well formed")
}

fn bench_compute_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal/compute_mst");

    for &n in SIZES {
        let graph = make_graph(n);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        for (label, tie_break) in [
            ("stable", TieBreak::InputOrder),
            ("unstable", TieBreak::Unstable),
        ] {
            let config = MstConfig {
                tie_break,
                ..Default::default()
            };
            group.bench_with_input(BenchmarkId::new(label, n), &graph, |b, graph| {
                b.iter(|| {
                    let result = compute_mst_with_config(graph, &config).expect("kruskal");
                    black_box(result);
                });
            });
        }
    }

    group.finish();
}

fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal/union_find");

    for &n in SIZES {
        let graph = make_graph(n);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let mut uf = UnionFind::new(graph.vertex_count()).expect("non-empty");
                for edge in graph.edges() {
                    black_box(uf.union(edge.src, edge.dest).expect("in range"));
                }
                black_box(uf.component_count());
            });
        });
    }

    group.finish();
}

criterion_group!(kruskal, bench_compute_mst, bench_union_find);
criterion_main!(kruskal);
