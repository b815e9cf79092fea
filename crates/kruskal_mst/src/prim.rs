//! Prim's algorithm, used as an independent check on the Kruskal result.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    error::MstError,
    graph::{Graph, Weight},
};

/// Total weight of a minimum spanning forest of `graph`.
///
/// Prim grows one tree at a time, so it is restarted from every vertex not
/// yet reached. On a connected graph this is the MST weight.
pub fn minimum_spanning_weight(graph: &Graph) -> Result<Weight, MstError> {
    graph.validate()?;

    let n = graph.vertex_count();
    let mut adjacency: Vec<Vec<(usize, Weight)>> = vec![Vec::new(); n];
    for edge in graph.edges() {
        if edge.is_self_loop() {
            continue;
        }
        adjacency[edge.src].push((edge.dest, edge.weight));
        adjacency[edge.dest].push((edge.src, edge.weight));
    }

    let mut in_tree = vec![false; n];
    let mut total: i128 = 0;
    let mut heap = BinaryHeap::new();

    for start in 0..n {
        if in_tree[start] {
            continue;
        }
        in_tree[start] = true;
        heap.extend(adjacency[start].iter().map(|&(v, w)| Reverse((w, v))));

        while let Some(Reverse((weight, v))) = heap.pop() {
            if in_tree[v] {
                continue;
            }
            in_tree[v] = true;
            total += i128::from(weight);
            for &(next, w) in &adjacency[v] {
                if !in_tree[next] {
                    heap.push(Reverse((w, next)));
                }
            }
        }
    }

    Weight::try_from(total).map_err(|_| MstError::WeightOverflow)
}
