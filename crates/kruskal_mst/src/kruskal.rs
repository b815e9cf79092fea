use serde::Serialize;

use crate::{
    error::MstError,
    graph::{Edge, Graph, Weight},
    union_find::UnionFind,
};

/// How equal-weight edges are ordered before selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Stable sort: equal-weight edges are tried in input order.
    #[default]
    InputOrder,
    /// Unstable sort: the chosen tree may differ, the total weight does not.
    Unstable,
}

#[derive(Debug, Clone, Default)]
pub struct MstConfig {
    pub tie_break: TieBreak,
    /// Fail with [`MstError::Disconnected`] instead of returning a spanning forest.
    pub require_spanning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstResult {
    /// Accepted edges in the order they were selected.
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    pub vertex_count: usize,
    /// `false` when the graph was disconnected and `edges` is a spanning forest.
    pub is_complete: bool,
}

impl MstResult {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of trees in the returned forest; 1 for a spanning tree.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }
}

pub fn compute_mst(graph: &Graph) -> Result<MstResult, MstError> {
    compute_mst_with_config(graph, &MstConfig::default())
}

/// Kruskal's algorithm. The graph itself is left untouched; only a vector of
/// edge indices is sorted.
pub fn compute_mst_with_config(graph: &Graph, config: &MstConfig) -> Result<MstResult, MstError> {
    graph.validate()?;

    let edges = graph.edges();
    let vertex_count = graph.vertex_count();
    let required = vertex_count - 1;

    let mut order: Vec<usize> = (0..edges.len()).collect();
    match config.tie_break {
        TieBreak::InputOrder => order.sort_by_key(|&i| edges[i].weight),
        TieBreak::Unstable => order.sort_unstable_by_key(|&i| edges[i].weight),
    }

    let mut uf = UnionFind::new(vertex_count)?;
    let mut accepted = Vec::with_capacity(required);
    // widened so intermediate sums may leave the Weight range
    let mut sum: i128 = 0;

    for i in order {
        if accepted.len() == required {
            break;
        }
        let edge = edges[i];
        if uf.union(edge.src, edge.dest)? {
            log::debug!("accepted edge #{i}: {edge}");
            sum += i128::from(edge.weight);
            accepted.push(edge);
        } else {
            log::debug!("rejected edge #{i}: {edge} (would form a cycle)");
        }
    }

    let total_weight = Weight::try_from(sum).map_err(|_| MstError::WeightOverflow)?;
    let is_complete = accepted.len() == required;
    log::info!(
        "kruskal: accepted {} of {} edges, total weight {}",
        accepted.len(),
        edges.len(),
        total_weight
    );

    if !is_complete {
        if config.require_spanning {
            return Err(MstError::Disconnected {
                accepted: accepted.len(),
                required,
            });
        }
        log::warn!(
            "graph is disconnected: returning a spanning forest of {} trees",
            uf.component_count()
        );
    }

    Ok(MstResult {
        edges: accepted,
        total_weight,
        vertex_count,
        is_complete,
    })
}
