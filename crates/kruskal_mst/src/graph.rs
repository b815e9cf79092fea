use std::fmt;

use serde::Serialize;

use crate::error::MstError;

pub type Weight = i64;

/// An undirected, weighted connection between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: usize, dest: usize, weight: Weight) -> Self {
        Edge { src, dest, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.src, self.dest, self.weight)
    }
}

/// An edge-list graph with a fixed vertex count and a declared number of edges.
///
/// Endpoints are checked on insertion, so a `Graph` only ever holds edges whose
/// `src` and `dest` lie in `[0, vertex_count)`. Self-loops are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph with room for `edge_count` edges.
    pub fn new(vertex_count: usize, edge_count: usize) -> Result<Self, MstError> {
        if vertex_count == 0 {
            return Err(MstError::EmptyGraph);
        }
        Ok(Graph {
            vertex_count,
            edge_count,
            edges: Vec::with_capacity(edge_count),
        })
    }

    pub fn from_edges(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, MstError> {
        let mut graph = Graph::new(vertex_count, edges.len())?;
        for edge in edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn push_edge(&mut self, edge: Edge) -> Result<(), MstError> {
        if self.edges.len() >= self.edge_count {
            return Err(MstError::TooManyEdges {
                capacity: self.edge_count,
            });
        }
        MstError::check_vertex(edge.src, self.vertex_count)?;
        MstError::check_vertex(edge.dest, self.vertex_count)?;
        self.edges.push(edge);
        Ok(())
    }

    pub fn add_edge(&mut self, src: usize, dest: usize, weight: Weight) -> Result<(), MstError> {
        self.push_edge(Edge::new(src, dest, weight))
    }

    /// Checks that the graph is fully populated and every endpoint is in range.
    pub fn validate(&self) -> Result<(), MstError> {
        if self.edges.len() != self.edge_count {
            return Err(MstError::EdgeCountMismatch {
                declared: self.edge_count,
                actual: self.edges.len(),
            });
        }
        for edge in &self.edges {
            MstError::check_vertex(edge.src, self.vertex_count)?;
            MstError::check_vertex(edge.dest, self.vertex_count)?;
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// The 4-vertex, 5-edge demo graph. Its MST weighs 19.
pub fn sample_graph() -> Graph {
    Graph {
        vertex_count: 4,
        edge_count: 5,
        edges: vec![
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 6),
            Edge::new(0, 3, 5),
            Edge::new(1, 3, 15),
            Edge::new(2, 3, 4),
        ],
    }
}
