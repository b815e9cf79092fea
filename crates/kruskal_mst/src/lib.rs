//! Minimum spanning trees with Kruskal's algorithm.
//!
//! ```
//! use kruskal_mst::{Graph, compute_mst};
//!
//! let mut graph = Graph::new(3, 3)?;
//! graph.add_edge(0, 1, 4)?;
//! graph.add_edge(1, 2, 1)?;
//! graph.add_edge(0, 2, 2)?;
//!
//! let mst = compute_mst(&graph)?;
//! assert_eq!(mst.total_weight, 3);
//! assert!(mst.is_complete);
//! # Ok::<(), kruskal_mst::MstError>(())
//! ```

pub mod error;
pub mod graph;
pub mod kruskal;
pub mod prim;
pub mod report;
pub mod union_find;

pub use error::MstError;
pub use graph::{Edge, Graph, Weight, sample_graph};
pub use kruskal::{MstConfig, MstResult, TieBreak, compute_mst, compute_mst_with_config};
pub use report::write_report;
pub use union_find::UnionFind;
