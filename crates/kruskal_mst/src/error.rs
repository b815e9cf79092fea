use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    // --- Invalid argument ---
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("graph declares {declared} edges but holds {actual}")]
    EdgeCountMismatch { declared: usize, actual: usize },

    #[error("graph is full: it was built for {capacity} edges")]
    TooManyEdges { capacity: usize },

    // --- Out of range ---
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("total weight overflowed")]
    WeightOverflow,

    #[error("graph is disconnected: accepted {accepted} of {required} spanning tree edges")]
    Disconnected { accepted: usize, required: usize },
}

impl MstError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            MstError::EmptyGraph
                | MstError::EdgeCountMismatch { .. }
                | MstError::TooManyEdges { .. }
        )
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MstError::VertexOutOfRange { .. })
    }

    pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), MstError> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(MstError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }
}
