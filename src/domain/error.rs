use thiserror::Error;

/// The only failure the sort knows about: the vertex slice does not describe
/// a closed graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraph {
    #[error("vertex at position {position} repeats the identity of position {first}")]
    DuplicateVertex { position: usize, first: usize },

    #[error("edge {edge} of vertex at position {vertex} targets a vertex outside the graph")]
    UnknownEdgeTarget { vertex: usize, edge: usize },

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("duplicate edge from position {from} to position {to}")]
    DuplicateEdge { from: usize, to: usize },
}
