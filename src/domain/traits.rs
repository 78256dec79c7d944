use crate::domain::graph::{Graph, Ranking};

/// Assigns every vertex of `graph` a rank in `0..graph.node_count()`.
///
/// Implementations must give all members of one strongly connected component
/// the same rank, and give the source of an edge between two different
/// components a strictly smaller rank than its target.
pub trait SccRanker {
    fn assign_ranks(&self, graph: &Graph) -> Ranking;
}
