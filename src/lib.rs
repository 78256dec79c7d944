//! Stable "topological" ordering of directed graphs that may contain cycles.
//!
//! Vertices of one strongly connected component stay contiguous and keep
//! their input order; everything else is ordered so that the source of an
//! edge precedes its target. See [`usecase::toposort::stable_topo_sort`].

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;

pub use domain::builder::GraphBuilder;
pub use domain::error::InvalidGraph;
pub use domain::graph::{Graph, Ranking, Vertex};
pub use domain::traits::SccRanker;
pub use infrastructure::scc_pea::PeaSccRanker;
pub use usecase::toposort::{stable_topo_sort, stable_topo_sort_with};
