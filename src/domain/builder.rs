use crate::domain::error::InvalidGraph;
use crate::domain::graph::Vertex;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Builds a vertex list while enforcing what the sort takes as given:
/// unique vertex identities, edges only between known vertices, and at most
/// one edge per (source, target) pair.
#[derive(Debug, Clone)]
pub struct GraphBuilder<K> {
    vertices: Vec<Vertex<K>>,
    positions: HashMap<K, usize>,
    unique_edges: HashSet<(usize, usize)>,
}

impl<K> GraphBuilder<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            positions: HashMap::new(),
            unique_edges: HashSet::new(),
        }
    }

    pub fn add_vertex(&mut self, key: K) -> Result<(), InvalidGraph> {
        let position = self.vertices.len();
        if let Some(&first) = self.positions.get(&key) {
            return Err(InvalidGraph::DuplicateVertex { position, first });
        }
        self.positions.insert(key.clone(), position);
        self.vertices.push(Vertex::new(key));
        Ok(())
    }

    pub fn add_edge(&mut self, from: &K, to: &K) -> Result<(), InvalidGraph> {
        let f = self.position_of(from)?;
        let t = self.position_of(to)?;
        if !self.unique_edges.insert((f, t)) {
            return Err(InvalidGraph::DuplicateEdge { from: f, to: t });
        }
        self.vertices[f].edges.push(to.clone());
        Ok(())
    }

    pub fn add_edges(&mut self, from: &K, tos: &[K]) -> Result<(), InvalidGraph> {
        for to in tos {
            self.add_edge(from, to)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    pub fn build(self) -> Vec<Vertex<K>> {
        self.vertices
    }

    fn position_of(&self, key: &K) -> Result<usize, InvalidGraph> {
        self.positions
            .get(key)
            .copied()
            .ok_or_else(|| InvalidGraph::UnknownVertex(format!("{key:?}")))
    }
}

impl<K> Default for GraphBuilder<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
