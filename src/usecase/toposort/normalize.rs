use crate::domain::error::InvalidGraph;
use crate::domain::graph::{Graph, Vertex};
use std::collections::HashMap;
use std::hash::Hash;

/// Stamps every vertex with its position and orders each edge list by target
/// position. Returns the same graph in index space.
///
/// All validation happens before the first write, so on error `vertices` is
/// left exactly as it was.
pub fn normalize_edges<K: Eq + Hash>(vertices: &mut [Vertex<K>]) -> Result<Graph, InvalidGraph> {
    let mut graph = resolve_edges(vertices)?;

    for (i, vertex) in vertices.iter_mut().enumerate() {
        vertex.index = i;
    }

    for (vertex, targets) in vertices.iter_mut().zip(graph.edges.iter_mut()) {
        let mut paired: Vec<(usize, K)> = targets
            .iter()
            .copied()
            .zip(vertex.edges.drain(..))
            .collect();
        paired.sort_by_key(|(position, _)| *position);

        targets.clear();
        for (position, key) in paired {
            targets.push(position);
            vertex.edges.push(key);
        }
    }

    Ok(graph)
}

fn resolve_edges<K: Eq + Hash>(vertices: &[Vertex<K>]) -> Result<Graph, InvalidGraph> {
    let mut positions: HashMap<&K, usize> = HashMap::with_capacity(vertices.len());
    for (position, vertex) in vertices.iter().enumerate() {
        if let Some(&first) = positions.get(&vertex.key) {
            return Err(InvalidGraph::DuplicateVertex { position, first });
        }
        positions.insert(&vertex.key, position);
    }

    let mut graph = Graph::new(vertices.len());
    for (v, vertex) in vertices.iter().enumerate() {
        for (edge, target) in vertex.edges.iter().enumerate() {
            let &w = positions
                .get(target)
                .ok_or(InvalidGraph::UnknownEdgeTarget { vertex: v, edge })?;
            graph.edges[v].push(w);
        }
    }

    Ok(graph)
}
