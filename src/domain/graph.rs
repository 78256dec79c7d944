/// A vertex of the caller's graph.
///
/// `key` is the vertex identity. `edges` lists the identities of the
/// outgoing edge targets; the sort reorders this list but never changes its
/// contents. `index` is the position the vertex had in the slice handed to
/// the most recent sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<K> {
    pub key: K,
    pub index: usize,
    pub edges: Vec<K>,
}

impl<K> Vertex<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            index: 0,
            edges: Vec::new(),
        }
    }

    pub fn with_edges(key: K, edges: Vec<K>) -> Self {
        Self {
            key,
            index: 0,
            edges,
        }
    }
}

/// Index-space adjacency: `edges[v]` holds the positions of `v`'s targets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }
}

/// Per-vertex ranks produced by an [`SccRanker`](crate::domain::traits::SccRanker).
///
/// Vertices sharing a rank form one strongly connected component. Smaller
/// ranks sort earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub ranks: Vec<usize>,
}

impl Ranking {
    fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.ranks.len()];
        for &r in self.ranks.iter() {
            sizes[r] += 1;
        }
        sizes
    }

    pub fn component_count(&self) -> usize {
        self.component_sizes().iter().filter(|&&n| n > 0).count()
    }

    pub fn largest_component(&self) -> usize {
        self.component_sizes().into_iter().max().unwrap_or(0)
    }

    /// Components with more than one vertex, or a single vertex with a self-loop.
    pub fn cyclic_component_count(&self, graph: &Graph) -> usize {
        let sizes = self.component_sizes();
        let mut cyclic = vec![false; sizes.len()];

        for (v, &r) in self.ranks.iter().enumerate() {
            if sizes[r] > 1 || graph.edges[v].contains(&v) {
                cyclic[r] = true;
            }
        }

        cyclic.iter().filter(|&&b| b).count()
    }
}
