//! Pearce's space-efficient variant of Tarjan's SCC algorithm, driven by an
//! explicit stack instead of recursion.
//!
//! References:
//! - D. J. Pearce, "A space-efficient algorithm for finding strongly
//!   connected components", IPL 116(1), 2016. <https://doi.org/10.1016/j.ipl.2015.08.010>
//! - <https://github.com/DavePearce/StronglyConnectedComponents>

use crate::domain::graph::{Graph, Ranking};
use crate::domain::traits::SccRanker;
use crate::infrastructure::double_stack::DoubleStack;

pub struct PeaSccRanker;

impl SccRanker for PeaSccRanker {
    fn assign_ranks(&self, graph: &Graph) -> Ranking {
        let mut traversal = PeaTraversal::new(graph);
        traversal.visit_all();
        Ranking {
            ranks: traversal.rindex,
        }
    }
}

/// Working state of one ranking run.
///
/// `rindex[v] == 0` means unvisited. While `v` is on the call stack it holds
/// a discovery number (or the smallest one reachable so far); once `v`'s
/// component is closed it holds the component id. Discovery numbers stay
/// below `index` and component ids are handed out downwards from `n - 1`,
/// so a closed vertex never looks smaller than an open one.
struct PeaTraversal<'g> {
    graph: &'g Graph,
    rindex: Vec<usize>,
    root: Vec<bool>,
    // front: call stack of vertices, back: vertices awaiting their component
    vertices: DoubleStack,
    // edge cursor of each call-stack frame
    cursors: Vec<usize>,
    index: usize,
    c: usize,
}

impl<'g> PeaTraversal<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            rindex: vec![0; n],
            root: vec![false; n],
            vertices: DoubleStack::with_capacity(n),
            cursors: Vec::with_capacity(n),
            index: 1,
            c: n.saturating_sub(1),
        }
    }

    fn visit_all(&mut self) {
        // Roots are taken in reverse position order.
        for v in (0..self.graph.node_count()).rev() {
            if self.rindex[v] == 0 {
                self.visit(v);
            }
        }
    }

    fn visit(&mut self, v: usize) {
        self.begin_visiting(v);

        while !self.vertices.is_empty_front() {
            self.visit_loop();
        }
    }

    fn visit_loop(&mut self) {
        let (Some(v), Some(&cursor)) = (self.vertices.top_front(), self.cursors.last()) else {
            return;
        };
        let out_degree = self.graph.edges[v].len();

        let mut i = cursor;
        while i <= out_degree {
            if i > 0 {
                // Settle the edge walked on the previous step (or descended into).
                self.finish_edge(v, i - 1);
            }
            if i < out_degree && self.begin_edge(v, i) {
                return;
            }
            i += 1;
        }

        self.finish_visiting(v);
    }

    fn begin_visiting(&mut self, v: usize) {
        self.vertices.push_front(v);
        self.cursors.push(0);
        self.root[v] = true;
        self.rindex[v] = self.index;
        self.index += 1;
    }

    fn finish_visiting(&mut self, v: usize) {
        self.vertices.pop_front();
        self.cursors.pop();

        if !self.root[v] {
            self.vertices.push_back(v);
            return;
        }

        self.index -= 1;
        while let Some(w) = self.vertices.top_back() {
            if self.rindex[v] > self.rindex[w] {
                break;
            }
            self.vertices.pop_back();
            self.rindex[w] = self.c;
            self.index -= 1;
        }
        self.rindex[v] = self.c;
        self.c = self.c.saturating_sub(1);
    }

    /// Returns true when the traversal descended into the edge target.
    fn begin_edge(&mut self, v: usize, k: usize) -> bool {
        let w = self.graph.edges[v][k];
        if self.rindex[w] != 0 {
            return false;
        }
        if let Some(cursor) = self.cursors.last_mut() {
            *cursor = k + 1;
        }
        self.begin_visiting(w);
        true
    }

    fn finish_edge(&mut self, v: usize, k: usize) {
        let w = self.graph.edges[v][k];
        if self.rindex[w] < self.rindex[v] {
            self.rindex[v] = self.rindex[w];
            self.root[v] = false;
        }
    }
}
