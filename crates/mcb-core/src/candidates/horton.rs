//! Horton candidate cycles.
//!
//! For every root vertex `r` a breadth-first shortest-path tree is grown, and
//! every edge `(x, y)` that is not a tree edge closes the candidate
//!
//! ```text
//! C(r, x, y) = P(r, x) + (x, y) + P(y, r)
//! ```
//!
//! where `P` are the tree paths. The candidate is kept only if the two tree
//! paths meet at `r` alone, i.e. `x` and `y` hang off different children of
//! the root (or one of them is the root). A self-loop on `r` yields the
//! one-edge cycle `[r, r]`.
//!
//! Horton's theorem states that the union of these cycles over all roots and
//! edges contains a minimum cycle basis. Candidates are de-duplicated by edge
//! vector, since the same ring is found from each of its vertices, and then
//! stably sorted by length; equal-length candidates keep root-then-edge order.
use std::collections::{HashSet, VecDeque};

use crate::candidates::{CandidateSource, Candidates};
use crate::cycle::Cycle;
use crate::edge_vector::EdgeVector;
use crate::graph::{Graph, Incidence};

/// Materialised, length-sorted Horton candidates of a graph.
#[derive(Debug, Clone)]
pub struct HortonCandidates<'g> {
    graph: &'g Graph,
    cycles: Vec<Cycle>,
}

impl<'g> HortonCandidates<'g> {
    /// Enumerates the Horton candidates of `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        let mut seen: HashSet<EdgeVector> = HashSet::new();
        let mut cycles = Vec::new();
        let mut generated = 0usize;

        for root in 0..graph.vertex_count() {
            let _span = tracing::trace_span!("horton_root", root).entered();
            let tree = ShortestPathTree::grow(graph, root);
            for edge in 0..graph.edge_count() {
                let Some(cycle) = tree.close(graph, edge) else {
                    continue;
                };
                generated += 1;
                if seen.insert(cycle.edge_vector().clone()) {
                    cycles.push(cycle);
                }
            }
        }

        cycles.sort_by_key(Cycle::length);

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            generated,
            unique = cycles.len(),
            "enumerated Horton candidates"
        );

        Self { graph, cycles }
    }

    /// The candidates in stream order.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Returns `true` if the graph has no candidate cycle (it is a forest).
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

impl CandidateSource for HortonCandidates<'_> {
    fn graph(&self) -> &Graph {
        self.graph
    }

    fn candidates(&self) -> Candidates<'_> {
        Box::new(self.cycles.iter().cloned())
    }
}

/// BFS tree from one root, restricted to the root's component.
struct ShortestPathTree {
    root: usize,
    /// Edge to the parent, `None` for the root and unreached vertices.
    parent: Vec<Option<Incidence>>,
    reached: Vec<bool>,
    /// First vertex after the root on the tree path; the root maps to itself.
    branch: Vec<usize>,
}

impl ShortestPathTree {
    fn grow(graph: &Graph, root: usize) -> Self {
        let n = graph.vertex_count();
        let mut parent: Vec<Option<Incidence>> = vec![None; n];
        let mut reached = vec![false; n];
        let mut branch: Vec<usize> = (0..n).collect();

        let mut queue = VecDeque::new();
        reached[root] = true;
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            for inc in graph.neighbours(v) {
                let w = inc.neighbour;
                if reached[w] {
                    continue;
                }
                reached[w] = true;
                parent[w] = Some(Incidence {
                    neighbour: v,
                    edge: inc.edge,
                });
                branch[w] = if v == root { w } else { branch[v] };
                queue.push_back(w);
            }
        }

        Self {
            root,
            parent,
            reached,
            branch,
        }
    }

    fn is_tree_edge(&self, vertex: usize, edge: usize) -> bool {
        self.parent[vertex].is_some_and(|p| p.edge == edge)
    }

    /// Vertices and edges on the tree path from `vertex` up to the root.
    fn climb(&self, vertex: usize) -> (Vec<usize>, Vec<usize>) {
        let mut vertices = vec![vertex];
        let mut edges = Vec::new();
        let mut v = vertex;
        while let Some(up) = self.parent[v] {
            edges.push(up.edge);
            vertices.push(up.neighbour);
            v = up.neighbour;
        }
        (vertices, edges)
    }

    /// The candidate closed by the non-tree `edge`, if any.
    fn close(&self, graph: &Graph, edge: usize) -> Option<Cycle> {
        let (x, y) = graph.endpoints(edge)?;
        if !self.reached[x] || self.is_tree_edge(x, edge) || self.is_tree_edge(y, edge) {
            return None;
        }
        if x == y {
            return (x == self.root)
                .then(|| Cycle::from_walk(graph, vec![x, x], vec![edge]).ok())
                .flatten();
        }
        if x != self.root && y != self.root && self.branch[x] == self.branch[y] {
            return None;
        }

        let (mut path, mut edges) = self.climb(x);
        path.reverse();
        edges.reverse();
        edges.push(edge);
        let (down_path, down_edges) = self.climb(y);
        path.extend(down_path);
        edges.extend(down_edges);

        // tree paths meeting only at the root always close a simple cycle
        Cycle::from_walk(graph, path, edges).ok()
    }
}
