//! Incremental construction of molecular skeletons.

use mcb_core::Graph;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

/// A growable undirected multigraph; frozen into a [`Graph`] when done.
#[derive(Debug, Default, Clone)]
pub struct Skeleton {
    graph: UnGraph<(), ()>,
}

impl Skeleton {
    /// An empty skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        self.graph.add_node(()).index()
    }

    /// Adds the edge `{u, v}`; parallel edges are allowed.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    /// Number of vertices so far.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges so far.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Endpoints of edge `edge`, or `None` if it does not exist.
    pub fn endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        self.graph
            .edge_endpoints(EdgeIndex::new(edge))
            .map(|(u, v)| (u.index(), v.index()))
    }

    /// Joins `u` to `v` through `inner` fresh vertices.
    ///
    /// With `u == v` this closes a ring of `inner + 1` vertices through `u`.
    /// Returns the fresh vertices in path order.
    pub fn path_between(&mut self, u: usize, v: usize, inner: usize) -> Vec<usize> {
        let fresh: Vec<usize> = (0..inner).map(|_| self.add_vertex()).collect();
        let mut previous = u;
        for &w in &fresh {
            self.add_edge(previous, w);
            previous = w;
        }
        self.add_edge(previous, v);
        fresh
    }

    /// Adds a ring of `size` fresh vertices and returns them in ring order.
    pub fn ring(&mut self, size: usize) -> Vec<usize> {
        let first = self.add_vertex();
        let mut members = vec![first];
        members.extend(self.path_between(first, first, size.saturating_sub(1)));
        members
    }

    /// Adds a ring of `size` vertices that passes through the existing `v`.
    pub fn ring_through(&mut self, v: usize, size: usize) -> Vec<usize> {
        self.path_between(v, v, size.saturating_sub(1))
    }

    /// Freezes the skeleton, keeping vertex and edge numbering.
    pub fn into_graph(self) -> Graph {
        Graph::from_petgraph(&self.graph)
    }
}
