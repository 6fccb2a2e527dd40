/// Undirected input graph for cycle basis computation.
///
/// [`Graph`] wraps a `petgraph` `UnGraph` and fixes the two coordinate
/// systems every other module works in:
///
/// - **Vertices** are the dense ids `0..n`.
/// - **Edges** are the dense ids `0..m`, assigned in insertion order. The edge
///   id is the bit position of the edge in every [`crate::EdgeVector`].
///
/// The graph is immutable once built, so both id spaces are stable for its
/// whole lifetime. Parallel edges and self-loops are accepted; each gets its
/// own edge id.
///
/// # Construction
///
/// - [`Graph::from_edges`]: explicit vertex count plus an edge list.
/// - [`Graph::from_adjacency`]: a symmetric adjacency list in which every
///   edge `{u, v}` appears in both `adj[u]` and `adj[v]`.
/// - [`Graph::from_petgraph`]: any `petgraph` undirected graph; node and
///   edge weights are dropped, indices are preserved.
/// - [`Graph::subgraph`]: the induced subgraph over a vertex selection.
use std::collections::BTreeMap;
use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::union_find::UnionFind;

/// One entry of a vertex's adjacency: the vertex on the other side of an
/// incident edge, and that edge's id.
///
/// A self-loop on `v` appears once in `v`'s adjacency with `neighbour == v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Incidence {
    /// The opposite endpoint.
    pub neighbour: usize,
    /// The id of the connecting edge.
    pub edge: usize,
}

/// Errors that can occur while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// An edge or adjacency entry names a vertex `>= vertex_count`.
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An adjacency list mentions `{u, v}` a different number of times from
    /// each side (or an odd number of times for a self-loop).
    AsymmetricAdjacency {
        /// The vertex whose list was inspected.
        u: usize,
        /// The neighbour whose multiplicity does not match.
        v: usize,
    },
    /// A vertex appears more than once in a subgraph selection.
    DuplicateVertex(usize),
}

impl fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphBuildError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "vertex {vertex} out of range for a graph with {vertex_count} vertices"
                )
            }
            GraphBuildError::AsymmetricAdjacency { u, v } => {
                write!(f, "adjacency of {u} and {v} is not symmetric")
            }
            GraphBuildError::DuplicateVertex(v) => {
                write!(f, "vertex {v} selected more than once")
            }
        }
    }
}

impl std::error::Error for GraphBuildError {}

/// An immutable undirected multigraph with dense vertex and edge ids.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<(), ()>,
    adjacency: Vec<Vec<Incidence>>,
    endpoints: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds a graph with `vertex_count` vertices and the given edges.
    ///
    /// Edge `i` of the result is `edges[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphBuildError::VertexOutOfRange`] if an endpoint is
    /// `>= vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphBuildError> {
        let mut inner = UnGraph::<(), ()>::with_capacity(vertex_count, edges.len());
        for _ in 0..vertex_count {
            inner.add_node(());
        }
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(GraphBuildError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            inner.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        Ok(Self::index(inner))
    }

    /// Builds a graph from a symmetric adjacency list.
    ///
    /// Edges are numbered by scanning `adjacency[u]` for `u = 0, 1, ...` and
    /// taking each neighbour `v > u` in list order. A neighbour repeated `k`
    /// times yields `k` parallel edges; a self-loop on `u` is written as `u`
    /// listed twice in `adjacency[u]`.
    ///
    /// # Errors
    ///
    /// - [`GraphBuildError::VertexOutOfRange`] if a neighbour is not a vertex.
    /// - [`GraphBuildError::AsymmetricAdjacency`] if `v` appears in `adj[u]`
    ///   a different number of times from `u` in `adj[v]`.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, GraphBuildError> {
        let vertex_count = adjacency.len();

        let mut multiplicity: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for (u, neighbours) in adjacency.iter().enumerate() {
            for &v in neighbours {
                if v >= vertex_count {
                    return Err(GraphBuildError::VertexOutOfRange {
                        vertex: v,
                        vertex_count,
                    });
                }
                *multiplicity.entry((u, v)).or_insert(0) += 1;
            }
        }

        for (&(u, v), &count) in &multiplicity {
            let symmetric = if u == v {
                count % 2 == 0
            } else {
                multiplicity.get(&(v, u)) == Some(&count)
            };
            if !symmetric {
                return Err(GraphBuildError::AsymmetricAdjacency { u, v });
            }
        }

        let mut edges = Vec::new();
        for (u, neighbours) in adjacency.iter().enumerate() {
            let mut loop_half = false;
            for &v in neighbours {
                if u < v {
                    edges.push((u, v));
                } else if u == v {
                    if loop_half {
                        edges.push((u, u));
                    }
                    loop_half = !loop_half;
                }
            }
        }

        Self::from_edges(vertex_count, &edges)
    }

    /// Builds a graph with the same vertex and edge indices as `graph`.
    pub fn from_petgraph<N, E>(graph: &UnGraph<N, E>) -> Self {
        Self::index(graph.map(|_, _| (), |_, _| ()))
    }

    /// Returns the subgraph induced by `vertices`.
    ///
    /// Vertex `vertices[i]` becomes vertex `i` of the result. Edges with both
    /// endpoints selected are kept in ascending order of their original id.
    ///
    /// # Errors
    ///
    /// - [`GraphBuildError::VertexOutOfRange`] for an unknown vertex.
    /// - [`GraphBuildError::DuplicateVertex`] if a vertex is listed twice.
    pub fn subgraph(&self, vertices: &[usize]) -> Result<Self, GraphBuildError> {
        let mut relabel: Vec<Option<usize>> = vec![None; self.vertex_count()];
        for (i, &v) in vertices.iter().enumerate() {
            let slot = relabel
                .get_mut(v)
                .ok_or(GraphBuildError::VertexOutOfRange {
                    vertex: v,
                    vertex_count: self.vertex_count(),
                })?;
            if slot.is_some() {
                return Err(GraphBuildError::DuplicateVertex(v));
            }
            *slot = Some(i);
        }

        let edges: Vec<(usize, usize)> = self
            .endpoints
            .iter()
            .filter_map(|&(u, v)| Some((relabel[u]?, relabel[v]?)))
            .collect();

        Self::from_edges(vertices.len(), &edges)
    }

    /// Derives the adjacency and endpoint tables from the petgraph storage.
    fn index(inner: UnGraph<(), ()>) -> Self {
        let mut adjacency = vec![Vec::new(); inner.node_count()];
        let mut endpoints = Vec::with_capacity(inner.edge_count());

        for edge_ref in inner.edge_references() {
            let edge = edge_ref.id().index();
            let u = edge_ref.source().index();
            let v = edge_ref.target().index();
            endpoints.push((u, v));
            adjacency[u].push(Incidence { neighbour: v, edge });
            if u != v {
                adjacency[v].push(Incidence { neighbour: u, edge });
            }
        }

        Self {
            inner,
            adjacency,
            endpoints,
        }
    }

    /// Number of vertices `n`.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges `m`.
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Endpoints of `edge`, or `None` if no such edge exists.
    pub fn endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        self.endpoints.get(edge).copied()
    }

    /// All edges incident to `vertex`, in ascending edge id order.
    ///
    /// Returns an empty slice for an unknown vertex.
    pub fn neighbours(&self, vertex: usize) -> &[Incidence] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edge ends at `vertex`; a self-loop counts twice.
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbours(vertex)
            .iter()
            .map(|inc| if inc.neighbour == vertex { 2 } else { 1 })
            .sum()
    }

    /// Ids of all edges joining `u` and `v`, ascending.
    pub fn edges_between(&self, u: usize, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbours(u)
            .iter()
            .filter(move |inc| inc.neighbour == v)
            .map(|inc| inc.edge)
    }

    /// Returns `true` if at least one edge joins `u` and `v`.
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.edges_between(u, v).next().is_some()
    }

    /// Number of connected components `c`. Isolated vertices each count as
    /// one component; the empty graph has none.
    pub fn component_count(&self) -> usize {
        let mut components = UnionFind::new(self.vertex_count());
        for &(u, v) in &self.endpoints {
            components.union(u, v);
        }
        components.set_count()
    }

    /// The cyclomatic number `m - n + c`: the dimension of the cycle space and
    /// the exact size of every cycle basis.
    pub fn cyclomatic_number(&self) -> usize {
        // m + c >= n always holds: each component of k vertices has >= k - 1 edges
        self.edge_count() + self.component_count() - self.vertex_count()
    }

    /// The underlying petgraph storage.
    pub fn petgraph(&self) -> &UnGraph<(), ()> {
        &self.inner
    }
}
