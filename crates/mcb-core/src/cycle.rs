//! Simple cycles and their edge-incidence vectors.
//!
//! A [`Cycle`] is validated against a [`Graph`] once, at construction, and is
//! immutable afterwards. It carries three views of the same loop:
//!
//! - the closed vertex path (`first == last`),
//! - the edge id used by each step of the path,
//! - the [`EdgeVector`] with exactly those edges set.
//!
//! Keeping the explicit edge list makes cycles over parallel edges
//! (`[u, v, u]`) and self-loops (`[v, v]`) unambiguous.
use std::fmt;

use crate::edge_vector::EdgeVector;
use crate::graph::Graph;

/// Reasons a vertex path (or path plus edges) is not a simple cycle of the
/// graph it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidCycleError {
    /// The path has fewer than two entries, so it has no edge.
    TooShort {
        /// Number of entries in the supplied path.
        len: usize,
    },
    /// The last vertex differs from the first.
    NotClosed {
        /// First vertex of the path.
        first: usize,
        /// Last vertex of the path.
        last: usize,
    },
    /// A vertex id is not part of the graph.
    UnknownVertex(usize),
    /// A vertex other than the closing one appears twice.
    RepeatedVertex(usize),
    /// Two consecutive path vertices are not joined by any edge.
    NotAdjacent {
        /// Vertex at the start of the step.
        from: usize,
        /// Vertex at the end of the step.
        to: usize,
    },
    /// An explicit edge does not join the two vertices of its step.
    EdgeMismatch {
        /// Zero-based step index along the path.
        step: usize,
        /// The edge id supplied for that step.
        edge: usize,
    },
    /// The cycle would traverse the same edge twice.
    RepeatedEdge(usize),
    /// The number of explicit edges is not `path.len() - 1`.
    StepCountMismatch {
        /// Number of steps in the path.
        steps: usize,
        /// Number of edges supplied.
        edges: usize,
    },
}

impl fmt::Display for InvalidCycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCycleError::TooShort { len } => {
                write!(f, "cycle path has {len} vertices, at least 2 are required")
            }
            InvalidCycleError::NotClosed { first, last } => {
                write!(f, "cycle path starts at {first} but ends at {last}")
            }
            InvalidCycleError::UnknownVertex(v) => write!(f, "unknown vertex {v}"),
            InvalidCycleError::RepeatedVertex(v) => {
                write!(f, "vertex {v} is visited more than once")
            }
            InvalidCycleError::NotAdjacent { from, to } => {
                write!(f, "no edge joins {from} and {to}")
            }
            InvalidCycleError::EdgeMismatch { step, edge } => {
                write!(f, "edge {edge} does not join the vertices of step {step}")
            }
            InvalidCycleError::RepeatedEdge(e) => {
                write!(f, "edge {e} is traversed more than once")
            }
            InvalidCycleError::StepCountMismatch { steps, edges } => {
                write!(f, "path has {steps} steps but {edges} edges were supplied")
            }
        }
    }
}

impl std::error::Error for InvalidCycleError {}

/// A simple cycle of a [`Graph`].
///
/// Invariants, established by the constructors:
///
/// - `path.len() >= 2` and `path.first() == path.last()`;
/// - no vertex repeats except the closing one;
/// - `edges[i]` joins `path[i]` and `path[i + 1]`, and all edges are distinct;
/// - `edge_vector().count_ones() == length() == edges.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    path: Vec<usize>,
    edges: Vec<usize>,
    edge_vector: EdgeVector,
}

impl Cycle {
    /// Builds a cycle from a closed vertex path.
    ///
    /// Each step is mapped to the lowest-numbered edge joining its two
    /// vertices that this cycle has not used yet, so `[u, v, u]` selects two
    /// distinct parallel edges and `[v, v]` selects a self-loop.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidCycleError`] if the path is not closed, repeats a
    /// vertex, leaves the graph, or steps between non-adjacent vertices.
    pub fn new(graph: &Graph, path: Vec<usize>) -> Result<Self, InvalidCycleError> {
        check_path(graph, &path)?;

        let mut edge_vector = EdgeVector::zeros(graph.edge_count());
        let mut edges = Vec::with_capacity(path.len() - 1);
        for step in path.windows(2) {
            let (from, to) = (step[0], step[1]);
            let mut joining = graph.edges_between(from, to).peekable();
            let first_joining = joining.peek().copied();
            let edge = joining
                .find(|&e| !edge_vector.contains(e))
                .ok_or_else(|| match first_joining {
                    Some(used) => InvalidCycleError::RepeatedEdge(used),
                    None => InvalidCycleError::NotAdjacent { from, to },
                })?;
            edge_vector.set(edge);
            edges.push(edge);
        }

        Ok(Self {
            path,
            edges,
            edge_vector,
        })
    }

    /// Builds a cycle from a closed vertex path and the edge taken by each
    /// step.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidCycleError`] if the path is not a closed simple
    /// loop, if `edges.len() != path.len() - 1`, if an edge does not join the
    /// vertices of its step, or if an edge is used twice.
    pub fn from_walk(
        graph: &Graph,
        path: Vec<usize>,
        edges: Vec<usize>,
    ) -> Result<Self, InvalidCycleError> {
        check_path(graph, &path)?;

        let steps = path.len() - 1;
        if edges.len() != steps {
            return Err(InvalidCycleError::StepCountMismatch {
                steps,
                edges: edges.len(),
            });
        }

        let mut edge_vector = EdgeVector::zeros(graph.edge_count());
        for (step, (&edge, pair)) in edges.iter().zip(path.windows(2)).enumerate() {
            let joins = graph
                .endpoints(edge)
                .is_some_and(|(u, v)| (u, v) == (pair[0], pair[1]) || (v, u) == (pair[0], pair[1]));
            if !joins {
                return Err(InvalidCycleError::EdgeMismatch { step, edge });
            }
            if edge_vector.contains(edge) {
                return Err(InvalidCycleError::RepeatedEdge(edge));
            }
            edge_vector.set(edge);
        }

        Ok(Self {
            path,
            edges,
            edge_vector,
        })
    }

    /// The closed vertex path; the first and last entries are equal.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The distinct vertices of the cycle in path order (the path without its
    /// closing vertex).
    pub fn vertices(&self) -> &[usize] {
        &self.path[..self.path.len() - 1]
    }

    /// The edge id used by each step of the path.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// The incidence vector over the graph's edge ids.
    pub fn edge_vector(&self) -> &EdgeVector {
        &self.edge_vector
    }

    /// Number of edges in the cycle (its weight).
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if `vertex` lies on the cycle.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.vertices().contains(&vertex)
    }

    /// Consumes the cycle and returns its closed vertex path.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}

impl fmt::Display for Cycle {
    /// Renders the path as `0-1-2-0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Checks the vertex-level invariants shared by both constructors.
fn check_path(graph: &Graph, path: &[usize]) -> Result<(), InvalidCycleError> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(&first), Some(&last)) if path.len() >= 2 => (first, last),
        _ => return Err(InvalidCycleError::TooShort { len: path.len() }),
    };
    if first != last {
        return Err(InvalidCycleError::NotClosed { first, last });
    }

    let mut seen = vec![false; graph.vertex_count()];
    for &v in &path[..path.len() - 1] {
        let slot = seen.get_mut(v).ok_or(InvalidCycleError::UnknownVertex(v))?;
        if *slot {
            return Err(InvalidCycleError::RepeatedVertex(v));
        }
        *slot = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn square() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("square")
    }

    #[test]
    fn new_resolves_edges_along_the_path() {
        let g = square();
        let c = Cycle::new(&g, vec![0, 1, 2, 3, 0]).expect("valid cycle");
        assert_eq!(c.length(), 4);
        assert_eq!(c.edges(), &[0, 1, 2, 3]);
        assert_eq!(c.edge_vector().count_ones(), c.length());
        assert_eq!(c.vertices(), &[0, 1, 2, 3]);
        assert!(c.contains_vertex(2));
        assert!(!c.contains_vertex(7));
    }

    #[test]
    fn reversed_path_has_same_edge_vector() {
        let g = square();
        let a = Cycle::new(&g, vec![0, 1, 2, 3, 0]).expect("forward");
        let b = Cycle::new(&g, vec![2, 1, 0, 3, 2]).expect("backward");
        assert_eq!(a.edge_vector(), b.edge_vector());
        assert_ne!(a, b, "paths differ so the cycles are distinct values");
    }

    #[test]
    fn open_path_is_rejected() {
        let g = square();
        let err = Cycle::new(&g, vec![0, 1, 2]).expect_err("not closed");
        assert_eq!(err, InvalidCycleError::NotClosed { first: 0, last: 2 });
    }

    #[test]
    fn short_paths_are_rejected() {
        let g = square();
        assert_eq!(
            Cycle::new(&g, vec![]).expect_err("empty"),
            InvalidCycleError::TooShort { len: 0 }
        );
        assert_eq!(
            Cycle::new(&g, vec![1]).expect_err("single vertex"),
            InvalidCycleError::TooShort { len: 1 }
        );
    }

    #[test]
    fn non_adjacent_step_is_rejected() {
        let g = square();
        let err = Cycle::new(&g, vec![0, 2, 3, 0]).expect_err("0 and 2 are not adjacent");
        assert_eq!(err, InvalidCycleError::NotAdjacent { from: 0, to: 2 });
    }

    #[test]
    fn repeated_internal_vertex_is_rejected() {
        let g = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)])
            .expect("bowtie");
        let err = Cycle::new(&g, vec![0, 1, 2, 0, 3, 4, 0]).expect_err("figure eight");
        assert_eq!(err, InvalidCycleError::RepeatedVertex(0));
    }

    #[test]
    fn unknown_vertex_is_rejected() {
        let g = square();
        let err = Cycle::new(&g, vec![0, 9, 0]).expect_err("vertex 9");
        assert_eq!(err, InvalidCycleError::UnknownVertex(9));
    }

    #[test]
    fn back_and_forth_over_single_edge_is_rejected() {
        let g = square();
        let err = Cycle::new(&g, vec![0, 1, 0]).expect_err("needs two edges");
        assert_eq!(err, InvalidCycleError::RepeatedEdge(0));
    }

    #[test]
    fn digon_uses_two_parallel_edges() {
        let g = Graph::from_edges(2, &[(0, 1), (0, 1)]).expect("double edge");
        let c = Cycle::new(&g, vec![0, 1, 0]).expect("digon");
        assert_eq!(c.edges(), &[0, 1]);
        assert_eq!(c.length(), 2);
    }

    #[test]
    fn self_loop_cycle_has_length_one() {
        let g = Graph::from_edges(2, &[(0, 1), (1, 1)]).expect("loop");
        let c = Cycle::new(&g, vec![1, 1]).expect("loop cycle");
        assert_eq!(c.length(), 1);
        assert_eq!(c.edges(), &[1]);
        assert_eq!(c.vertices(), &[1]);
    }

    #[test]
    fn from_walk_respects_explicit_edges() {
        let g = Graph::from_edges(2, &[(0, 1), (0, 1), (0, 1)]).expect("triple edge");
        let c = Cycle::from_walk(&g, vec![0, 1, 0], vec![2, 0]).expect("digon on edges 2, 0");
        assert_eq!(c.edges(), &[2, 0]);
        assert_eq!(c.edge_vector().ones().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn from_walk_rejects_wrong_edge() {
        let g = square();
        let err = Cycle::from_walk(&g, vec![0, 1, 2, 3, 0], vec![0, 2, 2, 3])
            .expect_err("edge 2 does not join 1 and 2");
        assert_eq!(err, InvalidCycleError::EdgeMismatch { step: 1, edge: 2 });
    }

    #[test]
    fn from_walk_rejects_unknown_edge() {
        let g = square();
        let err =
            Cycle::from_walk(&g, vec![0, 1, 2, 3, 0], vec![0, 1, 2, 40]).expect_err("edge 40");
        assert_eq!(err, InvalidCycleError::EdgeMismatch { step: 3, edge: 40 });
    }

    #[test]
    fn from_walk_rejects_reused_edge() {
        let g = Graph::from_edges(2, &[(0, 1)]).expect("single edge");
        let err = Cycle::from_walk(&g, vec![0, 1, 0], vec![0, 0]).expect_err("edge reused");
        assert_eq!(err, InvalidCycleError::RepeatedEdge(0));
    }

    #[test]
    fn from_walk_rejects_step_count_mismatch() {
        let g = square();
        let err = Cycle::from_walk(&g, vec![0, 1, 2, 3, 0], vec![0, 1]).expect_err("two edges");
        assert_eq!(err, InvalidCycleError::StepCountMismatch { steps: 4, edges: 2 });
    }

    #[test]
    fn display_joins_path_with_dashes() {
        let g = square();
        let c = Cycle::new(&g, vec![3, 0, 1, 2, 3]).expect("valid");
        assert_eq!(c.to_string(), "3-0-1-2-3");
        assert_eq!(c.into_path(), vec![3, 0, 1, 2, 3]);
    }
}
