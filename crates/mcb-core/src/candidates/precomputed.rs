//! Caller-supplied candidate cycles.
use std::fmt;

use crate::candidates::{CandidateSource, Candidates};
use crate::cycle::{Cycle, InvalidCycleError};
use crate::graph::Graph;

/// Errors raised while assembling a [`PrecomputedCandidates`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    /// The candidate at `index` is not a simple cycle of the target graph.
    InvalidCandidate {
        /// Position of the candidate in the supplied list.
        index: usize,
        /// Why it was rejected.
        source: InvalidCycleError,
    },
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateError::InvalidCandidate { index, source } => {
                write!(f, "candidate {index} is not a cycle of the graph: {source}")
            }
        }
    }
}

impl std::error::Error for CandidateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateError::InvalidCandidate { source, .. } => Some(source),
        }
    }
}

/// A fixed candidate list for one graph.
///
/// The list is stably sorted by length on construction, so callers may pass
/// cycles in any order. Every cycle is re-validated against the graph: a
/// cycle built for another graph is rejected rather than silently mixed into
/// a foreign edge space.
#[derive(Debug, Clone)]
pub struct PrecomputedCandidates<'g> {
    graph: &'g Graph,
    cycles: Vec<Cycle>,
}

impl<'g> PrecomputedCandidates<'g> {
    /// Wraps already-built cycles.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateError::InvalidCandidate`] for the first cycle whose
    /// path and edges do not form a simple cycle of `graph`.
    pub fn new(graph: &'g Graph, cycles: Vec<Cycle>) -> Result<Self, CandidateError> {
        let cycles = cycles
            .into_iter()
            .enumerate()
            .map(|(index, cycle)| {
                Cycle::from_walk(graph, cycle.path().to_vec(), cycle.edges().to_vec())
                    .map_err(|source| CandidateError::InvalidCandidate { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::sorted(graph, cycles))
    }

    /// Builds candidates from closed vertex paths, see [`Cycle::new`].
    ///
    /// # Errors
    ///
    /// Returns [`CandidateError::InvalidCandidate`] for the first path that is
    /// not a simple cycle of `graph`.
    pub fn from_paths(graph: &'g Graph, paths: Vec<Vec<usize>>) -> Result<Self, CandidateError> {
        let cycles = paths
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                Cycle::new(graph, path)
                    .map_err(|source| CandidateError::InvalidCandidate { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::sorted(graph, cycles))
    }

    fn sorted(graph: &'g Graph, mut cycles: Vec<Cycle>) -> Self {
        cycles.sort_by_key(Cycle::length);
        Self { graph, cycles }
    }

    /// The candidates in stream order.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Returns `true` if no candidate was supplied.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

impl CandidateSource for PrecomputedCandidates<'_> {
    fn graph(&self) -> &Graph {
        self.graph
    }

    fn candidates(&self) -> Candidates<'_> {
        Box::new(self.cycles.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn domino() -> Graph {
        Graph::from_edges(
            6,
            &[(0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 4), (4, 5)],
        )
        .expect("domino")
    }

    #[test]
    fn from_paths_sorts_stably_by_length() {
        let g = domino();
        let pc = PrecomputedCandidates::from_paths(
            &g,
            vec![
                vec![0, 1, 2, 5, 4, 3, 0],
                vec![1, 2, 5, 4, 1],
                vec![0, 1, 4, 3, 0],
            ],
        )
        .expect("valid paths");
        let paths: Vec<&[usize]> = pc.cycles().iter().map(Cycle::path).collect();
        assert_eq!(
            paths,
            vec![
                &[1, 2, 5, 4, 1][..],
                &[0, 1, 4, 3, 0][..],
                &[0, 1, 2, 5, 4, 3, 0][..]
            ]
        );
    }

    #[test]
    fn from_paths_reports_index_of_bad_path() {
        let g = domino();
        let err = PrecomputedCandidates::from_paths(&g, vec![vec![0, 1, 4, 3, 0], vec![0, 2, 0]])
            .expect_err("0 and 2 are not adjacent");
        assert_eq!(
            err,
            CandidateError::InvalidCandidate {
                index: 1,
                source: InvalidCycleError::NotAdjacent { from: 0, to: 2 }
            }
        );
        assert!(err.to_string().starts_with("candidate 1 is not a cycle"));
    }

    #[test]
    fn cycles_from_another_graph_are_rejected() {
        let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).expect("triangle");
        let foreign = Cycle::new(&triangle, vec![0, 1, 2, 0]).expect("triangle cycle");

        let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("path graph");
        let err = PrecomputedCandidates::new(&path, vec![foreign]).expect_err("foreign cycle");
        assert!(matches!(err, CandidateError::InvalidCandidate { index: 0, .. }));
    }

    #[test]
    fn cycles_are_rebuilt_in_the_target_edge_space() {
        let small = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).expect("triangle");
        let c = Cycle::new(&small, vec![0, 1, 2, 0]).expect("triangle cycle");

        // same first three edges plus a pendant edge
        let big = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).expect("bigger");
        let pc = PrecomputedCandidates::new(&big, vec![c]).expect("edges exist in big");
        assert_eq!(pc.cycles()[0].edge_vector().len(), big.edge_count());
    }

    #[test]
    fn empty_candidate_list() {
        let g = domino();
        let pc = PrecomputedCandidates::new(&g, Vec::new()).expect("empty is fine");
        assert!(pc.is_empty());
        assert_eq!(pc.candidates().count(), 0);
    }
}
