//! Invariant checkers for computed cycle bases.

use std::collections::{BTreeMap, BTreeSet};

use mcb_core::{Cycle, Graph, HortonCandidates, MinimumCycleBasis};

/// Verifies the structural invariants of `basis` computed for `graph`:
/// - the size equals the cyclomatic number
/// - every cycle is a simple closed walk of `graph`
/// - cycles are in non-decreasing length order
/// - the cycles are linearly independent over GF(2)
pub fn check_basis_invariants(graph: &Graph, basis: &MinimumCycleBasis) -> Result<(), String> {
    if basis.size() != graph.cyclomatic_number() {
        return Err(format!(
            "basis size {} differs from cyclomatic number {}",
            basis.size(),
            graph.cyclomatic_number()
        ));
    }

    let mut rows = EdgeSetRows::default();
    let mut previous = 0;
    for (i, cycle) in basis.cycles().iter().enumerate() {
        Cycle::from_walk(graph, cycle.path().to_vec(), cycle.edges().to_vec())
            .map_err(|e| format!("cycle {i} ({cycle}) is not simple: {e}"))?;
        if cycle.length() < previous {
            return Err(format!(
                "cycle {i} has length {} after a cycle of length {previous}",
                cycle.length()
            ));
        }
        previous = cycle.length();
        if !rows.insert(cycle) {
            return Err(format!("cycle {i} ({cycle}) depends on earlier cycles"));
        }
    }
    Ok(())
}

/// Row-reduced edge sets keyed by their largest edge id.
///
/// A plain set-based elimination, kept apart from the bit-packed one in
/// `mcb-core` so the two can be checked against each other.
#[derive(Debug, Default)]
struct EdgeSetRows {
    rows: BTreeMap<usize, BTreeSet<usize>>,
}

impl EdgeSetRows {
    /// Reduces the edge set of `cycle` against the stored rows and keeps the
    /// remainder. Returns `false` if nothing remains, i.e. the cycle is a sum
    /// of cycles inserted before.
    fn insert(&mut self, cycle: &Cycle) -> bool {
        let mut set: BTreeSet<usize> = cycle.edges().iter().copied().collect();
        while let Some(&pivot) = set.last() {
            match self.rows.get(&pivot) {
                Some(row) => set = set.symmetric_difference(row).copied().collect(),
                None => {
                    self.rows.insert(pivot, set);
                    return true;
                }
            }
        }
        false
    }
}

/// Verifies that `basis` spans every Horton candidate of `graph`, i.e. it is
/// a basis of the whole cycle space.
pub fn check_spans_candidates(graph: &Graph, basis: &MinimumCycleBasis) -> Result<(), String> {
    for candidate in HortonCandidates::new(graph).cycles() {
        if !basis.spans(candidate.edge_vector()) {
            return Err(format!("candidate {candidate} is outside the span"));
        }
    }
    Ok(())
}

/// Verifies the basis weight against a known value.
pub fn check_weight(basis: &MinimumCycleBasis, expected: usize) -> Result<(), String> {
    if basis.weight() == expected {
        Ok(())
    } else {
        Err(format!(
            "basis weight {} differs from expected {expected}",
            basis.weight()
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::generator::polyacene;

    #[test]
    fn naphthalene_passes_all_checks() {
        let g = polyacene(2);
        let basis = MinimumCycleBasis::new(&g).expect("basis");
        check_basis_invariants(&g, &basis).expect("invariants");
        check_spans_candidates(&g, &basis).expect("spans");
        check_weight(&basis, 12).expect("weight");
    }

    #[test]
    fn edge_set_rows_detect_the_dependent_theta_cycle() {
        // theta graph: three paths between 0 and 2
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 3), (3, 2), (0, 2)])
            .expect("theta");
        let left = Cycle::new(&g, vec![0, 1, 2, 0]).expect("left");
        let right = Cycle::new(&g, vec![0, 2, 3, 0]).expect("right");
        let outer = Cycle::new(&g, vec![0, 1, 2, 3, 0]).expect("outer");

        let mut rows = EdgeSetRows::default();
        assert!(rows.insert(&left));
        assert!(rows.insert(&right));
        assert!(!rows.insert(&outer), "outer = left + right");
        assert_eq!(rows.rows.len(), 2);
    }

    #[test]
    fn edge_set_rows_keep_parallel_digons_apart() {
        let g = Graph::from_edges(2, &[(0, 1), (0, 1), (0, 1)]).expect("triple edge");
        let mut rows = EdgeSetRows::default();
        let a = Cycle::from_walk(&g, vec![0, 1, 0], vec![0, 1]).expect("digon 0-1");
        let b = Cycle::from_walk(&g, vec![0, 1, 0], vec![1, 2]).expect("digon 1-2");
        let c = Cycle::from_walk(&g, vec![0, 1, 0], vec![0, 2]).expect("digon 0-2");
        assert!(rows.insert(&a));
        assert!(rows.insert(&b));
        assert!(!rows.insert(&c));
    }

    #[test]
    fn wrong_weight_is_reported() {
        let g = polyacene(1);
        let basis = MinimumCycleBasis::new(&g).expect("basis");
        let err = check_weight(&basis, 5).expect_err("benzene weighs 6");
        assert!(err.contains("differs"), "{err}");
    }
}
