#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Minimum cycle basis computation for undirected graphs.
//!
//! The minimum cycle basis (MCB) of a graph is a set of simple cycles that
//! is linearly independent over GF(2), spans the whole cycle space and has
//! the smallest possible total length. For molecular graphs it is the
//! "smallest set of smallest rings".
//!
//! ```
//! use mcb_core::{Graph, MinimumCycleBasis};
//!
//! // naphthalene: two six-membered rings sharing the bond 4-5
//! let graph = Graph::from_edges(
//!     10,
//!     &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0),
//!       (4, 6), (6, 7), (7, 8), (8, 9), (9, 5)],
//! )?;
//! let mcb = MinimumCycleBasis::new(&graph)?;
//! assert_eq!(mcb.size(), 2);
//! assert_eq!(mcb.weight(), 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod basis;
pub mod candidates;
pub mod cycle;
pub mod edge_vector;
pub mod graph;
pub mod greedy;
pub mod union_find;

pub use basis::{BasisBuilder, BasisError, ContractViolation, MinimumCycleBasis};
pub use candidates::{
    CandidateError, CandidateSource, Candidates, HortonCandidates, PrecomputedCandidates,
};
pub use cycle::{Cycle, InvalidCycleError};
pub use edge_vector::EdgeVector;
pub use graph::{Graph, GraphBuildError, Incidence};
pub use greedy::GreedyBasis;
pub use union_find::UnionFind;

/// Returns the current version of the mcb-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
