//! Candidate cycle sources for the greedy basis driver.
//!
//! The driver in [`crate::basis`] never enumerates cycles itself. It consumes
//! any [`CandidateSource`]: something that knows its [`Graph`] and can produce
//! that graph's candidate cycles as a stream.
//!
//! # Contract
//!
//! Every implementation must guarantee, for each call to
//! [`CandidateSource::candidates`]:
//!
//! 1. **Completeness**: some minimum cycle basis of the graph is a subset of
//!    the produced cycles.
//! 2. **Ordering**: cycles arrive in non-decreasing length.
//! 3. **Validity**: every cycle is a simple cycle of [`CandidateSource::graph`].
//!
//! The stream must also be restartable: each call yields the full sequence
//! from the beginning, so one source can feed several computations.
//!
//! # Implementations
//!
//! - [`HortonCandidates`]: shortest-path (Horton) cycles computed from the
//!   graph. Used by [`crate::MinimumCycleBasis::new`].
//! - [`PrecomputedCandidates`]: cycles supplied by the caller.

pub mod horton;
pub mod precomputed;

pub use horton::HortonCandidates;
pub use precomputed::{CandidateError, PrecomputedCandidates};

use crate::cycle::Cycle;
use crate::graph::Graph;

/// A stream of owned candidate cycles borrowed from its source.
pub type Candidates<'a> = Box<dyn Iterator<Item = Cycle> + 'a>;

/// Produces the ordered candidate cycles of one graph.
pub trait CandidateSource {
    /// The graph every produced cycle belongs to.
    fn graph(&self) -> &Graph;

    /// A fresh stream over all candidates, in non-decreasing length.
    fn candidates(&self) -> Candidates<'_>;
}

