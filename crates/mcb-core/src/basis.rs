/// Minimum cycle basis driver.
///
/// [`MinimumCycleBasis`] runs the greedy algorithm over a candidate stream:
///
/// 1. Create a [`GreedyBasis`] sized to the cyclomatic number `m - n + c`.
/// 2. Take candidates in non-decreasing length; keep each one that is
///    independent of the cycles kept so far.
/// 3. Stop as soon as the basis is complete. Remaining candidates are
///    necessarily dependent.
///
/// Because candidates arrive shortest first and the candidate set contains a
/// minimum basis, the first complete independent set found has minimum total
/// length (the cycle space is a matroid, so greedy selection is optimal).
///
/// Construction is eager and all-or-nothing: either a finished basis is
/// returned or a [`BasisError`] explains why none exists. There is no
/// partially built state visible to callers.
use std::fmt;

use crate::candidates::{CandidateSource, HortonCandidates};
use crate::cycle::Cycle;
use crate::edge_vector::EdgeVector;
use crate::graph::Graph;
use crate::greedy::GreedyBasis;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Ways a candidate stream can break its contract, detected while it is
/// consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The stream ended before the basis reached the cyclomatic number.
    Incomplete {
        /// Cycles accepted before the stream ran out.
        found: usize,
        /// The cyclomatic number of the graph.
        required: usize,
    },
    /// A candidate was shorter than the one before it.
    OutOfOrder {
        /// Zero-based position of the offending candidate in the stream.
        position: usize,
        /// Length of the preceding candidate.
        previous: usize,
        /// Length of the offending candidate.
        length: usize,
    },
    /// A candidate is not a cycle of the graph: its edge vector has the wrong
    /// width or one of its steps does not follow an edge of the graph.
    ForeignCycle {
        /// Zero-based position of the offending candidate in the stream.
        position: usize,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::Incomplete { found, required } => {
                write!(
                    f,
                    "candidates exhausted with {found} of {required} basis cycles"
                )
            }
            ContractViolation::OutOfOrder {
                position,
                previous,
                length,
            } => {
                write!(
                    f,
                    "candidate {position} has length {length} after a candidate of length {previous}"
                )
            }
            ContractViolation::ForeignCycle { position } => {
                write!(f, "candidate {position} belongs to a different graph")
            }
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Errors that abort construction of a [`MinimumCycleBasis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasisError {
    /// Neither a graph nor a candidate source was supplied to the builder.
    MissingInput,
    /// The builder was given a graph and a candidate source for a different
    /// graph.
    ConflictingInputs,
    /// The candidate stream broke its contract.
    GeneratorContractViolation(ContractViolation),
}

impl fmt::Display for BasisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisError::MissingInput => f.write_str("no graph or candidate source provided"),
            BasisError::ConflictingInputs => {
                f.write_str("candidate source was built for a different graph")
            }
            BasisError::GeneratorContractViolation(v) => {
                write!(f, "candidate generator contract violated: {v}")
            }
        }
    }
}

impl std::error::Error for BasisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BasisError::GeneratorContractViolation(v) => Some(v),
            BasisError::MissingInput | BasisError::ConflictingInputs => None,
        }
    }
}

impl From<ContractViolation> for BasisError {
    fn from(v: ContractViolation) -> Self {
        BasisError::GeneratorContractViolation(v)
    }
}

// ---------------------------------------------------------------------------
// MinimumCycleBasis
// ---------------------------------------------------------------------------

/// A finished minimum cycle basis.
#[derive(Debug, Clone)]
pub struct MinimumCycleBasis {
    basis: GreedyBasis,
}

impl MinimumCycleBasis {
    /// Computes the minimum cycle basis of `graph` from its Horton
    /// candidates.
    ///
    /// # Errors
    ///
    /// Only a defect in candidate generation can fail here; see
    /// [`MinimumCycleBasis::from_candidates`].
    pub fn new(graph: &Graph) -> Result<Self, BasisError> {
        Self::from_candidates(&HortonCandidates::new(graph))
    }

    /// Computes the minimum cycle basis from a prepared candidate source.
    ///
    /// The source is only borrowed, so the same candidates can feed other
    /// computations afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::GeneratorContractViolation`] if the stream is
    /// out of order, contains a cycle of another graph, or ends before the
    /// basis is complete.
    pub fn from_candidates<S>(source: &S) -> Result<Self, BasisError>
    where
        S: CandidateSource + ?Sized,
    {
        let graph = source.graph();
        let required = graph.cyclomatic_number();
        let mut basis = GreedyBasis::new(required, graph.edge_count());

        let _span = tracing::debug_span!(
            "minimum_cycle_basis",
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            required
        )
        .entered();

        let mut stream = source.candidates();
        let mut previous = 0usize;
        let mut position = 0usize;
        while !basis.is_complete() {
            let Some(cycle) = stream.next() else {
                tracing::warn!(found = basis.len(), required, "candidate stream exhausted");
                return Err(ContractViolation::Incomplete {
                    found: basis.len(),
                    required,
                }
                .into());
            };

            let length = cycle.length();
            if length < previous {
                return Err(ContractViolation::OutOfOrder {
                    position,
                    previous,
                    length,
                }
                .into());
            }
            if !lies_in(graph, &cycle) {
                return Err(ContractViolation::ForeignCycle { position }.into());
            }

            if basis.is_independent(&cycle) {
                tracing::debug!(position, length, cycle = %cycle, "accepted");
                basis.add(cycle);
            } else {
                tracing::trace!(position, length, "rejected as dependent");
            }
            previous = length;
            position += 1;
        }

        tracing::debug!(
            size = basis.len(),
            examined = position,
            "minimum cycle basis complete"
        );
        Ok(Self { basis })
    }

    /// Starts a [`BasisBuilder`].
    pub fn builder<'a>() -> BasisBuilder<'a> {
        BasisBuilder::default()
    }

    /// The vertex paths of the basis cycles, in acceptance (ascending length)
    /// order. Each path is closed: its first and last vertex are equal.
    pub fn paths(&self) -> Vec<Vec<usize>> {
        self.basis
            .members()
            .iter()
            .map(|c| c.path().to_vec())
            .collect()
    }

    /// Number of cycles in the basis; always the cyclomatic number of the
    /// graph.
    pub fn size(&self) -> usize {
        self.basis.len()
    }

    /// The basis cycles in acceptance order.
    pub fn cycles(&self) -> &[Cycle] {
        self.basis.members()
    }

    /// Total length of all basis cycles.
    pub fn weight(&self) -> usize {
        self.basis.members().iter().map(Cycle::length).sum()
    }

    /// The edge-incidence vectors of the basis cycles, in acceptance order.
    pub fn edge_vectors(&self) -> impl Iterator<Item = &EdgeVector> + '_ {
        self.basis.members().iter().map(Cycle::edge_vector)
    }

    /// Returns `true` if `vector` lies in the cycle space spanned by the
    /// basis. Since the basis is complete this holds for the edge vector of
    /// every cycle of the graph, and for their sums.
    pub fn spans(&self, vector: &EdgeVector) -> bool {
        self.basis.spans(vector)
    }

    /// Consumes the basis and returns its cycles in acceptance order.
    pub fn into_cycles(self) -> Vec<Cycle> {
        self.basis.into_members()
    }
}

// ---------------------------------------------------------------------------
// BasisBuilder
// ---------------------------------------------------------------------------

/// Assembles the inputs of a [`MinimumCycleBasis`] computation.
///
/// Supply either a graph (candidates are generated) or a candidate source
/// (its own graph is used). Supplying both is allowed when the source was
/// built for that same graph instance.
#[derive(Default)]
pub struct BasisBuilder<'a> {
    graph: Option<&'a Graph>,
    source: Option<&'a dyn CandidateSource>,
}

impl<'a> BasisBuilder<'a> {
    /// Sets the input graph.
    #[must_use]
    pub fn graph(mut self, graph: &'a Graph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Sets a prepared candidate source.
    #[must_use]
    pub fn candidates(mut self, source: &'a dyn CandidateSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Runs the computation.
    ///
    /// # Errors
    ///
    /// - [`BasisError::MissingInput`] if nothing was supplied.
    /// - [`BasisError::ConflictingInputs`] if the source's graph is not the
    ///   supplied graph.
    /// - Any error of [`MinimumCycleBasis::from_candidates`].
    pub fn build(self) -> Result<MinimumCycleBasis, BasisError> {
        match (self.graph, self.source) {
            (_, Some(source)) => {
                if self
                    .graph
                    .is_some_and(|graph| !std::ptr::eq(graph, source.graph()))
                {
                    return Err(BasisError::ConflictingInputs);
                }
                MinimumCycleBasis::from_candidates(source)
            }
            (Some(graph), None) => MinimumCycleBasis::new(graph),
            (None, None) => Err(BasisError::MissingInput),
        }
    }
}

impl fmt::Debug for BasisBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasisBuilder")
            .field("graph", &self.graph.is_some())
            .field("source", &self.source.is_some())
            .finish()
    }
}

/// Whether every step of `cycle` walks an edge of `graph`.
fn lies_in(graph: &Graph, cycle: &Cycle) -> bool {
    cycle.edge_vector().len() == graph.edge_count()
        && cycle
            .edges()
            .iter()
            .zip(cycle.path().windows(2))
            .all(|(&edge, pair)| {
                graph.endpoints(edge).is_some_and(|(u, v)| {
                    (u, v) == (pair[0], pair[1]) || (v, u) == (pair[0], pair[1])
                })
            })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
