//! Incremental GF(2) basis of cycle edge-vectors.
//!
//! [`GreedyBasis`] accepts cycles one at a time and keeps them linearly
//! independent over GF(2). Alongside the accepted cycles it maintains an
//! echelon form of their edge-vectors:
//!
//! - every row is the reduced edge-vector of one accepted cycle;
//! - a row's *pivot* is its highest set bit, and pivots are pairwise distinct;
//! - rows are kept sorted by pivot, highest first.
//!
//! Testing a candidate is a single pass over the rows: whenever the running
//! residual has a row's pivot set, that row is XORed in. Rows further down
//! only touch bits below their own pivot, so a cleared pivot bit stays
//! cleared, and the candidate is independent exactly when a nonzero residual
//! survives the pass. The nonzero residual is itself the new row.
//!
//! Before eliminating, the candidate is compared with the union of all edges
//! already used by accepted cycles. A cycle that uses any edge outside that
//! union cannot lie in their span, which settles most candidates of sparse
//! ring systems without touching the rows.
use crate::cycle::Cycle;
use crate::edge_vector::EdgeVector;

/// One echelon row: a reduced edge-vector and its highest set bit.
#[derive(Debug, Clone)]
struct Row {
    pivot: usize,
    bits: EdgeVector,
}

/// A growing, linearly independent set of cycles with a fixed capacity.
///
/// The capacity is the dimension of the cycle space (`m - n + c`), which is
/// the size of every complete basis. There is no removal: the basis only
/// grows, in the order cycles are added.
#[derive(Debug, Clone)]
pub struct GreedyBasis {
    capacity: usize,
    members: Vec<Cycle>,
    rows: Vec<Row>,
    covered: EdgeVector,
}

impl GreedyBasis {
    /// Creates an empty basis for a graph with `edge_count` edges whose cycle
    /// space has dimension `capacity`.
    pub fn new(capacity: usize, edge_count: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
            rows: Vec::with_capacity(capacity),
            covered: EdgeVector::zeros(edge_count),
        }
    }

    /// Returns `true` if `cycle` is not in the span of the accepted cycles.
    ///
    /// Pure query; the basis is not modified.
    ///
    /// # Panics
    ///
    /// Panics if the cycle belongs to a graph with a different edge count.
    pub fn is_independent(&self, cycle: &Cycle) -> bool {
        !self.spans(cycle.edge_vector())
    }

    /// Returns `true` if `vector` is a GF(2) sum of accepted edge-vectors.
    /// The zero vector is always spanned.
    ///
    /// # Panics
    ///
    /// Panics if `vector` has a different width from the basis.
    pub fn spans(&self, vector: &EdgeVector) -> bool {
        if !vector.is_subset_of(&self.covered) {
            return false;
        }
        self.reduce(vector).is_none()
    }

    /// Appends `cycle` to the basis.
    ///
    /// # Panics
    ///
    /// Adding a cycle that is not independent, or adding beyond the capacity,
    /// violates the contract of this type and panics.
    pub fn add(&mut self, cycle: Cycle) {
        assert!(
            self.members.len() < self.capacity,
            "basis already holds its {} cycles",
            self.capacity
        );
        let row = self.reduce(cycle.edge_vector());
        assert!(
            row.is_some(),
            "cycle {cycle} is dependent on the current basis"
        );
        if let Some(row) = row {
            let at = self.rows.partition_point(|r| r.pivot > row.pivot);
            self.rows.insert(at, row);
        }
        self.covered.union_with(cycle.edge_vector());
        self.members.push(cycle);
    }

    /// The accepted cycles in insertion order.
    pub fn members(&self) -> &[Cycle] {
        &self.members
    }

    /// Consumes the basis and returns the accepted cycles in insertion order.
    pub fn into_members(self) -> Vec<Cycle> {
        self.members
    }

    /// Number of accepted cycles.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no cycle has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The dimension of the cycle space this basis is being built for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once the basis holds `capacity` cycles and therefore
    /// spans the whole cycle space.
    pub fn is_complete(&self) -> bool {
        self.members.len() == self.capacity
    }

    /// Eliminates `vector` against the rows; returns the new row if a nonzero
    /// residual remains.
    fn reduce(&self, vector: &EdgeVector) -> Option<Row> {
        let mut residual = vector.clone();
        for row in &self.rows {
            if residual.contains(row.pivot) {
                residual ^= &row.bits;
            }
        }
        residual
            .highest_set_bit()
            .map(|pivot| Row { pivot, bits: residual })
    }
}
