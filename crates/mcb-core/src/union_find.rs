//! Union-Find (disjoint set) structure used to count connected components.
//!
//! Path compression uses iterative path-halving: during [`UnionFind::find`]
//! each visited vertex is pointed directly at its grandparent. Union-by-rank
//! keeps the trees shallow. The structure also keeps a running count of
//! disjoint sets so the component count of a graph is available in `O(1)`
//! after all edges have been merged.

/// A union-find (disjoint set) structure with path-halving and union-by-rank.
///
/// Elements are the `usize` ordinals `[0, n)` supplied at construction time,
/// which for [`crate::Graph`] are exactly the vertex ids.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            sets: n,
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Indexing panics if `x >= n`; callers pass vertex ids already checked
    /// against the graph order.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were joined, `false` if `a` and
    /// `b` were already connected. In graph terms a `false` return means the
    /// edge `{a, b}` closes a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => {
                self.parent[ra] = rb;
            }
            std::cmp::Ordering::Greater => {
                self.parent[rb] = ra;
            }
            std::cmp::Ordering::Equal => {
                if ra < rb {
                    self.parent[rb] = ra;
                    self.rank[ra] += 1;
                } else {
                    self.parent[ra] = rb;
                    self.rank[rb] += 1;
                }
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns the number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.set_count(), 5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i, "element {i} should be its own representative");
        }
    }

    #[test]
    fn union_reports_whether_sets_were_joined() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2), "0 and 2 are already connected through 1");
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn union_does_not_affect_others() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        assert_ne!(uf.find(0), uf.find(2));
        assert_ne!(uf.find(2), uf.find(3));
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn self_union_is_a_no_op() {
        let mut uf = UnionFind::new(2);
        assert!(!uf.union(1, 1));
        assert_eq!(uf.set_count(), 2);
    }

    #[test]
    fn lower_ordinal_wins_on_rank_tie() {
        let mut uf = UnionFind::new(5);
        uf.union(3, 1);
        assert_eq!(uf.find(3), 1);
    }

    #[test]
    fn len_and_is_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.set_count(), 0);

        let uf = UnionFind::new(3);
        assert!(!uf.is_empty());
        assert_eq!(uf.len(), 3);
    }

    #[test]
    fn large_component_merge() {
        const N: usize = 64;
        let mut uf = UnionFind::new(N);
        for i in 1..N {
            uf.union(0, i);
        }
        let root = uf.find(0);
        for i in 0..N {
            assert_eq!(uf.find(i), root, "element {i} should share the root");
        }
        assert_eq!(uf.set_count(), 1);
    }
}
