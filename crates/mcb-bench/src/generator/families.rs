//! Regular graph families with a known minimum cycle basis weight.
//!
//! These are used as fixed-answer inputs: the weight of the basis computed
//! for each family member can be asserted exactly.

use mcb_core::Graph;

use super::skeleton::Skeleton;

/// `n` linearly fused six-membered rings (naphthalene for `n = 2`,
/// anthracene for `n = 3`).
///
/// `4n + 2` vertices, `5n + 1` edges; basis weight `6n`.
pub fn polyacene(n: usize) -> Graph {
    let mut s = Skeleton::new();
    if n == 0 {
        return s.into_graph();
    }
    let first = s.ring(6);
    // each new ring a-f0-f1-f2-f3-b is fused at f1-f2, para to a-b
    let (mut a, mut b) = (first[2], first[3]);
    for _ in 1..n {
        let fresh = s.path_between(a, b, 4);
        (a, b) = (fresh[1], fresh[2]);
    }
    s.into_graph()
}

/// A `w` by `h` lattice of squares.
///
/// `(w + 1)(h + 1)` vertices; basis weight `4wh`.
pub fn grid(w: usize, h: usize) -> Graph {
    let mut s = Skeleton::new();
    let id = |row: usize, col: usize| row * (w + 1) + col;
    for _ in 0..(w + 1) * (h + 1) {
        s.add_vertex();
    }
    for row in 0..=h {
        for col in 0..=w {
            if col < w {
                s.add_edge(id(row, col), id(row, col + 1));
            }
            if row < h {
                s.add_edge(id(row, col), id(row + 1, col));
            }
        }
    }
    s.into_graph()
}

/// Two `k`-rings joined by `k` rungs (cubane for `k = 4`).
///
/// For `k >= 4` the basis is the `k` square faces plus one `k`-ring, weight `5k`.
pub fn prism(k: usize) -> Graph {
    let mut s = Skeleton::new();
    let top = s.ring(k);
    let bottom = s.ring(k);
    for (&u, &v) in top.iter().zip(&bottom) {
        s.add_edge(u, v);
    }
    s.into_graph()
}

/// The complete graph on `n` vertices; basis weight `3(n - 1)(n - 2)/2`.
pub fn complete(n: usize) -> Graph {
    let mut s = Skeleton::new();
    for _ in 0..n {
        s.add_vertex();
    }
    for u in 0..n {
        for v in u + 1..n {
            s.add_edge(u, v);
        }
    }
    s.into_graph()
}
