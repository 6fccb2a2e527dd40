//! Ring-system graph generator.
//!
//! Produces deterministic, connected molecular-like skeletons (fused, spiro,
//! bridged and chain-linked rings with substituents and multiple bonds) for
//! benchmarking and property testing of `mcb-core`.

pub mod families;
pub mod skeleton;

use mcb_core::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use families::{complete, grid, polyacene, prism};
pub use skeleton::Skeleton;

/// Configuration for the ring-system generator.
///
/// Each ring adds exactly one independent cycle and each multiple bond adds
/// one digon, so the generated graph has cyclomatic number
/// `rings + multiple_bonds` and is connected whenever `rings > 0`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of rings.
    pub rings: usize,
    /// Smallest ring size (at least 3).
    pub min_ring_size: usize,
    /// Largest ring size.
    pub max_ring_size: usize,
    /// Fraction of rings fused onto an existing bond.
    pub fused_fraction: f64,
    /// Fraction of rings sharing a single atom with the system.
    pub spiro_fraction: f64,
    /// Fraction of rings closed by a short bridge between two existing atoms.
    pub bridged_fraction: f64,
    /// Number of pendant atoms.
    pub substituents: usize,
    /// Number of extra parallel bonds.
    pub multiple_bonds: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 8 rings, ~40 atoms
    Small,
    /// 40 rings, ~200 atoms
    Medium,
    /// 160 rings, ~800 atoms
    Large,
}

impl SizeTier {
    /// Returns the default [`GeneratorConfig`] for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (rings, substituents, multiple_bonds) = match self {
            SizeTier::Small => (8, 6, 2),
            SizeTier::Medium => (40, 30, 8),
            SizeTier::Large => (160, 120, 30),
        };
        GeneratorConfig {
            seed,
            rings,
            min_ring_size: 3,
            max_ring_size: 8,
            fused_fraction: 0.6,
            spiro_fraction: 0.1,
            bridged_fraction: 0.1,
            substituents,
            multiple_bonds,
        }
    }

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }
}

/// Generates a ring system from `config`.
pub fn generate_ring_system(config: &GeneratorConfig) -> Graph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let min_size = config.min_ring_size.max(3);
    let max_size = config.max_ring_size.max(min_size);
    let mut s = Skeleton::new();

    for ring in 0..config.rings {
        let size = rng.gen_range(min_size..=max_size);
        if ring == 0 {
            s.ring(size);
            continue;
        }

        let roll: f64 = rng.r#gen();
        if roll < config.fused_fraction {
            let edge = rng.gen_range(0..s.edge_count());
            if let Some((u, v)) = s.endpoints(edge) {
                s.path_between(u, v, size - 2);
            }
        } else if roll < config.fused_fraction + config.spiro_fraction {
            let v = rng.gen_range(0..s.vertex_count());
            s.ring_through(v, size);
        } else if roll < config.fused_fraction + config.spiro_fraction + config.bridged_fraction {
            let u = rng.gen_range(0..s.vertex_count());
            let v = (u + rng.gen_range(1..s.vertex_count())) % s.vertex_count();
            let inner = rng.gen_range(1..=3);
            s.path_between(u, v, inner);
        } else {
            let anchor = rng.gen_range(0..s.vertex_count());
            let linker = rng.gen_range(1..=2);
            let mut end = anchor;
            for _ in 0..linker {
                let next = s.add_vertex();
                s.add_edge(end, next);
                end = next;
            }
            s.ring_through(end, size);
        }
    }

    if s.vertex_count() > 0 {
        for _ in 0..config.substituents {
            let v = rng.gen_range(0..s.vertex_count());
            let atom = s.add_vertex();
            s.add_edge(v, atom);
        }
    }

    if s.edge_count() > 0 {
        for _ in 0..config.multiple_bonds {
            let edge = rng.gen_range(0..s.edge_count());
            if let Some((u, v)) = s.endpoints(edge) {
                s.add_edge(u, v);
            }
        }
    }

    s.into_graph()
}
