//! Ring-system generators and benchmark utilities for `mcb-core`.
//!
//! This crate provides deterministic graph families for benchmarking and for
//! correctness testing of minimum cycle basis computation.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, Skeleton, generate_ring_system};
