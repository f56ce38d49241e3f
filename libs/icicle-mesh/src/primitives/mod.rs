//! # Primitives
//!
//! Mesh generation for icicle bodies.

pub mod icicle;

pub use icicle::{create_icicle, expected_counts, ring_positions, IcicleMesh, RingMesher};
