//! # Config Crate
//!
//! Centralized configuration constants for icicle mesh generation.
//! Path resolution, deformation factors, configuration bounds and the
//! default values of every generation setting live here so the geometry
//! crates never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PATH_SEGMENTS, DEFAULT_MIN_RADIUS, RADIUS_RANGE};
//!
//! // Every icicle center-line has PATH_SEGMENTS + 1 samples
//! assert_eq!(PATH_SEGMENTS + 1, 13);
//!
//! // Defaults always sit inside their bounds
//! assert!(RADIUS_RANGE.0 <= DEFAULT_MIN_RADIUS && DEFAULT_MIN_RADIUS <= RADIUS_RANGE.1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Inclusive Bounds**: Every range is `(min, max)` with both ends allowed
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
