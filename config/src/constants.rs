//! # Configuration Constants
//!
//! Centralized constants for icicle generation. Path resolution, deformation
//! factors, configuration bounds and default settings are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Path**: Center-line resolution and deformation factors
//! - **Bounds**: Inclusive ranges accepted for each configuration field
//! - **Defaults**: Initial values of every configuration field
//! - **Preview**: Live preview timing

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance on the Z difference of an edge's endpoints.
///
/// Edges whose endpoints differ in Z by more than this are considered
/// non-horizontal by the edge filter.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTICAL_TOLERANCE;
///
/// let dz: f64 = 0.5;
/// assert!(dz.abs() > VERTICAL_TOLERANCE);
/// ```
pub const VERTICAL_TOLERANCE: f64 = 0.01;

// =============================================================================
// PATH CONSTANTS
// =============================================================================

/// Number of segments along an icicle's center-line.
///
/// A path always has `PATH_SEGMENTS + 1` samples, and therefore the same
/// number of rings.
///
/// # Example
///
/// ```rust
/// use config::constants::PATH_SEGMENTS;
///
/// let samples = PATH_SEGMENTS + 1;
/// assert_eq!(samples, 13);
/// ```
pub const PATH_SEGMENTS: usize = 12;

/// Full rotations of the waviness direction from base to tip.
///
/// The jitter direction at parameter `t` is `(cos(2π·WAVE_TURNS·t), sin(..), 0)`.
pub const WAVE_TURNS: f64 = 4.0;

/// Scale applied to the quadratic gravity sag.
///
/// The sag at parameter `t` is `gravity · t² · depth · GRAVITY_SAG_SCALE`.
pub const GRAVITY_SAG_SCALE: f64 = 0.5;

// =============================================================================
// BOUND CONSTANTS
// =============================================================================

/// Inclusive bounds for `min_rad` and `max_rad`.
pub const RADIUS_RANGE: (f64, f64) = (0.01, 10.0);

/// Inclusive bounds for `min_depth` and `max_depth`.
pub const DEPTH_RANGE: (f64, f64) = (0.01, 100.0);

/// Inclusive bounds for the ring vertex count.
///
/// # Example
///
/// ```rust
/// use config::constants::RING_VERTS_RANGE;
///
/// // A ring needs at least 3 vertices to form a polygon
/// assert!(RING_VERTS_RANGE.0 >= 3);
/// ```
pub const RING_VERTS_RANGE: (usize, usize) = (3, 24);

/// Inclusive bounds for the packing iteration cap.
pub const ITERATIONS_RANGE: (u32, u32) = (1, 5000);

/// Inclusive bounds for gravity, wind strength and waviness.
pub const STRENGTH_RANGE: (f64, f64) = (0.0, 1.0);

/// Inclusive bounds for the wind angle in radians.
///
/// Slightly wider than `[-π, π]` so that a rounded `±3.1416` entered by a
/// user is still accepted.
pub const WIND_ANGLE_RANGE: (f64, f64) = (-3.1416, 3.1416);

/// Inclusive bounds for the number of icicles per edge.
pub const ICICLES_PER_EDGE_RANGE: (u32, u32) = (1, 10);

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default minimum base radius.
pub const DEFAULT_MIN_RADIUS: f64 = 0.025;

/// Default maximum base radius.
pub const DEFAULT_MAX_RADIUS: f64 = 0.15;

/// Default minimum depth (length) of an icicle.
pub const DEFAULT_MIN_DEPTH: f64 = 1.5;

/// Default maximum depth (length) of an icicle.
pub const DEFAULT_MAX_DEPTH: f64 = 2.0;

/// Default ring vertex count.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RING_VERTS, RING_VERTS_RANGE};
///
/// let user_verts: Option<usize> = None;
/// let verts = user_verts.unwrap_or(DEFAULT_RING_VERTS);
/// assert!(verts >= RING_VERTS_RANGE.0);
/// ```
pub const DEFAULT_RING_VERTS: usize = 8;

/// Default packing iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Default gravity curve strength.
pub const DEFAULT_GRAVITY: f64 = 0.3;

/// Default wind strength.
pub const DEFAULT_WIND_STRENGTH: f64 = 0.0;

/// Default wind angle (radians, 0 = +X).
pub const DEFAULT_WIND_ANGLE: f64 = 0.0;

/// Default waviness amplitude.
pub const DEFAULT_WAVINESS: f64 = 0.1;

/// Default number of icicles per edge.
pub const DEFAULT_ICICLES_PER_EDGE: u32 = 1;

// =============================================================================
// PREVIEW CONSTANTS
// =============================================================================

/// Redraw interval of the live preview, in milliseconds.
///
/// # Example
///
/// ```rust
/// use config::constants::PREVIEW_REFRESH_MS;
/// use std::time::Duration;
///
/// let interval = Duration::from_millis(PREVIEW_REFRESH_MS);
/// assert!(interval.as_secs_f64() < 1.0);
/// ```
pub const PREVIEW_REFRESH_MS: u64 = 100;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns true if `value` lies inside the inclusive `range`.
///
/// NaN is never in range.
///
/// # Example
///
/// ```rust
/// use config::constants::{in_range, STRENGTH_RANGE};
///
/// assert!(in_range(0.5, STRENGTH_RANGE));
/// assert!(in_range(1.0, STRENGTH_RANGE));
/// assert!(!in_range(1.5, STRENGTH_RANGE));
/// assert!(!in_range(f64::NAN, STRENGTH_RANGE));
/// ```
#[inline]
pub fn in_range<T: PartialOrd>(value: T, range: (T, T)) -> bool {
    value >= range.0 && value <= range.1
}
