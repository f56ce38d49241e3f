//! # Generation Settings
//!
//! The immutable value bundle every generation stage reads from.
//!
//! The host's configuration surface populates an [`IcicleSettings`] before
//! each run. Stages never mutate it; the orchestrator checks it once with
//! [`IcicleSettings::validate`].

use crate::edge::EdgeFilter;
use crate::error::SettingsError;
use config::constants::{
    in_range, DEFAULT_GRAVITY, DEFAULT_ICICLES_PER_EDGE, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_RADIUS, DEFAULT_MIN_DEPTH, DEFAULT_MIN_RADIUS,
    DEFAULT_RING_VERTS, DEFAULT_WAVINESS, DEFAULT_WIND_ANGLE, DEFAULT_WIND_STRENGTH,
    DEPTH_RANGE, ICICLES_PER_EDGE_RANGE, ITERATIONS_RANGE, RADIUS_RANGE, RING_VERTS_RANGE,
    STRENGTH_RANGE, WIND_ANGLE_RANGE,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Which way icicles grow from their base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Grow along +Z
    Up,
    /// Grow along -Z
    #[default]
    Down,
}

impl Direction {
    /// Unit vector the icicle grows along.
    pub fn axis(self) -> DVec3 {
        match self {
            Direction::Up => DVec3::Z,
            Direction::Down => DVec3::NEG_Z,
        }
    }
}

/// How the open base ring is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapStyle {
    /// One n-sided face across the base ring
    #[default]
    Ngon,
    /// Leave the base open
    None,
    /// `n` triangles from the base ring to its centroid
    TriangleFan,
}

/// Which selected edges a run processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyScope {
    /// Every selected edge
    #[default]
    AllSelected,
    /// Only the active edge, and only if it is also selected
    ActiveOnly,
}

/// How instances are distributed along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// `icicles_per_edge` independent uniform samples, overlap allowed
    #[default]
    Scatter,
    /// Non-overlapping tiling that never reserves more than the edge length
    Packed,
}

/// Configuration for one generation run.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::settings::{CapStyle, Direction, IcicleSettings};
///
/// let settings = IcicleSettings::default()
///     .with_radius(0.1, 0.1)
///     .with_depth(1.0, 1.0)
///     .with_direction(Direction::Down)
///     .with_cap(CapStyle::TriangleFan);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcicleSettings {
    /// Minimum base radius
    pub min_rad: f64,
    /// Maximum base radius
    pub max_rad: f64,
    /// Minimum length
    pub min_depth: f64,
    /// Maximum length
    pub max_depth: f64,
    /// Vertices per ring
    pub num_verts: usize,
    /// Consecutive non-placing attempts before packing gives up on an edge
    pub max_its: u32,
    /// Remove everything outside the base selection before generating
    pub delete_previous: bool,
    /// Base cap style
    pub cap: CapStyle,
    /// Growth direction
    pub direction: Direction,
    /// Strength of the quadratic downward sag
    pub gravity_curve: f64,
    /// Strength of the linear wind bend
    pub wind_strength: f64,
    /// Wind heading in radians, 0 = +X, π/2 = +Y
    pub wind_angle: f64,
    /// Amplitude of the rotating lateral jitter
    pub waviness: f64,
    /// Instances per edge in scatter mode
    pub icicles_per_edge: u32,
    /// Edge scope
    pub apply_to: ApplyScope,
    /// Instance distribution
    pub placement: PlacementMode,
    /// Optional edge rejection policy
    pub edge_filter: EdgeFilter,
}

impl Default for IcicleSettings {
    fn default() -> Self {
        Self {
            min_rad: DEFAULT_MIN_RADIUS,
            max_rad: DEFAULT_MAX_RADIUS,
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            num_verts: DEFAULT_RING_VERTS,
            max_its: DEFAULT_MAX_ITERATIONS,
            delete_previous: false,
            cap: CapStyle::default(),
            direction: Direction::default(),
            gravity_curve: DEFAULT_GRAVITY,
            wind_strength: DEFAULT_WIND_STRENGTH,
            wind_angle: DEFAULT_WIND_ANGLE,
            waviness: DEFAULT_WAVINESS,
            icicles_per_edge: DEFAULT_ICICLES_PER_EDGE,
            apply_to: ApplyScope::default(),
            placement: PlacementMode::default(),
            edge_filter: EdgeFilter::default(),
        }
    }
}

impl IcicleSettings {
    /// Sets the base radius bounds.
    #[must_use]
    pub fn with_radius(mut self, min: f64, max: f64) -> Self {
        self.min_rad = min;
        self.max_rad = max;
        self
    }

    /// Sets the depth bounds.
    #[must_use]
    pub fn with_depth(mut self, min: f64, max: f64) -> Self {
        self.min_depth = min;
        self.max_depth = max;
        self
    }

    /// Sets the ring vertex count.
    #[must_use]
    pub fn with_ring_verts(mut self, num_verts: usize) -> Self {
        self.num_verts = num_verts;
        self
    }

    /// Sets the packing iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_its: u32) -> Self {
        self.max_its = max_its;
        self
    }

    /// Sets whether prior generations are deleted first.
    #[must_use]
    pub fn with_delete_previous(mut self, delete_previous: bool) -> Self {
        self.delete_previous = delete_previous;
        self
    }

    /// Sets the base cap style.
    #[must_use]
    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the growth direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the gravity curve strength.
    #[must_use]
    pub fn with_gravity(mut self, gravity_curve: f64) -> Self {
        self.gravity_curve = gravity_curve;
        self
    }

    /// Sets wind strength and heading.
    #[must_use]
    pub fn with_wind(mut self, strength: f64, angle: f64) -> Self {
        self.wind_strength = strength;
        self.wind_angle = angle;
        self
    }

    /// Sets the waviness amplitude.
    #[must_use]
    pub fn with_waviness(mut self, waviness: f64) -> Self {
        self.waviness = waviness;
        self
    }

    /// Sets the scatter instance count.
    #[must_use]
    pub fn with_icicles_per_edge(mut self, count: u32) -> Self {
        self.icicles_per_edge = count;
        self
    }

    /// Sets the edge scope.
    #[must_use]
    pub fn with_scope(mut self, apply_to: ApplyScope) -> Self {
        self.apply_to = apply_to;
        self
    }

    /// Sets the placement mode.
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the edge filter policy.
    #[must_use]
    pub fn with_edge_filter(mut self, edge_filter: EdgeFilter) -> Self {
        self.edge_filter = edge_filter;
        self
    }

    /// Horizontal unit vector the wind blows along.
    pub fn wind_direction(&self) -> DVec3 {
        DVec3::new(self.wind_angle.cos(), self.wind_angle.sin(), 0.0)
    }

    /// Checks every field against its bounds.
    ///
    /// # Errors
    ///
    /// Returns the first field found outside its range, or the first
    /// bound pair whose minimum exceeds its maximum.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_f64("min_rad", self.min_rad, RADIUS_RANGE)?;
        check_f64("max_rad", self.max_rad, RADIUS_RANGE)?;
        if self.min_rad > self.max_rad {
            return Err(SettingsError::inverted("radius", self.min_rad, self.max_rad));
        }

        check_f64("min_depth", self.min_depth, DEPTH_RANGE)?;
        check_f64("max_depth", self.max_depth, DEPTH_RANGE)?;
        if self.min_depth > self.max_depth {
            return Err(SettingsError::inverted(
                "depth",
                self.min_depth,
                self.max_depth,
            ));
        }

        if !in_range(self.num_verts, RING_VERTS_RANGE) {
            return Err(SettingsError::out_of_range(
                "num_verts",
                self.num_verts as f64,
                (RING_VERTS_RANGE.0 as f64, RING_VERTS_RANGE.1 as f64),
            ));
        }
        if !in_range(self.max_its, ITERATIONS_RANGE) {
            return Err(SettingsError::out_of_range(
                "max_its",
                f64::from(self.max_its),
                (f64::from(ITERATIONS_RANGE.0), f64::from(ITERATIONS_RANGE.1)),
            ));
        }
        if !in_range(self.icicles_per_edge, ICICLES_PER_EDGE_RANGE) {
            return Err(SettingsError::out_of_range(
                "icicles_per_edge",
                f64::from(self.icicles_per_edge),
                (
                    f64::from(ICICLES_PER_EDGE_RANGE.0),
                    f64::from(ICICLES_PER_EDGE_RANGE.1),
                ),
            ));
        }

        check_f64("gravity_curve", self.gravity_curve, STRENGTH_RANGE)?;
        check_f64("wind_strength", self.wind_strength, STRENGTH_RANGE)?;
        check_f64("waviness", self.waviness, STRENGTH_RANGE)?;
        check_f64("wind_angle", self.wind_angle, WIND_ANGLE_RANGE)?;

        Ok(())
    }
}

fn check_f64(field: &'static str, value: f64, range: (f64, f64)) -> Result<(), SettingsError> {
    if in_range(value, range) {
        Ok(())
    } else {
        Err(SettingsError::out_of_range(field, value, range))
    }
}
