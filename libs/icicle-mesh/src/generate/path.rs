//! # Center-line Paths
//!
//! Builds the bent, tapering center-line of one icicle.
//!
//! For sample `i` with `t = i / PATH_SEGMENTS` the world-space center is the
//! sum of:
//! - `t · depth` along the growth axis
//! - gravity sag `gravity · t² · depth · 0.5` toward -Z (always down in
//!   world space, even for upward icicles)
//! - wind bend `wind · t · depth` along the wind heading
//! - waviness jitter `waviness · radius · (u - 0.5)` along
//!   `(cos(8πt), sin(8πt), 0)`, `u` drawn fresh per sample
//!
//! and the radius is `radius · (1 - t)`. Centers are mapped into the host
//! mesh's local space before they are stored.

use super::placement::IcicleInstance;
use crate::settings::IcicleSettings;
use config::constants::{GRAVITY_SAG_SCALE, PATH_SEGMENTS, WAVE_TURNS};
use glam::{DMat4, DVec3};
use rand::Rng;
use std::f64::consts::TAU;

/// One sample of a center-line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    /// Ring center
    pub center: DVec3,
    /// Ring radius, zero at the tip
    pub radius: f64,
}

/// Generates center-lines for icicle instances.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::generate::{IcicleInstance, PathGenerator};
/// use icicle_mesh::IcicleSettings;
/// use glam::{DMat4, DVec3};
/// use rand::SeedableRng;
///
/// let settings = IcicleSettings::default();
/// let generator = PathGenerator::new(&settings, DMat4::IDENTITY);
/// let instance = IcicleInstance { base: DVec3::ZERO, radius: 0.1, depth: 1.0 };
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let path = generator.generate(&instance, &mut rng);
/// assert_eq!(path.len(), 13);
/// assert_eq!(path[12].radius, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PathGenerator<'a> {
    settings: &'a IcicleSettings,
    world_to_local: DMat4,
}

impl<'a> PathGenerator<'a> {
    /// Creates a generator that stores points through the inverse of `world`.
    pub fn new(settings: &'a IcicleSettings, world: DMat4) -> Self {
        Self {
            settings,
            world_to_local: world.inverse(),
        }
    }

    /// Generates `PATH_SEGMENTS + 1` samples from base to tip.
    pub fn generate<R: Rng + ?Sized>(&self, instance: &IcicleInstance, rng: &mut R) -> Vec<PathPoint> {
        (0..=PATH_SEGMENTS)
            .map(|i| {
                let t = i as f64 / PATH_SEGMENTS as f64;
                let jitter: f64 = rng.gen();
                let world = instance.base + self.offset(t, instance.radius, instance.depth, jitter);
                PathPoint {
                    center: self.world_to_local.transform_point3(world),
                    radius: taper(instance.radius, t),
                }
            })
            .collect()
    }

    /// World-space displacement of the sample at `t` from the base.
    ///
    /// `jitter` is the uniform draw in `[0, 1)` for this sample.
    pub fn offset(&self, t: f64, radius: f64, depth: f64, jitter: f64) -> DVec3 {
        let s = self.settings;
        let along = s.direction.axis() * (t * depth);
        let wave = waviness_offset(s.waviness, radius, t, jitter);
        along + gravity_offset(s.gravity_curve, t, depth) + wind_offset(s, t, depth) + wave
    }
}

/// Radius at parameter `t`: linear taper to zero at the tip.
#[inline]
pub fn taper(radius: f64, t: f64) -> f64 {
    if t >= 1.0 {
        0.0
    } else {
        radius * (1.0 - t)
    }
}

/// Quadratic sag toward -Z.
#[inline]
pub fn gravity_offset(gravity: f64, t: f64, depth: f64) -> DVec3 {
    DVec3::NEG_Z * (gravity * t * t * depth * GRAVITY_SAG_SCALE)
}

/// Linear bend along the wind heading.
#[inline]
pub fn wind_offset(settings: &IcicleSettings, t: f64, depth: f64) -> DVec3 {
    settings.wind_direction() * (settings.wind_strength * t * depth)
}

/// Lateral jitter along a direction turning `WAVE_TURNS` times over the path.
#[inline]
pub fn waviness_offset(waviness: f64, radius: f64, t: f64, jitter: f64) -> DVec3 {
    let angle = TAU * WAVE_TURNS * t;
    let direction = DVec3::new(angle.cos(), angle.sin(), 0.0);
    direction * (waviness * radius * (jitter - 0.5))
}
