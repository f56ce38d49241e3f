//! # Placement
//!
//! Decides where on an edge icicles hang and how big each one is.
//!
//! Two strategies:
//! - **Scatter**: `icicles_per_edge` independent uniform samples; instances
//!   may overlap.
//! - **Packed**: walks the edge tiling non-overlapping instances, each
//!   reserving `2 * radius` of edge length, until the remaining length
//!   cannot hold the smallest icicle or too many draws in a row fail to fit.

use crate::edge::Edge;
use crate::settings::{IcicleSettings, PlacementMode};
use config::constants::approx_zero;
use glam::DVec3;
use rand::Rng;
use tracing::debug;

/// One icicle to be built: where it hangs and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcicleInstance {
    /// Base position in world space
    pub base: DVec3,
    /// Base radius
    pub radius: f64,
    /// Length
    pub depth: f64,
}

/// Why packing stopped on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingStop {
    /// Remaining length is shorter than the smallest possible icicle
    LengthExhausted,
    /// `max_its` consecutive draws were too wide for the remaining length
    StallLimit,
}

/// Result of packing one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    /// Placed instances, ordered along the walk
    pub instances: Vec<IcicleInstance>,
    /// Edge length reserved by the placed instances
    pub used_length: f64,
    /// Total radius draws made, placed or not
    pub attempts: u32,
    /// Termination reason
    pub stop: PackingStop,
}

/// Produces icicle instances for edges under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct PlacementPlanner<'a> {
    settings: &'a IcicleSettings,
}

impl<'a> PlacementPlanner<'a> {
    /// Creates a planner reading `settings`.
    pub fn new(settings: &'a IcicleSettings) -> Self {
        Self { settings }
    }

    /// Places instances on `edge` using the configured mode.
    pub fn plan<R: Rng + ?Sized>(&self, edge: &Edge, rng: &mut R) -> Vec<IcicleInstance> {
        match self.settings.placement {
            PlacementMode::Scatter => self.scatter(edge, rng),
            PlacementMode::Packed => self.pack(edge, rng).instances,
        }
    }

    /// Draws `icicles_per_edge` independent instances along `edge`.
    ///
    /// The instance count never depends on the edge length.
    pub fn scatter<R: Rng + ?Sized>(&self, edge: &Edge, rng: &mut R) -> Vec<IcicleInstance> {
        (0..self.settings.icicles_per_edge)
            .map(|_| {
                let t: f64 = rng.gen();
                let base = edge.point_at(t);
                let radius = self.sample_radius(rng);
                let depth = self.sample_depth(rng);
                IcicleInstance {
                    base,
                    radius,
                    depth,
                }
            })
            .collect()
    }

    /// Tiles non-overlapping instances along `edge`.
    ///
    /// The walk starts at `edge.end` and heads toward `edge.start`. The sum
    /// of reserved lengths never exceeds the edge length.
    pub fn pack<R: Rng + ?Sized>(&self, edge: &Edge, rng: &mut R) -> Packing {
        let settings = self.settings;
        let total = edge.length();
        let min_span = 2.0 * settings.min_rad;

        let mut instances = Vec::new();
        let mut used = 0.0;
        let mut stalls = 0u32;
        let mut attempts = 0u32;

        let stop = loop {
            let radius = self.sample_radius(rng);
            let depth = self.sample_depth(rng);
            attempts += 1;

            if total - used < min_span || approx_zero(total) {
                break PackingStop::LengthExhausted;
            }

            let span = 2.0 * radius;
            if used + span <= total {
                let t = (used + radius) / total;
                instances.push(IcicleInstance {
                    base: edge.end.lerp(edge.start, t),
                    radius,
                    depth,
                });
                used += span;
                stalls = 0;
            } else {
                stalls += 1;
                if stalls >= settings.max_its {
                    break PackingStop::StallLimit;
                }
            }
        };

        debug!(
            placed = instances.len(),
            used_length = used,
            total_length = total,
            attempts,
            ?stop,
            "packed edge"
        );

        Packing {
            instances,
            used_length: used,
            attempts,
            stop,
        }
    }

    /// Uniform radius in `[min_rad, max_rad]`.
    fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let s = self.settings;
        (s.min_rad + (s.max_rad - s.min_rad) * rng.gen::<f64>()).min(s.max_rad)
    }

    /// Uniform depth in `[min_depth, max_depth]`.
    fn sample_depth<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let s = self.settings;
        (s.min_depth + (s.max_depth - s.min_depth) * rng.gen::<f64>()).min(s.max_depth)
    }
}
