//! # Edges
//!
//! World-space edge segments icicles hang from, plus the optional policy
//! that rejects edges before placement.

use config::constants::VERTICAL_TOLERANCE;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint
    pub start: DVec3,
    /// Second endpoint
    pub end: DVec3,
}

impl Edge {
    /// Creates an edge from two world-space endpoints.
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Builds a world-space edge from local endpoints.
    pub fn from_local(start: DVec3, end: DVec3, world: &DMat4) -> Self {
        Self {
            start: world.transform_point3(start),
            end: world.transform_point3(end),
        }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Length of the edge projected onto the XY plane.
    #[inline]
    pub fn projected_length(&self) -> f64 {
        self.start.truncate().distance(self.end.truncate())
    }

    /// Absolute Z difference between the endpoints.
    #[inline]
    pub fn rise(&self) -> f64 {
        (self.end.z - self.start.z).abs()
    }

    /// Point at parameter `t`, where 0 is `start` and 1 is `end`.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.start.lerp(self.end, t)
    }

    /// Midpoint of the edge.
    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        self.point_at(0.5)
    }
}

/// Policy for rejecting edges before placement.
///
/// Both checks are off by default, in which case every edge is accepted.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::edge::{Edge, EdgeFilter};
/// use glam::DVec3;
///
/// let filter = EdgeFilter { skip_vertical: true, skip_short: false };
/// let post = Edge::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0));
/// assert!(!filter.accepts(&post, 0.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeFilter {
    /// Reject edges whose endpoints differ in Z by more than the vertical tolerance
    pub skip_vertical: bool,
    /// Reject edges whose XY footprint is no wider than one icicle
    pub skip_short: bool,
}

impl EdgeFilter {
    /// Returns true if `edge` passes every enabled check.
    ///
    /// `min_rad` is the smallest icicle radius; an edge whose XY footprint is
    /// at most `2 * min_rad` cannot hold even one of them side by side.
    pub fn accepts(&self, edge: &Edge, min_rad: f64) -> bool {
        if self.skip_vertical && edge.rise() > VERTICAL_TOLERANCE {
            return false;
        }
        if self.skip_short && edge.projected_length() <= 2.0 * min_rad {
            return false;
        }
        true
    }

    /// Returns true if no check is enabled.
    pub fn is_disabled(&self) -> bool {
        !self.skip_vertical && !self.skip_short
    }
}
