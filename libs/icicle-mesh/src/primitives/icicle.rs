//! # Icicle Primitive
//!
//! Turns a center-line into a closed ring mesh.
//!
//! One ring of `n` vertices per path point, a quad strip between every pair
//! of consecutive rings, a triangle fan from the last ring to an apex at the
//! tip, and a base cap chosen by [`CapStyle`].

use crate::error::{IcicleError, IcicleResult};
use crate::generate::PathPoint;
use crate::mesh::{FaceInsert, GeneratedMesh};
use crate::settings::CapStyle;
use config::constants::RING_VERTS_RANGE;
use glam::DVec3;
use std::f64::consts::PI;
use tracing::debug;

/// Mesh of one icicle plus the faces refused while building it.
#[derive(Debug, Clone)]
pub struct IcicleMesh {
    /// Generated geometry
    pub mesh: GeneratedMesh,
    /// Faces refused as duplicate or degenerate
    pub skipped_faces: usize,
}

/// Builds ring meshes with a fixed ring size and base cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingMesher {
    num_verts: usize,
    cap: CapStyle,
}

impl RingMesher {
    /// Creates a mesher.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_verts` cannot form a polygon.
    pub fn new(num_verts: usize, cap: CapStyle) -> IcicleResult<Self> {
        if num_verts < RING_VERTS_RANGE.0 {
            return Err(IcicleError::TooFewRingVertices {
                min: RING_VERTS_RANGE.0,
                actual: num_verts,
            });
        }
        Ok(Self { num_verts, cap })
    }

    /// Vertices per ring.
    pub fn num_verts(&self) -> usize {
        self.num_verts
    }

    /// Meshes a center-line.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` has fewer than two points.
    pub fn build(&self, path: &[PathPoint]) -> IcicleResult<IcicleMesh> {
        create_icicle(path, self.num_verts, self.cap)
    }
}

/// Positions of a ring around `point`, evenly spaced by angle in the XY plane.
///
/// A zero radius yields `n` coincident positions.
pub fn ring_positions(point: &PathPoint, n: usize) -> Vec<DVec3> {
    (0..n)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / n as f64;
            point.center + point.radius * DVec3::new(theta.cos(), theta.sin(), 0.0)
        })
        .collect()
}

/// Expected `(vertices, faces)` for a path of `samples` points.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::primitives::expected_counts;
/// use icicle_mesh::CapStyle;
///
/// // 13 rings of 8, plus the tip apex
/// assert_eq!(expected_counts(13, 8, CapStyle::None), (105, 104));
/// ```
pub fn expected_counts(samples: usize, n: usize, cap: CapStyle) -> (usize, usize) {
    let body_faces = samples.saturating_sub(1) * n;
    let (cap_verts, cap_faces) = match cap {
        CapStyle::None => (0, 0),
        CapStyle::Ngon => (0, 1),
        CapStyle::TriangleFan => (1, n),
    };
    (samples * n + 1 + cap_verts, body_faces + n + cap_faces)
}

/// Creates the mesh of one icicle from its center-line.
///
/// # Arguments
///
/// * `path` - Center-line samples from base to tip
/// * `n` - Vertices per ring
/// * `cap` - Base cap style; the tip is always closed with a triangle fan
///
/// # Example
///
/// ```rust
/// use icicle_mesh::primitives::create_icicle;
/// use icicle_mesh::generate::PathPoint;
/// use icicle_mesh::CapStyle;
/// use glam::DVec3;
///
/// let path = vec![
///     PathPoint { center: DVec3::ZERO, radius: 1.0 },
///     PathPoint { center: DVec3::NEG_Z, radius: 0.0 },
/// ];
/// let icicle = create_icicle(&path, 6, CapStyle::Ngon).unwrap();
/// assert_eq!(icicle.mesh.vertex_count(), 13);
/// assert_eq!(icicle.mesh.face_count(), 6 + 6 + 1);
/// ```
pub fn create_icicle(path: &[PathPoint], n: usize, cap: CapStyle) -> IcicleResult<IcicleMesh> {
    if path.len() < 2 {
        return Err(IcicleError::invalid_path(format!(
            "need at least 2 points, got {}",
            path.len()
        )));
    }
    if n < RING_VERTS_RANGE.0 {
        return Err(IcicleError::TooFewRingVertices {
            min: RING_VERTS_RANGE.0,
            actual: n,
        });
    }

    let (vertex_count, face_count) = expected_counts(path.len(), n, cap);
    let mut mesh = GeneratedMesh::with_capacity(vertex_count, face_count);
    let mut skipped = 0;

    let rings: Vec<Vec<u32>> = path
        .iter()
        .map(|point| {
            ring_positions(point, n)
                .into_iter()
                .map(|p| mesh.add_vertex(p))
                .collect()
        })
        .collect();

    // Body: one quad per ring pair and angular step
    for pair in rings.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        for j in 0..n {
            let k = (j + 1) % n;
            skipped += count_skip(mesh.add_face(&[lower[j], lower[k], upper[k], upper[j]]));
        }
    }

    // Tip: fan from the last ring to an apex at its center
    let last = &rings[rings.len() - 1];
    let apex = mesh.add_vertex(path[path.len() - 1].center);
    for j in 0..n {
        let k = (j + 1) % n;
        skipped += count_skip(mesh.add_face(&[last[j], last[k], apex]));
    }

    // Base cap
    let base = &rings[0];
    match cap {
        CapStyle::None => {}
        CapStyle::Ngon => {
            let reversed: Vec<u32> = base.iter().rev().copied().collect();
            skipped += count_skip(mesh.add_face(&reversed));
        }
        CapStyle::TriangleFan => {
            let centroid = base
                .iter()
                .fold(DVec3::ZERO, |acc, &i| acc + mesh.vertex(i))
                / n as f64;
            let hub = mesh.add_vertex(centroid);
            for j in 0..n {
                let k = (j + 1) % n;
                skipped += count_skip(mesh.add_face(&[base[k], base[j], hub]));
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped faces while meshing icicle");
    }

    Ok(IcicleMesh {
        mesh,
        skipped_faces: skipped,
    })
}

#[inline]
fn count_skip(result: FaceInsert) -> usize {
    usize::from(!result.is_inserted())
}
