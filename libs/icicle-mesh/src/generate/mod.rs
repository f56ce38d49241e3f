//! # Icicle Generation
//!
//! Drives a full run against an edit host:
//!
//! 1. check the host is in edit mode and the settings are in bounds
//! 2. resolve the target edges for the configured scope and filter
//! 3. place instances on each edge, build a center-line per instance and
//!    mesh it, merging everything into one [`GeneratedMesh`]
//! 4. hand the host a single [`MeshUpdate`] (optionally deleting prior
//!    generations first), then record a history step
//!
//! Every failure happens before or at step 4, so a failed run leaves the
//! host untouched.

mod path;
mod placement;

#[cfg(test)]
mod tests;

pub use path::{gravity_offset, taper, waviness_offset, wind_offset, PathGenerator, PathPoint};
pub use placement::{IcicleInstance, Packing, PackingStop, PlacementPlanner};

use crate::edge::Edge;
use crate::error::{IcicleError, IcicleResult};
use crate::host::{EditHost, HostEdge, HostState, MeshUpdate};
use crate::mesh::GeneratedMesh;
use crate::primitives::RingMesher;
use crate::settings::{ApplyScope, IcicleSettings};
use glam::DMat4;
use rand::Rng;
use tracing::{debug, info, warn};

/// History label for a generation run.
pub const UNDO_MESSAGE: &str = "Add Icicles";

/// Summary of a committed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Edges icicles were generated on
    pub edges_processed: usize,
    /// Edges in scope that the edge filter rejected
    pub edges_filtered: usize,
    /// Icicles built
    pub instances: usize,
    /// Vertices handed to the host
    pub vertices_added: usize,
    /// Faces handed to the host
    pub faces_added: usize,
    /// Faces refused as duplicate or degenerate
    pub skipped_faces: usize,
    /// Whether the host recorded a history step
    pub undo_registered: bool,
}

/// Geometry built for a set of edges, not yet committed.
#[derive(Debug, Clone)]
pub struct BuiltIcicles {
    /// Merged geometry, local space
    pub mesh: GeneratedMesh,
    /// Icicles built
    pub instances: usize,
    /// Faces refused as duplicate or degenerate
    pub skipped_faces: usize,
}

/// Resolves the world-space edges a run works on.
///
/// `AllSelected` returns every selected edge. `ActiveOnly` returns the
/// active edge if it is also selected, otherwise nothing.
pub fn resolve_edges<H: EditHost + ?Sized>(host: &H, scope: ApplyScope) -> Vec<Edge> {
    let world = host.world_matrix();
    let edges = host.edges();
    let to_world = |e: &HostEdge| Edge::from_local(e.start, e.end, &world);

    match scope {
        ApplyScope::AllSelected => edges.iter().filter(|e| e.selected).map(to_world).collect(),
        ApplyScope::ActiveOnly => host
            .active_edge()
            .and_then(|active| edges.iter().find(|e| e.index == active && e.selected))
            .map(to_world)
            .into_iter()
            .collect(),
    }
}

/// Builds the geometry for `edges` without touching any host.
///
/// Positions are returned in the local space of `world`.
///
/// # Errors
///
/// Returns an error if the ring vertex count cannot form a polygon.
pub fn build_icicles<R: Rng + ?Sized>(
    edges: &[Edge],
    settings: &IcicleSettings,
    world: DMat4,
    rng: &mut R,
) -> IcicleResult<BuiltIcicles> {
    let planner = PlacementPlanner::new(settings);
    let paths = PathGenerator::new(settings, world);
    let mesher = RingMesher::new(settings.num_verts, settings.cap)?;

    let mut mesh = GeneratedMesh::new();
    let mut instances = 0;
    let mut skipped = 0;

    for (i, edge) in edges.iter().enumerate() {
        let placed = planner.plan(edge, rng);
        debug!(edge = i, instances = placed.len(), "placed icicles");

        for instance in &placed {
            let path = paths.generate(instance, rng);
            let icicle = mesher.build(&path)?;
            skipped += icicle.skipped_faces + mesh.merge(&icicle.mesh);
        }
        instances += placed.len();
    }

    Ok(BuiltIcicles {
        mesh,
        instances,
        skipped_faces: skipped,
    })
}

/// Generates icicles on the host's target edges and commits them.
///
/// # Errors
///
/// - [`IcicleError::NoActiveMesh`] / [`IcicleError::NotEditMode`] if the host
///   cannot be edited
/// - [`IcicleError::InvalidSettings`] if a setting is out of bounds
/// - [`IcicleError::NoEdges`] if scope resolution or filtering leaves no edge
/// - [`IcicleError::CommitFailed`] if the host rejects the update
///
/// The history step is pushed only after a successful commit. A failed
/// push is logged and reported, never returned.
pub fn generate_icicles<H: EditHost + ?Sized, R: Rng + ?Sized>(
    host: &mut H,
    settings: &IcicleSettings,
    rng: &mut R,
) -> IcicleResult<GenerationReport> {
    match host.state() {
        HostState::Edit => {}
        HostState::NotEditMode => return Err(IcicleError::NotEditMode),
        HostState::NoMesh => return Err(IcicleError::NoActiveMesh),
    }
    settings.validate()?;

    let scope = settings.apply_to;
    let in_scope = resolve_edges(host, scope);
    if in_scope.is_empty() {
        return Err(IcicleError::NoEdges { scope });
    }

    let edges: Vec<Edge> = in_scope
        .iter()
        .copied()
        .filter(|e| settings.edge_filter.accepts(e, settings.min_rad))
        .collect();
    let edges_filtered = in_scope.len() - edges.len();
    if edges.is_empty() {
        return Err(IcicleError::NoEdges { scope });
    }

    let built = build_icicles(&edges, settings, host.world_matrix(), rng)?;
    let mut report = GenerationReport {
        edges_processed: edges.len(),
        edges_filtered,
        instances: built.instances,
        vertices_added: built.mesh.vertex_count(),
        faces_added: built.mesh.face_count(),
        skipped_faces: built.skipped_faces,
        undo_registered: false,
    };

    host.commit(MeshUpdate {
        delete_unselected: settings.delete_previous,
        mesh: built.mesh,
    })?;

    report.undo_registered = match host.push_undo(UNDO_MESSAGE) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "could not register undo step; continuing");
            false
        }
    };

    info!(
        edges = report.edges_processed,
        filtered = report.edges_filtered,
        instances = report.instances,
        vertices = report.vertices_added,
        faces = report.faces_added,
        "generated icicles"
    );

    Ok(report)
}
