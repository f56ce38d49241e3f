//! # Generation Tests
//!
//! Tests for edge resolution and the full generation run.

use super::*;
use crate::edge::EdgeFilter;
use crate::error::HostError;
use crate::host::{EditableMesh, HostState};
use crate::settings::{CapStyle, PlacementMode};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Two selected horizontal edges, one unselected, one selected vertical.
fn rooftop() -> EditableMesh {
    let mut host = EditableMesh::new();
    let a = host.add_vertex(DVec3::new(0.0, 0.0, 3.0));
    let b = host.add_vertex(DVec3::new(1.0, 0.0, 3.0));
    let c = host.add_vertex(DVec3::new(2.0, 0.0, 3.0));
    let d = host.add_vertex(DVec3::new(3.0, 0.0, 3.0));
    let e = host.add_vertex(DVec3::new(3.0, 0.0, 0.0));
    host.add_edge(a, b, true);
    host.add_edge(b, c, true);
    host.add_edge(c, d, false);
    host.add_edge(d, e, true);
    host
}

fn fixed_settings() -> IcicleSettings {
    IcicleSettings::default()
        .with_radius(0.1, 0.1)
        .with_depth(1.0, 1.0)
        .with_cap(CapStyle::None)
}

#[test]
fn test_resolve_all_selected() {
    let host = rooftop();
    let edges = resolve_edges(&host, ApplyScope::AllSelected);
    assert_eq!(edges.len(), 3);
}

#[test]
fn test_resolve_active_only() {
    let mut host = rooftop();
    host.set_active_edge(Some(1));
    let edges = resolve_edges(&host, ApplyScope::ActiveOnly);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].start, DVec3::new(1.0, 0.0, 3.0));
}

#[test]
fn test_resolve_active_must_be_selected() {
    let mut host = rooftop();
    host.set_active_edge(Some(2));
    assert!(resolve_edges(&host, ApplyScope::ActiveOnly).is_empty());
}

#[test]
fn test_resolve_applies_world_matrix() {
    let host = rooftop().with_world_matrix(DMat4::from_translation(DVec3::new(0.0, 5.0, 0.0)));
    let edges = resolve_edges(&host, ApplyScope::AllSelected);
    assert!(edges.iter().all(|e| e.start.y == 5.0 && e.end.y == 5.0));
}

#[test]
fn test_no_mesh_fails_without_mutation() {
    let mut host = rooftop().with_state(HostState::NoMesh);
    let mut rng = StdRng::seed_from_u64(0);
    let result = generate_icicles(&mut host, &fixed_settings(), &mut rng);
    assert!(matches!(result, Err(IcicleError::NoActiveMesh)));
    assert_eq!(host.vertex_count(), 5);
    assert!(host.undo_steps().is_empty());
}

#[test]
fn test_object_mode_fails() {
    let mut host = rooftop().with_state(HostState::NotEditMode);
    let mut rng = StdRng::seed_from_u64(0);
    let result = generate_icicles(&mut host, &fixed_settings(), &mut rng);
    assert!(matches!(result, Err(IcicleError::NotEditMode)));
}

#[test]
fn test_invalid_settings_fail_without_mutation() {
    let mut host = rooftop();
    let mut rng = StdRng::seed_from_u64(0);
    let settings = fixed_settings().with_ring_verts(2);
    let result = generate_icicles(&mut host, &settings, &mut rng);
    assert!(matches!(result, Err(IcicleError::InvalidSettings(_))));
    assert_eq!(host.vertex_count(), 5);
}

#[test]
fn test_generates_on_selected_edges() {
    let mut host = rooftop();
    let mut rng = StdRng::seed_from_u64(1);
    let settings = fixed_settings().with_icicles_per_edge(2);

    let report = generate_icicles(&mut host, &settings, &mut rng).unwrap();
    assert_eq!(report.edges_processed, 3);
    assert_eq!(report.instances, 6);
    assert_eq!(report.vertices_added, 6 * (13 * 8 + 1));
    assert_eq!(report.faces_added, 6 * (12 * 8 + 8));
    assert_eq!(report.skipped_faces, 0);
    assert!(report.undo_registered);
    assert_eq!(host.vertex_count(), 5 + report.vertices_added);
    assert_eq!(host.undo_steps(), &[UNDO_MESSAGE.to_string()]);
}

#[test]
fn test_edge_filter_drops_vertical_edges() {
    let mut host = rooftop();
    let mut rng = StdRng::seed_from_u64(1);
    let settings = fixed_settings().with_edge_filter(EdgeFilter {
        skip_vertical: true,
        skip_short: false,
    });

    let report = generate_icicles(&mut host, &settings, &mut rng).unwrap();
    assert_eq!(report.edges_processed, 2);
    assert_eq!(report.edges_filtered, 1);
}

#[test]
fn test_filter_emptying_scope_fails() {
    let mut host = rooftop();
    host.set_active_edge(Some(3));
    let mut rng = StdRng::seed_from_u64(1);
    let settings = fixed_settings()
        .with_scope(ApplyScope::ActiveOnly)
        .with_edge_filter(EdgeFilter {
            skip_vertical: true,
            skip_short: false,
        });

    let result = generate_icicles(&mut host, &settings, &mut rng);
    assert!(matches!(
        result,
        Err(IcicleError::NoEdges {
            scope: ApplyScope::ActiveOnly
        })
    ));
    assert_eq!(host.vertex_count(), 5);
}

#[test]
fn test_undo_failure_is_not_fatal() {
    let mut host = rooftop().without_undo();
    let mut rng = StdRng::seed_from_u64(2);

    let report = generate_icicles(&mut host, &fixed_settings(), &mut rng).unwrap();
    assert!(!report.undo_registered);
    assert!(host.vertex_count() > 5);
}

#[test]
fn test_commit_rejection_is_reported() {
    let mut host = rooftop().read_only();
    let mut rng = StdRng::seed_from_u64(2);

    let result = generate_icicles(&mut host, &fixed_settings(), &mut rng);
    assert!(matches!(
        result,
        Err(IcicleError::CommitFailed(HostError::Rejected { .. }))
    ));
    assert_eq!(host.vertex_count(), 5);
    assert!(host.undo_steps().is_empty());
}

#[test]
fn test_packed_mode_through_orchestrator() {
    let mut host = EditableMesh::new();
    let a = host.add_vertex(DVec3::ZERO);
    let b = host.add_vertex(DVec3::new(2.0, 0.0, 0.0));
    host.add_edge(a, b, true);
    let mut rng = StdRng::seed_from_u64(4);
    let settings = fixed_settings().with_placement(PlacementMode::Packed);

    let report = generate_icicles(&mut host, &settings, &mut rng).unwrap();
    assert!(report.instances >= 9 && report.instances <= 10);
}

#[test]
fn test_geometry_stored_in_local_space() {
    let world = DMat4::from_translation(DVec3::new(100.0, 0.0, 0.0));
    let mut host = EditableMesh::new().with_world_matrix(world);
    let a = host.add_vertex(DVec3::ZERO);
    let b = host.add_vertex(DVec3::X);
    host.add_edge(a, b, true);
    let mut rng = StdRng::seed_from_u64(6);
    let settings = fixed_settings().with_gravity(0.0).with_waviness(0.0);

    generate_icicles(&mut host, &settings, &mut rng).unwrap();
    assert!(host
        .vertices()
        .iter()
        .all(|v| v.x > -0.2 && v.x < 1.2 && v.z <= 1e-9));
}

#[test]
fn test_build_icicles_is_reproducible() {
    let edges = resolve_edges(&rooftop(), ApplyScope::AllSelected);
    let settings = IcicleSettings::default().with_wind(0.3, 1.0);

    let a = build_icicles(&edges, &settings, DMat4::IDENTITY, &mut StdRng::seed_from_u64(8)).unwrap();
    let b = build_icicles(&edges, &settings, DMat4::IDENTITY, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(a.mesh.vertices(), b.mesh.vertices());
    assert_eq!(a.mesh.faces(), b.mesh.faces());
}
