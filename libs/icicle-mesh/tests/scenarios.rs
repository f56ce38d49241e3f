//! End-to-end generation scenarios.

use glam::{DMat4, DVec3};
use icicle_mesh::generate::{PackingStop, PathGenerator, PlacementPlanner};
use icicle_mesh::{
    build_icicles, generate_icicles, ApplyScope, CapStyle, Direction, Edge, EditHost,
    EditableMesh, IcicleError, IcicleSettings, PlacementMode,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn straight_settings() -> IcicleSettings {
    IcicleSettings::default()
        .with_direction(Direction::Down)
        .with_gravity(0.0)
        .with_wind(0.0, 0.0)
        .with_waviness(0.0)
        .with_radius(0.1, 0.1)
        .with_depth(1.0, 1.0)
        .with_ring_verts(8)
        .with_icicles_per_edge(1)
}

fn vertical_edge() -> Edge {
    Edge::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -2.0))
}

#[test]
fn straight_icicle_on_vertical_edge() {
    let settings = straight_settings();
    let edge = vertical_edge();
    let mut rng = StdRng::seed_from_u64(11);

    let instances = PlacementPlanner::new(&settings).plan(&edge, &mut rng);
    assert_eq!(instances.len(), 1);
    let base = instances[0].base;
    assert_eq!((base.x, base.y), (0.0, 0.0));

    let path = PathGenerator::new(&settings, DMat4::IDENTITY).generate(&instances[0], &mut rng);
    assert_eq!(path.len(), 13);
    assert!((path[0].radius - 0.1).abs() < 1e-12);
    assert_eq!(path[12].radius, 0.0);
    assert!(path.windows(2).all(|w| w[1].radius < w[0].radius));
    for (i, point) in path.iter().enumerate() {
        assert_eq!((point.center.x, point.center.y), (0.0, 0.0));
        assert!(point.center.z <= base.z);
        let expected = base.z - i as f64 / 12.0;
        assert!((point.center.z - expected).abs() < 1e-12);
    }
}

#[test]
fn straight_icicle_vertex_counts_per_cap() {
    let edge = [vertical_edge()];
    let cases = [
        (CapStyle::None, 105, 104),
        (CapStyle::Ngon, 105, 105),
        (CapStyle::TriangleFan, 106, 112),
    ];

    for (cap, vertices, faces) in cases {
        let settings = straight_settings().with_cap(cap);
        let mut rng = StdRng::seed_from_u64(11);
        let built = build_icicles(&edge, &settings, DMat4::IDENTITY, &mut rng).unwrap();
        assert_eq!(built.instances, 1);
        assert_eq!(built.mesh.vertex_count(), vertices, "{cap:?}");
        assert_eq!(built.mesh.face_count(), faces, "{cap:?}");
        assert_eq!(built.mesh.count_faces_with(4), 96);
    }
}

#[test]
fn packing_unit_edge_stops_on_length() {
    let settings = straight_settings().with_placement(PlacementMode::Packed);
    let edge = Edge::new(DVec3::ZERO, DVec3::X);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let packing = PlacementPlanner::new(&settings).pack(&edge, &mut rng);
        assert!(packing.instances.len() <= 5);
        assert!(packing.instances.len() >= 4);
        assert_eq!(packing.stop, PackingStop::LengthExhausted);
        assert!(packing.used_length <= 1.0 + 1e-12);
        assert!(packing.attempts <= 6);
    }
}

#[test]
fn packing_never_exceeds_edge_length() {
    let settings = IcicleSettings::default()
        .with_radius(0.05, 0.4)
        .with_placement(PlacementMode::Packed)
        .with_max_iterations(30);
    let edge = Edge::new(DVec3::new(-1.0, 2.0, 4.0), DVec3::new(2.0, 2.0, 4.0));

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let packing = PlacementPlanner::new(&settings).pack(&edge, &mut rng);
        let reserved: f64 = packing.instances.iter().map(|i| 2.0 * i.radius).sum();
        assert!(reserved <= edge.length() + 1e-9);
    }
}

#[test]
fn active_only_without_active_edge_fails_cleanly() {
    let mut host = EditableMesh::new();
    let a = host.add_vertex(DVec3::ZERO);
    let b = host.add_vertex(DVec3::X);
    host.add_edge(a, b, true);
    let settings = IcicleSettings::default().with_scope(ApplyScope::ActiveOnly);
    let mut rng = StdRng::seed_from_u64(5);

    let result = generate_icicles(&mut host, &settings, &mut rng);
    assert!(matches!(
        result,
        Err(IcicleError::NoEdges {
            scope: ApplyScope::ActiveOnly
        })
    ));
    assert_eq!(host.vertex_count(), 2);
    assert_eq!(host.edge_count(), 1);
    assert_eq!(host.face_count(), 0);
    assert!(host.undo_steps().is_empty());
}

fn eave() -> EditableMesh {
    let mut host = EditableMesh::new();
    let a = host.add_vertex(DVec3::new(0.0, 0.0, 3.0));
    let b = host.add_vertex(DVec3::new(4.0, 0.0, 3.0));
    host.add_edge(a, b, true);
    host
}

#[test]
fn delete_previous_regenerates_instead_of_accumulating() {
    let settings = IcicleSettings::default()
        .with_delete_previous(true)
        .with_icicles_per_edge(3);
    let mut host = eave();

    generate_icicles(&mut host, &settings, &mut StdRng::seed_from_u64(9)).unwrap();
    let first_vertices = host.vertices().to_vec();
    let first_faces = host.faces().to_vec();

    generate_icicles(&mut host, &settings, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(host.vertices(), first_vertices.as_slice());
    assert_eq!(host.faces(), first_faces.as_slice());
    assert_eq!(host.edges().iter().filter(|e| e.selected).count(), 1);
}

#[test]
fn without_delete_previous_runs_accumulate() {
    let settings = IcicleSettings::default();
    let mut host = eave();

    let first = generate_icicles(&mut host, &settings, &mut StdRng::seed_from_u64(9)).unwrap();
    let second = generate_icicles(&mut host, &settings, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(
        host.vertex_count(),
        2 + first.vertices_added + second.vertices_added
    );
    assert_eq!(host.undo_steps().len(), 2);
}

#[test]
fn upward_icicles_rise_above_the_edge() {
    let settings = straight_settings().with_direction(Direction::Up);
    let mut host = eave();

    generate_icicles(&mut host, &settings, &mut StdRng::seed_from_u64(2)).unwrap();
    let top = host.vertices().iter().map(|v| v.z).fold(f64::MIN, f64::max);
    assert!((top - 4.0).abs() < 1e-9);
}
