//! # Icicle Mesh
//!
//! Procedural icicle geometry for edit-mode meshes.
//! Hangs tapering, bent ring meshes from the selected edges of a host mesh.
//!
//! ## Architecture
//!
//! ```text
//! EditHost edges → PlacementPlanner → PathGenerator → RingMesher → MeshUpdate
//! ```
//!
//! ## Stages
//!
//! - **Placement**: one or more (base, radius, depth) instances per edge,
//!   scattered or packed along the edge's length
//! - **Path**: a 13-sample center-line per instance, tapered to a point and
//!   bent by gravity, wind and waviness
//! - **Meshing**: a ring per sample, quads between rings, a tip fan and a
//!   configurable base cap
//! - **Commit**: everything merged into one [`GeneratedMesh`] and applied
//!   by the host as a single edit
//!
//! Randomness is always injected, so a seeded generator reproduces a run.
//!
//! ## Usage
//!
//! ```rust
//! use icicle_mesh::{generate_icicles, EditableMesh, IcicleSettings};
//! use glam::DVec3;
//! use rand::SeedableRng;
//!
//! let mut host = EditableMesh::new();
//! let a = host.add_vertex(DVec3::new(0.0, 0.0, 3.0));
//! let b = host.add_vertex(DVec3::new(2.0, 0.0, 3.0));
//! host.add_edge(a, b, true);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let report = generate_icicles(&mut host, &IcicleSettings::default(), &mut rng)?;
//! assert_eq!(report.instances, 1);
//! assert_eq!(host.vertex_count(), 2 + report.vertices_added);
//! # Ok::<(), icicle_mesh::IcicleError>(())
//! ```

pub mod edge;
pub mod error;
pub mod generate;
pub mod host;
pub mod mesh;
pub mod preview;
pub mod primitives;
pub mod settings;

pub use edge::{Edge, EdgeFilter};
pub use error::{HostError, IcicleError, IcicleResult, SettingsError};
pub use generate::{build_icicles, generate_icicles, resolve_edges, GenerationReport};
pub use host::{EditHost, EditableMesh, HostEdge, HostState, MeshUpdate};
pub use mesh::{FaceInsert, GeneratedMesh};
pub use preview::{PreviewHost, PreviewSession};
pub use settings::{ApplyScope, CapStyle, Direction, IcicleSettings, PlacementMode};
