//! # Edit Host
//!
//! The contract between the generator and the application that owns the
//! mesh being edited, plus [`EditableMesh`], an in-memory host.
//!
//! The generator only reads topology through [`EditHost`] until it has a
//! complete result; then it hands the host one [`MeshUpdate`] to apply.
//! Undo bookkeeping around that update is the host's business.

use crate::error::HostError;
use crate::mesh::GeneratedMesh;
use glam::{DMat4, DVec3};
use std::collections::HashSet;

/// Whether the host can accept an edit right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// A mesh is open in edit mode
    Edit,
    /// A mesh is active but not in edit mode
    NotEditMode,
    /// No mesh is active
    NoMesh,
}

/// An edge of the host mesh in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostEdge {
    /// Host-side edge index
    pub index: usize,
    /// First endpoint, local space
    pub start: DVec3,
    /// Second endpoint, local space
    pub end: DVec3,
    /// Selection state
    pub selected: bool,
}

/// One atomic change to the host mesh.
#[derive(Debug, Clone)]
pub struct MeshUpdate {
    /// Delete everything outside the current selection first
    pub delete_unselected: bool,
    /// Geometry to insert, local space
    pub mesh: GeneratedMesh,
}

/// Edit-mode mesh collaborator.
pub trait EditHost {
    /// Current edit availability.
    fn state(&self) -> HostState;

    /// Local-to-world transform of the edited object.
    fn world_matrix(&self) -> DMat4;

    /// All edges with their selection state.
    fn edges(&self) -> Vec<HostEdge>;

    /// Index of the active edge, if any.
    fn active_edge(&self) -> Option<usize>;

    /// Records a history step for the update just committed. Failure must
    /// not undo the edit.
    fn push_undo(&mut self, message: &str) -> Result<(), HostError>;

    /// Applies `update` as a single edit.
    fn commit(&mut self, update: MeshUpdate) -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MeshEdge {
    verts: [u32; 2],
    selected: bool,
}

/// An in-memory edit-mode mesh.
///
/// Edges carry the selection; committed geometry is inserted unselected,
/// so a later `delete_unselected` update removes it again.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::host::{EditHost, EditableMesh};
/// use glam::DVec3;
///
/// let mut host = EditableMesh::new();
/// let a = host.add_vertex(DVec3::ZERO);
/// let b = host.add_vertex(DVec3::X);
/// let edge = host.add_edge(a, b, true);
/// assert_eq!(host.add_edge(a, 7, true), None);
/// host.set_active_edge(edge);
/// assert_eq!(host.edges().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EditableMesh {
    state: HostState,
    world: DMat4,
    vertices: Vec<DVec3>,
    edges: Vec<MeshEdge>,
    faces: Vec<Vec<u32>>,
    active_edge: Option<usize>,
    undo_steps: Vec<String>,
    undo_available: bool,
    read_only: bool,
}

impl Default for EditableMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl EditableMesh {
    /// Creates an empty mesh in edit mode with an identity transform.
    pub fn new() -> Self {
        Self {
            state: HostState::Edit,
            world: DMat4::IDENTITY,
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            active_edge: None,
            undo_steps: Vec::new(),
            undo_available: true,
            read_only: false,
        }
    }

    /// Sets the local-to-world transform.
    #[must_use]
    pub fn with_world_matrix(mut self, world: DMat4) -> Self {
        self.world = world;
        self
    }

    /// Sets the reported edit state.
    #[must_use]
    pub fn with_state(mut self, state: HostState) -> Self {
        self.state = state;
        self
    }

    /// Makes `push_undo` fail, as a host without history would.
    #[must_use]
    pub fn without_undo(mut self) -> Self {
        self.undo_available = false;
        self
    }

    /// Makes `commit` reject every update.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    /// Adds an edge and returns its index.
    ///
    /// Returns `None`, storing nothing, if either endpoint is not a vertex.
    pub fn add_edge(&mut self, a: u32, b: u32, selected: bool) -> Option<usize> {
        let count = self.vertices.len();
        if a as usize >= count || b as usize >= count {
            return None;
        }
        self.edges.push(MeshEdge {
            verts: [a, b],
            selected,
        });
        Some(self.edges.len() - 1)
    }

    /// Sets the selection state of an edge. Out-of-range indices are ignored.
    pub fn select_edge(&mut self, index: usize, selected: bool) {
        if let Some(edge) = self.edges.get_mut(index) {
            edge.selected = selected;
        }
    }

    /// Designates the active edge.
    pub fn set_active_edge(&mut self, index: Option<usize>) {
        self.active_edge = index;
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns a reference to the vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// History steps recorded so far, oldest first.
    pub fn undo_steps(&self) -> &[String] {
        &self.undo_steps
    }

    /// Removes every unselected edge, the faces that use one, and the
    /// vertices left without a selected edge.
    fn delete_unselected(&mut self) {
        let kept_edges: Vec<MeshEdge> = self.edges.iter().copied().filter(|e| e.selected).collect();
        let selected_pairs: HashSet<(u32, u32)> = kept_edges
            .iter()
            .map(|e| edge_key(e.verts[0], e.verts[1]))
            .collect();

        let mut keep_vertex = vec![false; self.vertices.len()];
        for edge in &kept_edges {
            keep_vertex[edge.verts[0] as usize] = true;
            keep_vertex[edge.verts[1] as usize] = true;
        }

        let mut remap = vec![u32::MAX; self.vertices.len()];
        let mut vertices = Vec::new();
        for (i, position) in self.vertices.iter().enumerate() {
            if keep_vertex[i] {
                remap[i] = vertices.len() as u32;
                vertices.push(*position);
            }
        }

        let faces = self
            .faces
            .iter()
            .filter(|face| {
                face_edges(face).all(|(a, b)| selected_pairs.contains(&edge_key(a, b)))
            })
            .map(|face| face.iter().map(|&i| remap[i as usize]).collect())
            .collect();

        let active = self
            .active_edge
            .and_then(|i| self.edges.get(i))
            .filter(|e| e.selected)
            .and_then(|active| kept_edges.iter().position(|e| e == active));

        self.edges = kept_edges
            .into_iter()
            .map(|e| MeshEdge {
                verts: [remap[e.verts[0] as usize], remap[e.verts[1] as usize]],
                selected: true,
            })
            .collect();
        self.vertices = vertices;
        self.faces = faces;
        self.active_edge = active;
    }

    /// Appends `mesh`, creating unselected boundary edges for its faces.
    fn insert(&mut self, mesh: &GeneratedMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(mesh.vertices());

        let mut known: HashSet<(u32, u32)> = self
            .edges
            .iter()
            .map(|e| edge_key(e.verts[0], e.verts[1]))
            .collect();

        for face in mesh.faces() {
            let shifted: Vec<u32> = face.iter().map(|i| i + offset).collect();
            for (a, b) in face_edges(&shifted) {
                if known.insert(edge_key(a, b)) {
                    self.edges.push(MeshEdge {
                        verts: [a, b],
                        selected: false,
                    });
                }
            }
            self.faces.push(shifted);
        }
    }
}

impl EditHost for EditableMesh {
    fn state(&self) -> HostState {
        self.state
    }

    fn world_matrix(&self) -> DMat4 {
        self.world
    }

    fn edges(&self) -> Vec<HostEdge> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, e)| HostEdge {
                index,
                start: self.vertices[e.verts[0] as usize],
                end: self.vertices[e.verts[1] as usize],
                selected: e.selected,
            })
            .collect()
    }

    fn active_edge(&self) -> Option<usize> {
        self.active_edge
    }

    fn push_undo(&mut self, message: &str) -> Result<(), HostError> {
        if !self.undo_available {
            return Err(HostError::undo_unavailable("history is disabled"));
        }
        self.undo_steps.push(message.to_string());
        Ok(())
    }

    fn commit(&mut self, update: MeshUpdate) -> Result<(), HostError> {
        if self.read_only {
            return Err(HostError::rejected("mesh is read-only"));
        }
        if update.delete_unselected {
            self.delete_unselected();
        }
        self.insert(&update.mesh);
        Ok(())
    }
}

fn edge_key(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

fn face_edges(face: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    (0..face.len()).map(move |i| (face[i], face[(i + 1) % face.len()]))
}
