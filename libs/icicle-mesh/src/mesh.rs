//! # Generated Mesh
//!
//! Vertex positions plus polygon connectivity, produced by the generator
//! and handed to the host as one value.

use glam::DVec3;
use std::collections::HashSet;

/// Outcome of [`GeneratedMesh::add_face`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceInsert {
    /// Face stored at this index
    Inserted(usize),
    /// A face over the same vertex set already exists
    Duplicate,
    /// Fewer than 3 distinct vertices, or an index out of bounds
    Degenerate,
}

impl FaceInsert {
    /// Returns true if the face was stored.
    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, FaceInsert::Inserted(_))
    }
}

/// A polygon mesh: positions and faces, no materials or UVs.
///
/// Faces are vertex index lists of length 3 or more. A face whose vertex
/// set matches an existing face is rejected rather than stored twice.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::GeneratedMesh;
/// use glam::DVec3;
///
/// let mut mesh = GeneratedMesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// assert!(mesh.add_face(&[a, b, c]).is_inserted());
/// assert!(!mesh.add_face(&[b, c, a]).is_inserted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratedMesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Polygon faces as vertex index lists
    faces: Vec<Vec<u32>>,
    /// Sorted vertex sets of stored faces
    face_keys: HashSet<Vec<u32>>,
}

impl GeneratedMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            face_keys: HashSet::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a polygon face by vertex indices.
    ///
    /// Faces with an out-of-bounds index, a repeated index or fewer than
    /// three vertices are refused as degenerate. Faces over an existing
    /// vertex set are refused as duplicates.
    pub fn add_face(&mut self, indices: &[u32]) -> FaceInsert {
        let vertex_count = self.vertices.len() as u32;
        if indices.len() < 3 || indices.iter().any(|&i| i >= vertex_count) {
            return FaceInsert::Degenerate;
        }

        let mut key = indices.to_vec();
        key.sort_unstable();
        if key.windows(2).any(|pair| pair[0] == pair[1]) {
            return FaceInsert::Degenerate;
        }
        if !self.face_keys.insert(key) {
            return FaceInsert::Duplicate;
        }

        self.faces.push(indices.to_vec());
        FaceInsert::Inserted(self.faces.len() - 1)
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        &self.faces[index]
    }

    /// Counts faces with exactly `sides` vertices.
    pub fn count_faces_with(&self, sides: usize) -> usize {
        self.faces.iter().filter(|f| f.len() == sides).count()
    }

    /// Merges another mesh into this one.
    ///
    /// Faces of `other` that duplicate a face already here are dropped.
    /// Returns the number of dropped faces.
    pub fn merge(&mut self, other: &GeneratedMesh) -> usize {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);

        let mut dropped = 0;
        for face in &other.faces {
            let shifted: Vec<u32> = face.iter().map(|i| i + offset).collect();
            if !self.add_face(&shifted).is_inserted() {
                dropped += 1;
            }
        }
        dropped
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - Every face has at least three distinct vertices
    ///
    /// Coincident positions are allowed; a zero-radius ring is a legal tip.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.faces.iter().all(|face| {
            if face.len() < 3 || face.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            let mut sorted = face.clone();
            sorted.sort_unstable();
            sorted.windows(2).all(|pair| pair[0] != pair[1])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> GeneratedMesh {
        let mut mesh = GeneratedMesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(&[0, 1, 2]);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = GeneratedMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = GeneratedMesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_face_rejects_duplicate_in_any_rotation() {
        let mut mesh = unit_triangle();
        assert_eq!(mesh.add_face(&[1, 2, 0]), FaceInsert::Duplicate);
        assert_eq!(mesh.add_face(&[2, 1, 0]), FaceInsert::Duplicate);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_add_face_rejects_degenerate() {
        let mut mesh = unit_triangle();
        assert_eq!(mesh.add_face(&[0, 0, 1]), FaceInsert::Degenerate);
        assert_eq!(mesh.add_face(&[0, 1]), FaceInsert::Degenerate);
        assert_eq!(mesh.add_face(&[0, 1, 7]), FaceInsert::Degenerate);
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut first = unit_triangle();
        let second = unit_triangle();
        let dropped = first.merge(&second);
        assert_eq!(dropped, 0);
        assert_eq!(first.vertex_count(), 6);
        assert_eq!(first.face_count(), 2);
        assert_eq!(first.face(1), &[3, 4, 5]);
    }

    #[test]
    fn test_validate_allows_coincident_positions() {
        let mut mesh = GeneratedMesh::new();
        for _ in 0..3 {
            mesh.add_vertex(DVec3::ZERO);
        }
        assert!(mesh.add_face(&[0, 1, 2]).is_inserted());
        assert!(mesh.validate());
    }
}
