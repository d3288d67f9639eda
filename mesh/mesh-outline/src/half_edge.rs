//! Half-edge triangle mesh with boundary detection.
//!
//! An arena representation: vertices and half-edges live in contiguous
//! arrays and reference each other by index. Raw input vertex indices
//! are interned into a dense range in first-seen order, and the
//! bidirectional mapping is kept so diagnostics can refer back to the
//! input.

// Vertex and half-edge counts stay within u32 for supported meshes
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use nalgebra::Point3;
use tracing::debug;

use crate::error::{OutlineError, OutlineResult};

/// One directed edge of a triangle face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    /// Dense index of the vertex this half-edge leaves.
    pub origin: u32,
    /// Opposite half-edge on the neighboring face, if the edge is
    /// shared.
    pub twin: Option<u32>,
    /// Next half-edge around the same face.
    pub next: u32,
}

/// An indexed triangle mesh with half-edge adjacency.
///
/// Construction interns the raw vertex indices referenced by the faces
/// into a dense range (first-seen order) and links opposite half-edges
/// as twins. A half-edge without a twin lies on the mesh boundary.
///
/// Non-manifold input is rejected: an edge shared by more than two
/// faces necessarily repeats a directed edge, which fails construction
/// with [`OutlineError::InconsistentWinding`], as do neighboring faces
/// wound in opposite directions.
#[derive(Debug, Clone)]
pub struct HalfEdgeMesh {
    vertices: Vec<Point3<f64>>,
    half_edges: Vec<HalfEdge>,
    raw_to_dense: HashMap<u32, u32>,
    dense_to_raw: Vec<u32>,
}

impl HalfEdgeMesh {
    /// Build a half-edge mesh from shared vertex positions and faces.
    ///
    /// `faces` holds raw indices into `positions`; every face must have
    /// exactly three of them. Only vertices actually referenced by a
    /// face are interned.
    ///
    /// # Errors
    ///
    /// - [`OutlineError::NonTriangularFace`] if a face does not have
    ///   exactly three vertices
    /// - [`OutlineError::DegenerateFace`] if a face repeats a vertex
    /// - [`OutlineError::InvalidIndex`] if a face references a vertex
    ///   outside `positions`
    /// - [`OutlineError::InconsistentWinding`] if a directed edge
    ///   appears twice
    ///
    /// No partial mesh is produced: the first offending face aborts
    /// construction.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_outline::HalfEdgeMesh;
    /// use nalgebra::Point3;
    ///
    /// let positions = [
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];
    ///
    /// let mesh = HalfEdgeMesh::from_faces(&positions, &faces).unwrap();
    /// assert_eq!(mesh.vertex_count(), 4);
    /// assert_eq!(mesh.half_edge_count(), 6);
    /// // The shared diagonal is twinned, the four rim edges are not
    /// assert_eq!(mesh.boundary_half_edges().count(), 4);
    /// ```
    pub fn from_faces(positions: &[Point3<f64>], faces: &[Vec<u32>]) -> OutlineResult<Self> {
        let mut mesh = Self {
            vertices: Vec::new(),
            half_edges: Vec::with_capacity(faces.len() * 3),
            raw_to_dense: HashMap::new(),
            dense_to_raw: Vec::new(),
        };
        let mut directed: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3);

        for (face, indices) in faces.iter().enumerate() {
            if indices.len() != 3 {
                return Err(OutlineError::NonTriangularFace {
                    face,
                    arity: indices.len(),
                });
            }

            let mut corners = [0u32; 3];
            for (slot, &raw) in corners.iter_mut().zip(indices) {
                *slot = mesh.intern(raw, positions)?;
            }
            if corners[0] == corners[1] || corners[1] == corners[2] || corners[2] == corners[0] {
                return Err(OutlineError::DegenerateFace { face });
            }

            let base = mesh.half_edges.len() as u32;
            for k in 0..3 {
                let origin = corners[k];
                let dest = corners[(k + 1) % 3];
                let id = base + k as u32;

                let twin = directed.get(&(dest, origin)).copied();
                if directed.insert((origin, dest), id).is_some() {
                    return Err(OutlineError::InconsistentWinding {
                        from: mesh.dense_to_raw[origin as usize],
                        to: mesh.dense_to_raw[dest as usize],
                    });
                }

                mesh.half_edges.push(HalfEdge {
                    origin,
                    twin,
                    next: base + ((k + 1) % 3) as u32,
                });
                if let Some(t) = twin {
                    mesh.half_edges[t as usize].twin = Some(id);
                }
            }
        }

        debug!(
            vertices = mesh.vertices.len(),
            half_edges = mesh.half_edges.len(),
            "Built half-edge mesh"
        );
        Ok(mesh)
    }

    fn intern(&mut self, raw: u32, positions: &[Point3<f64>]) -> OutlineResult<u32> {
        if let Some(&dense) = self.raw_to_dense.get(&raw) {
            return Ok(dense);
        }
        let Some(&position) = positions.get(raw as usize) else {
            return Err(OutlineError::InvalidIndex {
                index: raw,
                vertex_count: positions.len(),
            });
        };
        let dense = self.vertices.len() as u32;
        self.vertices.push(position);
        self.raw_to_dense.insert(raw, dense);
        self.dense_to_raw.push(raw);
        Ok(dense)
    }

    /// Number of interned vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges (three per face).
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.half_edges.len() / 3
    }

    /// Position of a dense vertex.
    #[must_use]
    pub fn position(&self, vertex: u32) -> Point3<f64> {
        self.vertices[vertex as usize]
    }

    /// A half-edge by id.
    #[must_use]
    pub fn half_edge(&self, id: u32) -> &HalfEdge {
        &self.half_edges[id as usize]
    }

    /// Dense index of the vertex a half-edge points to.
    #[must_use]
    pub fn destination(&self, id: u32) -> u32 {
        self.half_edges[self.half_edges[id as usize].next as usize].origin
    }

    /// Whether a half-edge lies on the boundary.
    #[must_use]
    pub fn is_boundary(&self, id: u32) -> bool {
        self.half_edges[id as usize].twin.is_none()
    }

    /// Ids of all boundary half-edges, in construction order.
    pub fn boundary_half_edges(&self) -> impl Iterator<Item = u32> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.twin.is_none())
            .map(|(id, _)| id as u32)
    }

    /// Raw input index of a dense vertex.
    #[must_use]
    pub fn raw_index(&self, vertex: u32) -> u32 {
        self.dense_to_raw[vertex as usize]
    }

    /// Dense index a raw input index was interned to, if any.
    #[must_use]
    pub fn dense_index(&self, raw: u32) -> Option<u32> {
        self.raw_to_dense.get(&raw).copied()
    }
}
