//! # Mesh Data Structure
//!
//! Core mesh representation: vertices carrying a position and a normal,
//! plus triangle indices.

use std::fmt;
use std::str::FromStr;

use config::constants::{DEGENERATE_AREA_EPSILON, FLOATS_PER_VERTEX};
use glam::DVec3;

use crate::error::MeshError;

/// A mesh vertex: position plus shading normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: DVec3,
    pub normal: DVec3,
}

impl Vertex {
    /// Creates a vertex from a position and a normal.
    pub const fn new(position: DVec3, normal: DVec3) -> Self {
        Self { position, normal }
    }
}

/// How triangle normals are weighted when averaging smooth vertex normals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalWeighting {
    /// Sum unnormalized triangle normals, so larger triangles pull harder.
    #[default]
    Area,
    /// Sum unit triangle normals, every incident triangle counts once.
    Equal,
}

impl NormalWeighting {
    /// Returns the lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Equal => "equal",
        }
    }
}

impl fmt::Display for NormalWeighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalWeighting {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "area" => Ok(Self::Area),
            "equal" => Ok(Self::Equal),
            _ => Err(MeshError::unknown_weighting(s)),
        }
    }
}

/// A triangle mesh with per-vertex normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when flattening for output.
///
/// # Example
///
/// ```rust
/// use geogen_mesh::{Mesh, Vertex};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vertex::new(DVec3::ZERO, DVec3::Z));
/// mesh.add_vertex(Vertex::new(DVec3::X, DVec3::Z));
/// mesh.add_vertex(Vertex::new(DVec3::Y, DVec3::Z));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.index_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of indices (3 per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Vertex {
        self.vertices[index as usize]
    }

    /// Geometric normal of a triangle: `(v1 - v0) × (v2 - v0)`.
    ///
    /// Not normalized; its length is twice the triangle's area.
    pub fn triangle_normal(&self, tri: [u32; 3]) -> DVec3 {
        let v0 = self.vertices[tri[0] as usize].position;
        let v1 = self.vertices[tri[1] as usize].position;
        let v2 = self.vertices[tri[2] as usize].position;
        (v1 - v0).cross(v2 - v0)
    }

    /// Replaces every vertex normal with the normalized sum of the normals
    /// of the triangles that reference it.
    ///
    /// A vertex whose contributions cancel exactly (or that no triangle
    /// references) ends up with the zero vector.
    pub fn smooth_normals(&mut self, weighting: NormalWeighting) {
        let mut sums = vec![DVec3::ZERO; self.vertices.len()];

        for &tri in &self.triangles {
            let normal = match weighting {
                NormalWeighting::Area => self.triangle_normal(tri),
                NormalWeighting::Equal => self.triangle_normal(tri).normalize_or_zero(),
            };
            for index in tri {
                sums[index as usize] += normal;
            }
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(sums) {
            vertex.normal = sum.normalize_or_zero();
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..].iter().fold(
            (first.position, first.position),
            |(min, max), v| (min.min(v.position), max.max(v.position)),
        )
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are in range
    /// - No triangle repeats an index
    /// - No zero-area triangles
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;

        for (i, &tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&index| index >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {} references {:?} but the mesh has {} vertices",
                    i, tri, vertex_count
                )));
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {} repeats an index: {:?}",
                    i, tri
                )));
            }

            let area = 0.5 * self.triangle_normal(tri).length();
            if area < DEGENERATE_AREA_EPSILON {
                return Err(MeshError::degenerate(format!(
                    "triangle {} has zero area: {:?}",
                    i, tri
                )));
            }
        }

        Ok(())
    }

    /// Exports vertices as an interleaved f32 array.
    ///
    /// Returns `[px, py, pz, nx, ny, nz, ...]`, six floats per vertex.
    pub fn interleaved_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * FLOATS_PER_VERTEX);
        for v in &self.vertices {
            result.extend_from_slice(&[
                v.position.x as f32,
                v.position.y as f32,
                v.position.z as f32,
                v.normal.x as f32,
                v.normal.y as f32,
                v.normal.z as f32,
            ]);
        }
        result
    }

    /// Exports triangle indices as a flat u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
