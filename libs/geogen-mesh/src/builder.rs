//! # Quad Face Builder
//!
//! Turns a table of quad faces into a triangle mesh. Each face contributes
//! its own four vertices and two triangles whose winding is corrected to
//! agree with the face's declared normal.

use glam::DVec3;
use tracing::debug;

use crate::mesh::{Mesh, NormalWeighting, Vertex};

/// A planar quad: outward normal plus four corners.
///
/// Corners are expected counter-clockwise when viewed from outside, but the
/// builder corrects triangles authored in either order. The normal is only
/// used as a direction reference; its length does not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub normal: DVec3,
    pub corners: [DVec3; 4],
}

impl Face {
    pub const fn new(normal: DVec3, corners: [DVec3; 4]) -> Self {
        Self { normal, corners }
    }
}

/// Options controlling [`build_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Replace per-face normals with averaged per-vertex normals.
    pub smooth: bool,
    /// Weighting used when `smooth` is set.
    pub weighting: NormalWeighting,
}

/// Corner partition of a quad into two triangles.
const QUAD_TRIANGLES: [[u32; 3]; 2] = [[0, 1, 2], [2, 3, 0]];

/// Builds a mesh from quad faces with area-weighted smoothing.
///
/// # Example
///
/// ```rust
/// use geogen_mesh::builder::build;
/// use geogen_mesh::primitives::CUBE_FACES;
///
/// let mesh = build(&CUBE_FACES, false);
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// ```
pub fn build(faces: &[Face], smooth: bool) -> Mesh {
    build_with(
        faces,
        BuildOptions {
            smooth,
            ..BuildOptions::default()
        },
    )
}

/// Builds a mesh from quad faces.
///
/// Vertices come out in face-then-corner order, indices in
/// face-then-triangle-then-corner order.
pub fn build_with(faces: &[Face], options: BuildOptions) -> Mesh {
    let mut mesh = Mesh::with_capacity(faces.len() * 4, faces.len() * 2);
    let mut flipped = 0usize;

    for face in faces {
        let base = mesh.vertex_count() as u32;
        for &corner in &face.corners {
            mesh.add_vertex(Vertex::new(corner, face.normal));
        }

        for local in QUAD_TRIANGLES {
            let tri = local.map(|i| base + i);
            let oriented = orient_triangle(&mesh, tri, face.normal);
            if oriented != tri {
                flipped += 1;
            }
            mesh.add_triangle(oriented[0], oriented[1], oriented[2]);
        }
    }

    if options.smooth {
        mesh.smooth_normals(options.weighting);
    }

    debug!(
        faces = faces.len(),
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        flipped,
        smooth = options.smooth,
        "built quad mesh"
    );

    mesh
}

/// Returns `tri` with its winding reversed if its geometric normal points
/// away from `reference`.
///
/// The second and third index are swapped; the first stays in place.
/// Triangles perpendicular to `reference` are left as they are.
pub fn orient_triangle(mesh: &Mesh, tri: [u32; 3], reference: DVec3) -> [u32; 3] {
    if mesh.triangle_normal(tri).dot(reference) < 0.0 {
        [tri[0], tri[2], tri[1]]
    } else {
        tri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_quad(corners: [DVec3; 4]) -> Face {
        Face::new(DVec3::Y, corners)
    }

    #[test]
    fn test_single_face_counts() {
        let face = floor_quad([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
        ]);
        let mesh = build(&[face], false);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_correctly_wound_face_is_untouched() {
        // Counter-clockwise seen from +Y
        let face = floor_quad([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
        ]);
        let mesh = build(&[face], false);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [2, 3, 0]]);
    }

    #[test]
    fn test_mis_wound_face_is_flipped() {
        // Clockwise seen from +Y
        let face = floor_quad([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ]);
        let mesh = build(&[face], false);
        assert_eq!(mesh.triangles(), &[[0, 2, 1], [2, 0, 3]]);
        for &tri in mesh.triangles() {
            assert!(mesh.triangle_normal(tri).dot(DVec3::Y) > 0.0);
        }
    }

    #[test]
    fn test_normal_length_is_irrelevant() {
        let corners = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let unit = build(&[Face::new(DVec3::Y, corners)], false);
        let long = build(&[Face::new(DVec3::Y * 40.0, corners)], false);
        assert_eq!(unit.triangles(), long.triangles());
    }

    #[test]
    fn test_vertices_carry_face_normal() {
        let normal = DVec3::new(0.0, 2.0, 0.0);
        let face = Face::new(
            normal,
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 0.0),
            ],
        );
        let mesh = build(&[face], false);
        for (vertex, corner) in mesh.vertices().iter().zip(face.corners) {
            assert_eq!(vertex.position, corner);
            assert_eq!(vertex.normal, normal);
        }
    }

    #[test]
    fn test_smooth_single_face_is_unit_face_normal() {
        let face = Face::new(
            DVec3::new(0.0, 2.0, 0.0),
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 0.0),
            ],
        );
        let mesh = build(&[face], true);
        for vertex in mesh.vertices() {
            assert_eq!(vertex.normal, DVec3::Y);
        }
    }

    #[test]
    fn test_empty_face_list() {
        let mesh = build(&[], true);
        assert!(mesh.is_empty());
        assert_eq!(mesh.index_count(), 0);
    }

    #[test]
    fn test_orient_triangle_perpendicular_reference_keeps_order() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::new(DVec3::ZERO, DVec3::ZERO));
        mesh.add_vertex(Vertex::new(DVec3::X, DVec3::ZERO));
        mesh.add_vertex(Vertex::new(DVec3::Y, DVec3::ZERO));
        assert_eq!(orient_triangle(&mesh, [0, 1, 2], DVec3::X), [0, 1, 2]);
        assert_eq!(orient_triangle(&mesh, [0, 1, 2], -DVec3::Z), [0, 2, 1]);
    }
}
