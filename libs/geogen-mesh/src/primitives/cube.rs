//! # Cube Primitive
//!
//! Fixed face table for an axis-aligned cube and the mesh built from it.

use config::constants::CUBE_HALF_EXTENT;
use glam::DVec3;

use crate::builder::{build_with, BuildOptions, Face};
use crate::mesh::Mesh;

const E: f64 = CUBE_HALF_EXTENT;

/// The six faces of a cube with corners at `±CUBE_HALF_EXTENT`.
///
/// Order: back (-Z), front (+Z), left (-X), right (+X), bottom (-Y), top (+Y).
/// Corners are listed per face without regard to winding; the builder fixes
/// the triangle order against each face normal.
pub const CUBE_FACES: [Face; 6] = [
    Face::new(
        DVec3::new(0.0, 0.0, -1.0),
        [
            DVec3::new(-E, -E, -E),
            DVec3::new(E, -E, -E),
            DVec3::new(E, E, -E),
            DVec3::new(-E, E, -E),
        ],
    ),
    Face::new(
        DVec3::new(0.0, 0.0, 1.0),
        [
            DVec3::new(-E, -E, E),
            DVec3::new(E, -E, E),
            DVec3::new(E, E, E),
            DVec3::new(-E, E, E),
        ],
    ),
    Face::new(
        DVec3::new(-1.0, 0.0, 0.0),
        [
            DVec3::new(-E, -E, -E),
            DVec3::new(-E, E, -E),
            DVec3::new(-E, E, E),
            DVec3::new(-E, -E, E),
        ],
    ),
    Face::new(
        DVec3::new(1.0, 0.0, 0.0),
        [
            DVec3::new(E, -E, -E),
            DVec3::new(E, E, -E),
            DVec3::new(E, E, E),
            DVec3::new(E, -E, E),
        ],
    ),
    Face::new(
        DVec3::new(0.0, -1.0, 0.0),
        [
            DVec3::new(-E, -E, -E),
            DVec3::new(E, -E, -E),
            DVec3::new(E, -E, E),
            DVec3::new(-E, -E, E),
        ],
    ),
    Face::new(
        DVec3::new(0.0, 1.0, 0.0),
        [
            DVec3::new(-E, E, -E),
            DVec3::new(E, E, -E),
            DVec3::new(E, E, E),
            DVec3::new(-E, E, E),
        ],
    ),
];

/// Creates the cube mesh.
///
/// # Returns
///
/// A mesh with 24 vertices (4 per face, unshared) and 12 triangles.
///
/// # Example
///
/// ```rust
/// use geogen_mesh::builder::BuildOptions;
/// use geogen_mesh::primitives::create_cube;
///
/// let mesh = create_cube(BuildOptions::default());
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(options: BuildOptions) -> Mesh {
    build_with(&CUBE_FACES, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::NormalWeighting;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_vertex_count() {
        let mesh = create_cube(BuildOptions::default());
        assert_eq!(mesh.vertex_count(), 24);
    }

    #[test]
    fn test_cube_triangle_count() {
        let mesh = create_cube(BuildOptions::default());
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn test_cube_centered() {
        let mesh = create_cube(BuildOptions::default());
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-1.0));
        assert_eq!(max, DVec3::splat(1.0));
    }

    #[test]
    fn test_cube_validates() {
        let mesh = create_cube(BuildOptions::default());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cube_faces_are_planar_on_their_axis() {
        for face in &CUBE_FACES {
            for corner in face.corners {
                assert_eq!(corner.dot(face.normal), E);
            }
        }
    }

    #[test]
    fn test_cube_triangles_face_outward() {
        let mesh = create_cube(BuildOptions::default());
        for &tri in mesh.triangles() {
            let centroid = tri
                .iter()
                .map(|&i| mesh.vertex(i).position)
                .sum::<DVec3>()
                / 3.0;
            assert!(mesh.triangle_normal(tri).dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_smooth_cube_keeps_face_normals() {
        // Vertices are unshared, so averaging only sees one face's triangles.
        let mesh = create_cube(BuildOptions {
            smooth: true,
            weighting: NormalWeighting::Area,
        });
        for (i, vertex) in mesh.vertices().iter().enumerate() {
            let declared = CUBE_FACES[i / 4].normal;
            assert_relative_eq!(vertex.normal.x, declared.x);
            assert_relative_eq!(vertex.normal.y, declared.y);
            assert_relative_eq!(vertex.normal.z, declared.z);
        }
    }

    #[test]
    fn test_weightings_agree_on_cube() {
        let area = create_cube(BuildOptions {
            smooth: true,
            weighting: NormalWeighting::Area,
        });
        let equal = create_cube(BuildOptions {
            smooth: true,
            weighting: NormalWeighting::Equal,
        });
        assert_eq!(area, equal);
    }
}
