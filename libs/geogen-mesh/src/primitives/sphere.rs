//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use std::f64::consts::PI;

use config::constants::{MAX_SPHERE_SECTORS, MAX_SPHERE_STACKS, MIN_SPHERE_SECTORS, MIN_SPHERE_STACKS};
use glam::DVec3;

use crate::builder::orient_triangle;
use crate::error::MeshError;
use crate::mesh::{Mesh, Vertex};

/// Creates a sphere mesh centered at the origin, Y axis through the poles.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `sectors` - Number of longitudinal divisions
/// * `stacks` - Number of latitudinal divisions, pole to pole
///
/// # Returns
///
/// A mesh with `(stacks + 1) * sectors` vertices and
/// `2 * sectors * (stacks - 1)` triangles. Normals point radially outward.
///
/// # Algorithm
///
/// - Ring `i` sits at polar angle `phi = PI * i / stacks`, so the first and
///   last rings collapse onto the poles
/// - Each band between two rings is split into quads of two triangles
/// - The triangle of a quad that touches a pole with two corners has zero
///   area and is skipped
/// - Every triangle is oriented against its centroid, which points outward
///
/// # Example
///
/// ```rust
/// use geogen_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(1.0, 8, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 5 * 8);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 3);
/// ```
pub fn create_sphere(radius: f64, sectors: u32, stacks: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(MeshError::invalid_parameter(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if !(MIN_SPHERE_SECTORS..=MAX_SPHERE_SECTORS).contains(&sectors) {
        return Err(MeshError::invalid_parameter(format!(
            "Sphere sectors must be between {} and {}: {}",
            MIN_SPHERE_SECTORS, MAX_SPHERE_SECTORS, sectors
        )));
    }

    if !(MIN_SPHERE_STACKS..=MAX_SPHERE_STACKS).contains(&stacks) {
        return Err(MeshError::invalid_parameter(format!(
            "Sphere stacks must be between {} and {}: {}",
            MIN_SPHERE_STACKS, MAX_SPHERE_STACKS, stacks
        )));
    }

    let ring_count = stacks + 1;
    let mut mesh = Mesh::with_capacity(
        (ring_count * sectors) as usize,
        (2 * sectors * (stacks - 1)) as usize,
    );

    for ring in 0..ring_count {
        // Polar angle (0 = top, PI = bottom)
        let phi = PI * ring as f64 / stacks as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let ring_radius = radius * sin_phi;
        let y = radius * cos_phi;

        for sector in 0..sectors {
            let theta = 2.0 * PI * sector as f64 / sectors as f64;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let position = DVec3::new(ring_radius * cos_theta, y, ring_radius * sin_theta);
            mesh.add_vertex(Vertex::new(position, position.normalize_or_zero()));
        }
    }

    let last_band = stacks - 1;
    for ring in 0..stacks {
        for sector in 0..sectors {
            let next = (sector + 1) % sectors;

            let i0 = ring * sectors + sector;
            let i1 = ring * sectors + next;
            let i2 = (ring + 1) * sectors + sector;
            let i3 = (ring + 1) * sectors + next;

            if ring != 0 {
                add_outward_triangle(&mut mesh, [i0, i1, i3]);
            }
            if ring != last_band {
                add_outward_triangle(&mut mesh, [i0, i3, i2]);
            }
        }
    }

    Ok(mesh)
}

fn add_outward_triangle(mesh: &mut Mesh, tri: [u32; 3]) {
    let centroid = tri
        .iter()
        .map(|&i| mesh.vertex(i).position)
        .sum::<DVec3>()
        / 3.0;
    let [a, b, c] = orient_triangle(mesh, tri, centroid);
    mesh.add_triangle(a, b, c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_basic() {
        let mesh = create_sphere(5.0, 16, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 16);
        assert_eq!(mesh.triangle_count(), 2 * 16 * 7);
    }

    #[test]
    fn test_sphere_minimal_resolution() {
        let mesh = create_sphere(1.0, 3, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangle_count(), 6);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_validates() {
        let mesh = create_sphere(5.0, 16, 8).unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_bounding_box() {
        let radius = 5.0;
        let mesh = create_sphere(radius, 32, 16).unwrap();
        let (min, max) = mesh.bounding_box();

        assert_relative_eq!(max.y, radius);
        assert_relative_eq!(min.y, -radius);
        assert!(min.x >= -radius - 1e-9);
        assert!(min.z >= -radius - 1e-9);
        assert!(max.x <= radius + 1e-9);
        assert!(max.z <= radius + 1e-9);
    }

    #[test]
    fn test_sphere_normals_are_radial_unit_vectors() {
        let radius = 2.5;
        let mesh = create_sphere(radius, 12, 6).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.normal.length(), 1.0, epsilon = 1e-12);
            let radial = v.position / radius;
            assert_relative_eq!(v.normal.dot(radial), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sphere_triangles_face_outward() {
        let mesh = create_sphere(1.0, 24, 12).unwrap();
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
    fn test_sphere_invalid_radius() {
        assert!(create_sphere(0.0, 16, 8).is_err());
        assert!(create_sphere(-5.0, 16, 8).is_err());
        assert!(create_sphere(f64::NAN, 16, 8).is_err());
    }

    #[test]
    fn test_sphere_too_few_sectors() {
        let result = create_sphere(5.0, 2, 8);
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
    }

    #[test]
    fn test_sphere_too_few_stacks() {
        let result = create_sphere(5.0, 16, 1);
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
    }

    #[test]
    fn test_sphere_too_many_sectors() {
        assert!(create_sphere(5.0, MAX_SPHERE_SECTORS + 1, 8).is_err());
    }

    #[test]
    fn test_sphere_high_resolution() {
        let mesh = create_sphere(10.0, 64, 32).unwrap();
        assert!(mesh.vertex_count() > 100);
        assert!(mesh.validate().is_ok());
    }
}
