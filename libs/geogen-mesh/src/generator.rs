//! # Geometry Generators
//!
//! A common interface over the built-in shapes and the name lookup used by
//! the command line to pick one.

use std::fmt;
use std::str::FromStr;

use config::constants::{DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_SECTORS, DEFAULT_SPHERE_STACKS};
use tracing::debug;

use crate::builder::BuildOptions;
use crate::error::MeshError;
use crate::mesh::{Mesh, NormalWeighting};
use crate::primitives::{create_cube, create_sphere};

/// Produces one mesh on demand.
pub trait GeometryGenerator {
    /// Which shape this generator builds.
    fn kind(&self) -> GeometryKind;

    /// Whether the produced normals are averaged per vertex.
    fn smooth_normals(&self) -> bool;

    /// Builds the mesh.
    fn generate(&self) -> Result<Mesh, MeshError>;
}

/// The built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Cube,
    Sphere,
}

impl GeometryKind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [GeometryKind; 2] = [GeometryKind::Sphere, GeometryKind::Cube];

    /// Lowercase name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
        }
    }

    /// Prefix of the emitted symbols (`cubeVertices`, `sphereIndices`, ...).
    pub fn symbol_prefix(self) -> &'static str {
        self.name()
    }

    /// Creates the generator for this kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geogen_mesh::generator::{GeneratorSettings, GeometryKind};
    ///
    /// let kind: GeometryKind = "Cube".parse().unwrap();
    /// let mesh = kind.generator(&GeneratorSettings::default()).generate().unwrap();
    /// assert_eq!(mesh.vertex_count(), 24);
    /// ```
    pub fn generator(self, settings: &GeneratorSettings) -> Box<dyn GeometryGenerator> {
        match self {
            Self::Cube => Box::new(CubeGenerator {
                options: BuildOptions {
                    smooth: settings.smooth,
                    weighting: settings.weighting,
                },
            }),
            Self::Sphere => Box::new(SphereGenerator {
                radius: settings.sphere_radius,
                sectors: settings.sphere_sectors,
                stacks: settings.sphere_stacks,
            }),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MeshError::unknown_geometry(s))
    }
}

/// Parameters shared by all generators; each one reads what it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub smooth: bool,
    pub weighting: NormalWeighting,
    pub sphere_radius: f64,
    pub sphere_sectors: u32,
    pub sphere_stacks: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            smooth: false,
            weighting: NormalWeighting::default(),
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            sphere_sectors: DEFAULT_SPHERE_SECTORS,
            sphere_stacks: DEFAULT_SPHERE_STACKS,
        }
    }
}

/// Builds the fixed cube face table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeGenerator {
    pub options: BuildOptions,
}

impl GeometryGenerator for CubeGenerator {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Cube
    }

    fn smooth_normals(&self) -> bool {
        self.options.smooth
    }

    fn generate(&self) -> Result<Mesh, MeshError> {
        Ok(create_cube(self.options))
    }
}

/// Builds a latitude/longitude sphere. Normals are always radial.
#[derive(Debug, Clone, Copy)]
pub struct SphereGenerator {
    pub radius: f64,
    pub sectors: u32,
    pub stacks: u32,
}

impl GeometryGenerator for SphereGenerator {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Sphere
    }

    fn smooth_normals(&self) -> bool {
        true
    }

    fn generate(&self) -> Result<Mesh, MeshError> {
        debug!(
            radius = self.radius,
            sectors = self.sectors,
            stacks = self.stacks,
            "generating sphere"
        );
        create_sphere(self.radius, self.sectors, self.stacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("cube".parse::<GeometryKind>().unwrap(), GeometryKind::Cube);
        assert_eq!("CUBE".parse::<GeometryKind>().unwrap(), GeometryKind::Cube);
        assert_eq!("Sphere".parse::<GeometryKind>().unwrap(), GeometryKind::Sphere);
        assert_eq!(" sphere ".parse::<GeometryKind>().unwrap(), GeometryKind::Sphere);
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        let err = "triangle".parse::<GeometryKind>().unwrap_err();
        assert!(matches!(err, MeshError::UnknownGeometry { ref name } if name == "triangle"));
        assert!(err.to_string().contains("triangle"));
    }

    #[test]
    fn test_kind_parse_rejects_empty() {
        assert!("".parse::<GeometryKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips_names() {
        for kind in GeometryKind::ALL {
            assert_eq!(kind.to_string().parse::<GeometryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_generator_reports_kind() {
        let settings = GeneratorSettings::default();
        for kind in GeometryKind::ALL {
            assert_eq!(kind.generator(&settings).kind(), kind);
        }
    }

    #[test]
    fn test_cube_generator_follows_smooth_setting() {
        let settings = GeneratorSettings {
            smooth: true,
            ..GeneratorSettings::default()
        };
        let generator = GeometryKind::Cube.generator(&settings);
        assert!(generator.smooth_normals());
        assert!(!GeometryKind::Cube
            .generator(&GeneratorSettings::default())
            .smooth_normals());
    }

    #[test]
    fn test_sphere_generator_uses_settings() {
        let settings = GeneratorSettings {
            sphere_sectors: 6,
            sphere_stacks: 3,
            ..GeneratorSettings::default()
        };
        let generator = GeometryKind::Sphere.generator(&settings);
        assert!(generator.smooth_normals());
        let mesh = generator.generate().unwrap();
        assert_eq!(mesh.vertex_count(), 4 * 6);
    }

    #[test]
    fn test_sphere_generator_propagates_invalid_parameters() {
        let settings = GeneratorSettings {
            sphere_radius: -1.0,
            ..GeneratorSettings::default()
        };
        let result = GeometryKind::Sphere.generator(&settings).generate();
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
    }
}
