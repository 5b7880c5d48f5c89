//! # Geogen Mesh
//!
//! Static mesh construction for embedding in graphics programs.
//!
//! ## Architecture
//!
//! ```text
//! GeometryKind → GeometryGenerator → builder / sphere → Mesh
//! ```
//!
//! ## Algorithms
//!
//! - **Quad builder**: two triangles per face, each flipped when its
//!   geometric normal disagrees with the declared face normal
//! - **Smooth normals**: per-vertex sum of incident triangle normals,
//!   area-weighted or equal-weighted
//! - **Sphere**: latitude/longitude rings with radial normals
//!
//! ## Usage
//!
//! ```rust
//! use geogen_mesh::builder::build;
//! use geogen_mesh::primitives::CUBE_FACES;
//!
//! let mesh = build(&CUBE_FACES, true);
//! assert_eq!(mesh.interleaved_f32().len(), 144);
//! assert_eq!(mesh.indices().len(), 36);
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod mesh;
pub mod primitives;

pub use builder::{build, build_with, BuildOptions, Face};
pub use error::MeshError;
pub use generator::{GeneratorSettings, GeometryGenerator, GeometryKind};
pub use mesh::{Mesh, NormalWeighting, Vertex};
