//! # Geogen Header
//!
//! Renders a [`geogen_mesh::Mesh`] as a C++ header of `constexpr std::array`
//! declarations, ready to `#include` into a graphics program.
//!
//! ## Output Layout
//!
//! ```text
//! #pragma once
//!
//! #include <array>
//!
//! // Generated by generate-geometry (cube)
//! constexpr std::array<float, 144> cubeVertices = { ... };   // px py pz nx ny nz
//!
//! constexpr std::array<unsigned int, 36> cubeIndices = { ... };
//!
//! // Aliases for stable names (so every generator provides the same symbols)
//! constexpr auto sphereVertices = cubeVertices;
//! constexpr auto sphereIndices = cubeIndices;
//!
//! // Vertex count: 24
//! // Index count : 36
//! // Smooth normals: false
//! ```

pub mod error;
pub mod header;
pub mod literal;

pub use error::EmitError;
pub use header::{render_header, HeaderSpec};
pub use literal::{format_float, write_float_array, write_uint_array};
