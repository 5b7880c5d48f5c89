//! # Primitives
//!
//! Mesh generation for the built-in shapes (cube, sphere).

pub mod cube;
pub mod sphere;

pub use cube::{create_cube, CUBE_FACES};
pub use sphere::create_sphere;
