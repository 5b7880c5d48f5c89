//! # Configuration Constants
//!
//! Centralized constants for the geometry generator. Geometry extents,
//! tessellation parameters, precision values, and the layout of the
//! generated header are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Geometry**: Default shape extents and tessellation parameters
//! - **Limits**: Bounds for user-supplied tessellation parameters
//! - **Output**: Layout of the generated header file

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Smallest triangle area (half the cross product length) considered
/// non-degenerate during mesh validation.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// let area = 0.5_f64;
/// assert!(area > DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Half edge length of the generated cube.
///
/// Cube corners sit at `±CUBE_HALF_EXTENT` on every axis.
///
/// # Example
///
/// ```rust
/// use config::constants::CUBE_HALF_EXTENT;
///
/// let edge_length = 2.0 * CUBE_HALF_EXTENT;
/// assert_eq!(edge_length, 2.0);
/// ```
pub const CUBE_HALF_EXTENT: f64 = 1.0;

/// Default sphere radius. Matches the cube so either mesh fits the same
/// camera setup.
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

/// Default number of longitudinal divisions (around the Y axis).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SPHERE_SECTORS, MIN_SPHERE_SECTORS};
///
/// assert!(DEFAULT_SPHERE_SECTORS >= MIN_SPHERE_SECTORS);
/// ```
pub const DEFAULT_SPHERE_SECTORS: u32 = 32;

/// Default number of latitudinal divisions (pole to pole).
pub const DEFAULT_SPHERE_STACKS: u32 = 16;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum longitudinal divisions. A ring needs at least 3 points to
/// enclose any area.
pub const MIN_SPHERE_SECTORS: u32 = 3;

/// Maximum longitudinal divisions.
pub const MAX_SPHERE_SECTORS: u32 = 256;

/// Minimum latitudinal divisions. Two stacks give a bipyramid.
pub const MIN_SPHERE_STACKS: u32 = 2;

/// Maximum latitudinal divisions.
pub const MAX_SPHERE_STACKS: u32 = 256;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Default path of the generated header, relative to the working directory.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_OUTPUT_PATH;
///
/// assert!(DEFAULT_OUTPUT_PATH.ends_with(".h"));
/// ```
pub const DEFAULT_OUTPUT_PATH: &str = "src/data.h";

/// Decimal places used when printing float literals, before trailing
/// zeros are stripped.
pub const FLOAT_DECIMALS: usize = 6;

/// Number of floats in one interleaved vertex (position xyz + normal xyz).
///
/// # Example
///
/// ```rust
/// use config::constants::FLOATS_PER_VERTEX;
///
/// let cube_vertices = 24;
/// assert_eq!(cube_vertices * FLOATS_PER_VERTEX, 144);
/// ```
pub const FLOATS_PER_VERTEX: usize = 6;

/// Float literals per line in the vertex array (one vertex per line).
pub const FLOATS_PER_LINE: usize = FLOATS_PER_VERTEX;

/// Index literals per line in the index array (one face of a cube per line).
pub const INDICES_PER_LINE: usize = 12;

/// Indentation of array elements in the generated header.
pub const ARRAY_INDENT: &str = "    ";

/// Name reported in the `// Generated by ...` header comment.
pub const GENERATOR_NAME: &str = "generate-geometry";
