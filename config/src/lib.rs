//! # Config Crate
//!
//! Centralized configuration constants for the geometry generator.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FLOAT_DECIMALS, DEFAULT_SPHERE_SECTORS, MIN_SPHERE_SECTORS};
//!
//! let formatted = format!("{:.*}", FLOAT_DECIMALS, 0.5_f32);
//! assert_eq!(formatted, "0.500000");
//!
//! let sectors = 2_u32.max(MIN_SPHERE_SECTORS);
//! assert!(sectors <= DEFAULT_SPHERE_SECTORS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Output Stable**: Formatting constants define the generated header layout
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
