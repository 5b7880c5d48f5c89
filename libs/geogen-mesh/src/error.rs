//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Geometry name did not match any known generator
    #[error("unknown geometry type '{name}' (expected 'cube' or 'sphere')")]
    UnknownGeometry { name: String },

    /// Normal weighting name did not match any known scheme
    #[error("unknown normal weighting '{name}' (expected 'area' or 'equal')")]
    UnknownWeighting { name: String },

    /// Generator parameter outside its accepted range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl MeshError {
    /// Creates an unknown geometry error.
    pub fn unknown_geometry(name: impl Into<String>) -> Self {
        Self::UnknownGeometry { name: name.into() }
    }

    /// Creates an unknown weighting error.
    pub fn unknown_weighting(name: impl Into<String>) -> Self {
        Self::UnknownWeighting { name: name.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
