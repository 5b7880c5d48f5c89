//! # Header Rendering
//!
//! Lays out a complete generated header: preamble, vertex and index arrays,
//! aliases for the symbols of the other geometry kinds, and a short summary.

use std::fmt::Write;

use config::constants::{FLOATS_PER_LINE, GENERATOR_NAME, INDICES_PER_LINE};
use geogen_mesh::{GeometryGenerator, GeometryKind, Mesh};
use tracing::debug;

use crate::error::EmitError;
use crate::literal::{is_identifier, write_float_array, write_uint_array};

/// What to call the emitted symbols and what to report about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    /// Prefix of the declared arrays (`<prefix>Vertices`, `<prefix>Indices`).
    pub prefix: String,
    /// Prefixes declared as aliases of the generated arrays.
    pub aliases: Vec<String>,
    /// Shown in the `// Generated by` line.
    pub source: String,
    /// Reported in the summary.
    pub smooth: bool,
}

impl HeaderSpec {
    /// Symbols for `kind`, aliased under every other kind's names so the
    /// consuming program compiles whichever generator ran last.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geogen_header::HeaderSpec;
    /// use geogen_mesh::GeometryKind;
    ///
    /// let spec = HeaderSpec::for_kind(GeometryKind::Cube, false);
    /// assert_eq!(spec.prefix, "cube");
    /// assert_eq!(spec.aliases, vec!["sphere".to_string()]);
    /// ```
    pub fn for_kind(kind: GeometryKind, smooth: bool) -> Self {
        Self {
            prefix: kind.symbol_prefix().to_string(),
            aliases: GeometryKind::ALL
                .into_iter()
                .filter(|other| *other != kind)
                .map(|other| other.symbol_prefix().to_string())
                .collect(),
            source: format!("{} ({})", GENERATOR_NAME, kind),
            smooth,
        }
    }

    /// Symbols and summary for what `generator` produces.
    pub fn for_generator(generator: &dyn GeometryGenerator) -> Self {
        Self::for_kind(generator.kind(), generator.smooth_normals())
    }

    pub fn vertices_symbol(&self) -> String {
        format!("{}Vertices", self.prefix)
    }

    pub fn indices_symbol(&self) -> String {
        format!("{}Indices", self.prefix)
    }
}

/// Renders the full header text for `mesh`.
///
/// # Example
///
/// ```rust
/// use geogen_header::{render_header, HeaderSpec};
/// use geogen_mesh::{build, primitives::CUBE_FACES, GeometryKind};
///
/// let mesh = build(&CUBE_FACES, false);
/// let text = render_header(&mesh, &HeaderSpec::for_kind(GeometryKind::Cube, false)).unwrap();
/// assert!(text.starts_with("#pragma once\n"));
/// assert!(text.contains("constexpr std::array<float, 144> cubeVertices = {"));
/// assert!(text.contains("constexpr auto sphereIndices = cubeIndices;"));
/// ```
pub fn render_header(mesh: &Mesh, spec: &HeaderSpec) -> Result<String, EmitError> {
    for alias in &spec.aliases {
        if !is_identifier(alias) {
            return Err(EmitError::invalid_identifier(alias.as_str()));
        }
    }

    let vertices = spec.vertices_symbol();
    let indices = spec.indices_symbol();
    let mut out = String::new();

    writeln!(out, "#pragma once")?;
    writeln!(out)?;
    writeln!(out, "#include <array>")?;
    writeln!(out)?;
    writeln!(out, "// Generated by {}", spec.source)?;
    write_float_array(&mut out, &vertices, &mesh.interleaved_f32(), FLOATS_PER_LINE)?;
    writeln!(out)?;
    write_uint_array(&mut out, &indices, &mesh.indices(), INDICES_PER_LINE)?;

    if !spec.aliases.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "// Aliases for stable names (so every generator provides the same symbols)"
        )?;
        for alias in &spec.aliases {
            writeln!(out, "constexpr auto {}Vertices = {};", alias, vertices)?;
            writeln!(out, "constexpr auto {}Indices = {};", alias, indices)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "// Vertex count: {}", mesh.vertex_count())?;
    writeln!(out, "// Index count : {}", mesh.index_count())?;
    writeln!(out, "// Smooth normals: {}", spec.smooth)?;

    debug!(bytes = out.len(), symbol = %vertices, "rendered header");
    Ok(out)
}
