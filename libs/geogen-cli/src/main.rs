//! generate-geometry - mesh header generator
//!
//! Builds the requested shape and writes it as `constexpr` arrays to a C++
//! header (default `src/data.h`).

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use geogen_header::{render_header, HeaderSpec};
use tracing::{debug, info};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout free for --stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level().into()),
        )
        .init();

    let generator = cli.geometry.generator(&cli.settings());
    let mesh = generator
        .generate()
        .with_context(|| format!("Failed to generate {} mesh", cli.geometry))?;
    debug!(
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated {}",
        cli.geometry
    );

    let header = render_header(&mesh, &HeaderSpec::for_generator(generator.as_ref()))
        .context("Failed to render header")?;

    if cli.stdout {
        std::io::stdout()
            .write_all(header.as_bytes())
            .context("Failed to write header to stdout")?;
        return Ok(());
    }

    write_header(&cli.output, &header)?;
    println!("Generated {} data -> {}", cli.geometry, cli.output.display());
    Ok(())
}

/// Writes the header, creating missing parent directories.
fn write_header(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write header: {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote header");
    Ok(())
}
