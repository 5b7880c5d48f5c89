//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use config::constants::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_SECTORS, DEFAULT_SPHERE_STACKS,
};
use geogen_mesh::{GeneratorSettings, GeometryKind, NormalWeighting};

#[derive(Parser, Debug)]
#[command(name = "generate-geometry")]
#[command(about = "Generate cube or sphere mesh data as a C++ header")]
#[command(version)]
pub struct Cli {
    /// Geometry to generate: sphere or cube (case-insensitive)
    pub geometry: GeometryKind,

    /// Header file to write (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Print the header to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Average normals per vertex instead of per face (cube)
    #[arg(long)]
    pub smooth: bool,

    /// Triangle weighting for smooth normals: area or equal
    #[arg(long, default_value_t = NormalWeighting::Area)]
    pub weighting: NormalWeighting,

    /// Sphere radius
    #[arg(long, default_value_t = DEFAULT_SPHERE_RADIUS)]
    pub radius: f64,

    /// Sphere longitudinal divisions
    #[arg(long, default_value_t = DEFAULT_SPHERE_SECTORS)]
    pub sectors: u32,

    /// Sphere latitudinal divisions
    #[arg(long, default_value_t = DEFAULT_SPHERE_STACKS)]
    pub stacks: u32,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            smooth: self.smooth,
            weighting: self.weighting,
            sphere_radius: self.radius,
            sphere_sectors: self.sectors,
            sphere_stacks: self.stacks,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
