use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use ao_kernel::util::ScopedTimer;
use ao_kernel::{
    build_line_vertices, generate_rotation_set, generate_sample_kernel_with, KernelConfig,
    LineVertexBuffer, Placement, RadiusPolicy, RotationSet, RotationStrategy, SampleKernel,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliRotationStrategy {
    #[value(name = "magic-square")]
    MagicSquare,
    #[value(name = "uniform-grid")]
    UniformGrid,
    /// No rotations: emit the kernel unrotated.
    None,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliPlacement {
    Spiral,
    Banded,
}

impl From<CliPlacement> for Placement {
    fn from(value: CliPlacement) -> Self {
        match value {
            CliPlacement::Spiral => Placement::Spiral,
            CliPlacement::Banded => Placement::Banded,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliRadiusPolicy {
    Linear,
    Spherical,
}

impl From<CliRadiusPolicy> for RadiusPolicy {
    fn from(value: CliRadiusPolicy) -> Self {
        match value {
            CliRadiusPolicy::Linear => RadiusPolicy::Linear,
            CliRadiusPolicy::Spherical => RadiusPolicy::Spherical,
        }
    }
}

/// kernelgen - headless hemisphere sample kernel generator
#[derive(Parser, Debug)]
#[command(name = "kernelgen", version, about)]
struct Cli {
    /// Number of kernel samples to generate
    #[arg(long, default_value_t = 16)]
    samples: usize,

    /// Cosine-weight sample density toward the pole
    #[arg(long)]
    cosine_weight: bool,

    /// Rotation noise square size (coerced to the nearest odd value)
    #[arg(long, default_value_t = 5)]
    rotation_size: usize,

    /// Rotation texel source
    #[arg(long, value_enum, default_value_t = CliRotationStrategy::MagicSquare)]
    rotation_strategy: CliRotationStrategy,

    /// Angular placement of kernel samples
    #[arg(long, value_enum, default_value_t = CliPlacement::Spiral)]
    placement: CliPlacement,

    /// Hemisphere radius parameterization for the spiral placement
    #[arg(long, value_enum, default_value_t = CliRadiusPolicy::Linear)]
    radius_policy: CliRadiusPolicy,

    /// Interleaving stride for the sample magnitude ramp
    #[arg(long, default_value_t = 4)]
    scale_step: usize,

    /// Export generated buffers to file (supports .json and .json.gz)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = KernelConfig {
        placement: cli.placement.into(),
        cosine_weighted: cli.cosine_weight,
        radius_policy: cli.radius_policy.into(),
        scale_step: cli.scale_step,
    };

    let kernel = {
        let _t = ScopedTimer::info("sample kernel");
        match generate_sample_kernel_with(cli.samples, &config) {
            Ok(kernel) => kernel,
            Err(err) => {
                eprintln!("kernelgen: {}", err);
                return ExitCode::FAILURE;
            }
        }
    };

    let rotations = {
        let _t = ScopedTimer::info("rotation set");
        let result = match cli.rotation_strategy {
            CliRotationStrategy::MagicSquare => {
                generate_rotation_set(cli.rotation_size, RotationStrategy::MagicSquare)
            }
            CliRotationStrategy::UniformGrid => {
                generate_rotation_set(cli.rotation_size, RotationStrategy::UniformGrid)
            }
            CliRotationStrategy::None => Ok(RotationSet::empty()),
        };
        match result {
            Ok(rotations) => rotations,
            Err(err) => {
                eprintln!("kernelgen: {}", err);
                return ExitCode::FAILURE;
            }
        }
    };

    let lines = {
        let _t = ScopedTimer::info("line vertices");
        build_line_vertices(&kernel, &rotations)
    };

    println!(
        "Generated {} samples, {} rotation texels ({}x{}), {} line segments",
        kernel.len(),
        rotations.len(),
        rotations.side,
        rotations.side,
        lines.num_segments()
    );

    if let Some(path) = &cli.export {
        export_buffers(&cli, &kernel, &rotations, &lines, path);
    }

    ExitCode::SUCCESS
}

/// Export the generated buffers to a JSON file (optionally gzipped).
fn export_buffers(
    cli: &Cli,
    kernel: &SampleKernel,
    rotations: &RotationSet,
    lines: &LineVertexBuffer,
    path: &Path,
) {
    let _t = ScopedTimer::info("export");

    let data = KernelExport {
        metadata: Metadata {
            samples: kernel.len(),
            cosine_weighted: cli.cosine_weight,
            placement: format!("{:?}", cli.placement),
            radius_policy: format!("{:?}", cli.radius_policy),
            scale_step: cli.scale_step,
            rotation_strategy: format!("{:?}", cli.rotation_strategy),
            rotation_side: rotations.side,
            num_segments: lines.num_segments(),
        },
        kernel: kernel.samples.iter().map(|s| s.to_array()).collect(),
        rotations: rotations.texels.iter().map(|t| [t.x, t.y, t.z]).collect(),
        line_vertices: lines.vertices.iter().map(|v| v.to_array()).collect(),
    };

    let file = File::create(path).expect("Failed to create export file");
    let is_gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);

    if is_gzip {
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(encoder, &data).expect("Failed to write JSON");
    } else {
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &data).expect("Failed to write JSON");
    }

    println!("Exported to {}", path.display());
}

#[derive(Serialize)]
struct KernelExport {
    metadata: Metadata,
    kernel: Vec<[f32; 3]>,
    rotations: Vec<[u8; 3]>,
    line_vertices: Vec<[f32; 3]>,
}

#[derive(Serialize)]
struct Metadata {
    samples: usize,
    cosine_weighted: bool,
    placement: String,
    radius_policy: String,
    scale_step: usize,
    rotation_strategy: String,
    rotation_side: usize,
    num_segments: usize,
}
