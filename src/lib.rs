//! Deterministic sample-kernel generation for ambient-occlusion-style
//! hemisphere sampling.
//!
//! The crate produces three kinds of buffers for a consuming renderer:
//!
//! - a [`SampleKernel`]: direction vectors spiraled over the upper
//!   hemisphere with a prescribed magnitude falloff,
//! - a [`RotationSet`]: quantized rotation texels derived from an odd-order
//!   magic square (or a fixed uniform grid), used to decorrelate the kernel
//!   per pixel/tile,
//! - a [`LineVertexBuffer`]: the kernel projected through a tangent basis
//!   per rotation into renderer-facing line segments.
//!
//! All generation is pure and fully deterministic given its parameters;
//! buffers are recomputed wholesale whenever a parameter changes.
//!
//! # Example
//!
//! ```
//! use ao_kernel::{
//!     build_line_vertices, generate_rotation_set, generate_sample_kernel, RotationStrategy,
//! };
//!
//! let kernel = generate_sample_kernel(16, false).expect("positive count");
//! let rotations =
//!     generate_rotation_set(5, RotationStrategy::MagicSquare).expect("positive size");
//!
//! // One rotated copy of the kernel per rotation texel.
//! let lines = build_line_vertices(&kernel, &rotations);
//! assert_eq!(lines.num_segments(), 16 * 25);
//! ```

mod error;
mod hemisphere;
mod magic_square;
mod rotation;
mod texel;
mod transform;
pub mod util;

pub use error::KernelError;
pub use hemisphere::{KernelConfig, Placement, RadiusPolicy, SampleKernel};
pub use magic_square::MagicSquare;
pub use rotation::{RotationSet, RotationStrategy};
pub use texel::NoiseTexel;
pub use transform::LineVertexBuffer;

/// Generate the hemisphere sample kernel with default spiral settings.
pub fn generate_sample_kernel(
    count: usize,
    cosine_weighted: bool,
) -> Result<SampleKernel, KernelError> {
    SampleKernel::spiral(count, cosine_weighted)
}

/// Generate a sample kernel with explicit configuration.
pub fn generate_sample_kernel_with(
    count: usize,
    config: &KernelConfig,
) -> Result<SampleKernel, KernelError> {
    SampleKernel::generate(count, config)
}

/// Generate the rotation texel set for the given square size and strategy.
pub fn generate_rotation_set(
    size: usize,
    strategy: RotationStrategy,
) -> Result<RotationSet, KernelError> {
    RotationSet::generate(size, strategy)
}

/// Build renderer-facing line segment vertices from a kernel and rotation
/// set; an empty rotation set emits the kernel unrotated.
pub fn build_line_vertices(kernel: &SampleKernel, rotations: &RotationSet) -> LineVertexBuffer {
    LineVertexBuffer::build(kernel, rotations)
}
