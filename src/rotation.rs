use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::KernelError;
use crate::magic_square::MagicSquare;
use crate::texel::NoiseTexel;

/// Source used to produce kernel rotation texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStrategy {
    /// Angles driven by magic-square cell values, decorrelating neighboring
    /// texels while keeping the angle set exhaustive.
    MagicSquare,
    /// Fixed 4×4 grid with an interleaved angle index.
    UniformGrid,
}

/// An ordered set of quantized rotation vectors, laid out as a tileable
/// `side × side` noise texture in row-major order.
///
/// Each texel decodes to a unit vector in the XY plane; the consuming
/// renderer uses one texel per pixel/tile to rotate the sample kernel.
#[derive(Debug, Clone)]
pub struct RotationSet {
    /// Edge length of the square texel grid.
    pub side: usize,
    /// Texels in row-major order, `side²` entries.
    pub texels: Vec<NoiseTexel>,
}

impl RotationSet {
    /// Produce a rotation set with the given strategy.
    ///
    /// `size` is the requested square order for
    /// [`RotationStrategy::MagicSquare`] (coerced to odd, so the output
    /// holds `normalize(size)²` texels); the uniform grid is fixed at 4×4
    /// and ignores it.
    pub fn generate(size: usize, strategy: RotationStrategy) -> Result<Self, KernelError> {
        match strategy {
            RotationStrategy::MagicSquare => Self::from_magic_square(size),
            RotationStrategy::UniformGrid => Ok(Self::uniform_grid()),
        }
    }

    /// A rotation set with no texels, selecting the unrotated transform path.
    pub fn empty() -> Self {
        Self {
            side: 0,
            texels: Vec::new(),
        }
    }

    fn from_magic_square(size: usize) -> Result<Self, KernelError> {
        let square = MagicSquare::generate(size)?;
        let cell_count = square.values().len();

        // The cell value, not the flattened index, drives the angle: two
        // adjacent texels land on angles permuted by the square.
        let texels = square
            .values()
            .iter()
            .map(|&value| {
                let angle = TAU * value as f32 / cell_count as f32;
                NoiseTexel::encode(Vec3::new(angle.cos(), angle.sin(), 0.0))
            })
            .collect();

        Ok(Self {
            side: square.order(),
            texels,
        })
    }

    fn uniform_grid() -> Self {
        const SIDE: usize = 4;
        let cell_count = SIDE * SIDE;

        let texels = (0..cell_count)
            .map(|i| {
                let angle_index = i / 2 + (i % 2) * 8;
                let angle = TAU * angle_index as f32 / cell_count as f32;
                NoiseTexel::encode(Vec3::new(angle.cos(), angle.sin(), 0.0))
            })
            .collect();

        Self {
            side: SIDE,
            texels,
        }
    }

    /// Number of texels (`side²`).
    pub fn len(&self) -> usize {
        self.texels.len()
    }

    /// True when the set selects the unrotated transform path.
    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    /// Decode the texel at `index` back to a float rotation vector.
    pub fn decode(&self, index: usize) -> Vec3 {
        self.texels[index].decode()
    }
}
