use glam::Vec3;

/// A rotation vector quantized into three 8-bit texel channels.
///
/// This is the storage format historically used for per-pixel rotation
/// noise textures: each channel maps `[-1, 1]` to `[0, 255]` via
/// `floor((c·0.5 + 0.5)·255)`, with the z channel fixed at 127 — a flat
/// view-space normal that decodes to roughly zero. Kept as a distinct type
/// from the geometric [`Vec3`], connected only by [`encode`](Self::encode)
/// and [`decode`](Self::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseTexel {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl NoiseTexel {
    /// The fixed z channel value, decoding to a near-zero normal component.
    pub const FLAT_Z: u8 = 127;

    /// Quantize the XY components of a rotation vector into texel channels.
    pub fn encode(direction: Vec3) -> Self {
        Self {
            x: quantize(direction.x),
            y: quantize(direction.y),
            z: Self::FLAT_Z,
        }
    }

    /// Expand the texel back to a float vector with components in `[-1, 1]`.
    ///
    /// Lossy inverse of [`encode`](Self::encode); the reconstruction error
    /// is bounded by the 8-bit quantization step per channel.
    pub fn decode(self) -> Vec3 {
        Vec3::new(expand(self.x), expand(self.y), expand(self.z))
    }
}

fn quantize(c: f32) -> u8 {
    ((c * 0.5 + 0.5) * 255.0).floor() as u8
}

fn expand(c: u8) -> f32 {
    (c as f32 / 255.0) * 2.0 - 1.0
}
