use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::error::KernelError;

/// Angular placement strategy for kernel samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Golden-angle spiral around the polar axis (default).
    Spiral,
    /// Eight azimuth bands crossed with `count/8` altitude bands.
    Banded,
}

/// Hemisphere radius parameterization at a given sample height.
///
/// Both forms appear in practice; they trade ring spacing near the pole
/// against spacing near the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusPolicy {
    /// `r = 1 − z`.
    Linear,
    /// `r = √(1 − z²)`, the true sphere-surface radius.
    Spherical,
}

/// Configuration for sample kernel generation.
///
/// `cosine_weighted` and `radius_policy` apply to the spiral placement;
/// the banded placement always samples the sphere surface directly.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    pub placement: Placement,
    /// Bias sample density toward the pole by taking `z = √z_raw`.
    pub cosine_weighted: bool,
    pub radius_policy: RadiusPolicy,
    /// Interleaving stride for the magnitude ramp; adjacent samples land in
    /// different magnitude buckets so high and low magnitudes never cluster.
    pub scale_step: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Spiral,
            cosine_weighted: false,
            radius_policy: RadiusPolicy::Linear,
            scale_step: 4,
        }
    }
}

/// An ordered set of sample direction vectors over the upper hemisphere.
///
/// Insertion order is significant: consumers may weight samples by index.
/// Every vector lies within the closed unit ball with `z ≥ 0`; vector
/// length carries the sample magnitude.
#[derive(Debug, Clone)]
pub struct SampleKernel {
    /// Sample vectors, exactly the requested count.
    pub samples: Vec<Vec3>,
}

impl SampleKernel {
    /// Generate a spiral kernel with default radius policy and scale step.
    pub fn spiral(count: usize, cosine_weighted: bool) -> Result<Self, KernelError> {
        Self::generate(
            count,
            &KernelConfig {
                cosine_weighted,
                ..KernelConfig::default()
            },
        )
    }

    /// Generate a kernel with explicit configuration.
    pub fn generate(count: usize, config: &KernelConfig) -> Result<Self, KernelError> {
        if count == 0 {
            return Err(KernelError::EmptyKernel);
        }
        let samples = match config.placement {
            Placement::Spiral => spiral_samples(count, config),
            Placement::Banded => banded_samples(count),
        };
        debug_assert_eq!(samples.len(), count);
        Ok(Self { samples })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Golden-angle spiral placement with an interleaved magnitude ramp.
fn spiral_samples(count: usize, config: &KernelConfig) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0f32.sqrt());
    let scale_step = config.scale_step.max(1);
    let scale_range = count / scale_step;

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let spiral_angle = i as f32 * golden_angle;

        // A single sample has no ramp to walk; it sits at the bottom.
        let ramp = if count > 1 {
            i as f32 / (count - 1) as f32
        } else {
            0.0
        };
        let z_raw = 0.01 + ramp * 0.99;
        let z = if config.cosine_weighted {
            z_raw.sqrt()
        } else {
            z_raw
        };
        let radius = match config.radius_policy {
            RadiusPolicy::Linear => 1.0 - z,
            RadiusPolicy::Spherical => (1.0 - z * z).max(0.0).sqrt(),
        };
        let x = spiral_angle.cos() * radius;
        let y = spiral_angle.sin() * radius;

        // Stride the magnitude ramp across scale_step interleaved buckets,
        // then ease in quadratically from 0.1 to 1.
        let scale_index = i / scale_step + (i % scale_step) * scale_range;
        let t = 1.0 - scale_index as f32 / count as f32;
        let scale = lerp(0.1, 1.0, t * t);

        samples.push(Vec3::new(x, y, z) * scale);
    }
    samples
}

/// Banded placement: eight azimuth columns stepped through `count/8`
/// altitude rows, with an empirically tuned per-column altitude offset.
fn banded_samples(count: usize) -> Vec<Vec3> {
    // Fewer than eight samples still get one altitude band.
    let altitude_count = (count / 8).max(1);
    let altitude_step = PI / 2.0 / altitude_count as f32;

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let altitude_index = i % altitude_count;
        let azimuth_index = i / altitude_count;
        let azimuth =
            TAU * azimuth_index as f32 / 8.0 + altitude_index as f32 * (PI + TAU / 11.0);

        // The first azimuth column stays on the plain altitude ladder; the
        // offset term is undefined there.
        let offset = if azimuth_index == 0 {
            0.0
        } else {
            0.75 - 0.5 / azimuth_index as f32
        };
        let altitude = altitude_step * altitude_index as f32 + altitude_step * offset;

        let sample = Vec3::new(
            azimuth.cos() * altitude.cos(),
            azimuth.sin() * altitude.cos(),
            altitude.sin(),
        )
        .normalize();

        let t = i as f32 / count as f32;
        samples.push(sample * lerp(0.1, 1.0, t * t));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spiral_exact_count() {
        for count in [1, 2, 7, 16, 64] {
            let kernel = SampleKernel::spiral(count, false).unwrap();
            assert_eq!(kernel.len(), count, "count {}", count);
        }
    }

    #[test]
    fn test_spiral_within_upper_unit_ball() {
        for cosine in [false, true] {
            let kernel = SampleKernel::spiral(64, cosine).unwrap();
            for (i, s) in kernel.samples.iter().enumerate() {
                assert!(s.z >= 0.0, "sample {} below the hemisphere: {:?}", i, s);
                assert!(
                    s.length() <= 1.0 + 1e-6,
                    "sample {} outside the unit ball: {}",
                    i,
                    s.length()
                );
            }
        }
    }

    #[test]
    fn test_spiral_ramp_endpoints() {
        let count = 16;
        let kernel = SampleKernel::spiral(count, false).unwrap();

        // First sample: z_raw = 0.01, full scale.
        assert!((kernel.samples[0].z - 0.01).abs() < 1e-6);

        // Last sample: z_raw = 1.0, so the linear radius collapses to zero
        // and only the scaled z survives.
        let last = kernel.samples[count - 1];
        assert!(last.x.abs() < 1e-6 && last.y.abs() < 1e-6);
        let scale_index = (count - 1) / 4 + ((count - 1) % 4) * (count / 4);
        let t = 1.0 - scale_index as f32 / count as f32;
        let expected = lerp(0.1, 1.0, t * t);
        assert!((last.z - expected).abs() < 1e-6);
    }

    #[test]
    fn test_single_sample_no_division_by_zero() {
        let kernel = SampleKernel::spiral(1, false).unwrap();
        let s = kernel.samples[0];
        assert!(s.x.is_finite() && s.y.is_finite() && s.z.is_finite());
        // z_raw = 0.01 at full scale.
        assert!((s.z - 0.01).abs() < 1e-6);
        assert!((s.x - 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_weighting_lifts_samples() {
        let flat = SampleKernel::spiral(32, false).unwrap();
        let weighted = SampleKernel::spiral(32, true).unwrap();
        let mean = |k: &SampleKernel| {
            k.samples.iter().map(|s| s.z).sum::<f32>() / k.len() as f32
        };
        assert!(
            mean(&weighted) > mean(&flat),
            "cosine weighting should raise the mean sample height"
        );
    }

    #[test]
    fn test_spherical_radius_keeps_samples_on_scaled_sphere() {
        let config = KernelConfig {
            radius_policy: RadiusPolicy::Spherical,
            ..KernelConfig::default()
        };
        let kernel = SampleKernel::generate(16, &config).unwrap();
        for (i, s) in kernel.samples.iter().enumerate() {
            // Pre-scale vectors sit exactly on the unit sphere, so the
            // length equals the magnitude ramp value, never above 1.
            assert!(
                s.length() <= 1.0 + 1e-6 && s.length() >= 0.1 - 1e-6,
                "sample {} length {} outside the scale range",
                i,
                s.length()
            );
        }
    }

    #[test]
    fn test_scale_step_variants() {
        for scale_step in [4, 8] {
            let config = KernelConfig {
                scale_step,
                ..KernelConfig::default()
            };
            let kernel = SampleKernel::generate(64, &config).unwrap();
            assert_eq!(kernel.len(), 64);

            // The first sample of each run sits at full scale.
            let first = kernel.samples[0];
            assert!((first.length() - Vec3::new(0.99, 0.0, 0.01).length()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_banded_counts_and_bounds() {
        for count in [3, 8, 16, 64] {
            let config = KernelConfig {
                placement: Placement::Banded,
                ..KernelConfig::default()
            };
            let kernel = SampleKernel::generate(count, &config).unwrap();
            assert_eq!(kernel.len(), count, "count {}", count);
            for (i, s) in kernel.samples.iter().enumerate() {
                assert!(s.z >= -1e-6, "banded sample {} below hemisphere", i);
                assert!(s.length() <= 1.0 + 1e-6);
                assert!(s.x.is_finite() && s.y.is_finite() && s.z.is_finite());
            }
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = SampleKernel::spiral(0, false);
        assert!(matches!(result, Err(KernelError::EmptyKernel)));
    }
}
