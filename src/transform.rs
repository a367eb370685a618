use glam::{Mat3, Vec3};

use crate::hemisphere::SampleKernel;
use crate::rotation::RotationSet;

/// Reference axis for the tangent basis: a flat view-space normal.
const VIEW_NORMAL: Vec3 = Vec3::Z;

/// Renderer-facing line segment vertices.
///
/// Vertices come in (start, end) pairs: the start sits on the unit sphere
/// in the direction of a (rotated) kernel sample, the end extends outward
/// by the sample's magnitude, so segment length past the unit shell encodes
/// magnitude visually. Derived data — rebuilt wholesale on every parameter
/// change and consumed once by the renderer.
#[derive(Debug, Clone, Default)]
pub struct LineVertexBuffer {
    /// Segment endpoints, `2·|kernel|·max(1, |rotations|)` entries.
    pub vertices: Vec<Vec3>,
}

impl LineVertexBuffer {
    /// Build segment vertices for every kernel sample under every rotation.
    ///
    /// An empty rotation set emits the kernel unrotated. Otherwise each
    /// rotation texel decodes to a tangent-plane vector, a tangent basis is
    /// built around the view normal, and the whole kernel is emitted once
    /// per rotation — the rotations × kernel cross product is the defining
    /// shape of the output.
    pub fn build(kernel: &SampleKernel, rotations: &RotationSet) -> Self {
        let pair_count = kernel.len() * rotations.len().max(1);
        let mut vertices = Vec::with_capacity(pair_count * 2);

        if rotations.is_empty() {
            for &sample in &kernel.samples {
                push_segment(&mut vertices, sample);
            }
        } else {
            for texel in &rotations.texels {
                let basis = kernel_basis(texel.decode());
                for &sample in &kernel.samples {
                    push_segment(&mut vertices, basis * sample);
                }
            }
        }

        Self { vertices }
    }

    /// Number of line segments (half the vertex count).
    pub fn num_segments(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Orthonormal change-of-basis carrying kernel vectors into the frame of a
/// decoded rotation vector.
///
/// The rotation vector is projected into the plane normal to
/// [`VIEW_NORMAL`] to form the tangent; rotation texels always decode to
/// near-unit XY vectors, so the projection cannot vanish.
fn kernel_basis(rotation: Vec3) -> Mat3 {
    let tangent = (rotation - VIEW_NORMAL * rotation.dot(VIEW_NORMAL)).normalize();
    let bitangent = VIEW_NORMAL.cross(tangent).normalize();
    Mat3::from_cols(tangent, bitangent, VIEW_NORMAL)
}

/// Remap a z-up kernel vector into the renderer's y-up convention and split
/// it into a unit direction plus a magnitude-encoding endpoint.
fn push_segment(vertices: &mut Vec<Vec3>, sample: Vec3) {
    let remapped = Vec3::new(sample.x, sample.z, -sample.y);
    let length = remapped.length();
    let direction = remapped.normalize();
    vertices.push(direction);
    vertices.push(direction * (1.0 + length));
}
