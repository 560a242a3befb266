use bezel_core::math::PackedVec3;
use glam::Vec3;

/// One sampled point on a curve.
///
/// `segment_end_index` is the index of the anchor that ends the segment the
/// sample lies on, which is where a new anchor goes if the curve is split at
/// this sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub position: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    pub segment_end_index: usize,
}

impl CurveSample {
    /// Sample with zero normal and tangent.
    pub fn new(position: Vec3, segment_end_index: usize) -> Self {
        Self {
            position,
            normal: Vec3::ZERO,
            tangent: Vec3::ZERO,
            segment_end_index,
        }
    }

    pub fn with_frame(mut self, normal: Vec3, tangent: Vec3) -> Self {
        self.normal = normal;
        self.tangent = tangent;
        self
    }

    pub fn packed_position(&self) -> PackedVec3 {
        self.position.into()
    }
}

/// Positions of `samples` in a GPU-uploadable layout.
pub fn packed_positions(samples: &[CurveSample]) -> Vec<PackedVec3> {
    samples.iter().map(CurveSample::packed_position).collect()
}
