//! Arc-length bookkeeping shared by `point_at` and its memoized variant.

use crate::curve::{Curve, CurveId};

/// Find the segment holding the length-normalized parameter `t`.
///
/// Walks the segments in order, accumulating each one's share of `total`;
/// the first segment whose share reaches past `t` wins. Returns the segment
/// index and the local parameter within it, or `None` when `total` is zero or
/// rounding leaves `t` beyond the last share.
pub(crate) fn locate(lengths: &[f32], total: f32, t: f32) -> Option<(usize, f32)> {
    if total <= 0.0 {
        return None;
    }

    let mut total_percent = 0.0;
    for (index, &length) in lengths.iter().enumerate() {
        let curve_percent = length / total;
        if total_percent + curve_percent > t {
            let local = if curve_percent > 0.0 {
                (t - total_percent) / curve_percent
            } else {
                0.0
            };
            return Some((index, local));
        }
        total_percent += curve_percent;
    }
    None
}

/// Snapshot of a curve's per-segment lengths.
///
/// Built by [`Curve::arc_length_table`]. A table is tied to the curve and the
/// revision it was built from; any later mutation makes it stale, and
/// [`Curve::point_at_with`] then ignores it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    pub(crate) curve: CurveId,
    pub(crate) revision: u64,
    pub(crate) sample_rate: u32,
    pub(crate) segment_lengths: Vec<f32>,
    pub(crate) total: f32,
}

impl ArcLengthTable {
    pub(crate) fn new(curve: CurveId, revision: u64, sample_rate: u32, segment_lengths: Vec<f32>) -> Self {
        let total = segment_lengths.iter().sum();
        Self {
            curve,
            revision,
            sample_rate,
            segment_lengths,
            total,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    pub fn total_length(&self) -> f32 {
        self.total
    }

    /// Check if the table still describes `curve`.
    pub fn is_valid_for(&self, curve: &Curve) -> bool {
        self.curve == curve.id() && self.revision == curve.revision()
    }

    /// Cumulative length at the start of each segment, plus the total.
    pub fn cumulative(&self) -> Vec<f32> {
        let mut acc = 0.0;
        let mut out = Vec::with_capacity(self.segment_lengths.len() + 1);
        out.push(0.0);
        for length in &self.segment_lengths {
            acc += length;
            out.push(acc);
        }
        out
    }

    /// Segment index and local parameter for the global parameter `t`.
    pub fn locate(&self, t: f32) -> Option<(usize, f32)> {
        locate(&self.segment_lengths, self.total, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_picks_segment_by_length_share() {
        // Segment 0 is 1/4 of the length, segment 1 the remaining 3/4.
        let lengths = [1.0, 3.0];
        assert_eq!(locate(&lengths, 4.0, 0.125), Some((0, 0.5)));

        let (index, local) = locate(&lengths, 4.0, 0.625).unwrap();
        assert_eq!(index, 1);
        assert!((local - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_locate_skips_zero_length_segments() {
        let lengths = [0.0, 2.0, 0.0, 2.0];
        let (index, local) = locate(&lengths, 4.0, 0.75).unwrap();
        assert_eq!(index, 3);
        assert!((local - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_locate_zero_total() {
        assert_eq!(locate(&[0.0, 0.0], 0.0, 0.5), None);
    }
}
