//! Curve-level settings.

use std::ops::RangeInclusive;

use glam::Vec3;

use crate::error::{CurveError, CurveResult};

/// Settings that shape how a [`Curve`](crate::Curve) is walked and sampled.
///
/// `handle_size` and `snap_size` are only read by editing tools; the curve
/// itself uses them for [`snap_to_grid`](Self::snap_to_grid) and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    /// Joins the last anchor back to the first with an extra segment.
    pub closed: bool,
    /// Linear steps used to approximate one segment when measuring length.
    pub sample_rate: u32,
    /// Size of the handle gizmos relative to the view.
    pub handle_size: f32,
    /// Grid spacing for snapped edits.
    pub snap_size: f32,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            closed: true,
            sample_rate: 30,
            handle_size: 0.1,
            snap_size: 0.5,
        }
    }
}

impl CurveSettings {
    /// Sample rates offered by editing tools. Any positive rate is accepted.
    pub const SAMPLE_RATE_RANGE: RangeInclusive<u32> = 10..=100;
    pub const HANDLE_SIZE_RANGE: RangeInclusive<f32> = 0.01..=1.0;
    pub const SNAP_SIZE_RANGE: RangeInclusive<f32> = 0.1..=1.0;

    pub fn open() -> Self {
        Self {
            closed: false,
            ..Self::default()
        }
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn validate(&self) -> CurveResult<()> {
        if self.sample_rate == 0 {
            return Err(CurveError::ZeroSampleRate);
        }
        for (name, value) in [("handle_size", self.handle_size), ("snap_size", self.snap_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CurveError::InvalidSetting { name, value });
            }
        }
        Ok(())
    }

    /// Copy with every value pulled into the ranges editing tools offer.
    pub fn clamped(&self) -> Self {
        Self {
            closed: self.closed,
            sample_rate: self
                .sample_rate
                .clamp(*Self::SAMPLE_RATE_RANGE.start(), *Self::SAMPLE_RATE_RANGE.end()),
            handle_size: self
                .handle_size
                .clamp(*Self::HANDLE_SIZE_RANGE.start(), *Self::HANDLE_SIZE_RANGE.end()),
            snap_size: self
                .snap_size
                .clamp(*Self::SNAP_SIZE_RANGE.start(), *Self::SNAP_SIZE_RANGE.end()),
        }
    }

    /// Round x and y to the nearest multiple of `snap_size`; z is kept.
    pub fn snap_to_grid(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            (position.x / self.snap_size).round() * self.snap_size,
            (position.y / self.snap_size).round() * self.snap_size,
            position.z,
        )
    }
}
