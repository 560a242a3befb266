//! Degree-tagged Bezier segment.

use glam::Vec3;

use crate::curve::{CubicBezier, LinearBezier, QuadraticBezier};

/// Polynomial degree of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Linear = 1,
    Quadratic = 2,
    Cubic = 3,
}

/// One piece of a piecewise curve, in whichever Bezier form applies.
///
/// The degree is a per-segment choice, so a single curve can mix straight
/// runs with smooth sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Linear(LinearBezier),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl Segment {
    pub fn degree(&self) -> Degree {
        match self {
            Segment::Linear(_) => Degree::Linear,
            Segment::Quadratic(_) => Degree::Quadratic,
            Segment::Cubic(_) => Degree::Cubic,
        }
    }

    pub fn start(&self) -> Vec3 {
        match self {
            Segment::Linear(s) => s.from,
            Segment::Quadratic(s) => s.from,
            Segment::Cubic(s) => s.from,
        }
    }

    pub fn end(&self) -> Vec3 {
        match self {
            Segment::Linear(s) => s.to,
            Segment::Quadratic(s) => s.to,
            Segment::Cubic(s) => s.to,
        }
    }

    /// Evaluate at local parameter `t` in `[0, 1]`.
    ///
    /// Values outside the range extrapolate the polynomial; nothing is clamped.
    #[inline]
    pub fn eval(&self, t: f32) -> Vec3 {
        match self {
            Segment::Linear(s) => s.eval(t),
            Segment::Quadratic(s) => s.eval(t),
            Segment::Cubic(s) => s.eval(t),
        }
    }

    pub fn derivative(&self, t: f32) -> Vec3 {
        match self {
            Segment::Linear(s) => s.derivative(t),
            Segment::Quadratic(s) => s.derivative(t),
            Segment::Cubic(s) => s.derivative(t),
        }
    }

    /// Unit tangent at `t`, or zero where the derivative vanishes.
    pub fn tangent(&self, t: f32) -> Vec3 {
        self.derivative(t).normalize_or_zero()
    }

    /// Unit normal at `t`, perpendicular to both the tangent and `up`.
    ///
    /// Zero when the tangent is zero or parallel to `up`.
    pub fn normal(&self, t: f32, up: Vec3) -> Vec3 {
        up.cross(self.tangent(t)).normalize_or_zero()
    }

    pub fn split(&self, t: f32) -> (Segment, Segment) {
        match self {
            Segment::Linear(s) => {
                let (a, b) = s.split(t);
                (Segment::Linear(a), Segment::Linear(b))
            }
            Segment::Quadratic(s) => {
                let (a, b) = s.split(t);
                (Segment::Quadratic(a), Segment::Quadratic(b))
            }
            Segment::Cubic(s) => {
                let (a, b) = s.split(t);
                (Segment::Cubic(a), Segment::Cubic(b))
            }
        }
    }

    /// Polyline approximation of the arc length using `subdivisions` steps.
    ///
    /// Every degree is sub-sampled the same way, lines included, so lengths of
    /// mixed curves are comparable.
    pub fn arc_length(&self, subdivisions: u32) -> f32 {
        crate::curve::polyline_length(|t| self.eval(t), subdivisions)
    }
}

impl From<LinearBezier> for Segment {
    fn from(value: LinearBezier) -> Self {
        Segment::Linear(value)
    }
}

impl From<QuadraticBezier> for Segment {
    fn from(value: QuadraticBezier) -> Self {
        Segment::Quadratic(value)
    }
}

impl From<CubicBezier> for Segment {
    fn from(value: CubicBezier) -> Self {
        Segment::Cubic(value)
    }
}
