//! Bezier curve primitives.
//!
//! Linear, quadratic and cubic Bezier curves in 3D space.

use glam::Vec3;

/// Sum of distances between `subdivisions + 1` points taken at uniform `t`.
pub(crate) fn polyline_length(eval: impl Fn(f32) -> Vec3, subdivisions: u32) -> f32 {
    let mut length = 0.0;
    let mut prev = eval(0.0);

    for i in 1..=subdivisions {
        let t = i as f32 / subdivisions as f32;
        let point = eval(t);
        length += prev.distance(point);
        prev = point;
    }

    length
}

/// A straight segment, the degenerate Bezier without control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBezier {
    pub from: Vec3,
    pub to: Vec3,
}

impl LinearBezier {
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }

    /// B(t) = (1-t)·P0 + t·P1
    pub fn eval(&self, t: f32) -> Vec3 {
        (1.0 - t) * self.from + t * self.to
    }

    /// Constant for a line.
    pub fn derivative(&self, _t: f32) -> Vec3 {
        self.to - self.from
    }

    pub fn split(&self, t: f32) -> (Self, Self) {
        let mid = self.eval(t);
        (Self::new(self.from, mid), Self::new(mid, self.to))
    }

    /// Exact length; kept alongside the approximations for symmetry.
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// A quadratic Bezier curve (one control point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Start point
    pub from: Vec3,
    /// Control point
    pub control: Vec3,
    /// End point
    pub to: Vec3,
}

impl QuadraticBezier {
    pub fn new(from: Vec3, control: Vec3, to: Vec3) -> Self {
        Self { from, control, to }
    }

    /// B(t) = (1-t)²·P0 + 2(1-t)t·H + t²·P1
    pub fn eval(&self, t: f32) -> Vec3 {
        let mt = 1.0 - t;
        mt * mt * self.from + 2.0 * mt * t * self.control + t * t * self.to
    }

    pub fn derivative(&self, t: f32) -> Vec3 {
        let mt = 1.0 - t;
        (self.control - self.from) * (2.0 * mt) + (self.to - self.control) * (2.0 * t)
    }

    /// Split the curve at parameter t (de Casteljau).
    pub fn split(&self, t: f32) -> (Self, Self) {
        let p01 = self.from.lerp(self.control, t);
        let p12 = self.control.lerp(self.to, t);
        let p012 = p01.lerp(p12, t);

        (
            Self::new(self.from, p01, p012),
            Self::new(p012, p12, self.to),
        )
    }

    pub fn arc_length(&self, subdivisions: u32) -> f32 {
        polyline_length(|t| self.eval(t), subdivisions)
    }

    /// Degree elevation; the cubic traces exactly the same curve.
    pub fn to_cubic(&self) -> CubicBezier {
        CubicBezier::new(
            self.from,
            self.from + (self.control - self.from) * (2.0 / 3.0),
            self.to + (self.control - self.to) * (2.0 / 3.0),
            self.to,
        )
    }
}

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: Vec3,
    /// First control point
    pub control1: Vec3,
    /// Second control point
    pub control2: Vec3,
    /// End point
    pub to: Vec3,
}

impl CubicBezier {
    pub fn new(from: Vec3, control1: Vec3, control2: Vec3, to: Vec3) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·H0 + 3(1-t)t²·H1 + t³·P1
    pub fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    pub fn derivative(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        (self.control1 - self.from) * (3.0 * mt2)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.to - self.control2) * (3.0 * t2)
    }

    /// Split the curve at parameter t (de Casteljau).
    pub fn split(&self, t: f32) -> (Self, Self) {
        let p01 = self.from.lerp(self.control1, t);
        let p12 = self.control1.lerp(self.control2, t);
        let p23 = self.control2.lerp(self.to, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);

        (
            Self::new(self.from, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.to),
        )
    }

    pub fn arc_length(&self, subdivisions: u32) -> f32 {
        polyline_length(|t| self.eval(t), subdivisions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn test_linear_midpoint() {
        let line = LinearBezier::new(Vec3::ZERO, Vec3::new(4.0, 2.0, -2.0));
        assert_eq!(line.eval(0.5), Vec3::new(2.0, 1.0, -1.0));
        assert_eq!(line.derivative(0.3), Vec3::new(4.0, 2.0, -2.0));
    }

    #[test]
    fn test_quadratic_endpoints() {
        let curve = QuadraticBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(50.0, 100.0, 0.0),
            Vec3::new(100.0, 0.0, 0.0),
        );

        assert_eq!(curve.eval(0.0), curve.from);
        assert_eq!(curve.eval(1.0), curve.to);
        assert!(approx_eq(curve.eval(0.5), Vec3::new(50.0, 50.0, 0.0)));
    }

    #[test]
    fn test_cubic_endpoints() {
        let curve = CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(25.0, 100.0, 0.0),
            Vec3::new(75.0, 100.0, 0.0),
            Vec3::new(100.0, 0.0, 0.0),
        );

        assert_eq!(curve.eval(0.0), curve.from);
        assert_eq!(curve.eval(1.0), curve.to);
    }

    #[test]
    fn test_cubic_split_joins() {
        let curve = CubicBezier::new(
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 1.0),
            Vec3::new(3.0, 2.0, -1.0),
            Vec3::new(3.0, 0.0, 0.0),
        );
        let (left, right) = curve.split(0.25);

        assert!(approx_eq(left.to, curve.eval(0.25)));
        assert_eq!(left.to, right.from);
        assert!(approx_eq(left.eval(0.5), curve.eval(0.125)));
        assert!(approx_eq(right.eval(0.5), curve.eval(0.625)));
    }

    #[test]
    fn test_quadratic_to_cubic_same_curve() {
        let quad = QuadraticBezier::new(
            Vec3::ZERO,
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        let cubic = quad.to_cubic();

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(approx_eq(quad.eval(t), cubic.eval(t)));
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let curve = CubicBezier::new(
            Vec3::ZERO,
            Vec3::new(1.0, 3.0, 0.0),
            Vec3::new(2.0, -1.0, 2.0),
            Vec3::new(4.0, 0.0, 0.0),
        );
        let h = 1e-3;
        let t = 0.4;
        let numeric = (curve.eval(t + h) - curve.eval(t - h)) / (2.0 * h);
        assert!(curve.derivative(t).abs_diff_eq(numeric, 1e-2));
    }
}
