//! Degree selection and evaluation for the segment between two anchors.

use bezel_geometry::{CubicBezier, LinearBezier, QuadraticBezier, Segment};
use glam::Vec3;

use crate::anchor::AnchorPoint;

/// Build the Bezier segment joining `p0` to `p1`, in world space.
///
/// The degree follows from the two anchor types:
///
/// | `p0`      | `p1`      | segment                          |
/// |-----------|-----------|----------------------------------|
/// | `None`    | `None`    | linear                           |
/// | has handles | `None`  | quadratic through `p0`'s handle 2 |
/// | `None`    | has handles | quadratic through `p1`'s handle 1 |
/// | has handles | has handles | cubic, `p0`.handle 2 then `p1`.handle 1 |
pub fn resolve_segment(p0: &AnchorPoint, p1: &AnchorPoint, origin: Vec3) -> Segment {
    let start = p0.position_from(origin);
    let end = p1.position_from(origin);

    match (p0.point_type().has_handles(), p1.point_type().has_handles()) {
        (false, false) => LinearBezier::new(start, end).into(),
        (true, false) => QuadraticBezier::new(start, p0.handle2_from(origin), end).into(),
        (false, true) => QuadraticBezier::new(start, p1.handle1_from(origin), end).into(),
        (true, true) => CubicBezier::new(
            start,
            p0.handle2_from(origin),
            p1.handle1_from(origin),
            end,
        )
        .into(),
    }
}

/// Point on the segment from `p0` to `p1` at local parameter `t`.
#[inline]
pub fn evaluate(p0: &AnchorPoint, p1: &AnchorPoint, origin: Vec3, t: f32) -> Vec3 {
    resolve_segment(p0, p1, origin).eval(t)
}

/// Polyline length of the segment from `p0` to `p1` using `sample_rate` steps.
pub fn segment_length(p0: &AnchorPoint, p1: &AnchorPoint, origin: Vec3, sample_rate: u32) -> f32 {
    resolve_segment(p0, p1, origin).arc_length(sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorPointType;
    use bezel_geometry::Degree;

    fn anchor(pos: Vec3, point_type: AnchorPointType) -> AnchorPoint {
        AnchorPoint::new(pos, Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
            .with_type(point_type)
    }

    #[test]
    fn test_degree_table() {
        let none = anchor(Vec3::ZERO, AnchorPointType::None);
        let broken = anchor(Vec3::X, AnchorPointType::Broken);
        let connected = anchor(Vec3::Y, AnchorPointType::Connected);

        let degree = |a: &AnchorPoint, b: &AnchorPoint| resolve_segment(a, b, Vec3::ZERO).degree();
        assert_eq!(degree(&none, &none), Degree::Linear);
        assert_eq!(degree(&broken, &none), Degree::Quadratic);
        assert_eq!(degree(&none, &connected), Degree::Quadratic);
        assert_eq!(degree(&broken, &connected), Degree::Cubic);
    }

    #[test]
    fn test_quadratic_uses_outgoing_handle_of_start() {
        let p0 = anchor(Vec3::ZERO, AnchorPointType::Broken);
        let p1 = anchor(Vec3::new(2.0, 0.0, 0.0), AnchorPointType::None);

        // control = p0 + handle2 = (0, 1, 0)
        let mid = evaluate(&p0, &p1, Vec3::ZERO, 0.5);
        assert!(mid.abs_diff_eq(Vec3::new(0.5, 0.5, 0.0), 1e-6));
    }

    #[test]
    fn test_quadratic_uses_incoming_handle_of_end() {
        let p0 = anchor(Vec3::ZERO, AnchorPointType::None);
        let p1 = anchor(Vec3::new(2.0, 0.0, 0.0), AnchorPointType::Broken);

        // control = p1 + handle1 = (2, -1, 0)
        let mid = evaluate(&p0, &p1, Vec3::ZERO, 0.5);
        assert!(mid.abs_diff_eq(Vec3::new(1.5, -0.5, 0.0), 1e-6));
    }

    #[test]
    fn test_origin_translates_segment() {
        let p0 = anchor(Vec3::ZERO, AnchorPointType::None);
        let p1 = anchor(Vec3::X, AnchorPointType::None);
        let origin = Vec3::new(0.0, 0.0, 5.0);

        assert_eq!(evaluate(&p0, &p1, origin, 0.0), origin);
        assert_eq!(evaluate(&p0, &p1, origin, 1.0), Vec3::X + origin);
        assert!(
            (segment_length(&p0, &p1, origin, 10) - segment_length(&p0, &p1, Vec3::ZERO, 10)).abs()
                < 1e-6
        );
    }
}
