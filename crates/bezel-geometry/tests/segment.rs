//! Segment evaluation tests.
//!
//! These check the degree-tagged segment against hand-written Bernstein
//! polynomials and the arc-length approximation against exact lengths.

use bezel_geometry::{CubicBezier, Degree, LinearBezier, QuadraticBezier, Segment};
use glam::Vec3;

const EPSILON: f32 = 1e-5;

fn reference_cubic(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let nt = 1.0 - t;
    nt.powi(3) * p0 + 3.0 * nt.powi(2) * t * p1 + 3.0 * nt * t.powi(2) * p2 + t.powi(3) * p3
}

fn reference_quadratic(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let nt = 1.0 - t;
    nt.powi(2) * p0 + 2.0 * nt * t * p1 + t.powi(2) * p2
}

// ====================
// Evaluation
// ====================

#[test]
fn test_cubic_matches_reference_grid() {
    let p0 = Vec3::new(0.0, 0.0, 0.0);
    let p1 = Vec3::new(1.0, 4.0, -2.0);
    let p2 = Vec3::new(5.0, -3.0, 1.0);
    let p3 = Vec3::new(6.0, 1.0, 0.5);
    let segment = Segment::Cubic(CubicBezier::new(p0, p1, p2, p3));

    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let expected = reference_cubic(p0, p1, p2, p3, t);
        assert!(
            segment.eval(t).abs_diff_eq(expected, EPSILON),
            "t = {t}: {:?} != {:?}",
            segment.eval(t),
            expected
        );
    }
}

#[test]
fn test_quadratic_matches_reference_grid() {
    let p0 = Vec3::new(-1.0, 0.0, 0.0);
    let h = Vec3::new(0.0, 3.0, 1.0);
    let p1 = Vec3::new(2.0, 0.0, 0.0);
    let segment = Segment::Quadratic(QuadraticBezier::new(p0, h, p1));

    for i in 0..=50 {
        let t = i as f32 / 50.0;
        assert!(segment.eval(t).abs_diff_eq(reference_quadratic(p0, h, p1, t), EPSILON));
    }
}

#[test]
fn test_linear_segment() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(3.0, -1.0, 5.0);
    let segment = Segment::from(LinearBezier::new(a, b));

    assert_eq!(segment.degree(), Degree::Linear);
    assert_eq!(segment.eval(0.0), a);
    assert_eq!(segment.eval(1.0), b);
    assert_eq!(segment.eval(0.5), (a + b) * 0.5);
}

#[test]
fn test_start_and_end() {
    let segment = Segment::from(QuadraticBezier::new(Vec3::X, Vec3::Y, Vec3::Z));
    assert_eq!(segment.start(), Vec3::X);
    assert_eq!(segment.end(), Vec3::Z);
    assert_eq!(segment.degree(), Degree::Quadratic);
}

// ====================
// Tangents and normals
// ====================

#[test]
fn test_tangent_of_line_is_unit_direction() {
    let segment = Segment::from(LinearBezier::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(segment.tangent(0.3), Vec3::X);
    // up = +Z, tangent = +X: normal lies along +Y
    assert!(segment.normal(0.3, Vec3::Z).abs_diff_eq(Vec3::Y, EPSILON));
}

#[test]
fn test_normal_zero_when_parallel_to_up() {
    let segment = Segment::from(LinearBezier::new(Vec3::ZERO, Vec3::Z));
    assert_eq!(segment.normal(0.5, Vec3::Z), Vec3::ZERO);
}

#[test]
fn test_tangent_zero_for_coincident_points() {
    let segment = Segment::from(LinearBezier::new(Vec3::ONE, Vec3::ONE));
    assert_eq!(segment.tangent(0.5), Vec3::ZERO);
}

// ====================
// Arc length
// ====================

#[test]
fn test_line_length_exact() {
    let segment = Segment::from(LinearBezier::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)));
    assert!((segment.arc_length(1) - 5.0).abs() < EPSILON);
    assert!((segment.arc_length(50) - 5.0).abs() < 1e-4);
}

#[test]
fn test_arc_length_converges_for_quarter_circle() {
    // Cubic approximation of a unit quarter circle.
    let k = 0.552_284_8;
    let segment = Segment::from(CubicBezier::new(
        Vec3::X,
        Vec3::new(1.0, k, 0.0),
        Vec3::new(k, 1.0, 0.0),
        Vec3::Y,
    ));
    let exact = std::f32::consts::FRAC_PI_2;

    let coarse = (segment.arc_length(4) - exact).abs();
    let fine = (segment.arc_length(64) - exact).abs();
    assert!(fine < coarse);
    assert!(fine < 1e-3);
}

#[test]
fn test_split_preserves_length() {
    let segment = Segment::from(CubicBezier::new(
        Vec3::ZERO,
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ));
    let (left, right) = segment.split(0.5);
    let whole = segment.arc_length(256);
    let parts = left.arc_length(128) + right.arc_length(128);
    assert!((whole - parts).abs() < 1e-3);
}
