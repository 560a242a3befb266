//! Bezel Geometry - Bezier primitives in 3D
//!
//! This crate provides:
//! - Linear, quadratic and cubic Bezier segments over [`glam::Vec3`]
//! - A degree-tagged [`Segment`] that evaluates whichever form applies
//! - Polyline arc-length approximation by uniform sub-sampling
//!
//! # Example
//!
//! ```
//! use bezel_geometry::{CubicBezier, Segment};
//! use glam::Vec3;
//!
//! let segment = Segment::Cubic(CubicBezier::new(
//!     Vec3::ZERO,
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//! ));
//!
//! assert_eq!(segment.eval(0.0), Vec3::ZERO);
//! assert_eq!(segment.eval(1.0), Vec3::X);
//! assert!(segment.arc_length(64) > 1.0);
//! ```

mod curve;
mod segment;

pub use curve::*;
pub use segment::*;
