//! Bezel - anchor-based Bezier curves
//!
//! Bezel models editable 3D curves as an ordered list of anchor points with
//! optional tangent handles. It provides:
//!
//! - **Geometry**: linear, quadratic and cubic Bezier primitives
//! - **Curves**: anchors, handle continuity modes and open/closed topology
//! - **Arc length**: polyline length approximation and length-normalized
//!   evaluation
//! - **Sampling**: dense polylines with per-sample segment metadata and
//!   optional tangent frames
//! - **Change tracking**: revisioned curve events and a handle-based curve
//!   registry
//!
//! # Quick Start
//!
//! ```
//! use bezel::prelude::*;
//!
//! bezel::init(&Config::default());
//!
//! let mut curve = Curve::with_settings(CurveSettings::open());
//! curve.add_anchor(AnchorPoint::with_default_handles(Vec3::ZERO));
//! curve.add_anchor(
//!     AnchorPoint::with_default_handles(Vec3::new(8.0, 4.0, 0.0))
//!         .with_type(AnchorPointType::Connected),
//! );
//! curve.add_anchor(AnchorPoint::with_default_handles(Vec3::new(16.0, 0.0, 0.0)));
//!
//! let midpoint = curve.point_at(0.5);
//! let polyline = curve.sample(16, true);
//! assert_eq!(polyline.len(), 33);
//! assert!(midpoint.is_finite());
//! ```
//!
//! # Crates
//!
//! - [`core`] - logging, profiling, math and allocation helpers
//! - [`geometry`] - Bezier primitives and the degree-tagged `Segment`
//! - [`curve`] - `Curve`, `AnchorPoint`, sampling and events

use bezel_core::profiling::{ProfilingBackend, init_profiling};

// Re-export sub-crates
pub use bezel_core as core;
pub use bezel_core::math;
pub use bezel_curve as curve;
pub use bezel_geometry as geometry;

pub use bezel_core::{Config, ProfilingMode};

// Re-export curve types
pub use bezel_curve::{
    AnchorPoint, AnchorPointType, ArcLengthTable, Curve, CurveError, CurveEvent, CurveHandle,
    CurveId, CurveResult, CurveSample, CurveSet, CurveSettings,
};

/// Set up logging and profiling as described by `config`.
///
/// Safe to call more than once; the first installed log subscriber and
/// profiler server are kept.
pub fn init(config: &Config) {
    bezel_core::logging::init_with_filter(&config.log_filter);

    match config.profiling {
        ProfilingMode::Off => {}
        ProfilingMode::PuffinHttp => init_profiling(ProfilingBackend::PuffinHttp),
    }

    tracing::debug!(?config, "Bezel initialized");
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::init;
    pub use bezel_core::{Config, ProfilingMode};

    // Curve types
    pub use bezel_curve::{
        AnchorPoint, AnchorPointType, ArcLengthTable, Curve, CurveError, CurveEvent,
        CurveHandle, CurveSample, CurveSet, CurveSettings,
    };

    // Geometry types
    pub use bezel_geometry::{CubicBezier, Degree, LinearBezier, QuadraticBezier, Segment};

    // Core math types
    pub use bezel_core::math::{PackedVec3, Quat, Vec3};
}
