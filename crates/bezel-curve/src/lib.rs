//! Bezel Curve - anchor-based Bezier curves
//!
//! A [`Curve`] owns an ordered list of [`AnchorPoint`]s. Each pair of
//! neighbouring anchors forms a segment whose degree (linear, quadratic or
//! cubic) follows from the anchors' [`AnchorPointType`]s. On top of that the
//! curve provides:
//!
//! - arc-length approximation per segment and in total
//! - evaluation at a length-normalized global parameter
//! - dense sampling into [`CurveSample`]s with segment metadata
//! - change events for consumers that derive geometry from the curve
//!
//! # Example
//!
//! ```
//! use bezel_curve::{AnchorPoint, AnchorPointType, Curve, CurveSettings};
//! use glam::Vec3;
//!
//! let mut curve = Curve::with_settings(CurveSettings::open());
//! curve.add_anchor(AnchorPoint::with_default_handles(Vec3::ZERO));
//! curve.add_anchor(
//!     AnchorPoint::with_default_handles(Vec3::new(10.0, 5.0, 0.0))
//!         .with_type(AnchorPointType::Connected),
//! );
//! curve.add_anchor(AnchorPoint::with_default_handles(Vec3::new(20.0, 0.0, 0.0)));
//!
//! let samples = curve.sample(8, true);
//! assert_eq!(samples.len(), 2 * 8 + 1);
//! assert_eq!(curve.point_at(0.0), Vec3::ZERO);
//! assert_eq!(curve.point_at(1.0), Vec3::new(20.0, 0.0, 0.0));
//! ```
//!
//! Curves are plain single-threaded data. Sharing one between threads means
//! wrapping it in a lock and serializing mutation and sampling through it.

mod anchor;
mod arc_length;
mod curve;
mod error;
pub mod evaluator;
mod event;
mod sample;
mod set;
mod settings;

pub use anchor::*;
pub use arc_length::ArcLengthTable;
pub use curve::{Curve, CurveId};
pub use error::{CurveError, CurveResult};
pub use event::{CurveEvent, CurveEventBuffer};
pub use sample::{CurveSample, packed_positions};
pub use set::{CurveHandle, CurveSet};
pub use settings::CurveSettings;
