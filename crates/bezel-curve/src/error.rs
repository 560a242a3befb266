use crate::set::CurveHandle;

/// Errors returned by the checked curve operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Anchor index past the end of the anchor sequence.
    IndexOutOfBounds { index: usize, len: usize },
    /// A sample rate of zero cannot subdivide a segment.
    ZeroSampleRate,
    /// The curve has no anchors to evaluate.
    EmptyCurve,
    /// A setting is not finite or not positive.
    InvalidSetting { name: &'static str, value: f32 },
    /// The handle refers to a curve that was removed from its set.
    StaleHandle(CurveHandle),
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::IndexOutOfBounds { index, len } => {
                write!(f, "Anchor index {} out of bounds (curve has {} anchors)", index, len)
            }
            CurveError::ZeroSampleRate => write!(f, "Sample rate must be at least 1"),
            CurveError::EmptyCurve => write!(f, "Curve has no anchor points"),
            CurveError::InvalidSetting { name, value } => {
                write!(f, "Invalid value {} for curve setting `{}`", value, name)
            }
            CurveError::StaleHandle(handle) => write!(f, "Curve {:?} no longer exists", handle),
        }
    }
}

impl std::error::Error for CurveError {}

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;
