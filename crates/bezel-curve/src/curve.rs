//! The anchor-based curve.

use std::sync::atomic::{AtomicU64, Ordering};

use bezel_core::profiling::{profile_function, profile_scope};
use bezel_geometry::Segment;
use glam::{Quat, Vec3};

use crate::anchor::{AnchorPoint, AnchorPointType};
use crate::arc_length::{self, ArcLengthTable};
use crate::error::{CurveError, CurveResult};
use crate::evaluator;
use crate::event::{CurveEvent, CurveEventBuffer};
use crate::sample::CurveSample;
use crate::settings::CurveSettings;

/// Global counter for generating unique curve IDs.
static CURVE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Curve`], used by anchors to name their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveId(u64);

impl CurveId {
    fn next() -> Self {
        Self(CURVE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// An ordered sequence of anchor points and the piecewise Bezier curve
/// through them.
///
/// Segments are not stored: segment `i` joins anchor `i` to anchor
/// `(i + 1) % len`, with the wrap-around segment present only when the curve
/// is closed and has more than one anchor.
///
/// The global parameter of [`point_at`](Self::point_at) is normalized by
/// approximate arc length, so equal steps in `t` cover roughly equal
/// distances along the whole curve. Lengths are recomputed on every call;
/// use [`arc_length_table`](Self::arc_length_table) with
/// [`point_at_with`](Self::point_at_with) when querying many points, or
/// [`sample`](Self::sample) for a dense polyline.
///
/// Evaluating a curve without anchors is a caller error. The unchecked
/// queries degrade quietly (origin, empty output, zero length) and log a
/// warning; [`try_point_at`](Self::try_point_at) reports it instead.
#[derive(Debug)]
pub struct Curve {
    id: CurveId,
    anchors: Vec<AnchorPoint>,
    settings: CurveSettings,
    origin: Vec3,
    revision: u64,
    events: CurveEventBuffer,
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve {
    pub fn new() -> Self {
        Self::with_settings(CurveSettings::default())
    }

    /// Create a curve with the given settings.
    ///
    /// A zero sample rate is raised to 1 with a warning; use
    /// [`set_settings`](Self::set_settings) for checked updates.
    pub fn with_settings(mut settings: CurveSettings) -> Self {
        if settings.sample_rate == 0 {
            tracing::warn!("Curve created with sample rate 0, using 1");
            settings.sample_rate = 1;
        }
        Self {
            id: CurveId::next(),
            anchors: Vec::new(),
            settings,
            origin: Vec3::ZERO,
            revision: 0,
            events: CurveEventBuffer::new(),
        }
    }

    /// Builder: append `anchors` in order.
    pub fn with_anchors(mut self, anchors: impl IntoIterator<Item = AnchorPoint>) -> Self {
        for anchor in anchors {
            self.add_anchor(anchor);
        }
        self
    }

    /// Builder: place the curve origin.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Monotonic counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    // ==========
    // Settings and origin
    // ==========

    pub fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: CurveSettings) -> CurveResult<()> {
        settings.validate()?;
        if self.settings == settings {
            return Ok(());
        }
        self.settings = settings;
        let revision = self.bump();
        self.events.push(CurveEvent::SettingsChanged { revision });
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.settings.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        if self.settings.closed == closed {
            return;
        }
        self.settings.closed = closed;
        let revision = self.bump();
        tracing::trace!(curve = ?self.id, closed, "Curve topology flag changed");
        self.events.push(CurveEvent::SettingsChanged { revision });
    }

    pub fn sample_rate(&self) -> u32 {
        self.settings.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: u32) -> CurveResult<()> {
        if sample_rate == 0 {
            return Err(CurveError::ZeroSampleRate);
        }
        if self.settings.sample_rate != sample_rate {
            self.settings.sample_rate = sample_rate;
            let revision = self.bump();
            self.events.push(CurveEvent::SettingsChanged { revision });
        }
        Ok(())
    }

    /// World-space translation applied to every anchor.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        if self.origin == origin {
            return;
        }
        self.origin = origin;
        let revision = self.bump();
        self.events.push(CurveEvent::OriginChanged { revision });
    }

    // ==========
    // Anchor sequence
    // ==========

    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    pub fn anchor(&self, index: usize) -> Option<&AnchorPoint> {
        self.anchors.get(index)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    fn check_index(&self, index: usize) -> CurveResult<()> {
        if index < self.anchors.len() {
            Ok(())
        } else {
            Err(CurveError::IndexOutOfBounds {
                index,
                len: self.anchors.len(),
            })
        }
    }

    fn adopt(&mut self, anchor: &mut AnchorPoint) {
        anchor.name = format!("Point {}", self.anchors.len());
        anchor.attach(self.id);
    }

    /// Append an anchor, returning its index.
    ///
    /// The anchor is renamed `"Point {n}"` after the anchor count before the
    /// insertion, and becomes owned by this curve.
    pub fn add_anchor(&mut self, mut anchor: AnchorPoint) -> usize {
        self.adopt(&mut anchor);
        self.anchors.push(anchor);
        let index = self.anchors.len() - 1;
        let revision = self.bump();
        tracing::trace!(curve = ?self.id, index, "Anchor appended");
        self.events.push(CurveEvent::AnchorAdded { index, revision });
        index
    }

    /// Insert an anchor before `index`; `index == len()` appends.
    pub fn insert_anchor(&mut self, index: usize, mut anchor: AnchorPoint) -> CurveResult<()> {
        if index > self.anchors.len() {
            return Err(CurveError::IndexOutOfBounds {
                index,
                len: self.anchors.len(),
            });
        }
        self.adopt(&mut anchor);
        self.anchors.insert(index, anchor);
        let revision = self.bump();
        tracing::trace!(curve = ?self.id, index, "Anchor inserted");
        self.events.push(CurveEvent::AnchorAdded { index, revision });
        Ok(())
    }

    /// Insert an anchor where `sample` would split the curve.
    ///
    /// Samples on the closing segment of a closed curve end at anchor 0; the
    /// new anchor then goes after the last anchor instead of before the first.
    pub fn insert_at_sample(&mut self, sample: &CurveSample, anchor: AnchorPoint) -> CurveResult<usize> {
        let index = sample.segment_end_index;
        if index == 0 {
            return Ok(self.add_anchor(anchor));
        }
        self.insert_anchor(index, anchor)?;
        Ok(index)
    }

    /// Remove and return the anchor at `index`; it is no longer owned by
    /// this curve.
    pub fn remove_anchor(&mut self, index: usize) -> CurveResult<AnchorPoint> {
        self.check_index(index)?;
        let mut anchor = self.anchors.remove(index);
        anchor.detach();
        let revision = self.bump();
        tracing::trace!(curve = ?self.id, index, "Anchor removed");
        self.events.push(CurveEvent::AnchorRemoved { index, revision });
        Ok(anchor)
    }

    pub fn remove_all_anchors(&mut self) {
        if self.anchors.is_empty() {
            return;
        }
        for anchor in &mut self.anchors {
            anchor.detach();
        }
        self.anchors.clear();
        let revision = self.bump();
        tracing::debug!(curve = ?self.id, "All anchors removed");
        self.events.push(CurveEvent::AnchorsCleared { revision });
    }

    /// Move the anchor at `from` so that it ends up at index `to`.
    pub fn move_anchor(&mut self, from: usize, to: usize) -> CurveResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let anchor = self.anchors.remove(from);
        self.anchors.insert(to, anchor);
        let revision = self.bump();
        self.events
            .push(CurveEvent::AnchorReordered { from, to, revision });
        Ok(())
    }

    /// Edit the anchor at `index` in place.
    ///
    /// The change is recorded like any other anchor mutation.
    pub fn update_anchor<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut AnchorPoint) -> R,
    ) -> CurveResult<R> {
        self.check_index(index)?;
        let result = f(&mut self.anchors[index]);
        self.anchor_changed(index);
        Ok(result)
    }

    fn anchor_changed(&mut self, index: usize) {
        let revision = self.bump();
        self.events.push(CurveEvent::AnchorChanged { index, revision });
    }

    /// Move the anchor at `index` to a world-space position; its handles
    /// move along with it.
    pub fn set_anchor_position(&mut self, index: usize, world: Vec3) -> CurveResult<()> {
        self.check_index(index)?;
        let origin = self.origin;
        self.anchors[index].set_position_from(world, origin);
        self.anchor_changed(index);
        Ok(())
    }

    /// Place handle 1 of the anchor at `index` at a world-space position.
    pub fn set_handle1_position(&mut self, index: usize, world: Vec3) -> CurveResult<()> {
        self.check_index(index)?;
        let origin = self.origin;
        self.anchors[index].set_handle1_from(world, origin);
        self.anchor_changed(index);
        Ok(())
    }

    /// Place handle 2 of the anchor at `index` at a world-space position.
    pub fn set_handle2_position(&mut self, index: usize, world: Vec3) -> CurveResult<()> {
        self.check_index(index)?;
        let origin = self.origin;
        self.anchors[index].set_handle2_from(world, origin);
        self.anchor_changed(index);
        Ok(())
    }

    pub fn set_handles_rotation(&mut self, index: usize, rotation: Quat) -> CurveResult<()> {
        self.check_index(index)?;
        self.anchors[index].set_handles_rotation(rotation);
        self.anchor_changed(index);
        Ok(())
    }

    pub fn set_point_type(&mut self, index: usize, point_type: AnchorPointType) -> CurveResult<()> {
        self.check_index(index)?;
        self.anchors[index].set_point_type(point_type);
        self.anchor_changed(index);
        Ok(())
    }

    // ==========
    // Events
    // ==========

    pub fn events(&self) -> &CurveEventBuffer {
        &self.events
    }

    /// Take all pending change events.
    pub fn drain_events(&mut self) -> Vec<CurveEvent> {
        self.events.drain().collect()
    }

    // ==========
    // Segments
    // ==========

    pub fn segment_count(&self) -> usize {
        let len = self.anchors.len();
        match len {
            0 => 0,
            1 => 0,
            _ if self.settings.closed => len,
            _ => len - 1,
        }
    }

    /// Anchor index pairs `(start, end)` of every segment, in curve order.
    pub fn segment_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.anchors.len();
        (0..self.segment_count()).map(move |i| (i, (i + 1) % len))
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        if index >= self.segment_count() {
            return None;
        }
        let end = (index + 1) % self.anchors.len();
        Some(self.resolve(index, end))
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segment_indices().map(|(start, end)| self.resolve(start, end))
    }

    fn resolve(&self, start: usize, end: usize) -> Segment {
        evaluator::resolve_segment(&self.anchors[start], &self.anchors[end], self.origin)
    }

    /// Point on the segment from `p0` to `p1` at local parameter `t`,
    /// resolved against this curve's origin.
    pub fn evaluate(&self, p0: &AnchorPoint, p1: &AnchorPoint, t: f32) -> Vec3 {
        evaluator::evaluate(p0, p1, self.origin, t)
    }

    // ==========
    // Length
    // ==========

    /// Polyline length of the segment from `p0` to `p1` with `sample_rate`
    /// uniform steps.
    pub fn segment_length(&self, p0: &AnchorPoint, p1: &AnchorPoint, sample_rate: u32) -> f32 {
        evaluator::segment_length(p0, p1, self.origin, sample_rate)
    }

    fn segment_lengths(&self) -> Vec<f32> {
        let rate = self.settings.sample_rate;
        self.segments().map(|segment| segment.arc_length(rate)).collect()
    }

    /// Approximate length of the whole curve at the configured sample rate.
    pub fn total_length(&self) -> f32 {
        profile_function!();
        let rate = self.settings.sample_rate;
        self.segments().map(|segment| segment.arc_length(rate)).sum()
    }

    /// Per-segment lengths for repeated [`point_at_with`](Self::point_at_with)
    /// queries.
    pub fn arc_length_table(&self) -> ArcLengthTable {
        profile_function!();
        ArcLengthTable::new(
            self.id,
            self.revision,
            self.settings.sample_rate,
            self.segment_lengths(),
        )
    }

    // ==========
    // Evaluation
    // ==========

    fn first_position(&self) -> Vec3 {
        self.anchors[0].position_from(self.origin)
    }

    fn last_position(&self) -> Vec3 {
        self.anchors[self.anchors.len() - 1].position_from(self.origin)
    }

    /// Endpoint answers for `t` outside `(0, 1)` and for single-anchor curves.
    fn point_at_bounds(&self, t: f32) -> Option<Vec3> {
        if t <= 0.0 || self.anchors.len() == 1 {
            return Some(self.first_position());
        }
        if t >= 1.0 {
            if self.settings.closed && self.anchors.len() > 1 {
                return Some(self.first_position());
            }
            return Some(self.last_position());
        }
        None
    }

    fn point_at_lengths(&self, lengths: &[f32], total: f32, t: f32) -> Vec3 {
        match arc_length::locate(lengths, total, t) {
            Some((index, local)) => self.segment(index).map_or(self.first_position(), |s| s.eval(local)),
            None if total <= 0.0 => {
                tracing::debug!(curve = ?self.id, "Curve has zero length, using first anchor");
                self.first_position()
            }
            // Rounding left `t` past the accumulated shares.
            None => self
                .segment(self.segment_count() - 1)
                .map_or(self.last_position(), |s| s.end()),
        }
    }

    /// Point at the length-normalized global parameter `t`.
    ///
    /// `t <= 0` gives the first anchor; `t >= 1` gives the first anchor
    /// again on a closed curve and the last anchor otherwise.
    pub fn point_at(&self, t: f32) -> Vec3 {
        profile_function!();
        if self.anchors.is_empty() {
            tracing::warn!(curve = ?self.id, "point_at called on a curve without anchors");
            return self.origin;
        }
        if let Some(point) = self.point_at_bounds(t) {
            return point;
        }
        let lengths = self.segment_lengths();
        let total = lengths.iter().sum();
        self.point_at_lengths(&lengths, total, t)
    }

    /// Checked form of [`point_at`](Self::point_at).
    pub fn try_point_at(&self, t: f32) -> CurveResult<Vec3> {
        if self.anchors.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        Ok(self.point_at(t))
    }

    /// [`point_at`](Self::point_at) using precomputed lengths.
    ///
    /// A table built from another curve or an older revision is ignored and
    /// the lengths are recomputed.
    pub fn point_at_with(&self, table: &ArcLengthTable, t: f32) -> Vec3 {
        if !table.is_valid_for(self) {
            tracing::debug!(
                curve = ?self.id,
                table_revision = table.revision(),
                revision = self.revision,
                "Stale arc-length table"
            );
            return self.point_at(t);
        }
        if self.anchors.is_empty() {
            return self.point_at(t);
        }
        if let Some(point) = self.point_at_bounds(t) {
            return point;
        }
        self.point_at_lengths(table.segment_lengths(), table.total_length(), t)
    }

    // ==========
    // Sampling
    // ==========

    /// Sample the whole curve with `sample_rate` steps per segment.
    ///
    /// The end point of every segment but the last is skipped, since it is
    /// the next segment's start. On a closed curve the final point, which
    /// repeats the first anchor, is emitted only if `include_last_point`.
    /// Normals and tangents are left zero; see
    /// [`sample_oriented`](Self::sample_oriented).
    pub fn sample(&self, sample_rate: u32, include_last_point: bool) -> Vec<CurveSample> {
        self.sample_impl(sample_rate, include_last_point, None)
    }

    /// Like [`sample`](Self::sample), with frames filled in.
    ///
    /// The tangent is the normalized segment derivative; the normal is
    /// `up × tangent`, normalized, so for a curve drawn in the XY plane with
    /// `up = Vec3::Z` it lies in that plane. Either is zero where it is
    /// undefined.
    pub fn sample_oriented(&self, sample_rate: u32, include_last_point: bool, up: Vec3) -> Vec<CurveSample> {
        self.sample_impl(sample_rate, include_last_point, Some(up))
    }

    fn sample_impl(&self, sample_rate: u32, include_last_point: bool, up: Option<Vec3>) -> Vec<CurveSample> {
        profile_function!();
        if self.anchors.is_empty() {
            tracing::warn!(curve = ?self.id, "sample called on a curve without anchors");
            return Vec::new();
        }
        if self.anchors.len() == 1 {
            return vec![CurveSample::new(self.first_position(), 0)];
        }

        let rate = if sample_rate == 0 {
            tracing::warn!(curve = ?self.id, "Sample rate 0 requested, using 1");
            1
        } else {
            sample_rate
        };

        let segment_count = self.segment_count();
        let closed = self.settings.closed;
        let mut samples = Vec::with_capacity(segment_count * rate as usize + 1);

        for (i, (start, end)) in self.segment_indices().enumerate() {
            profile_scope!("segment");
            let segment = self.resolve(start, end);
            let is_last = i == segment_count - 1;

            for j in 0..=rate {
                if j == rate && (!is_last || (closed && !include_last_point)) {
                    continue;
                }
                let t = j as f32 / rate as f32;
                let sample = CurveSample::new(segment.eval(t), end);
                samples.push(match up {
                    Some(up) => sample.with_frame(segment.normal(t, up), segment.tangent(t)),
                    None => sample,
                });
            }
        }

        tracing::trace!(curve = ?self.id, count = samples.len(), "Curve sampled");
        samples
    }
}
