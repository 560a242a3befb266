//! Anchor points and their handles.

use glam::{Quat, Vec3};

use crate::curve::{Curve, CurveId};

/// Handle offsets the editor gives freshly placed anchors.
pub const DEFAULT_HANDLE1: Vec3 = Vec3::new(-2.0, 0.0, 0.0);
pub const DEFAULT_HANDLE2: Vec3 = Vec3::new(2.0, 0.0, 0.0);

/// Continuity mode of an anchor's handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnchorPointType {
    /// No effective handles; adjoining segments fall back to lower degree.
    #[default]
    None,
    /// Handles are mirrored through the anchor, keeping the curve smooth.
    Connected,
    /// Handles move independently.
    Broken,
}

impl AnchorPointType {
    pub fn has_handles(self) -> bool {
        self != AnchorPointType::None
    }
}

/// A node the curve passes through, stored in curve-local space.
///
/// Handle offsets are relative to the anchor's own position. The owning
/// curve is recorded as a [`CurveId`] key only; world-space accessors take
/// the curve explicitly to resolve its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    pub name: String,
    point_type: AnchorPointType,
    local_position: Vec3,
    handle1: Vec3,
    handle2: Vec3,
    owner: Option<CurveId>,
}

impl AnchorPoint {
    pub fn new(local_position: Vec3, handle1: Vec3, handle2: Vec3) -> Self {
        Self {
            name: "Point".to_string(),
            point_type: AnchorPointType::None,
            local_position,
            handle1,
            handle2,
            owner: None,
        }
    }

    /// Anchor at `local_position` with the editor's default handle offsets.
    pub fn with_default_handles(local_position: Vec3) -> Self {
        Self::new(local_position, DEFAULT_HANDLE1, DEFAULT_HANDLE2)
    }

    /// Builder form of [`set_point_type`](Self::set_point_type).
    pub fn with_type(mut self, point_type: AnchorPointType) -> Self {
        self.set_point_type(point_type);
        self
    }

    pub fn point_type(&self) -> AnchorPointType {
        self.point_type
    }

    /// Change the continuity mode.
    ///
    /// Switching to [`Connected`](AnchorPointType::Connected) re-mirrors
    /// handle 1 from handle 2.
    pub fn set_point_type(&mut self, point_type: AnchorPointType) {
        self.point_type = point_type;
        if point_type == AnchorPointType::Connected {
            self.handle1 = -self.handle2;
        }
    }

    pub fn owner(&self) -> Option<CurveId> {
        self.owner
    }

    pub fn is_attached(&self) -> bool {
        self.owner.is_some()
    }

    pub(crate) fn attach(&mut self, owner: CurveId) {
        self.owner = Some(owner);
    }

    pub(crate) fn detach(&mut self) {
        self.owner = None;
    }

    // Local space

    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    pub fn handle1_local(&self) -> Vec3 {
        self.handle1
    }

    pub fn handle2_local(&self) -> Vec3 {
        self.handle2
    }

    pub fn set_local_position(&mut self, local_position: Vec3) {
        self.local_position = local_position;
    }

    /// Set handle 1's offset; a connected anchor mirrors it onto handle 2.
    pub fn set_handle1_local(&mut self, offset: Vec3) {
        self.handle1 = offset;
        if self.point_type == AnchorPointType::Connected {
            self.handle2 = -offset;
        }
    }

    /// Set handle 2's offset; a connected anchor mirrors it onto handle 1.
    pub fn set_handle2_local(&mut self, offset: Vec3) {
        self.handle2 = offset;
        if self.point_type == AnchorPointType::Connected {
            self.handle1 = -offset;
        }
    }

    // World space

    pub(crate) fn position_from(&self, origin: Vec3) -> Vec3 {
        self.local_position + origin
    }

    pub(crate) fn handle1_from(&self, origin: Vec3) -> Vec3 {
        self.handle1 + self.position_from(origin)
    }

    pub(crate) fn handle2_from(&self, origin: Vec3) -> Vec3 {
        self.handle2 + self.position_from(origin)
    }

    fn debug_check_owner(&self, curve: &Curve) {
        debug_assert!(
            self.owner.is_none_or(|owner| owner == curve.id()),
            "anchor `{}` belongs to {:?}, not {:?}",
            self.name,
            self.owner,
            curve.id()
        );
    }

    /// World-space position: local position plus the curve origin.
    pub fn position(&self, curve: &Curve) -> Vec3 {
        self.debug_check_owner(curve);
        self.position_from(curve.origin())
    }

    /// World-space position of the incoming handle.
    pub fn handle1_position(&self, curve: &Curve) -> Vec3 {
        self.debug_check_owner(curve);
        self.handle1_from(curve.origin())
    }

    /// World-space position of the outgoing handle.
    pub fn handle2_position(&self, curve: &Curve) -> Vec3 {
        self.debug_check_owner(curve);
        self.handle2_from(curve.origin())
    }

    pub(crate) fn set_position_from(&mut self, world: Vec3, origin: Vec3) {
        self.local_position = world - origin;
    }

    pub(crate) fn set_handle1_from(&mut self, world: Vec3, origin: Vec3) {
        let offset = world - self.position_from(origin);
        self.set_handle1_local(offset);
    }

    pub(crate) fn set_handle2_from(&mut self, world: Vec3, origin: Vec3) {
        let offset = world - self.position_from(origin);
        self.set_handle2_local(offset);
    }

    // Orientation

    /// Rotation taking +Z onto the direction of handle 2.
    ///
    /// Identity when handle 2 sits on the anchor.
    pub fn handles_rotation(&self) -> Quat {
        let dir = self.handle2.normalize_or_zero();
        if dir == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_arc(Vec3::Z, dir)
    }

    /// Point both handles along `rotation`, keeping handle 2's length.
    ///
    /// Handle 2 ends up along the rotated +Z axis and handle 1 directly
    /// opposite, which leaves the pair connected regardless of point type.
    pub fn set_handles_rotation(&mut self, rotation: Quat) {
        let dir = (rotation * Vec3::Z).normalize_or_zero();
        let magnitude = self.handle2.length();
        self.handle2 = dir * magnitude;
        self.handle1 = -dir * magnitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_none() {
        let anchor = AnchorPoint::new(Vec3::ONE, Vec3::NEG_X, Vec3::X);
        assert_eq!(anchor.point_type(), AnchorPointType::None);
        assert!(!anchor.is_attached());
        assert_eq!(anchor.handle1_local(), Vec3::NEG_X);
    }

    #[test]
    fn test_connected_mirrors_handles() {
        let mut anchor = AnchorPoint::with_default_handles(Vec3::ZERO)
            .with_type(AnchorPointType::Connected);

        anchor.set_handle1_local(Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(anchor.handle2_local(), Vec3::new(0.0, -3.0, 0.0));

        anchor.set_handle2_local(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(anchor.handle1_local(), Vec3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn test_broken_handles_are_independent() {
        let mut anchor = AnchorPoint::with_default_handles(Vec3::ZERO)
            .with_type(AnchorPointType::Broken);

        anchor.set_handle1_local(Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(anchor.handle2_local(), DEFAULT_HANDLE2);
    }

    #[test]
    fn test_switching_to_connected_mirrors_from_handle2() {
        let mut anchor = AnchorPoint::new(Vec3::ZERO, Vec3::new(5.0, 5.0, 0.0), Vec3::Y);
        anchor.set_point_type(AnchorPointType::Connected);
        assert_eq!(anchor.handle1_local(), Vec3::NEG_Y);
    }

    #[test]
    fn test_world_space_helpers() {
        let anchor = AnchorPoint::new(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_X, Vec3::Y);
        let origin = Vec3::new(10.0, 10.0, 0.0);
        assert_eq!(anchor.position_from(origin), Vec3::new(11.0, 10.0, 0.0));
        assert_eq!(anchor.handle1_from(origin), Vec3::new(10.0, 10.0, 0.0));
        assert_eq!(anchor.handle2_from(origin), Vec3::new(11.0, 11.0, 0.0));
    }

    #[test]
    fn test_handles_rotation_round_trip() {
        let mut anchor = AnchorPoint::new(Vec3::ZERO, Vec3::NEG_X * 2.0, Vec3::X * 2.0);
        let rotation = anchor.handles_rotation();
        assert!((rotation * Vec3::Z).abs_diff_eq(Vec3::X, 1e-5));

        anchor.set_handles_rotation(Quat::from_rotation_arc(Vec3::Z, Vec3::Y));
        assert!(anchor.handle2_local().abs_diff_eq(Vec3::Y * 2.0, 1e-5));
        assert!(anchor.handle1_local().abs_diff_eq(Vec3::NEG_Y * 2.0, 1e-5));
    }

    #[test]
    fn test_handles_rotation_degenerate() {
        let anchor = AnchorPoint::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(anchor.handles_rotation(), Quat::IDENTITY);
    }
}
