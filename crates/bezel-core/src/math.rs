/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Curve evaluation is done entirely in single precision with these types:
/// anchor positions and handle offsets are [`Vec3`], handle orientation is a
/// [`Quat`].
///
/// # Examples
///
/// ```
/// use bezel_core::math::Vec3;
///
/// let origin = Vec3::new(10.0, 0.0, 0.0);
/// let local = Vec3::new(1.0, 2.0, 0.0);
/// assert_eq!(origin + local, Vec3::new(11.0, 2.0, 0.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

/// Packed vector types for GPU buffer uploads.
///
/// Sampled curve points are handed to rendering code that uploads them as
/// vertex data. [`Vec3`] here is `#[repr(C)]` and [`Pod`], so a slice of
/// them can be cast to bytes with [`bytemuck::cast_slice`].
///
/// ```
/// use bezel_core::math::{PackedVec3, Vec3};
///
/// let packed: Vec<PackedVec3> = vec![Vec3::ZERO.into(), Vec3::X.into()];
/// let bytes: &[u8] = bytemuck::cast_slice(&packed);
/// assert_eq!(bytes.len(), 24);
/// ```
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 3D vector with guaranteed `#[repr(C)]` layout.
    ///
    /// ```text
    /// Offset | Field | Size
    /// -------|-------|------
    /// 0      | x     | 4 bytes (f32)
    /// 4      | y     | 4 bytes (f32)
    /// 8      | z     | 4 bytes (f32)
    /// Total: 12 bytes
    /// ```
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec3 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    impl From<glam::Vec3> for Vec3 {
        fn from(v: glam::Vec3) -> Self {
            Self {
                x: v.x,
                y: v.y,
                z: v.z,
            }
        }
    }

    impl From<Vec3> for glam::Vec3 {
        fn from(v: Vec3) -> Self {
            glam::Vec3::new(v.x, v.y, v.z)
        }
    }

    static_assertions::assert_eq_size!(Vec3, [f32; 3]);
}

pub use fast::*;
pub use packed::Vec3 as PackedVec3;
