use glam::{Mat3, Mat4, Quat};
use strum::{Display, EnumIter, EnumString};

// below this the gimbal component is treated as away from the poles
const GIMBAL_THRESHOLD: f32 = 0.999_999_9;

/// Order in which the axis rotations are applied.
///
/// `XYZ` means the rotation matrix is `Rx * Ry * Rz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationOrder {
    #[default]
    XYZ,
    YXZ,
    ZXY,
    ZYX,
    YZX,
    XZY,
}

/// Three axis angles, in radians, plus the order they are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub order: RotationOrder,
}

impl Euler {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        order: RotationOrder::XYZ,
    };

    pub fn new(x: f32, y: f32, z: f32, order: RotationOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Extracts the angles from a pure rotation matrix (no scale).
    pub fn from_rotation_matrix(m: &Mat3, order: RotationOrder) -> Self {
        let (m11, m12, m13) = (m.x_axis.x, m.y_axis.x, m.z_axis.x);
        let (m21, m22, m23) = (m.x_axis.y, m.y_axis.y, m.z_axis.y);
        let (m31, m32, m33) = (m.x_axis.z, m.y_axis.z, m.z_axis.z);

        let (x, y, z) = match order {
            RotationOrder::XYZ => {
                let y = m13.clamp(-1.0, 1.0).asin();
                if m13.abs() < GIMBAL_THRESHOLD {
                    ((-m23).atan2(m33), y, (-m12).atan2(m11))
                } else {
                    (m32.atan2(m22), y, 0.0)
                }
            }
            RotationOrder::YXZ => {
                let x = (-m23.clamp(-1.0, 1.0)).asin();
                if m23.abs() < GIMBAL_THRESHOLD {
                    (x, m13.atan2(m33), m21.atan2(m22))
                } else {
                    (x, (-m31).atan2(m11), 0.0)
                }
            }
            RotationOrder::ZXY => {
                let x = m32.clamp(-1.0, 1.0).asin();
                if m32.abs() < GIMBAL_THRESHOLD {
                    (x, (-m31).atan2(m33), (-m12).atan2(m22))
                } else {
                    (x, 0.0, m21.atan2(m11))
                }
            }
            RotationOrder::ZYX => {
                let y = (-m31.clamp(-1.0, 1.0)).asin();
                if m31.abs() < GIMBAL_THRESHOLD {
                    (m32.atan2(m33), y, m21.atan2(m11))
                } else {
                    (0.0, y, (-m12).atan2(m22))
                }
            }
            RotationOrder::YZX => {
                let z = m21.clamp(-1.0, 1.0).asin();
                if m21.abs() < GIMBAL_THRESHOLD {
                    ((-m23).atan2(m22), (-m31).atan2(m11), z)
                } else {
                    (0.0, m13.atan2(m33), z)
                }
            }
            RotationOrder::XZY => {
                let z = (-m12.clamp(-1.0, 1.0)).asin();
                if m12.abs() < GIMBAL_THRESHOLD {
                    (m32.atan2(m22), m13.atan2(m11), z)
                } else {
                    ((-m23).atan2(m33), 0.0, z)
                }
            }
        };

        Self { x, y, z, order }
    }

    /// Extracts the angles from the upper-left 3x3 of a transform.
    /// The matrix is assumed to be unscaled.
    pub fn from_mat4(m: &Mat4, order: RotationOrder) -> Self {
        Self::from_rotation_matrix(&Mat3::from_mat4(*m), order)
    }

    pub fn from_quat(q: Quat, order: RotationOrder) -> Self {
        Self::from_rotation_matrix(&Mat3::from_quat(q), order)
    }

    pub fn to_quat(&self) -> Quat {
        let (s1, c1) = (self.x * 0.5).sin_cos();
        let (s2, c2) = (self.y * 0.5).sin_cos();
        let (s3, c3) = (self.z * 0.5).sin_cos();

        let (x, y, z, w) = match self.order {
            RotationOrder::XYZ => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            RotationOrder::YXZ => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            RotationOrder::ZXY => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            RotationOrder::ZYX => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            RotationOrder::YZX => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            RotationOrder::XZY => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
        };

        Quat::from_xyzw(x, y, z, w)
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self.to_quat())
    }

    /// Same rotation, different order. Goes through a quaternion so the
    /// gimbal branch is handled by [`Euler::from_rotation_matrix`].
    pub fn reorder(&self, order: RotationOrder) -> Self {
        Self::from_quat(self.to_quat(), order)
    }
}
