//! Rotation representations and the conversions between them.
//!
//! A rotation can be held as an ordered triple of axis angles ([`Euler`]),
//! a unit quaternion, or the upper-left 3x3 block of a transform matrix.
//! [`Rotation`] keeps an Euler triple and its quaternion in lockstep.

mod euler;

pub use euler::{Euler, RotationOrder};

use glam::Quat;

/// An Euler triple paired with its quaternion.
///
/// Every setter re-derives the other half immediately, so both views are
/// always valid. Fields are private to keep it that way.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    euler: Euler,
    quaternion: Quat,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation {
    pub const IDENTITY: Self = Self {
        euler: Euler::IDENTITY,
        quaternion: Quat::IDENTITY,
    };

    pub fn from_euler(euler: Euler) -> Self {
        Self {
            euler,
            quaternion: euler.to_quat(),
        }
    }

    pub fn from_quat(quaternion: Quat) -> Self {
        let mut rotation = Self::IDENTITY;
        rotation.set_quaternion(quaternion);
        rotation
    }

    pub fn euler(&self) -> Euler {
        self.euler
    }

    pub fn quaternion(&self) -> Quat {
        self.quaternion
    }

    pub fn order(&self) -> RotationOrder {
        self.euler.order
    }

    pub fn set_x(&mut self, x: f32) {
        self.euler.x = x;
        self.sync_quaternion();
    }

    pub fn set_y(&mut self, y: f32) {
        self.euler.y = y;
        self.sync_quaternion();
    }

    pub fn set_z(&mut self, z: f32) {
        self.euler.z = z;
        self.sync_quaternion();
    }

    /// Reinterprets the current angles under a new order.
    ///
    /// This changes the rotation. Use [`Rotation::reorder`] to keep the
    /// rotation and re-express the angles instead.
    pub fn set_order(&mut self, order: RotationOrder) {
        self.euler.order = order;
        self.sync_quaternion();
    }

    pub fn set_euler(&mut self, euler: Euler) {
        self.euler = euler;
        self.sync_quaternion();
    }

    /// Sets the quaternion (normalized) and re-derives the angles in the
    /// current order.
    pub fn set_quaternion(&mut self, quaternion: Quat) {
        self.quaternion = quaternion.normalize();
        self.euler = Euler::from_quat(self.quaternion, self.euler.order);
    }

    /// Keeps the rotation, re-expressing the angles in `order`.
    pub fn reorder(&mut self, order: RotationOrder) {
        self.euler = self.euler.reorder(order);
    }

    fn sync_quaternion(&mut self) {
        self.quaternion = self.euler.to_quat();
    }
}
