//! Weighted accumulation of sampled channels into bone locals.

use glam::{Quat, Vec3};

use crate::skeleton::Skeleton;

use super::{
    interpolate::{interpolate_linear_quat, interpolate_linear_vec3},
    keyframes::Channel,
};

/// Per-bone scratch for blending every active player's samples.
///
/// Owned by the mesh and reused across frames; [`PoseMixer::reset`] keeps the
/// allocation.
#[derive(Debug, Clone, Default)]
pub struct PoseMixer {
    slots: Vec<BoneSlot>,
}

#[derive(Debug, Clone, Copy, Default)]
struct BoneSlot {
    translation: Option<Weighted<Vec3>>,
    rotation: Option<Weighted<Quat>>,
    scale: Option<Weighted<Vec3>>,
}

#[derive(Debug, Clone, Copy)]
struct Weighted<T> {
    value: T,
    weight: f32,
}

impl PoseMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, bone_count: usize) {
        self.slots.clear();
        self.slots.resize(bone_count, BoneSlot::default());
    }

    /// Folds one sample into the running blend for `bone`/`channel`.
    ///
    /// Each new sample is blended in by `weight / cumulative_weight`, which
    /// works out to a weighted average independent of player order.
    pub fn accumulate(&mut self, bone: usize, channel: Channel, sample: &[f32], weight: f32) {
        if weight <= 0.0 {
            return;
        }

        let Some(slot) = self.slots.get_mut(bone) else {
            return;
        };

        match channel {
            Channel::Translation => accumulate(
                &mut slot.translation,
                Vec3::from_slice(sample),
                weight,
                interpolate_linear_vec3,
            ),
            Channel::Scale => accumulate(
                &mut slot.scale,
                Vec3::from_slice(sample),
                weight,
                interpolate_linear_vec3,
            ),
            Channel::Rotation => accumulate(
                &mut slot.rotation,
                Quat::from_slice(sample),
                weight,
                interpolate_linear_quat,
            ),
        }
    }

    /// Writes the blended channels into the bone locals.
    ///
    /// A channel whose total weight is below 1 is mixed with the bind pose
    /// for the remainder. Channels nobody animated are left untouched.
    pub fn apply(&self, skeleton: &mut Skeleton) {
        for (bone, slot) in skeleton.bones_mut().iter_mut().zip(self.slots.iter()) {
            let bind = *bone.bind_local();

            if let Some(translation) = slot.translation {
                bone.local.translation = if translation.weight < 1.0 {
                    interpolate_linear_vec3(
                        bind.translation,
                        translation.value,
                        translation.weight,
                    )
                } else {
                    translation.value
                };
            }

            if let Some(rotation) = slot.rotation {
                let value = if rotation.weight < 1.0 {
                    interpolate_linear_quat(
                        bind.rotation.quaternion(),
                        rotation.value,
                        rotation.weight,
                    )
                } else {
                    rotation.value
                };
                bone.local.rotation.set_quaternion(value);
            }

            if let Some(scale) = slot.scale {
                bone.local.scale = if scale.weight < 1.0 {
                    interpolate_linear_vec3(bind.scale, scale.value, scale.weight)
                } else {
                    scale.value
                };
            }
        }
    }
}

fn accumulate<T: Copy>(
    slot: &mut Option<Weighted<T>>,
    value: T,
    weight: f32,
    blend: fn(T, T, f32) -> T,
) {
    *slot = Some(match *slot {
        None => Weighted { value, weight },
        Some(current) => {
            let total = current.weight + weight;
            Weighted {
                value: blend(current.value, value, weight / total),
                weight: total,
            }
        }
    });
}
