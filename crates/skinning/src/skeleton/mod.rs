//! Bone hierarchy and bind pose.
//!
//! Bones live in an arena ordered parent-before-child, so the index order is
//! already a valid root-to-leaf traversal and parents are plain indices.

mod bone;
mod error;

pub use bone::{Bone, BoneDescriptor};
pub use error::{AwsmSkeletonError, Result};

use glam::Mat4;

#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
    bone_inverses: Vec<Mat4>,
}

impl Skeleton {
    /// Builds the hierarchy, brings every world matrix up to the bind pose
    /// and captures the inverse bind matrices.
    ///
    /// A descriptor's parent must come before it.
    pub fn build(descriptors: &[BoneDescriptor]) -> Result<Self> {
        let mut bones: Vec<Bone> = Vec::with_capacity(descriptors.len());

        for (index, descriptor) in descriptors.iter().enumerate() {
            if let Some(parent) = descriptor.parent {
                if parent >= descriptors.len() {
                    return Err(AwsmSkeletonError::ParentOutOfRange {
                        bone: index,
                        parent,
                        len: descriptors.len(),
                    });
                }
                if parent >= index {
                    return Err(AwsmSkeletonError::ParentOutOfOrder {
                        bone: index,
                        parent,
                    });
                }
                bones[parent].children.push(index);
            }

            bones.push(Bone::new(descriptor));
        }

        let mut skeleton = Self {
            bones,
            bone_inverses: Vec::new(),
        };

        skeleton.update_world();
        skeleton.pose();

        Ok(skeleton)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bones_mut(&mut self) -> &mut [Bone] {
        &mut self.bones
    }

    pub fn bone(&self, index: usize) -> Result<&Bone> {
        self.bones
            .get(index)
            .ok_or(AwsmSkeletonError::BoneNotFound(index))
    }

    pub fn bone_mut(&mut self, index: usize) -> Result<&mut Bone> {
        self.bones
            .get_mut(index)
            .ok_or(AwsmSkeletonError::BoneNotFound(index))
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|bone| bone.name() == name)
    }

    pub fn bone_index_by_name(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|bone| bone.name() == name)
    }

    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.bones
            .iter()
            .enumerate()
            .filter(|(_, bone)| bone.parent().is_none())
            .map(|(index, _)| index)
    }

    pub fn bone_inverses(&self) -> &[Mat4] {
        &self.bone_inverses
    }

    /// `world * inverse_bind` for one bone.
    pub fn offset_matrix(&self, index: usize) -> Result<Mat4> {
        let bone = self.bone(index)?;
        Ok(*bone.world_matrix() * self.bone_inverses[index])
    }

    /// Recomputes every world matrix from the locals, root to leaf.
    pub fn update_world(&mut self) {
        for index in 0..self.bones.len() {
            let local = self.bones[index].local.to_matrix();
            let world = match self.bones[index].parent() {
                Some(parent) => self.bones[parent].world_matrix().mul_mat4(&local),
                None => local,
            };
            self.bones[index].world = world;
        }
    }

    /// Puts every bone back at its bind local and refreshes world matrices.
    pub fn reset_to_bind_pose(&mut self) {
        for bone in self.bones.iter_mut() {
            bone.local = *bone.bind_local();
        }
        self.update_world();
    }

    // runs once per build, after the first world update
    fn pose(&mut self) {
        self.bone_inverses = self
            .bones
            .iter()
            .enumerate()
            .map(|(index, bone)| {
                let world = bone.world_matrix();
                if world.determinant() == 0.0 {
                    tracing::warn!(
                        "bone {index} ({}) has a singular bind matrix, using identity inverse",
                        bone.name()
                    );
                    Mat4::IDENTITY
                } else {
                    world.inverse()
                }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests;
