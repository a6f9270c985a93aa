//! Packs per-bone offset matrices into a square float texture.
//!
//! Layout (shared with the vertex shader): bone `i` owns texels
//! `4i..4i+4`, each texel is 4 floats, so one column-major `Mat4` per bone
//! in ascending bone order. The texture side is the smallest of
//! [`SKIN_TEXTURE_DIMS`] that fits every bone.

use crate::skeleton::Skeleton;

use super::error::{AwsmSkinError, Result};

pub const SKIN_TEXTURE_DIMS: [usize; 4] = [8, 16, 32, 64];
pub const FLOATS_PER_TEXEL: usize = 4;
pub const TEXELS_PER_BONE: usize = 4;
pub const FLOATS_PER_BONE: usize = FLOATS_PER_TEXEL * TEXELS_PER_BONE;
pub const MAX_SKIN_BONES: usize = 64 * 64 / TEXELS_PER_BONE;

/// Side length of the skin texture for `bone_count` bones.
pub fn skin_texture_dim(bone_count: usize) -> Result<usize> {
    SKIN_TEXTURE_DIMS
        .iter()
        .copied()
        .find(|dim| dim * dim / TEXELS_PER_BONE >= bone_count)
        .ok_or(AwsmSkinError::TooManyBones {
            bone_count,
            max: MAX_SKIN_BONES,
        })
}

/// The GPU side of the skin texture, implemented by the renderer.
pub trait SkinTextureWriter {
    /// `texels` is `dim * dim * 4` floats.
    fn write_skin_texture(&mut self, dim: usize, texels: &[f32]) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct SkinMatrices {
    bone_count: usize,
    dim: usize,
    data: Vec<f32>,
    gpu_dirty: bool,
}

impl SkinMatrices {
    pub fn new(bone_count: usize) -> Result<Self> {
        let dim = skin_texture_dim(bone_count)?;

        Ok(Self {
            bone_count,
            dim,
            data: vec![0.0; dim * dim * FLOATS_PER_TEXEL],
            gpu_dirty: true,
        })
    }

    /// Resizes for a new bone count. Nothing happens if the count is
    /// unchanged; otherwise the buffer is zeroed and grown only when the
    /// texture tier changes.
    pub fn resize(&mut self, bone_count: usize) -> Result<()> {
        if bone_count == self.bone_count {
            return Ok(());
        }

        let dim = skin_texture_dim(bone_count)?;

        self.data.clear();
        self.data.resize(dim * dim * FLOATS_PER_TEXEL, 0.0);
        self.dim = dim;
        self.bone_count = bone_count;
        self.gpu_dirty = true;

        Ok(())
    }

    /// Writes `world * inverse_bind` for every bone into its texel block.
    pub fn update(&mut self, skeleton: &Skeleton) -> Result<()> {
        if skeleton.len() != self.bone_count {
            return Err(AwsmSkinError::BoneCountMismatch {
                expected: self.bone_count,
                actual: skeleton.len(),
            });
        }

        for (index, (bone, inverse)) in skeleton
            .bones()
            .iter()
            .zip(skeleton.bone_inverses())
            .enumerate()
        {
            let offset = *bone.world_matrix() * *inverse;
            let start = index * FLOATS_PER_BONE;
            offset.write_cols_to_slice(&mut self.data[start..start + FLOATS_PER_BONE]);
        }

        self.gpu_dirty = true;

        Ok(())
    }

    pub fn bone_count(&self) -> usize {
        self.bone_count
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn bone_matrix(&self, index: usize) -> Option<glam::Mat4> {
        if index >= self.bone_count {
            return None;
        }
        let start = index * FLOATS_PER_BONE;
        Some(glam::Mat4::from_cols_slice(
            &self.data[start..start + FLOATS_PER_BONE],
        ))
    }

    pub fn is_gpu_dirty(&self) -> bool {
        self.gpu_dirty
    }

    /// Hands the buffer to the uploader if anything changed since the last
    /// write.
    pub fn write_gpu(&mut self, writer: &mut impl SkinTextureWriter) -> Result<()> {
        if self.gpu_dirty {
            writer
                .write_skin_texture(self.dim, &self.data)
                .map_err(AwsmSkinError::Upload)?;
            self.gpu_dirty = false;
        }
        Ok(())
    }
}
