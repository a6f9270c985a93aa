mod error;
mod matrices;
mod weights;

pub use error::{AwsmSkinError, Result};
pub use matrices::{
    skin_texture_dim, SkinMatrices, SkinTextureWriter, FLOATS_PER_BONE, FLOATS_PER_TEXEL,
    MAX_SKIN_BONES, SKIN_TEXTURE_DIMS, TEXELS_PER_BONE,
};
pub use weights::{normalize_skin_weights, validate_skin_indices, SkinIndices, SkinWeights};
