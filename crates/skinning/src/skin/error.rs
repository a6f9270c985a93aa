use thiserror::Error;

pub type Result<T> = std::result::Result<T, AwsmSkinError>;

#[derive(Error, Debug)]
pub enum AwsmSkinError {
    #[error("[skin] {bone_count} bones exceeds the largest skin texture ({max} bones)")]
    TooManyBones { bone_count: usize, max: usize },

    #[error("[skin] skin matrices sized for {expected} bones, skeleton has {actual}")]
    BoneCountMismatch { expected: usize, actual: usize },

    #[error("[skin] missing skin weights")]
    MissingSkinWeights,

    #[error("[skin] missing skin indices")]
    MissingSkinIndices,

    #[error("[skin] skin influence mismatch, indices: {indices} weights: {weights}")]
    InfluenceLengthMismatch { indices: usize, weights: usize },

    #[error("[skin] vertex {vertex} references bone {bone} but only {bone_count} bones exist")]
    SkinIndexOutOfRange {
        vertex: usize,
        bone: usize,
        bone_count: usize,
    },

    #[error("[skin] skin texture upload failed: {0:?}")]
    Upload(anyhow::Error),
}
