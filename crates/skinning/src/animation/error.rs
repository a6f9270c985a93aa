//! Animation error types and results.

use thiserror::Error;

use super::AnimationKey;

/// Animation result type.
pub type Result<T> = std::result::Result<T, AwsmAnimationError>;

/// Errors related to animation data and playback.
#[derive(Error, Debug)]
pub enum AwsmAnimationError {
    #[error("[animation] track has no keyframes")]
    EmptyTrack,

    #[error("[animation] value size must be greater than zero")]
    ZeroValueSize,

    #[error("[animation] sample length mismatch, times: {times} value size: {value_size} values: {values}")]
    SampleLengthMismatch {
        times: usize,
        value_size: usize,
        values: usize,
    },

    #[error("[animation] keyframe time at index {index} is not finite")]
    NonFiniteTime { index: usize },

    #[error("[animation] keyframe times decrease at index {index} ({previous} -> {current})")]
    NonMonotonicTimes {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("[animation] quaternion tracks need a value size of 4, got {0}")]
    QuaternionValueSize(usize),

    #[error("[animation] missing animation key {0:?}")]
    MissingKey(AnimationKey),
}
