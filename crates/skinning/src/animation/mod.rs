mod animations;
mod clip;
mod error;
mod interpolant;
mod interpolate;
mod keyframes;
mod mixer;
mod player;
mod track;

pub use animations::{AnimationKey, Animations};
pub use clip::AnimationClip;
pub use error::{AwsmAnimationError, Result};
pub use interpolant::{CubicEnding, Interpolant, InterpolantKind, SegmentPosition};
pub use interpolate::slerp_flat;
pub use keyframes::{Channel, InterpolationMode, KeyframeTrack};
pub use mixer::PoseMixer;
pub use player::{AnimationLoopStyle, AnimationPlayDirection, AnimationPlayer, AnimationState};
pub use track::ParameterTrack;
