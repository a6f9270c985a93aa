use glam::{Quat, Vec3};

use super::{
    error::Result,
    interpolant::{CubicEnding, Interpolant, InterpolantKind},
    track::ParameterTrack,
};

/// Which part of a bone's local transform a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Translation,
    Rotation,
    Scale,
}

impl Channel {
    pub fn value_size(&self) -> usize {
        match self {
            Self::Translation | Self::Scale => 3,
            Self::Rotation => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    Discrete,
    #[default]
    Linear,
    Smooth,
}

/// Keyframes for one channel of one bone, as handed over by a loader.
///
/// Rotation values are `[x, y, z, w]` quaternions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyframeTrack {
    pub bone: String,
    pub channel: Channel,
    pub times: Vec<f64>,
    pub values: Vec<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interpolation: InterpolationMode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ending: CubicEnding,
}

impl KeyframeTrack {
    pub fn new(
        bone: impl Into<String>,
        channel: Channel,
        times: Vec<f64>,
        values: Vec<f32>,
    ) -> Self {
        Self {
            bone: bone.into(),
            channel,
            times,
            values,
            interpolation: InterpolationMode::default(),
            ending: CubicEnding::default(),
        }
    }

    pub fn translation(bone: impl Into<String>, times: Vec<f64>, values: &[Vec3]) -> Self {
        let values = values.iter().flat_map(|v| v.to_array()).collect();
        Self::new(bone, Channel::Translation, times, values)
    }

    pub fn rotation(bone: impl Into<String>, times: Vec<f64>, values: &[Quat]) -> Self {
        let values = values.iter().flat_map(|q| q.to_array()).collect();
        Self::new(bone, Channel::Rotation, times, values)
    }

    pub fn scale(bone: impl Into<String>, times: Vec<f64>, values: &[Vec3]) -> Self {
        let values = values.iter().flat_map(|v| v.to_array()).collect();
        Self::new(bone, Channel::Scale, times, values)
    }

    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_ending(mut self, ending: CubicEnding) -> Self {
        self.ending = ending;
        self
    }

    pub fn end_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Rotation tracks have no smooth quaternion spline, they slerp for
    /// both `Linear` and `Smooth`.
    pub fn interpolant_kind(&self) -> InterpolantKind {
        match (self.channel, self.interpolation) {
            (_, InterpolationMode::Discrete) => InterpolantKind::Discrete,
            (Channel::Rotation, _) => InterpolantKind::QuaternionLinear,
            (_, InterpolationMode::Linear) => InterpolantKind::Linear,
            (_, InterpolationMode::Smooth) => InterpolantKind::Cubic(self.ending),
        }
    }

    pub fn create_interpolant(&self) -> Result<Interpolant> {
        let track = ParameterTrack::new(
            self.times.clone(),
            self.values.clone(),
            self.channel.value_size(),
        )?;
        Interpolant::new(track, self.interpolant_kind())
    }
}
