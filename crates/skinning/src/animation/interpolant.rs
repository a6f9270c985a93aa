//! Stateful keyframe samplers.
//!
//! [`Interpolant::evaluate`] finds the keyframe pair bracketing the query
//! time (cached bracket, then the next one, then a binary search) and hands
//! the blend to the strategy picked by [`InterpolantKind`].

use super::{
    error::{AwsmAnimationError, Result},
    interpolate::{
        copy_sample, interpolate_cubic, interpolate_linear, interpolate_quaternion_linear,
        HermiteWeights,
    },
    track::ParameterTrack,
};

/// Blend strategy of an interpolant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolantKind {
    /// Step function, holds the left key until the next one is reached.
    Discrete,
    /// Component-wise lerp.
    Linear,
    /// Hermite spline with tangents estimated from the neighbouring keys.
    Cubic(CubicEnding),
    /// Slerp on each 4-float block.
    QuaternionLinear,
}

/// How a cubic interpolant invents the missing neighbour of the first and
/// last segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubicEnding {
    /// Natural spline, no curvature at the ends.
    #[default]
    ZeroCurvature,
    /// Flat tangent at the ends.
    ZeroSlope,
    /// Borrows the neighbour from the other end of the track.
    WrapAround,
}

/// Where a segment sits in its track. The first and last segments have no
/// real neighbour on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Interior,
    First,
    Last,
    /// Two-key track, the segment is both first and last.
    Only,
}

impl SegmentPosition {
    /// `i1` is the index of the right key, `len` the number of keys.
    pub fn resolve(i1: usize, len: usize) -> Self {
        match (i1 == 1, i1 + 1 == len) {
            (true, true) => Self::Only,
            (true, false) => Self::First,
            (false, true) => Self::Last,
            (false, false) => Self::Interior,
        }
    }

    fn has_prev(&self) -> bool {
        matches!(self, Self::Interior | Self::Last)
    }

    fn has_next(&self) -> bool {
        matches!(self, Self::Interior | Self::First)
    }
}

enum Seek {
    BeforeStart,
    AfterEnd,
    Within(usize),
}

/// A sampler over one [`ParameterTrack`].
///
/// The slice returned by [`Interpolant::evaluate`] is an internal scratch
/// buffer that the next call overwrites; copy it if it has to outlive the
/// borrow.
#[derive(Debug, Clone)]
pub struct Interpolant {
    track: ParameterTrack,
    kind: InterpolantKind,
    result: Vec<f32>,
    // index of the right key of the last bracket, 0 until the first hit
    cached_index: usize,
}

impl Interpolant {
    pub fn new(track: ParameterTrack, kind: InterpolantKind) -> Result<Self> {
        if kind == InterpolantKind::QuaternionLinear && track.value_size() % 4 != 0 {
            return Err(AwsmAnimationError::QuaternionValueSize(track.value_size()));
        }

        let result = vec![0.0; track.value_size()];

        Ok(Self {
            track,
            kind,
            result,
            cached_index: 0,
        })
    }

    pub fn new_discrete(track: ParameterTrack) -> Result<Self> {
        Self::new(track, InterpolantKind::Discrete)
    }

    pub fn new_linear(track: ParameterTrack) -> Result<Self> {
        Self::new(track, InterpolantKind::Linear)
    }

    pub fn new_cubic(track: ParameterTrack, ending: CubicEnding) -> Result<Self> {
        Self::new(track, InterpolantKind::Cubic(ending))
    }

    pub fn new_quaternion_linear(track: ParameterTrack) -> Result<Self> {
        Self::new(track, InterpolantKind::QuaternionLinear)
    }

    pub fn kind(&self) -> InterpolantKind {
        self.kind
    }

    pub fn track(&self) -> &ParameterTrack {
        &self.track
    }

    pub fn value_size(&self) -> usize {
        self.track.value_size()
    }

    /// Samples the track at `t`.
    ///
    /// Before the first key this is the first sample, at or after the last
    /// key it is the last sample.
    pub fn evaluate(&mut self, t: f64) -> &[f32] {
        match self.seek(t) {
            Seek::BeforeStart => {
                copy_sample(self.track.values(), self.track.value_size(), 0, &mut self.result)
            }
            Seek::AfterEnd => copy_sample(
                self.track.values(),
                self.track.value_size(),
                self.track.len() - 1,
                &mut self.result,
            ),
            Seek::Within(i1) => self.interpolate(i1, t),
        }

        &self.result
    }

    fn seek(&mut self, t: f64) -> Seek {
        let times = self.track.times();
        let len = times.len();

        let brackets = |i1: usize| i1 > 0 && i1 < len && times[i1 - 1] <= t && t < times[i1];

        let i1 = if brackets(self.cached_index) {
            self.cached_index
        } else if brackets(self.cached_index + 1) {
            self.cached_index + 1
        } else {
            // first key strictly after t, NaN lands before the start
            times.partition_point(|&time| time <= t)
        };

        if i1 == 0 {
            Seek::BeforeStart
        } else if i1 >= len {
            Seek::AfterEnd
        } else {
            self.cached_index = i1;
            Seek::Within(i1)
        }
    }

    fn interpolate(&mut self, i1: usize, t: f64) {
        let times = self.track.times();
        let values = self.track.values();
        let stride = self.track.value_size();
        let out = &mut self.result;

        let t0 = times[i1 - 1];
        let t1 = times[i1];

        // zero-width segments resolve to the later key
        if t1 <= t0 {
            copy_sample(values, stride, i1, out);
            return;
        }

        let alpha = ((t - t0) / (t1 - t0)) as f32;

        match self.kind {
            InterpolantKind::Discrete => copy_sample(values, stride, i1 - 1, out),
            InterpolantKind::Linear => interpolate_linear(values, stride, i1, alpha, out),
            InterpolantKind::QuaternionLinear => {
                interpolate_quaternion_linear(values, stride, i1, alpha, out)
            }
            InterpolantKind::Cubic(ending) => {
                let position = SegmentPosition::resolve(i1, times.len());
                let neighbours = CubicNeighbours::new(times, i1, position, ending);
                let weights =
                    HermiteWeights::new(alpha, neighbours.weight_prev, neighbours.weight_next);
                interpolate_cubic(
                    values,
                    stride,
                    neighbours.index_prev,
                    i1,
                    neighbours.index_next,
                    weights,
                    out,
                );
            }
        }
    }
}

struct CubicNeighbours {
    index_prev: usize,
    index_next: usize,
    weight_prev: f32,
    weight_next: f32,
}

impl CubicNeighbours {
    fn new(times: &[f64], i1: usize, position: SegmentPosition, ending: CubicEnding) -> Self {
        let len = times.len();
        let t0 = times[i1 - 1];
        let t1 = times[i1];

        let (index_prev, time_prev) = if position.has_prev() {
            (i1 - 2, times[i1 - 2])
        } else {
            match ending {
                CubicEnding::ZeroCurvature => (i1, t1),
                CubicEnding::ZeroSlope => (i1, 2.0 * t0 - t1),
                CubicEnding::WrapAround => {
                    let index = len - 2;
                    (index, t0 + times[index] - times[index + 1])
                }
            }
        };

        let (index_next, time_next) = if position.has_next() {
            (i1 + 1, times[i1 + 1])
        } else {
            match ending {
                CubicEnding::ZeroCurvature => (i1 - 1, t0),
                CubicEnding::ZeroSlope => (i1 - 1, 2.0 * t1 - t0),
                CubicEnding::WrapAround => (1, t1 + times[1] - times[0]),
            }
        };

        let half_dt = (t1 - t0) * 0.5;

        Self {
            index_prev,
            index_next,
            weight_prev: ratio(half_dt, t0 - time_prev),
            weight_next: ratio(half_dt, time_next - t1),
        }
    }
}

// duplicate neighbouring keys would divide by zero, drop their influence
fn ratio(numerator: f64, denominator: f64) -> f32 {
    if denominator == 0.0 {
        0.0
    } else {
        (numerator / denominator) as f32
    }
}
