use super::error::{AwsmAnimationError, Result};

/// Keyframe times paired with a flat, fixed-stride sample buffer.
///
/// `values.len() == times.len() * value_size` always holds. Times are
/// non-decreasing; a repeated time is a step discontinuity.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTrack {
    times: Vec<f64>,
    values: Vec<f32>,
    value_size: usize,
}

impl ParameterTrack {
    pub fn new(times: Vec<f64>, values: Vec<f32>, value_size: usize) -> Result<Self> {
        if times.is_empty() {
            return Err(AwsmAnimationError::EmptyTrack);
        }

        if value_size == 0 {
            return Err(AwsmAnimationError::ZeroValueSize);
        }

        if values.len() != times.len() * value_size {
            return Err(AwsmAnimationError::SampleLengthMismatch {
                times: times.len(),
                value_size,
                values: values.len(),
            });
        }

        for (index, time) in times.iter().enumerate() {
            if !time.is_finite() {
                return Err(AwsmAnimationError::NonFiniteTime { index });
            }
            if index > 0 && *time < times[index - 1] {
                return Err(AwsmAnimationError::NonMonotonicTimes {
                    index,
                    previous: times[index - 1],
                    current: *time,
                });
            }
        }

        Ok(Self {
            times,
            values,
            value_size,
        })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn value_size(&self) -> usize {
        self.value_size
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn sample(&self, index: usize) -> &[f32] {
        let start = index * self.value_size;
        &self.values[start..start + self.value_size]
    }

    pub fn start_time(&self) -> f64 {
        self.times[0]
    }

    pub fn end_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }
}
