use super::keyframes::KeyframeTrack;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationClip {
    pub name: String,
    pub duration: f64,
    pub tracks: Vec<KeyframeTrack>,
}

impl AnimationClip {
    /// Duration is taken from the latest key across all tracks.
    pub fn new(name: impl Into<String>, tracks: Vec<KeyframeTrack>) -> Self {
        let duration = tracks
            .iter()
            .map(KeyframeTrack::end_time)
            .fold(0.0, f64::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}
