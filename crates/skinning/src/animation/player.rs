use crate::skeleton::Skeleton;

use super::{
    clip::AnimationClip, error::Result, interpolant::Interpolant, keyframes::Channel,
    mixer::PoseMixer,
};

#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    pub speed: f64,
    pub weight: f32,
    pub loop_style: Option<AnimationLoopStyle>,
    // will change with ping-pong as each end is hit
    pub play_direction: AnimationPlayDirection,
    name: String,
    duration: f64,
    channels: Vec<BoundChannel>,
    state: AnimationState,
    local_time: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationState {
    Playing,
    Paused,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationLoopStyle {
    Loop,
    PingPong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationPlayDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
struct BoundChannel {
    bone: usize,
    channel: Channel,
    interpolant: Interpolant,
}

impl AnimationPlayer {
    /// Binds every track of `clip` to a bone of `skeleton`, creating one
    /// interpolant per track. Tracks naming a bone the skeleton doesn't have
    /// are skipped with a warning.
    pub fn new(clip: &AnimationClip, skeleton: &Skeleton) -> Result<Self> {
        let mut channels = Vec::with_capacity(clip.tracks.len());

        for track in &clip.tracks {
            match skeleton.bone_index_by_name(&track.bone) {
                Some(bone) => channels.push(BoundChannel {
                    bone,
                    channel: track.channel,
                    interpolant: track.create_interpolant()?,
                }),
                None => {
                    tracing::warn!(
                        "animation {} targets unknown bone {}, skipping track",
                        clip.name,
                        track.bone
                    );
                }
            }
        }

        Ok(Self {
            speed: 1.0,
            weight: 1.0,
            loop_style: None,
            play_direction: AnimationPlayDirection::Forward,
            name: clip.name.clone(),
            duration: clip.duration,
            channels,
            state: AnimationState::Paused,
            local_time: 0.0,
        })
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_loop_style(mut self, loop_style: Option<AnimationLoopStyle>) -> Self {
        self.loop_style = loop_style;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn local_time(&self) -> f64 {
        self.local_time
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn play(&mut self) {
        self.state = AnimationState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == AnimationState::Playing {
            self.state = AnimationState::Paused;
        }
    }

    /// Rewinds to the start and pauses.
    pub fn stop(&mut self) {
        self.local_time = 0.0;
        self.play_direction = AnimationPlayDirection::Forward;
        self.state = AnimationState::Paused;
    }

    pub fn set_local_time(&mut self, local_time: f64) {
        self.local_time = local_time.clamp(0.0, self.duration.max(0.0));
    }

    pub fn update(&mut self, global_time_delta: f64) {
        if self.state != AnimationState::Playing {
            return;
        }

        // nothing to advance through
        if self.duration <= 0.0 {
            self.local_time = 0.0;
            return;
        }

        // a negative speed runs against the play direction
        let step = match self.play_direction {
            AnimationPlayDirection::Forward => global_time_delta * self.speed,
            AnimationPlayDirection::Backward => -global_time_delta * self.speed,
        };

        self.local_time += step;

        if step > 0.0 && self.local_time >= self.duration {
            self.wrap(self.duration);
        } else if step < 0.0 && self.local_time <= 0.0 {
            self.wrap(0.0);
        }
    }

    // `edge` is the end of the clip that was just crossed
    fn wrap(&mut self, edge: f64) {
        match self.loop_style {
            Some(AnimationLoopStyle::Loop) => {
                self.local_time = self.local_time.rem_euclid(self.duration);
            }
            Some(AnimationLoopStyle::PingPong) => {
                self.local_time = edge;
                self.play_direction = match self.play_direction {
                    AnimationPlayDirection::Forward => AnimationPlayDirection::Backward,
                    AnimationPlayDirection::Backward => AnimationPlayDirection::Forward,
                };
            }
            None => {
                self.local_time = edge;
                self.state = AnimationState::Ended;
            }
        }
    }

    /// Evaluates every bound channel at the current local time and folds the
    /// samples into `mixer` with this player's weight.
    pub fn sample_into(&mut self, mixer: &mut PoseMixer) {
        let weight = self.weight;
        let time = self.local_time;

        for bound in self.channels.iter_mut() {
            let sample = bound.interpolant.evaluate(time);
            mixer.accumulate(bound.bone, bound.channel, sample, weight);
        }
    }
}
