//! Logging toggles.

/// Controls the optional timing spans emitted around the per-frame passes.
///
/// Everything else is logged unconditionally through `tracing` and filtered
/// by whatever subscriber the host installs.
#[derive(Clone, Debug, Default)]
pub struct SkinningLogging {
    pub update_timings: bool,
}

impl SkinningLogging {
    pub fn with_update_timings(mut self, update_timings: bool) -> Self {
        self.update_timings = update_timings;
        self
    }

    pub(crate) fn span(&self, name: &'static str) -> Option<tracing::span::EnteredSpan> {
        if self.update_timings {
            Some(tracing::span!(tracing::Level::INFO, "skinning", pass = name).entered())
        } else {
            None
        }
    }
}
