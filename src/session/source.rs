use std::collections::VecDeque;

use crate::foundation::error::{RevealError, RevealResult};

/// Injected provider of scroll progress for the pinned hero region.
///
/// Lifecycle contract: `init` is called once when the session mounts, `poll_progress` at most
/// once per animation frame while mounted, and `teardown` once on unmount. Implementations own
/// whatever smooth-scroll or pinning machinery produces the samples.
pub trait ScrollSource {
    /// Start producing samples (register listeners, pin the section).
    fn init(&mut self) -> RevealResult<()>;
    /// Latest progress observed since the previous poll, or `None` if nothing moved.
    ///
    /// Several scroll events within one frame collapse to the most recent value.
    fn poll_progress(&mut self) -> Option<f64>;
    /// Stop producing samples and release resources.
    fn teardown(&mut self);
}

/// A [`ScrollSource`] replaying a queued sequence of per-frame samples.
#[derive(Clone, Debug, Default)]
pub struct ScriptedScroll {
    frames: VecDeque<Option<f64>>,
    active: bool,
    init_count: u32,
    teardown_count: u32,
}

impl ScriptedScroll {
    /// One frame per sample, in order.
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            frames: samples.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }

    /// `frames` evenly spaced samples from 0 to 1 inclusive.
    pub fn sweep(frames: usize) -> RevealResult<Self> {
        if frames < 2 {
            return Err(RevealError::validation("sweep needs at least 2 frames"));
        }
        let last = (frames - 1) as f64;
        Ok(Self::new((0..frames).map(|i| i as f64 / last)))
    }

    /// Queue one frame with a single sample.
    pub fn push(&mut self, progress: f64) {
        self.frames.push_back(Some(progress));
    }

    /// Queue one frame in which several scroll events arrived; only the last one is reported.
    pub fn push_burst(&mut self, samples: impl IntoIterator<Item = f64>) {
        self.frames.push_back(samples.into_iter().last());
    }

    /// Queue one frame without scroll movement.
    pub fn push_idle(&mut self) {
        self.frames.push_back(None);
    }

    /// Frames still queued.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// True between `init` and `teardown`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of `init` / `teardown` calls observed.
    pub fn lifecycle_counts(&self) -> (u32, u32) {
        (self.init_count, self.teardown_count)
    }
}

impl ScrollSource for ScriptedScroll {
    fn init(&mut self) -> RevealResult<()> {
        if self.active {
            return Err(RevealError::validation("scroll source already initialized"));
        }
        self.active = true;
        self.init_count += 1;
        Ok(())
    }

    fn poll_progress(&mut self) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.frames.pop_front().flatten()
    }

    fn teardown(&mut self) {
        self.active = false;
        self.teardown_count += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/source.rs"]
mod tests;
