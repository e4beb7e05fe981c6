use crate::foundation::core::Progress;
use crate::foundation::error::{RevealError, RevealResult};
use crate::mapping::mapper::ProgressMapper;
use crate::mapping::state::VisualState;
use crate::mask::fitter::{MaskFitter, MaskTransform};
use crate::session::geometry::GeometryProvider;
use crate::session::source::ScrollSource;
use crate::session::surface::{FrameCommit, RenderSurface};

/// How a session turns progress samples into committed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Evaluate the total mapping every frame; no state carries across frames.
    #[default]
    Total,
    /// Apply per-segment patches to a session-owned accumulator, so fields outside their gate
    /// keep the value of the last sample inside it.
    Accumulate,
}

/// Options controlling `RevealSession` behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealSessionOpts {
    /// Frame update strategy.
    pub mode: UpdateMode,
}

/// Caller-side animation loop for the hero reveal.
///
/// The session owns the injected [`ScrollSource`] and [`GeometryProvider`]; the mapper and the
/// fitter stay free of both. Each `tick` samples the source once and commits one complete state;
/// each `resize` re-fits the logo mask.
pub struct RevealSession {
    mapper: ProgressMapper,
    opts: RevealSessionOpts,
    source: Box<dyn ScrollSource>,
    geometry: Box<dyn GeometryProvider>,

    state: VisualState,
    mask: Option<MaskTransform>,
    frames: u64,
    mounted: bool,
}

impl RevealSession {
    /// Construct an unmounted session.
    pub fn new(
        mapper: ProgressMapper,
        source: Box<dyn ScrollSource>,
        geometry: Box<dyn GeometryProvider>,
        opts: RevealSessionOpts,
    ) -> Self {
        let state = mapper.initial_state();
        Self {
            mapper,
            opts,
            source,
            geometry,
            state,
            mask: None,
            frames: 0,
            mounted: false,
        }
    }

    /// Initialize the scroll source and fit the mask to the current layout.
    ///
    /// A degenerate mask shape does not fail the mount; the mask is fitted on a later `resize`.
    #[tracing::instrument(skip_all)]
    pub fn mount(&mut self, surface: &mut dyn RenderSurface) -> RevealResult<()> {
        if self.mounted {
            return Err(RevealError::validation("session is already mounted"));
        }
        self.source.init()?;
        self.mounted = true;
        if let Err(e) = self.refit(surface) {
            self.unmount();
            return Err(e);
        }
        tracing::debug!(mode = ?self.opts.mode, "reveal session mounted");
        Ok(())
    }

    /// Sample progress once and, if the source moved, commit the resulting state.
    ///
    /// Returns the committed state, or `None` for an idle frame.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> RevealResult<Option<VisualState>> {
        self.ensure_mounted()?;
        let Some(raw) = self.source.poll_progress() else {
            tracing::trace!("idle frame");
            return Ok(None);
        };
        if !Progress::in_range(raw) {
            tracing::debug!(raw, "progress outside [0, 1]; clamping");
        }
        let progress = Progress::clamped(raw);

        let state = match self.opts.mode {
            UpdateMode::Total => self.mapper.evaluate(progress.get()),
            UpdateMode::Accumulate => {
                let mut next = self.state;
                self.mapper
                    .evaluate_patch(progress.get())
                    .apply_to(&mut next);
                next
            }
        };

        let commit = FrameCommit {
            frame: self.frames + 1,
            progress,
            state,
        };
        surface.commit(&commit)?;
        self.frames = commit.frame;
        self.state = state;
        tracing::trace!(frame = commit.frame, progress = progress.get(), "frame committed");
        Ok(Some(state))
    }

    /// Re-fit the mask after a layout change.
    ///
    /// Returns the applied transform, or `None` when the mask shape is degenerate; in that case
    /// the previous transform stays in place.
    #[tracing::instrument(skip_all)]
    pub fn resize(
        &mut self,
        surface: &mut dyn RenderSurface,
    ) -> RevealResult<Option<MaskTransform>> {
        self.ensure_mounted()?;
        self.refit(surface)
    }

    /// Tear down the scroll source. Calling it on an unmounted session is a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.source.teardown();
        self.mounted = false;
        tracing::debug!(frames = self.frames, "reveal session unmounted");
    }

    /// Last committed state (the initial state before the first commit).
    pub fn state(&self) -> &VisualState {
        &self.state
    }

    /// Last applied mask transform.
    pub fn mask(&self) -> Option<MaskTransform> {
        self.mask
    }

    /// Number of frames committed so far.
    pub fn frames_committed(&self) -> u64 {
        self.frames
    }

    /// True between `mount` and `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The bound mapper.
    pub fn mapper(&self) -> &ProgressMapper {
        &self.mapper
    }

    fn ensure_mounted(&self) -> RevealResult<()> {
        if self.mounted {
            Ok(())
        } else {
            Err(RevealError::validation("session is not mounted"))
        }
    }

    fn refit(&mut self, surface: &mut dyn RenderSurface) -> RevealResult<Option<MaskTransform>> {
        let container = self.geometry.container_rect()?;
        let bounds = self.geometry.mask_bounds()?;
        match MaskFitter::fit(container, bounds) {
            Ok(t) => {
                surface.apply_mask(&t)?;
                self.mask = Some(t);
                tracing::debug!(transform = %t, "mask fitted");
                Ok(Some(t))
            }
            Err(e) if e.is_degenerate() => {
                tracing::warn!(error = %e, "skipping mask fit; keeping previous transform");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/reveal_session.rs"]
mod tests;
