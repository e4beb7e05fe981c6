use crate::foundation::core::Progress;
use crate::foundation::error::RevealResult;
use crate::mapping::state::VisualState;
use crate::mask::fitter::MaskTransform;

/// One frame's complete visual state, applied to the surface as a unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameCommit {
    /// 1-based count of commits made by the session.
    pub frame: u64,
    /// Clamped progress the state was computed from.
    pub progress: Progress,
    /// Full state for every layer.
    pub state: VisualState,
}

/// Receiver of visual updates (the compositing layer).
///
/// Ordering contract: at most one `commit` per animation frame, in frame order. Every field of a
/// commit derives from the same progress sample.
pub trait RenderSurface {
    /// Apply a frame's state to every layer.
    fn commit(&mut self, commit: &FrameCommit) -> RevealResult<()>;
    /// Apply a new transform to the mask path.
    fn apply_mask(&mut self, transform: &MaskTransform) -> RevealResult<()>;
}

/// In-memory surface for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub(crate) commits: Vec<FrameCommit>,
    pub(crate) masks: Vec<MaskTransform>,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits in arrival order.
    pub fn commits(&self) -> &[FrameCommit] {
        &self.commits
    }

    /// Mask transforms in arrival order.
    pub fn masks(&self) -> &[MaskTransform] {
        &self.masks
    }

    /// State of the most recent commit.
    pub fn last_state(&self) -> Option<VisualState> {
        self.commits.last().map(|c| c.state)
    }
}

impl RenderSurface for RecordingSurface {
    fn commit(&mut self, commit: &FrameCommit) -> RevealResult<()> {
        self.commits.push(*commit);
        Ok(())
    }

    fn apply_mask(&mut self, transform: &MaskTransform) -> RevealResult<()> {
        self.masks.push(*transform);
        Ok(())
    }
}
