//! hero-reveal maps scroll progress through a pinned hero section to the visual state of every
//! layer in a logo-mask reveal sequence.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: a [`ScrollSource`] reports progress in `[0, 1]` once per animation frame.
//! 2. **Map**: [`ProgressMapper`] turns progress into a [`VisualState`] through independently
//!    gated piecewise segments (hero fade, image zoom + mask overlay, caption reveal).
//! 3. **Commit**: [`RevealSession`] hands the whole state to a [`RenderSurface`] as one
//!    [`FrameCommit`].
//! 4. **Fit** (on mount and resize): [`MaskFitter`] centers the logo path inside its container
//!    and yields a [`MaskTransform`] for the mask element.
//!
//! The key design constraints:
//!
//! - **Safe Rust only**: the crate root carries `#![forbid(unsafe_code)]`.
//! - **Pure core**: the mapper and the fitter hold no state and perform no IO; the session owns
//!   every stateful collaborator.
//! - **Never non-finite**: out-of-range progress is clamped and zero-area shapes are reported as
//!   [`RevealError::DegenerateGeometry`] instead of producing NaN or infinity.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod mapping;
mod mask;
mod session;

pub use config::RevealConfig;
pub use config::palette::{CaptionPalette, HexColor};
pub use config::thresholds::{
    DEFAULT_CAPTION_GRADIENT_BOTTOM_END, DEFAULT_CAPTION_GRADIENT_BOTTOM_START,
    DEFAULT_CAPTION_GRADIENT_SPAN, DEFAULT_CAPTION_REVEAL_SPAN, DEFAULT_CAPTION_REVEAL_START,
    DEFAULT_CAPTION_SCALE_END, DEFAULT_CAPTION_SCALE_START, DEFAULT_FADE_THRESHOLD,
    DEFAULT_IMAGE_SCALE_END, DEFAULT_IMAGE_SCALE_START, DEFAULT_INITIAL_OVERLAY_SCALE,
    DEFAULT_OVERLAY_FADE_SPAN, DEFAULT_OVERLAY_FADE_START, DEFAULT_ZOOM_THRESHOLD,
    ThresholdConfig, ValueRange, Window,
};
pub use foundation::core::{
    Affine, BezPath, ContainerRect, Point, Progress, Rect, ShapeBounds, Vec2,
};
pub use foundation::error::{RevealError, RevealResult};
pub use mapping::mapper::{ProgressMapper, evaluate, evaluate_patch};
pub use mapping::state::{Layer, PropertyAssignment, PropertyValue, VisualPatch, VisualState};
pub use mask::fitter::{MaskFitter, MaskTransform};
pub use mask::path::LogoPath;
pub use session::geometry::{GeometryProvider, StaticGeometry};
pub use session::reveal_session::{RevealSession, RevealSessionOpts, UpdateMode};
pub use session::source::{ScriptedScroll, ScrollSource};
pub use session::surface::{FrameCommit, RecordingSurface, RenderSurface};
