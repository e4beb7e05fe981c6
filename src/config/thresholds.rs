use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::{lerp, ratio};

/// Progress at which the hero logo and copy have fully faded out.
pub const DEFAULT_FADE_THRESHOLD: f64 = 0.15;
/// Progress at which the image zoom and the mask overlay reach their end state.
pub const DEFAULT_ZOOM_THRESHOLD: f64 = 0.85;
/// Background image scale at progress 0.
pub const DEFAULT_IMAGE_SCALE_START: f64 = 1.5;
/// Background image scale at the zoom threshold.
pub const DEFAULT_IMAGE_SCALE_END: f64 = 1.0;
/// Mask overlay scale at progress 0; decays exponentially to 1 at the zoom threshold.
pub const DEFAULT_INITIAL_OVERLAY_SCALE: f64 = 750.0;
/// Progress at which the solid color overlay starts fading in.
pub const DEFAULT_OVERLAY_FADE_START: f64 = 0.25;
/// Progress length of the color overlay fade-in.
pub const DEFAULT_OVERLAY_FADE_SPAN: f64 = 0.4;
/// Progress at which the caption starts revealing.
pub const DEFAULT_CAPTION_REVEAL_START: f64 = 0.6;
/// Progress length of the caption reveal.
pub const DEFAULT_CAPTION_REVEAL_SPAN: f64 = 0.25;
/// Distance between the caption gradient's top and bottom stops, in percent.
pub const DEFAULT_CAPTION_GRADIENT_SPAN: f64 = 100.0;
/// Caption gradient bottom stop at the start of the reveal, in percent.
pub const DEFAULT_CAPTION_GRADIENT_BOTTOM_START: f64 = 240.0;
/// Caption gradient bottom stop at the end of the reveal, in percent.
pub const DEFAULT_CAPTION_GRADIENT_BOTTOM_END: f64 = -40.0;
/// Caption scale at the start of the reveal.
pub const DEFAULT_CAPTION_SCALE_START: f64 = 1.25;
/// Caption scale at the end of the reveal.
pub const DEFAULT_CAPTION_SCALE_END: f64 = 1.0;

/// A progress sub-range `[start, start + span]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// First progress value inside the window.
    pub start: f64,
    /// Window length in progress units (> 0).
    pub span: f64,
}

impl Window {
    /// Construct a window.
    pub const fn new(start: f64, span: f64) -> Self {
        Self { start, span }
    }

    /// Last progress value inside the window.
    pub fn end(self) -> f64 {
        self.start + self.span
    }

    /// Unclamped normalized position of `p` (0 at `start`, 1 at `end`).
    pub fn ratio(self, p: f64) -> f64 {
        ratio(p, self.start, self.span)
    }

    fn validate(self, name: &str) -> RevealResult<()> {
        if !self.start.is_finite() || !(0.0..=1.0).contains(&self.start) {
            return Err(RevealError::validation(format!(
                "{name}.start must be within [0, 1]"
            )));
        }
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err(RevealError::validation(format!(
                "{name}.span must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// Output value range interpolated by a normalized segment ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueRange {
    /// Value at ratio 0.
    pub from: f64,
    /// Value at ratio 1.
    pub to: f64,
}

impl ValueRange {
    /// Construct a range.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Value at normalized position `t` (not clamped).
    pub fn at(self, t: f64) -> f64 {
        lerp(self.from, self.to, t)
    }

    fn validate(self, name: &str) -> RevealResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(RevealError::validation(format!(
                "{name} endpoints must be finite"
            )));
        }
        Ok(())
    }
}

/// Tunable thresholds and ranges for every progress segment.
///
/// Missing fields fall back to the `DEFAULT_*` constants when deserialized. This holds inside
/// nested windows and ranges too: `{"overlay_fade": {"start": 0.3}}` keeps the default span.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Hero logo/copy opacity reaches 0 here.
    pub fade_threshold: f64,
    /// Zoom segment gate; image and overlay scales freeze beyond it.
    pub zoom_threshold: f64,
    /// Background image scale across the zoom segment.
    #[serde(deserialize_with = "image_scale_over_default")]
    pub image_scale: ValueRange,
    /// Mask overlay scale at progress 0 (>= 1).
    pub initial_overlay_scale: f64,
    /// Color overlay fade-in window.
    #[serde(deserialize_with = "overlay_fade_over_default")]
    pub overlay_fade: Window,
    /// Caption reveal window.
    #[serde(deserialize_with = "caption_reveal_over_default")]
    pub caption_reveal: Window,
    /// Distance from the caption gradient top stop to its bottom stop, in percent.
    pub caption_gradient_span: f64,
    /// Caption gradient bottom stop across the reveal, in percent.
    #[serde(deserialize_with = "caption_gradient_bottom_over_default")]
    pub caption_gradient_bottom: ValueRange,
    /// Caption scale across the reveal.
    #[serde(deserialize_with = "caption_scale_over_default")]
    pub caption_scale: ValueRange,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialWindow {
    start: Option<f64>,
    span: Option<f64>,
}

impl PartialWindow {
    fn over(self, base: Window) -> Window {
        Window::new(
            self.start.unwrap_or(base.start),
            self.span.unwrap_or(base.span),
        )
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialRange {
    from: Option<f64>,
    to: Option<f64>,
}

impl PartialRange {
    fn over(self, base: ValueRange) -> ValueRange {
        ValueRange::new(self.from.unwrap_or(base.from), self.to.unwrap_or(base.to))
    }
}

fn image_scale_over_default<'de, D>(d: D) -> Result<ValueRange, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let base = ValueRange::new(DEFAULT_IMAGE_SCALE_START, DEFAULT_IMAGE_SCALE_END);
    Ok(<PartialRange as serde::Deserialize>::deserialize(d)?.over(base))
}

fn overlay_fade_over_default<'de, D>(d: D) -> Result<Window, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let base = Window::new(DEFAULT_OVERLAY_FADE_START, DEFAULT_OVERLAY_FADE_SPAN);
    Ok(<PartialWindow as serde::Deserialize>::deserialize(d)?.over(base))
}

fn caption_reveal_over_default<'de, D>(d: D) -> Result<Window, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let base = Window::new(DEFAULT_CAPTION_REVEAL_START, DEFAULT_CAPTION_REVEAL_SPAN);
    Ok(<PartialWindow as serde::Deserialize>::deserialize(d)?.over(base))
}

fn caption_gradient_bottom_over_default<'de, D>(d: D) -> Result<ValueRange, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let base = ValueRange::new(
        DEFAULT_CAPTION_GRADIENT_BOTTOM_START,
        DEFAULT_CAPTION_GRADIENT_BOTTOM_END,
    );
    Ok(<PartialRange as serde::Deserialize>::deserialize(d)?.over(base))
}

fn caption_scale_over_default<'de, D>(d: D) -> Result<ValueRange, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let base = ValueRange::new(DEFAULT_CAPTION_SCALE_START, DEFAULT_CAPTION_SCALE_END);
    Ok(<PartialRange as serde::Deserialize>::deserialize(d)?.over(base))
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            fade_threshold: DEFAULT_FADE_THRESHOLD,
            zoom_threshold: DEFAULT_ZOOM_THRESHOLD,
            image_scale: ValueRange::new(DEFAULT_IMAGE_SCALE_START, DEFAULT_IMAGE_SCALE_END),
            initial_overlay_scale: DEFAULT_INITIAL_OVERLAY_SCALE,
            overlay_fade: Window::new(DEFAULT_OVERLAY_FADE_START, DEFAULT_OVERLAY_FADE_SPAN),
            caption_reveal: Window::new(DEFAULT_CAPTION_REVEAL_START, DEFAULT_CAPTION_REVEAL_SPAN),
            caption_gradient_span: DEFAULT_CAPTION_GRADIENT_SPAN,
            caption_gradient_bottom: ValueRange::new(
                DEFAULT_CAPTION_GRADIENT_BOTTOM_START,
                DEFAULT_CAPTION_GRADIENT_BOTTOM_END,
            ),
            caption_scale: ValueRange::new(
                DEFAULT_CAPTION_SCALE_START,
                DEFAULT_CAPTION_SCALE_END,
            ),
        }
    }
}

impl ThresholdConfig {
    /// Reject configurations that could divide by zero or yield non-finite output.
    pub fn validate(&self) -> RevealResult<()> {
        for (name, v) in [
            ("fade_threshold", self.fade_threshold),
            ("zoom_threshold", self.zoom_threshold),
        ] {
            if !v.is_finite() || v <= 0.0 || v > 1.0 {
                return Err(RevealError::validation(format!(
                    "{name} must be within (0, 1]"
                )));
            }
        }
        if !self.initial_overlay_scale.is_finite() || self.initial_overlay_scale < 1.0 {
            return Err(RevealError::validation(
                "initial_overlay_scale must be finite and >= 1",
            ));
        }
        if !self.caption_gradient_span.is_finite() {
            return Err(RevealError::validation(
                "caption_gradient_span must be finite",
            ));
        }
        self.overlay_fade.validate("overlay_fade")?;
        self.caption_reveal.validate("caption_reveal")?;
        self.image_scale.validate("image_scale")?;
        self.caption_gradient_bottom
            .validate("caption_gradient_bottom")?;
        self.caption_scale.validate("caption_scale")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/thresholds.rs"]
mod tests;
