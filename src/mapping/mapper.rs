use crate::config::thresholds::ThresholdConfig;
use crate::foundation::core::Progress;
use crate::foundation::error::RevealResult;
use crate::mapping::segments::{
    CaptionGate, caption_gated, caption_total, hero_overlay_opacity, zoom_gated, zoom_total,
};
use crate::mapping::state::{VisualPatch, VisualState};

/// Map progress to a complete [`VisualState`].
///
/// Pure and total: `progress` is clamped to `[0, 1]` (NaN maps to 0) and every field is defined
/// for every input. Past a segment's gate the field holds the segment's boundary value, so the
/// image and overlay scales stop changing after `zoom_threshold` and the caption stays fully
/// revealed after its window.
pub fn evaluate(progress: f64, config: &ThresholdConfig) -> VisualState {
    let p = Progress::clamped(progress).get();
    let zoom = zoom_total(p, config);
    let caption = caption_total(p, config);
    VisualState {
        hero_overlay_opacity: hero_overlay_opacity(p, config),
        hero_image_scale: zoom.image_scale,
        mask_overlay_scale: zoom.overlay_scale,
        fade_overlay_opacity: zoom.fade_overlay_opacity,
        caption_opacity: caption.opacity,
        caption_scale: caption.scale,
        caption_gradient_top: caption.gradient_top,
        caption_gradient_bottom: caption.gradient_bottom,
    }
}

/// Map progress to the fields each segment writes at `progress`, and nothing else.
///
/// - the fade segment always writes the hero overlay opacity;
/// - the zoom segment writes nothing past `zoom_threshold`;
/// - before the caption window only the caption opacity (0) is written, past it nothing.
///
/// Applying consecutive patches to one accumulator reproduces the freeze-at-last-sample
/// behavior of a per-tick property setter.
pub fn evaluate_patch(progress: f64, config: &ThresholdConfig) -> VisualPatch {
    let p = Progress::clamped(progress).get();
    let mut patch = VisualPatch {
        hero_overlay_opacity: Some(hero_overlay_opacity(p, config)),
        ..VisualPatch::default()
    };

    if let Some(zoom) = zoom_gated(p, config) {
        patch.hero_image_scale = Some(zoom.image_scale);
        patch.mask_overlay_scale = Some(zoom.overlay_scale);
        patch.fade_overlay_opacity = Some(zoom.fade_overlay_opacity);
    }

    match caption_gated(p, config) {
        CaptionGate::Before => patch.caption_opacity = Some(0.0),
        CaptionGate::Inside(c) => {
            patch.caption_opacity = Some(c.opacity);
            patch.caption_scale = Some(c.scale);
            patch.caption_gradient_top = Some(c.gradient_top);
            patch.caption_gradient_bottom = Some(c.gradient_bottom);
        }
        CaptionGate::After => {}
    }

    patch
}

/// Progress mapper bound to a validated [`ThresholdConfig`].
#[derive(Clone, Debug, Default)]
pub struct ProgressMapper {
    config: ThresholdConfig,
}

impl ProgressMapper {
    /// Validate `config` and bind it.
    pub fn new(config: ThresholdConfig) -> RevealResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The bound thresholds.
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// See [`evaluate`].
    pub fn evaluate(&self, progress: f64) -> VisualState {
        evaluate(progress, &self.config)
    }

    /// See [`evaluate_patch`].
    pub fn evaluate_patch(&self, progress: f64) -> VisualPatch {
        evaluate_patch(progress, &self.config)
    }

    /// State at progress 0; the seed for a patch accumulator.
    pub fn initial_state(&self) -> VisualState {
        evaluate(0.0, &self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/mapper.rs"]
mod tests;
