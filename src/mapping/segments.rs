//! Independently gated progress segments.
//!
//! Each function reads only `p` (already clamped to `[0, 1]`) and the thresholds; none of them
//! depends on another segment's output.

use crate::config::thresholds::ThresholdConfig;
use crate::foundation::math::{clamp01, finite_or, ratio};

/// Hero logo/copy opacity. Linear fade to 0 at `fade_threshold`, then 0.
pub(crate) fn hero_overlay_opacity(p: f64, cfg: &ThresholdConfig) -> f64 {
    if p <= cfg.fade_threshold {
        // exactly 0 at the seam: p / p == 1
        clamp01(1.0 - ratio(p, 0.0, cfg.fade_threshold))
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ZoomSample {
    pub(crate) image_scale: f64,
    pub(crate) overlay_scale: f64,
    pub(crate) fade_overlay_opacity: f64,
}

/// Zoom segment sample at `p`, or `None` past `zoom_threshold` (fields freeze there).
pub(crate) fn zoom_gated(p: f64, cfg: &ThresholdConfig) -> Option<ZoomSample> {
    (p <= cfg.zoom_threshold).then(|| zoom_at(p, cfg))
}

/// Zoom segment sample with the freeze filled in by the boundary value.
pub(crate) fn zoom_total(p: f64, cfg: &ThresholdConfig) -> ZoomSample {
    zoom_at(p.min(cfg.zoom_threshold), cfg)
}

fn zoom_at(p: f64, cfg: &ThresholdConfig) -> ZoomSample {
    let n = clamp01(ratio(p, 0.0, cfg.zoom_threshold));
    ZoomSample {
        image_scale: cfg.image_scale.at(n),
        // initial^(1-n): initial at n=0, exactly 1 at n=1
        overlay_scale: finite_or(cfg.initial_overlay_scale.powf(1.0 - n), 1.0),
        fade_overlay_opacity: clamp01(cfg.overlay_fade.ratio(p)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CaptionSample {
    pub(crate) opacity: f64,
    pub(crate) scale: f64,
    pub(crate) gradient_top: f64,
    pub(crate) gradient_bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum CaptionGate {
    /// Before the reveal window: only the opacity is forced to 0.
    Before,
    /// Inside the window, with the normalized reveal position.
    Inside(CaptionSample),
    /// Past the window: nothing is written.
    After,
}

pub(crate) fn caption_gated(p: f64, cfg: &ThresholdConfig) -> CaptionGate {
    let w = cfg.caption_reveal;
    if p < w.start {
        CaptionGate::Before
    } else if p > w.end() {
        CaptionGate::After
    } else {
        CaptionGate::Inside(caption_at(clamp01(w.ratio(p)), cfg))
    }
}

/// Caption sample with the reveal position clamped, so both freezes take boundary values.
pub(crate) fn caption_total(p: f64, cfg: &ThresholdConfig) -> CaptionSample {
    caption_at(clamp01(cfg.caption_reveal.ratio(p)), cfg)
}

fn caption_at(t: f64, cfg: &ThresholdConfig) -> CaptionSample {
    let gradient_bottom = cfg.caption_gradient_bottom.at(t);
    CaptionSample {
        opacity: t,
        scale: cfg.caption_scale.at(t),
        gradient_top: gradient_bottom - cfg.caption_gradient_span,
        gradient_bottom,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/segments.rs"]
mod tests;
