use crate::config::palette::CaptionPalette;
use crate::config::thresholds::ThresholdConfig;
use crate::mapping::mapper::evaluate;

/// Snapshot of every visual property driven by scroll progress.
///
/// Gradient stops are percentages of the caption's height and may leave `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity of the hero logo and copy layer.
    pub hero_overlay_opacity: f64,
    /// Scale of the background image container.
    pub hero_image_scale: f64,
    /// Scale of the SVG reveal overlay.
    pub mask_overlay_scale: f64,
    /// Opacity of the solid color overlay.
    pub fade_overlay_opacity: f64,
    /// Opacity of the reveal caption.
    pub caption_opacity: f64,
    /// Scale of the reveal caption.
    pub caption_scale: f64,
    /// Upper gradient stop (ink ends here).
    pub caption_gradient_top: f64,
    /// Lower gradient stop (accent starts here).
    pub caption_gradient_bottom: f64,
}

impl VisualState {
    /// State at progress 0 under `config`.
    pub fn initial(config: &ThresholdConfig) -> Self {
        evaluate(0.0, config)
    }

    /// CSS background for the caption text: ink above the band, accent below it.
    pub fn caption_gradient_css(&self, palette: &CaptionPalette) -> String {
        gradient_css(
            palette,
            self.caption_gradient_top,
            self.caption_gradient_bottom,
        )
    }

    /// Lower the state into per-layer property writes, in paint order.
    pub fn assignments(&self, palette: &CaptionPalette) -> Vec<PropertyAssignment> {
        self.to_patch().assignments(palette)
    }

    /// A patch carrying every field.
    pub fn to_patch(&self) -> VisualPatch {
        VisualPatch {
            hero_overlay_opacity: Some(self.hero_overlay_opacity),
            hero_image_scale: Some(self.hero_image_scale),
            mask_overlay_scale: Some(self.mask_overlay_scale),
            fade_overlay_opacity: Some(self.fade_overlay_opacity),
            caption_opacity: Some(self.caption_opacity),
            caption_scale: Some(self.caption_scale),
            caption_gradient_top: Some(self.caption_gradient_top),
            caption_gradient_bottom: Some(self.caption_gradient_bottom),
        }
    }
}

/// Partial update: `None` fields were not written by the segment that owns them.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualPatch {
    /// See [`VisualState::hero_overlay_opacity`].
    pub hero_overlay_opacity: Option<f64>,
    /// See [`VisualState::hero_image_scale`].
    pub hero_image_scale: Option<f64>,
    /// See [`VisualState::mask_overlay_scale`].
    pub mask_overlay_scale: Option<f64>,
    /// See [`VisualState::fade_overlay_opacity`].
    pub fade_overlay_opacity: Option<f64>,
    /// See [`VisualState::caption_opacity`].
    pub caption_opacity: Option<f64>,
    /// See [`VisualState::caption_scale`].
    pub caption_scale: Option<f64>,
    /// See [`VisualState::caption_gradient_top`].
    pub caption_gradient_top: Option<f64>,
    /// See [`VisualState::caption_gradient_bottom`].
    pub caption_gradient_bottom: Option<f64>,
}

impl VisualPatch {
    /// Write every present field into `state`, leaving the others untouched.
    pub fn apply_to(&self, state: &mut VisualState) {
        fn put(dst: &mut f64, src: Option<f64>) {
            if let Some(v) = src {
                *dst = v;
            }
        }

        put(&mut state.hero_overlay_opacity, self.hero_overlay_opacity);
        put(&mut state.hero_image_scale, self.hero_image_scale);
        put(&mut state.mask_overlay_scale, self.mask_overlay_scale);
        put(&mut state.fade_overlay_opacity, self.fade_overlay_opacity);
        put(&mut state.caption_opacity, self.caption_opacity);
        put(&mut state.caption_scale, self.caption_scale);
        put(&mut state.caption_gradient_top, self.caption_gradient_top);
        put(&mut state.caption_gradient_bottom, self.caption_gradient_bottom);
    }

    /// The patch as a full state, if every field is present.
    pub fn to_state(&self) -> Option<VisualState> {
        Some(VisualState {
            hero_overlay_opacity: self.hero_overlay_opacity?,
            hero_image_scale: self.hero_image_scale?,
            mask_overlay_scale: self.mask_overlay_scale?,
            fade_overlay_opacity: self.fade_overlay_opacity?,
            caption_opacity: self.caption_opacity?,
            caption_scale: self.caption_scale?,
            caption_gradient_top: self.caption_gradient_top?,
            caption_gradient_bottom: self.caption_gradient_bottom?,
        })
    }

    /// True if every field is present.
    pub fn is_full(&self) -> bool {
        self.to_state().is_some()
    }

    /// Property writes for the present fields only, in paint order.
    ///
    /// The caption background is emitted only when both gradient stops are present.
    pub fn assignments(&self, palette: &CaptionPalette) -> Vec<PropertyAssignment> {
        let mut out = Vec::with_capacity(8);
        let mut push = |layer: Layer, value: Option<PropertyValue>| {
            if let Some(value) = value {
                out.push(PropertyAssignment { layer, value });
            }
        };

        push(
            Layer::HeroImage,
            self.hero_image_scale.map(PropertyValue::Scale),
        );
        push(
            Layer::HeroLogo,
            self.hero_overlay_opacity.map(PropertyValue::Opacity),
        );
        push(
            Layer::HeroCopy,
            self.hero_overlay_opacity.map(PropertyValue::Opacity),
        );
        push(
            Layer::FadeOverlay,
            self.fade_overlay_opacity.map(PropertyValue::Opacity),
        );
        push(
            Layer::MaskOverlay,
            self.mask_overlay_scale.map(PropertyValue::Scale),
        );
        push(
            Layer::Caption,
            self.caption_gradient_top
                .zip(self.caption_gradient_bottom)
                .map(|(top, bottom)| PropertyValue::Background(gradient_css(palette, top, bottom))),
        );
        push(Layer::Caption, self.caption_scale.map(PropertyValue::Scale));
        push(
            Layer::Caption,
            self.caption_opacity.map(PropertyValue::Opacity),
        );
        out
    }
}

/// Named visual layers of the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Background image container.
    HeroImage,
    /// Logo drawn over the background image.
    HeroLogo,
    /// "Scroll to reveal" copy over the background image.
    HeroCopy,
    /// Solid color overlay.
    FadeOverlay,
    /// SVG overlay whose mask cuts out the logo.
    MaskOverlay,
    /// Reveal caption text.
    Caption,
}

/// A single property value written to a layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    /// Layer opacity in `[0, 1]`.
    Opacity(f64),
    /// Uniform layer scale.
    Scale(f64),
    /// CSS background (the caption gradient).
    Background(String),
}

/// One property write targeting one layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyAssignment {
    /// Target layer.
    pub layer: Layer,
    /// Value to write.
    pub value: PropertyValue,
}

fn gradient_css(palette: &CaptionPalette, top: f64, bottom: f64) -> String {
    let ink = palette.ink;
    let accent = palette.accent;
    format!(
        "linear-gradient(to bottom, {ink} 0%, {ink} {top}%, {accent} {bottom}%, {accent} 100%)"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/state.rs"]
mod tests;
