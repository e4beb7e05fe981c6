use std::fmt;

use crate::foundation::core::{Affine, ContainerRect, ShapeBounds, Vec2};
use crate::foundation::error::{RevealError, RevealResult};

/// Translate + uniform scale placing a shape inside its container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MaskTransform {
    /// Horizontal translation in container pixels.
    pub translate_x: f64,
    /// Vertical translation in container pixels.
    pub translate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl MaskTransform {
    /// `translate * scale`, matching the SVG attribute order.
    pub fn to_affine(self) -> Affine {
        Affine::translate(Vec2::new(self.translate_x, self.translate_y))
            * Affine::scale(self.scale)
    }

    /// The SVG `transform` attribute value.
    pub fn to_svg_attr(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MaskTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Fits a mask shape, centered and aspect-preserving, inside a container.
pub struct MaskFitter;

impl MaskFitter {
    /// Compute the transform that scales `shape` uniformly to fit entirely inside `container`
    /// and centers it there.
    ///
    /// Returns [`RevealError::DegenerateGeometry`] when either shape extent is zero, negative or
    /// non-finite (the scale would be undefined), and [`RevealError::Validation`] when the
    /// container is non-finite. The result is always finite.
    pub fn fit(container: ContainerRect, shape: ShapeBounds) -> RevealResult<MaskTransform> {
        if shape.is_degenerate() {
            return Err(RevealError::degenerate(format!(
                "shape bounds {}x{} have no area",
                shape.width, shape.height
            )));
        }
        if !shape.x.is_finite() || !shape.y.is_finite() {
            return Err(RevealError::validation("shape origin must be finite"));
        }
        if !container.is_finite() {
            return Err(RevealError::validation("container rect must be finite"));
        }

        let scale = (container.width / shape.width).min(container.height / shape.height);
        let translate_x =
            container.left + (container.width - shape.width * scale) / 2.0 - shape.x * scale;
        let translate_y =
            container.top + (container.height - shape.height * scale) / 2.0 - shape.y * scale;

        let t = MaskTransform {
            translate_x,
            translate_y,
            scale,
        };
        if !(t.translate_x.is_finite() && t.translate_y.is_finite() && t.scale.is_finite()) {
            return Err(RevealError::degenerate(format!(
                "fit of {}x{} into {}x{} overflowed",
                shape.width, shape.height, container.width, container.height
            )));
        }
        Ok(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/fitter.rs"]
mod tests;
