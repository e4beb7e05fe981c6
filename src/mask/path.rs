use kurbo::Shape;

use crate::foundation::core::{BezPath, ShapeBounds};
use crate::foundation::error::{RevealError, RevealResult};

/// The logo outline used as the reveal mask, parsed from SVG path data.
#[derive(Clone, Debug)]
pub struct LogoPath {
    d: String,
    path: BezPath,
}

impl LogoPath {
    /// Parse SVG path data (the `d` attribute).
    pub fn parse(d: &str) -> RevealResult<Self> {
        let d = d.trim();
        if d.is_empty() {
            return Err(RevealError::validation("logo path data must be non-empty"));
        }
        let path = BezPath::from_svg(d)
            .map_err(|e| RevealError::validation(format!("invalid logo path data: {e}")))?;
        Ok(Self {
            d: d.to_owned(),
            path,
        })
    }

    /// The trimmed source path data, for the mask element's `d` attribute.
    pub fn svg_data(&self) -> &str {
        &self.d
    }

    /// The parsed path.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Tight bounding box of the path in its own coordinates.
    pub fn bounds(&self) -> ShapeBounds {
        ShapeBounds::from(self.path.bounding_box())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/path.rs"]
mod tests;
