use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Normalized scroll position within the pinned hero region (0 at entry, 1 at exit).
///
/// Construction never fails: [`Progress::clamped`] coerces any `f64` (including NaN and the
/// infinities) into `[0, 1]`. Use [`Progress::try_new`] to reject out-of-range input instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of the pinned region.
    pub const START: Self = Self(0.0);
    /// Progress at the end of the pinned region.
    pub const END: Self = Self(1.0);

    /// Clamp `raw` to `[0, 1]`. NaN maps to `0`.
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// Accept `raw` only if it is finite and within `[0, 1]`.
    pub fn try_new(raw: f64) -> RevealResult<Self> {
        if Self::in_range(raw) {
            Ok(Self(raw))
        } else {
            Err(RevealError::OutOfRangeProgress(raw))
        }
    }

    /// True if `raw` would pass [`Progress::try_new`] unchanged.
    pub fn in_range(raw: f64) -> bool {
        raw.is_finite() && (0.0..=1.0).contains(&raw)
    }

    /// The clamped scalar value.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Container geometry in device pixels, as reported by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width (>= 0).
    pub width: f64,
    /// Height (>= 0).
    pub height: f64,
}

impl ContainerRect {
    /// Construct a container rect from its left/top corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True if every component is finite.
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// The same rectangle as a `kurbo::Rect`.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

impl From<Rect> for ContainerRect {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

/// Intrinsic bounding box of a vector shape in its own coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeBounds {
    /// Minimum x.
    pub x: f64,
    /// Minimum y.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ShapeBounds {
    /// Construct bounds from the minimum corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if either extent is zero, negative or non-finite.
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }

    /// The same box as a `kurbo::Rect`.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl From<Rect> for ShapeBounds {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
