//! Scalar helpers shared by the progress segments.

/// Unclamped linear interpolation; `t` outside `[0, 1]` extrapolates.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `value` inside the window starting at `start` with length `span`.
///
/// Not clamped. A non-positive span degrades to a step at `start` so callers never divide by zero.
#[inline]
pub(crate) fn ratio(value: f64, start: f64, span: f64) -> f64 {
    if span > 0.0 {
        (value - start) / span
    } else if value < start {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub(crate) fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Replace NaN and the infinities with `fallback`.
#[inline]
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
