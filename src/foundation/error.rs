/// Convenience result type used across hero-reveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by the mapper, the mask fitter and the session.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid configuration or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A shape bounding box with zero (or negative) width or height.
    ///
    /// The fit scale is undefined; callers keep the previous transform and retry on the next
    /// geometry update.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Progress outside `[0, 1]`, reported only by strict constructors.
    #[error("progress out of range: {0}")]
    OutOfRangeProgress(f64),

    /// A geometry query against the rendering layer failed.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The rendering surface rejected an update.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all for propagated errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Construct a [`RevealError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct a [`RevealError::DegenerateGeometry`] error.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateGeometry(msg.into())
    }

    /// Construct a [`RevealError::Geometry`] error.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Construct a [`RevealError::Render`] error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Construct a [`RevealError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for the recoverable zero-area geometry condition.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
