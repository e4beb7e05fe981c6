use crate::foundation::core::{ContainerRect, ShapeBounds};
use crate::foundation::error::{RevealError, RevealResult};
use crate::mask::path::LogoPath;

/// Geometry queries answered by the rendering layer.
pub trait GeometryProvider {
    /// Current rectangle of the logo container, in device pixels.
    fn container_rect(&self) -> RevealResult<ContainerRect>;
    /// Intrinsic bounding box of the mask path.
    fn mask_bounds(&self) -> RevealResult<ShapeBounds>;
}

/// A [`GeometryProvider`] backed by a settable container rect and a parsed logo path.
#[derive(Clone, Debug)]
pub struct StaticGeometry {
    container: Option<ContainerRect>,
    logo: LogoPath,
}

impl StaticGeometry {
    /// Geometry with a mounted container.
    pub fn new(container: ContainerRect, logo: LogoPath) -> Self {
        Self {
            container: Some(container),
            logo,
        }
    }

    /// Geometry whose container is not laid out yet; rect queries fail until one is set.
    pub fn detached(logo: LogoPath) -> Self {
        Self {
            container: None,
            logo,
        }
    }

    /// Replace the container rect (a layout change).
    pub fn set_container(&mut self, container: ContainerRect) {
        self.container = Some(container);
    }

    /// The mask path.
    pub fn logo(&self) -> &LogoPath {
        &self.logo
    }
}

impl GeometryProvider for StaticGeometry {
    fn container_rect(&self) -> RevealResult<ContainerRect> {
        self.container
            .ok_or_else(|| RevealError::geometry("logo container is not laid out"))
    }

    fn mask_bounds(&self) -> RevealResult<ShapeBounds> {
        Ok(self.logo.bounds())
    }
}
