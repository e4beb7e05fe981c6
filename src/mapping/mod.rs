//! Progress-to-visual-state mapping.

pub(crate) mod mapper;
pub(crate) mod segments;
pub(crate) mod state;
