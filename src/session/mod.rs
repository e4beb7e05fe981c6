//! Caller-side animation loop and its injected collaborators.

pub(crate) mod geometry;
pub(crate) mod reveal_session;
pub(crate) mod source;
pub(crate) mod surface;
