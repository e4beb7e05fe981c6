//! Logo mask geometry.

pub(crate) mod fitter;
pub(crate) mod path;
