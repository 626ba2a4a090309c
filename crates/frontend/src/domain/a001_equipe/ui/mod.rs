pub(crate) mod model;
pub mod picker;
