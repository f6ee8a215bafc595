pub(crate) mod grid;
pub(crate) mod month;
pub(crate) mod ordinals;
