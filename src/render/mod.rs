pub(crate) mod cell;
pub(crate) mod metrics;
pub(crate) mod pdf;
pub(crate) mod record;
pub(crate) mod surface;
