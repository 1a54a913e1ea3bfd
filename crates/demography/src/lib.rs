pub mod dataset;
pub mod flags;
pub mod format;
pub mod sanitize;
pub mod tooltip;

pub use dataset::*;
pub use tooltip::*;
