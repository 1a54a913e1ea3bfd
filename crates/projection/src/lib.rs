pub mod path;
pub mod projector;

pub use path::*;
pub use projector::*;
