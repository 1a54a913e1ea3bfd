pub mod detail;
pub mod paint;
pub mod playback;
pub mod session;
pub mod viewport;

pub use detail::*;
pub use paint::*;
pub use playback::*;
pub use session::*;
pub use viewport::*;
