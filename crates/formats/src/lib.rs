pub mod boundaries;
pub mod demographic;
pub mod table;

pub use boundaries::*;
pub use demographic::*;
pub use table::*;
