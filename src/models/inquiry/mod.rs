pub mod types;
pub mod queries;
pub mod form;

pub use types::*;
pub use queries::*;
