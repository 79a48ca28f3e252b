pub mod types;
pub mod queries;
pub mod form;
pub mod recommend;

pub use types::*;
pub use queries::*;
pub use recommend::{recommend, RECOMMEND_LIMIT};
