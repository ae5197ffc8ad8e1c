pub mod date;
pub mod engine;

pub use crate::domain::model::{CalendarDate, MatrixProfile};
pub use crate::domain::ports::FontProvider;
pub use crate::utils::error::Result;
