//! Common infrastructure: error types and logging

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
