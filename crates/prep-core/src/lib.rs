pub mod config;
pub mod error;
pub mod exercise;
pub mod flow;
pub mod generator;
pub mod session;

// Re-export common error type
pub use error::{PrepError, Result};
