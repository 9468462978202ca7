//! Error types for placeholder-engine operations.
//!
//! These errors never cross the [`crate::engine::Engine::evaluate`] boundary:
//! the dispatch layer converts every failure into its documented sentinel
//! value. They exist so the internal parsing steps compose with `?`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid date format pattern: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
