//! # Centralized Error Handling
//!
//! The HTTP surface never fails, so these errors only arise while starting
//! the service: reading configuration and binding the listener.

use thiserror::Error;

/// Startup error type for the qqbot service.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid value {value:?} for env variable `{var}`")]
    InvalidEnv { var: &'static str, value: String },

    #[error("env variable `{0}` must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("invalid listen address `{0}`")]
    InvalidAddress(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
