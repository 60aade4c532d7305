//! Error types for pendra-model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("ensemble count must be positive")]
    InvalidCount,

    #[error("parameter `{name}` must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("parameter `{name}` must be finite")]
    NonFiniteParameter { name: &'static str },

    #[error("per-pendulum arm count {got} does not match ensemble size {expected}")]
    ArmCountMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
