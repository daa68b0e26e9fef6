use thiserror::Error;

/// Errors produced while parsing host input or validating tunables.
///
/// None of these ever reach the page: the web layer logs them and falls back
/// to defaults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmbientError {
    #[error("unknown display mode `{0}` (expected `dev` or `clinic`)")]
    UnknownMode(String),

    #[error("invalid tuning for `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, AmbientError>;
