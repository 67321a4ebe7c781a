use thiserror::Error as ThisError;

/// Input rejected before it reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("timer seconds must be positive, got {0}")]
    NonPositiveSeconds(i64),

    #[error("timer seconds is not an integer: {0:?}")]
    InvalidSeconds(String),
}
