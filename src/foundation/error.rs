pub type LookbookResult<T> = Result<T, LookbookError>;

#[derive(thiserror::Error, Debug)]
pub enum LookbookError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("media error: {0}")]
    Media(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LookbookError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

/// Error surfaced across the presentation boundary.
///
/// Carries the text of whatever failed below it; nothing else crosses that boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Error processing video: {message}")]
pub struct UserFacingError {
    pub message: String,
}

impl From<LookbookError> for UserFacingError {
    fn from(err: LookbookError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
