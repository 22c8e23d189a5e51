use datachat_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid input: {0}")]
    Validation(&'static str),

    #[error("user already exists")]
    DuplicateUser,

    #[error("user not found")]
    UserNotFound,

    #[error("incorrect password")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    TokenIssue(String),

    #[error("credential store failure: {0}")]
    Store(String),
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateEmail => AuthError::DuplicateUser,
            other => AuthError::Store(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
