//! Persistence boundary for the datachat backend.
//!
//! Provides:
//! - Data models (users, chats, messages)
//! - The `UserStore` / `ChatStore` traits the rest of the system talks to
//! - In-memory implementations backing a single-process deployment
//!
//! Any real database slots in behind the traits; the contract that matters
//! is that `create_user` checks and inserts atomically.

pub mod memory;
pub mod model;
pub mod store;

pub use memory::{MemoryChatStore, MemoryUserStore};
pub use model::{Chat, Message, User};
pub use store::{ChatStore, UserStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
