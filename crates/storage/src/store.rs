use async_trait::async_trait;
use uuid::Uuid;

use crate::Result;
use crate::model::{Chat, Message, User};

/// Credential store: persists user records keyed by a unique email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user record.
    ///
    /// The uniqueness check and the insert happen atomically inside the
    /// store; a taken email fails with [`crate::StorageError::DuplicateEmail`].
    /// Callers must not pre-check existence themselves — concurrent
    /// registrations for the same email are resolved here and only here.
    async fn create_user(&self, user: User) -> Result<User>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
}

/// Chat relay store: simple create/list with no guarantees beyond
/// insertion order as stored.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn create_chat(&self, title: &str, user_id: Uuid) -> Result<Chat>;

    /// Append a message to an existing chat. Fails with
    /// [`crate::StorageError::NotFound`] when the chat does not exist.
    async fn post_message(&self, chat_id: Uuid, content: &str) -> Result<Message>;

    async fn list_chats(&self, user_id: Uuid) -> Result<Vec<Chat>>;
}
