use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{Chat, Message, User};
use crate::store::{ChatStore, UserStore};
use crate::{Result, StorageError};

/// In-memory user store.
///
/// Email uniqueness is enforced inside the write lock, standing in for the
/// unique index a real backend would carry.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(StorageError::DuplicateEmail);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

#[derive(Default)]
struct ChatState {
    // Insertion order is the only ordering the relay promises.
    chats: Vec<Chat>,
    messages: Vec<Message>,
}

/// In-memory chat relay store.
#[derive(Default)]
pub struct MemoryChatStore {
    inner: RwLock<ChatState>,
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn create_chat(&self, title: &str, user_id: Uuid) -> Result<Chat> {
        let chat = Chat::new(title.to_string(), user_id);
        let mut state = self.inner.write().await;
        state.chats.push(chat.clone());
        Ok(chat)
    }

    async fn post_message(&self, chat_id: Uuid, content: &str) -> Result<Message> {
        let mut state = self.inner.write().await;
        if !state.chats.iter().any(|chat| chat.id == chat_id) {
            return Err(StorageError::NotFound(chat_id.to_string()));
        }
        let message = Message::new(chat_id, content.to_string());
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn list_chats(&self, user_id: Uuid) -> Result<Vec<Chat>> {
        let state = self.inner.read().await;
        Ok(state
            .chats
            .iter()
            .filter(|chat| chat.user_id == user_id)
            .cloned()
            .collect())
    }
}
