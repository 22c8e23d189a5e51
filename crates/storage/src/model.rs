use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
///
/// `password_hash` is the Argon2 PHC string, never the plaintext. Records
/// are created once by registration and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with a fresh id.
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            created_at: Utc::now(),
        }
    }
}

/// A conversation owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(title: String, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// A message posted into a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(chat_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            chat_id,
            content,
            created_at: Utc::now(),
        }
    }
}
