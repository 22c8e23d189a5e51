use std::sync::Arc;

use datachat_auth::AuthGateway;
use datachat_storage::ChatStore;

/// Application state shared across all handlers
pub struct AppState {
    pub auth: AuthGateway,
    pub chats: Arc<dyn ChatStore>,
}

impl AppState {
    pub fn new(auth: AuthGateway, chats: Arc<dyn ChatStore>) -> Self {
        Self { auth, chats }
    }
}
