use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use datachat_storage::StorageError;

use crate::{AppState, middleware::AuthUser, response};

#[derive(Debug, Deserialize)]
pub struct CreateChatRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    pub chat_id: Uuid,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreateChatResponse {
    pub id: Uuid,
}

pub async fn create_chat(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateChatRequest>,
) -> Response {
    match state.chats.create_chat(&payload.title, user_id).await {
        Ok(chat) => (StatusCode::OK, Json(CreateChatResponse { id: chat.id })).into_response(),
        Err(err) => response::internal_error(err),
    }
}

pub async fn post_message(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<PostMessageRequest>,
) -> Response {
    match state
        .chats
        .post_message(payload.chat_id, &payload.content)
        .await
    {
        Ok(_message) => response::message(StatusCode::OK, "created"),
        Err(StorageError::NotFound(_)) => {
            response::message(StatusCode::NOT_FOUND, "Chat not found")
        }
        Err(err) => response::internal_error(err),
    }
}

pub async fn list_chats(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Response {
    match state.chats.list_chats(user_id).await {
        Ok(chats) => (StatusCode::OK, Json(chats)).into_response(),
        Err(err) => response::internal_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use datachat_auth::{AuthGateway, TokenService};
    use datachat_storage::{MemoryChatStore, MemoryUserStore};
    use serde_json::Value;

    fn test_state() -> Arc<AppState> {
        let auth = AuthGateway::new(
            Arc::new(MemoryUserStore::default()),
            TokenService::new("test_secret"),
        );
        Arc::new(AppState::new(auth, Arc::new(MemoryChatStore::default())))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_post_list_flow() {
        let state = test_state();
        let caller = AuthUser(Uuid::new_v4());

        let response = create_chat(
            State(state.clone()),
            caller,
            Json(CreateChatRequest {
                title: "quarterly anomalies".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let chat_id: Uuid = serde_json::from_value(body_json(response).await["id"].clone()).unwrap();

        let response = post_message(
            State(state.clone()),
            caller,
            Json(PostMessageRequest {
                chat_id,
                content: "plot the spike in March".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "created");

        let response = list_chats(State(state), caller).await;
        assert_eq!(response.status(), StatusCode::OK);
        let chats = body_json(response).await;
        assert_eq!(chats.as_array().unwrap().len(), 1);
        assert_eq!(chats[0]["title"], "quarterly anomalies");
        assert_eq!(chats[0]["userId"], caller.0.to_string());
    }

    #[tokio::test]
    async fn posting_to_unknown_chat_is_not_found() {
        let state = test_state();

        let response = post_message(
            State(state),
            AuthUser(Uuid::new_v4()),
            Json(PostMessageRequest {
                chat_id: Uuid::new_v4(),
                content: "hello?".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn chats_are_scoped_to_their_owner() {
        let state = test_state();
        let alice = AuthUser(Uuid::new_v4());
        let bob = AuthUser(Uuid::new_v4());

        create_chat(
            State(state.clone()),
            alice,
            Json(CreateChatRequest {
                title: "alice's data".to_string(),
            }),
        )
        .await;

        let response = list_chats(State(state), bob).await;
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);
    }
}
