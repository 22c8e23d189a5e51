use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{AppState, chat_handlers, middleware as auth_middleware, user_handlers};

pub fn router(state: Arc<AppState>) -> Router {
    // Public routes (no authentication required)
    let user_routes = Router::new()
        .route("/user/signup", post(user_handlers::signup))
        .route("/user/signin", post(user_handlers::signin))
        .route("/user/authenticate", post(user_handlers::authenticate));

    // Chat relay routes; the auth middleware attaches the token's user id
    let chat_routes = Router::new()
        .route("/chat/create", post(chat_handlers::create_chat))
        .route("/chat/message", post(chat_handlers::post_message))
        .route("/chat", get(chat_handlers::list_chats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_auth,
        ));

    Router::new()
        .route("/", get(|| async { "datachat API running" }))
        .nest("/api/v1", user_routes.merge(chat_routes))
        .with_state(state)
}
