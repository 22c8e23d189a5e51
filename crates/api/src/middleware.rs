use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{AppState, response::MessageResponse};

/// Identity attached to a request once its bearer token checks out.
///
/// Downstream handlers trust this id as-is; no credential-store lookup
/// backs it.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

/// Middleware gating a route group on a valid `Bearer <token>` credential.
///
/// On success the token's user id is stored in the request extensions for
/// handlers to pick up via the [`AuthUser`] extractor.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let user_id = state
        .auth
        .authenticate(authorization)
        .and_then(|id| id.parse::<Uuid>().ok())
        .ok_or_else(unauthorized)?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(MessageResponse {
            message: "You are not logged in".to_string(),
        }),
    )
        .into_response()
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(unauthorized)
    }
}
