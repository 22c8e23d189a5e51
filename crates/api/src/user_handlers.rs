use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use datachat_auth::AuthError;

use crate::{AppState, response};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    pub message: String,
    #[serde(rename = "LoggedIn")]
    pub logged_in: bool,
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Response {
    match state
        .auth
        .register(&payload.email, &payload.password, &payload.name)
        .await
    {
        Ok(_user) => response::message(StatusCode::CREATED, "User created successfully"),
        Err(AuthError::Validation(_)) => {
            response::message(StatusCode::UNPROCESSABLE_ENTITY, "Invalid inputs")
        }
        Err(AuthError::DuplicateUser) => {
            response::message(StatusCode::FORBIDDEN, "User already exists")
        }
        Err(err) => response::internal_error(err),
    }
}

pub async fn signin(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SigninRequest>,
) -> Response {
    match state.auth.login(&payload.email, &payload.password).await {
        Ok(token) => (
            StatusCode::OK,
            Json(SigninResponse {
                message: "Login Successful".to_string(),
                token,
            }),
        )
            .into_response(),
        Err(AuthError::Validation(_)) => {
            response::message(StatusCode::UNPROCESSABLE_ENTITY, "Incorrect inputs")
        }
        // One body for both outcomes so a caller cannot probe which emails
        // are registered.
        Err(AuthError::UserNotFound | AuthError::InvalidCredentials) => {
            response::message(StatusCode::UNAUTHORIZED, "Invalid email or password")
        }
        Err(err) => response::internal_error(err),
    }
}

pub async fn authenticate(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    match state.auth.authenticate(authorization) {
        Some(_user_id) => (
            StatusCode::OK,
            Json(AuthenticateResponse {
                message: "You are logged in".to_string(),
                logged_in: true,
            }),
        )
            .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(AuthenticateResponse {
                message: "You are not logged in".to_string(),
                logged_in: false,
            }),
        )
            .into_response(),
    }
}
