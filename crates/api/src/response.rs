use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn message(status: StatusCode, text: &str) -> Response {
    (
        status,
        Json(MessageResponse {
            message: text.to_string(),
        }),
    )
        .into_response()
}

/// The modelled backend reports internal faults as 400 with a generic body.
pub(crate) fn internal_error(err: impl std::fmt::Display) -> Response {
    tracing::error!(%err, "request failed");
    message(StatusCode::BAD_REQUEST, "Internal Server Error")
}
