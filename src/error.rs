//! Unified error types for roomtoken.
//! Used by: config, token, handlers, main.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::handlers::issue::TokenResponse;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON")]
    InvalidRequest(String),

    #[error("LiveKit API key/secret not set")]
    MissingCredentials,

    #[error("{0}")]
    RateLimited(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::InvalidRequest(detail) => {
                tracing::warn!(%detail, "malformed request body");
                StatusCode::BAD_REQUEST
            }
            Error::RateLimited(reason) => {
                tracing::warn!(%reason, "request rate limited");
                StatusCode::TOO_MANY_REQUESTS
            }
            Error::MissingCredentials => {
                tracing::error!("issue request refused: LIVEKIT_API_KEY/LIVEKIT_API_SECRET not set");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::Config(detail) => {
                tracing::error!(%detail, "configuration error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Existing clients read signing failures from the JSON envelope of a 200.
            Error::Signing(detail) => {
                tracing::error!(%detail, "token signing failed");
                return (StatusCode::OK, Json(TokenResponse::failure())).into_response();
            }
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
