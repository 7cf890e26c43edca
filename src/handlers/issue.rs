//! Room-join token issuance endpoint.
//! Used by: server.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::claims::TokenClaims;
use crate::token::sign::sign_token;

const SIGNING_FAILED: &str = "Failed to generate token";

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct JoinRequest {
    #[serde(default, alias = "Identity", alias = "IDENTITY")]
    pub identity: Option<String>,
    #[serde(default, alias = "Room", alias = "ROOM")]
    pub room: Option<String>,
}

/// Exactly one of `token` and `error` is set, matching `success`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenResponse {
    pub fn issued(token: String) -> Self {
        Self { success: true, token: Some(token), error: None }
    }

    pub fn failure() -> Self {
        Self { success: false, token: None, error: Some(SIGNING_FAILED.into()) }
    }
}

// Content-Type is not checked; any body that parses as JSON is accepted.
fn parse_request(body: &[u8]) -> Result<JoinRequest> {
    serde_json::from_slice(body).map_err(|e| Error::InvalidRequest(e.to_string()))
}

pub async fn issue(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Result<Json<TokenResponse>> {
    if let Err(e) = state.rate_limiter.check(peer.ip()) {
        state.metrics.record_rate_limited();
        return Err(Error::RateLimited(e.to_string()));
    }

    let req = parse_request(&body).map_err(|e| {
        state.metrics.record_invalid_request();
        e
    })?;

    let credentials = state.credentials.as_ref().ok_or_else(|| {
        state.metrics.record_config_error();
        Error::MissingCredentials
    })?;

    let identity = req.identity.unwrap_or_default();
    let room = req.room.unwrap_or_default();
    let claims = TokenClaims::new(&credentials.api_key, identity, room, Utc::now().timestamp());

    let token = sign_token(&claims, credentials).map_err(|e| {
        state.metrics.record_signing_failure();
        e
    })?;

    tracing::info!(identity = %claims.sub, room = %claims.grants.room, exp = claims.exp, "token issued");
    state.metrics.record_issue();
    Ok(Json(TokenResponse::issued(token)))
}

pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
