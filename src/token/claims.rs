//! JWT claims for room-join access tokens.
//! Used by: token::sign, token::verify, handlers::issue.

use serde::{Deserialize, Serialize};

/// Validity window of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Capabilities the media router enforces for the bearer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl VideoGrant {
    pub fn join(room: String) -> Self {
        Self {
            room_join: true,
            room,
            can_publish: true,
            can_subscribe: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub nbf: i64,
    pub exp: i64,
    pub grants: VideoGrant,
}

impl TokenClaims {
    /// `now` is unix seconds; the token is valid from `now` for one hour.
    pub fn new(api_key: &str, identity: String, room: String, now: i64) -> Self {
        Self {
            iss: api_key.to_owned(),
            sub: identity,
            nbf: now,
            exp: now + TOKEN_TTL_SECS,
            grants: VideoGrant::join(room),
        }
    }
}
