//! HS256 token signing.
//! Used by: handlers::issue.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::token::claims::TokenClaims;

/// Signs `claims` with the API secret. The header's `kid` names the API key so
/// the verifier can pick the matching secret.
pub fn sign_token(claims: &TokenClaims, credentials: &Credentials) -> Result<String> {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(credentials.api_key.clone());
    let key = EncodingKey::from_secret(credentials.api_secret.as_bytes());
    encode(&header, claims, &key).map_err(|e| Error::Signing(e.to_string()))
}
