//! HS256 token verification, mirroring what the media router checks.
//! Used by: tests.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Header, Validation};

use crate::token::claims::TokenClaims;

pub fn verify_token(
    token: &str,
    secret: &str,
) -> jsonwebtoken::errors::Result<(Header, TokenClaims)> {
    let header = decode_header(token)?;
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)?;
    Ok((header, data.claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::token::sign::sign_token;

    fn creds() -> Credentials {
        Credentials { api_key: "AK123".into(), api_secret: "s3cret".into() }
    }

    fn fresh_claims() -> TokenClaims {
        TokenClaims::new("AK123", "alice".into(), "lobby".into(), chrono::Utc::now().timestamp())
    }

    #[test]
    fn signed_token_verifies() -> Result<(), Box<dyn std::error::Error>> {
        let claims = fresh_claims();
        let token = sign_token(&claims, &creds())?;
        assert_eq!(token.split('.').count(), 3);

        let (header, verified) = verify_token(&token, "s3cret")?;
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.kid.as_deref(), Some("AK123"));
        assert_eq!(verified, claims);
        Ok(())
    }

    #[test]
    fn wrong_secret_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let token = sign_token(&fresh_claims(), &creds())?;
        assert!(verify_token(&token, "other").is_err());
        Ok(())
    }

    #[test]
    fn tampered_token_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let token = sign_token(&fresh_claims(), &creds())?;
        let tampered = format!("x{}", token);
        assert!(verify_token(&tampered, "s3cret").is_err());
        Ok(())
    }

    #[test]
    fn expired_token_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let long_ago = chrono::Utc::now().timestamp() - 2 * 3600;
        let claims = TokenClaims::new("AK123", "alice".into(), "lobby".into(), long_ago);
        let token = sign_token(&claims, &creds())?;
        assert!(verify_token(&token, "s3cret").is_err());
        Ok(())
    }
}
