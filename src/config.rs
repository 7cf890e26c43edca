//! Startup configuration, read once from the environment.
//! Used by: main, state.

use std::fmt;

use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 8080;
// Off by default: behind a reverse proxy every client shares the proxy's IP.
const DEFAULT_RATE_LIMIT_PER_MIN: u32 = 0;
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// API key and secret shared with the media router.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when either the key or the secret is missing. The server still
    /// starts; issue requests fail with a configuration error.
    pub credentials: Option<Credentials>,
    pub port: u16,
    pub rate_limit_per_min: u32,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: None,
            port: DEFAULT_PORT,
            rate_limit_per_min: DEFAULT_RATE_LIMIT_PER_MIN,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let credentials = match (get("LIVEKIT_API_KEY"), get("LIVEKIT_API_SECRET")) {
            (Some(api_key), Some(api_secret)) => Some(Credentials { api_key, api_secret }),
            _ => None,
        };

        Ok(Self {
            credentials,
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            rate_limit_per_min: parse_or(
                get("RATE_LIMIT_PER_MIN"),
                "RATE_LIMIT_PER_MIN",
                DEFAULT_RATE_LIMIT_PER_MIN,
            )?,
            max_body_bytes: parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, name: &str, default: T) -> Result<T> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a number, got {:?}", name, v))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() -> Result<()> {
        let config = Config::from_lookup(lookup(&[]))?;
        assert!(config.credentials.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.rate_limit_per_min, 0);
        assert_eq!(config.max_body_bytes, 16 * 1024);
        Ok(())
    }

    #[test]
    fn credentials_need_both_key_and_secret() -> Result<()> {
        let only_key = Config::from_lookup(lookup(&[("LIVEKIT_API_KEY", "AK123")]))?;
        assert!(only_key.credentials.is_none());

        let both = Config::from_lookup(lookup(&[
            ("LIVEKIT_API_KEY", "AK123"),
            ("LIVEKIT_API_SECRET", "s3cret"),
        ]))?;
        let creds = both.credentials.ok_or(Error::MissingCredentials)?;
        assert_eq!(creds.api_key, "AK123");
        assert_eq!(creds.api_secret, "s3cret");
        Ok(())
    }

    #[test]
    fn empty_values_count_as_unset() -> Result<()> {
        let config = Config::from_lookup(lookup(&[
            ("LIVEKIT_API_KEY", "AK123"),
            ("LIVEKIT_API_SECRET", ""),
            ("PORT", ""),
        ]))?;
        assert!(config.credentials.is_none());
        assert_eq!(config.port, 8080);
        Ok(())
    }

    #[test]
    fn port_is_read() -> Result<()> {
        let config = Config::from_lookup(lookup(&[("PORT", "9000")]))?;
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        Ok(())
    }

    #[test]
    fn rate_limit_is_read() -> Result<()> {
        let config = Config::from_lookup(lookup(&[("RATE_LIMIT_PER_MIN", "30")]))?;
        assert_eq!(config.rate_limit_per_min, 30);
        Ok(())
    }

    #[test]
    fn bad_port_rejected() {
        let result = Config::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn debug_output_hides_secret() {
        let creds = Credentials { api_key: "AK123".into(), api_secret: "s3cret".into() };
        let out = format!("{:?}", creds);
        assert!(out.contains("AK123"));
        assert!(!out.contains("s3cret"));
    }
}
