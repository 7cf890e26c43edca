//! Room-join token claims, signing, and verification.
//! Used by: handlers::issue.

pub mod claims;
pub mod sign;
#[cfg(test)]
pub mod verify;
