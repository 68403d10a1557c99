//! # Bearer Token Claims
//!
//! Read-only peek into the payload of a JWT. Signatures are NOT verified;
//! the console only uses this to show when a session will expire.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

fn decode_claims(token: &str) -> Result<Claims, Error> {
    let payload = token.split('.').nth(1).ok_or(Error::NotAJwt)?;
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| Error::FailToB64uDecode)?;
    serde_json::from_slice(&bytes).map_err(|_| Error::InvalidClaims)
}

/// Expiry (`exp` claim) of a JWT, if it carries one.
pub fn token_expiry(token: &str) -> Result<Option<DateTime<Utc>>, Error> {
    let claims = decode_claims(token)?;
    Ok(claims.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single()))
}

/// Subject (`sub` claim) of a JWT, usually the username.
pub fn token_subject(token: &str) -> Result<Option<String>, Error> {
    Ok(decode_claims(token)?.sub)
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotAJwt,
    FailToB64uDecode,
    InvalidClaims,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn make_token(payload: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let body = general_purpose::URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.c2lnbmF0dXJl")
    }

    #[test]
    fn test_token_expiry_and_subject() {
        let token = make_token(r#"{"sub":"alice","exp":1714552200}"#);

        assert_eq!(
            token_expiry(&token).unwrap().map(|t| t.timestamp()),
            Some(1714552200)
        );
        assert_eq!(token_subject(&token).unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_token_without_exp() {
        let token = make_token(r#"{"sub":"alice"}"#);
        assert_eq!(token_expiry(&token), Ok(None));
    }

    #[test]
    fn test_opaque_token_is_rejected() {
        assert_eq!(token_expiry("opaque-session-token"), Err(Error::NotAJwt));
        assert_eq!(token_expiry("a.%%%.c"), Err(Error::FailToB64uDecode));
    }
}
