//! Signed Tokens
//!
//! JWTs signed with HMAC-SHA256 through `jsonwebtoken`. Only `HS256` is
//! accepted on verification; a header naming any other algorithm is
//! rejected before the signature is checked.
//!
//! Claim semantics (expiry, subject) belong to the caller. This module
//! only guarantees that the payload was produced by a holder of the key.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

pub const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Not a JWT, or the payload does not fit the expected claims
    #[error("Malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),

    /// Header names an algorithm other than HS256
    #[error("Unsupported token algorithm")]
    UnsupportedAlgorithm,

    /// Signature does not match header and payload
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Claims could not be serialized
    #[error("Token encoding failed: {0}")]
    Encoding(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidAlgorithm => TokenError::UnsupportedAlgorithm,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(err),
        }
    }
}

/// Serialize `claims` and sign them with `secret`
pub fn sign<C: Serialize>(claims: &C, secret: &[u8]) -> Result<String, TokenError> {
    encode(
        &Header::new(ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenError::Encoding)
}

/// Check algorithm and signature, then decode the claims
///
/// Registered claims (`exp`, `nbf`, `aud`) are not interpreted here.
pub fn verify<C: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<C, TokenError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<C>(token, &DecodingKey::from_secret(secret), &validation)?;
    Ok(data.claims)
}
