use std::fmt::Debug;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Field '{field}' is not valid base64url: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },
    #[error("Field '{field}' decodes to {len} bytes, which does not fit the target width")]
    Overflow { field: &'static str, len: usize },
    #[error("Invalid elliptic curve: {0}")]
    InvalidCurve(String),
    #[error("JWKS fetch error: {0}")]
    Fetch(String),
    #[error("JWKS body is not a valid key set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

pub(crate) fn encoding_error(field: &'static str) -> impl FnOnce(base64::DecodeError) -> Error {
    move |source| Error::Encoding { field, source }
}

pub(crate) fn fetch_jwks_error(error: reqwest::Error) -> Error {
    Error::Fetch(format!("Failed to fetch JWKS: {error}"))
}
