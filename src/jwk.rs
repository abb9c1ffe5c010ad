use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::error::Result;

/// JSON Web Key record for an RSA public key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaJwk {
    /// Key type, expected to be "RSA"
    #[serde(default)]
    pub kty: String,
    /// Key identifier
    #[serde(default)]
    pub kid: String,
    /// Modulus, base64url-encoded big-endian
    #[serde(default)]
    pub n: String,
    /// Public exponent, base64url-encoded big-endian
    #[serde(default)]
    pub e: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
}

/// JSON Web Key record for an ECDSA public key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaJwk {
    /// Key type, expected to be "EC"
    #[serde(default)]
    pub kty: String,
    /// Curve name, e.g. "P-256"
    #[serde(default)]
    pub crv: String,
    /// Key identifier
    #[serde(default)]
    pub kid: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    /// X coordinate, base64url-encoded big-endian
    #[serde(default)]
    pub x: String,
    /// Y coordinate, base64url-encoded big-endian
    #[serde(default)]
    pub y: String,
    /// X.509 certificate chain; carried through but not used for decoding
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub x5c: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wire envelope of a JWK set: `{ "jwks": [ ... ] }`
///
/// The RFC 7517 member name `keys` is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwksResponse<R> {
    #[serde(alias = "keys")]
    pub jwks: Vec<R>,
}

impl<R: DeserializeOwned> JwksResponse<R> {
    /// Parse a JWK set envelope from a raw JSON body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}
