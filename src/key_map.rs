use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::ecdsa_key::decode_ecdsa_key;
use crate::ecdsa_key::EcdsaPublicKey;
use crate::error::Result;
use crate::jwk::EcdsaJwk;
use crate::jwk::JwksResponse;
use crate::jwk::RsaJwk;
use crate::rsa_key::decode_rsa_key;
use crate::rsa_key::RsaPublicKey;

/// A family of JWKs that decode into one kind of public key
///
/// Each family pairs a wire record type with the key type it decodes into, so that RSA and
/// ECDSA key maps stay distinct types.
pub trait KeyFamily {
    /// The JWK record as it appears on the wire
    type Record: DeserializeOwned + Send;

    /// The decoded public key
    type Key;

    /// Human readable family name, used in logs
    const NAME: &'static str;

    /// Decode a single record
    fn decode(record: &Self::Record) -> Result<Self::Key>;

    /// Key id under which a decoded key is stored
    fn key_id(key: &Self::Key) -> &str;
}

/// Key map for a single family, indexed by key id
pub type KeyMap<F> = HashMap<String, <F as KeyFamily>::Key>;

/// RSA keys (`"kty": "RSA"`)
#[derive(Debug, Clone, Copy)]
pub struct Rsa;

impl KeyFamily for Rsa {
    type Record = RsaJwk;
    type Key = RsaPublicKey;

    const NAME: &'static str = "RSA";

    fn decode(record: &Self::Record) -> Result<Self::Key> {
        decode_rsa_key(record)
    }

    fn key_id(key: &Self::Key) -> &str {
        &key.id
    }
}

/// ECDSA keys (`"kty": "EC"`)
#[derive(Debug, Clone, Copy)]
pub struct Ecdsa;

impl KeyFamily for Ecdsa {
    type Record = EcdsaJwk;
    type Key = EcdsaPublicKey;

    const NAME: &'static str = "ECDSA";

    fn decode(record: &Self::Record) -> Result<Self::Key> {
        decode_ecdsa_key(record)
    }

    fn key_id(key: &Self::Key) -> &str {
        &key.id
    }
}

pub type RsaKeyMap = KeyMap<Rsa>;
pub type EcdsaKeyMap = KeyMap<Ecdsa>;

/// Decode every record and index the keys by id
///
/// Records are decoded in order. The first failure aborts the batch and is returned; no
/// partially built map ever reaches the caller. A later record with an id already in the
/// map replaces the earlier key.
pub fn build_key_map<F: KeyFamily>(records: &[F::Record]) -> Result<KeyMap<F>> {
    let mut keys = KeyMap::<F>::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let key = F::decode(record).inspect_err(|error| {
            tracing::debug!(family = F::NAME, index, %error, "failed to decode JWK, discarding batch");
        })?;

        let kid = F::key_id(&key).to_string();
        if keys.insert(kid, key).is_some() {
            tracing::debug!(family = F::NAME, index, "duplicate key id, keeping the later key");
        }
    }

    Ok(keys)
}

/// Build an RSA key map from JWK records
pub fn build_rsa_key_map(records: &[RsaJwk]) -> Result<RsaKeyMap> {
    build_key_map::<Rsa>(records)
}

/// Build an ECDSA key map from JWK records
pub fn build_ecdsa_key_map(records: &[EcdsaJwk]) -> Result<EcdsaKeyMap> {
    build_key_map::<Ecdsa>(records)
}

/// Parse a raw `{ "jwks": [...] }` body and build the key map for family `F`
///
/// # Errors
/// Returns `Error::Json` if the body is not a key set of this family, otherwise any decode
/// error from [`build_key_map`].
pub fn parse_key_map<F: KeyFamily>(body: &[u8]) -> Result<KeyMap<F>> {
    let JwksResponse { jwks } = JwksResponse::<F::Record>::from_slice(body)?;
    build_key_map::<F>(&jwks)
}

pub fn parse_rsa_key_map(body: &[u8]) -> Result<RsaKeyMap> {
    parse_key_map::<Rsa>(body)
}

pub fn parse_ecdsa_key_map(body: &[u8]) -> Result<EcdsaKeyMap> {
    parse_key_map::<Ecdsa>(body)
}
