use jsonwebtoken::DecodingKey;
use rsa::BigUint;

use crate::base64url::decode_field;
use crate::base64url::decode_uint_field;
use crate::error::Result;
use crate::jwk::RsaJwk;

/// RSA public key decoded from a JWK, tagged with its key id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub id: String,
    pub modulus: BigUint,
    pub exponent: u64,
}

impl RsaPublicKey {
    /// Build a `jsonwebtoken` decoding key for RS* / PS* signature verification
    pub fn to_decoding_key(&self) -> DecodingKey {
        let exponent = BigUint::from(self.exponent);
        DecodingKey::from_rsa_raw_components(&self.modulus.to_bytes_be(), &exponent.to_bytes_be())
    }
}

/// Decode an RSA JWK record into an [`RsaPublicKey`]
///
/// The modulus has arbitrary width; the exponent must fit into 64 bits. No checks are made
/// on modulus length or exponent value.
///
/// # Errors
/// Returns `Error::Encoding` if `n` or `e` is not valid base64url, and `Error::Overflow` if
/// `e` decodes to more than 8 bytes.
pub fn decode_rsa_key(record: &RsaJwk) -> Result<RsaPublicKey> {
    let modulus = BigUint::from_bytes_be(&decode_field("n", &record.n)?);
    let exponent = decode_uint_field("e", &record.e)?;

    Ok(RsaPublicKey {
        id: record.kid.clone(),
        modulus,
        exponent,
    })
}
