use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use rsa::BigUint;

use crate::base64url::decode_field;
use crate::error::Error;
use crate::error::Result;
use crate::jwk::EcdsaJwk;

/// Named elliptic curves that ECDSA JWKs may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    P256,
}

/// Parameters attached to each supported curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Name used in the JWK `crv` member
    pub name: &'static str,
    /// Size of one affine coordinate in bytes
    pub coordinate_size: usize,
    /// JWS algorithm that signs with this curve
    pub algorithm: Algorithm,
}

const P256: CurveParams = CurveParams {
    name: "P-256",
    coordinate_size: 32,
    algorithm: Algorithm::ES256,
};

impl Curve {
    /// Supported curves. A new curve needs a variant, a parameter set and an entry here.
    pub const ALL: &'static [Curve] = &[Curve::P256];

    /// Resolve a JWK `crv` name
    ///
    /// # Errors
    /// Returns `Error::InvalidCurve` carrying the name if it is not a supported curve.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.name() == name)
            .ok_or_else(|| Error::InvalidCurve(name.to_string()))
    }

    /// Parameter set of this curve
    pub fn params(&self) -> &'static CurveParams {
        match self {
            Curve::P256 => &P256,
        }
    }

    /// Name of this curve as used in the JWK `crv` member
    pub fn name(&self) -> &'static str {
        self.params().name
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ECDSA public key decoded from a JWK, tagged with its key id
///
/// The point is not checked to lie on the curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaPublicKey {
    pub id: String,
    pub curve: Curve,
    pub x: BigUint,
    pub y: BigUint,
}

impl EcdsaPublicKey {
    /// Build a `jsonwebtoken` decoding key for ES* signature verification
    ///
    /// Coordinates are left-padded to the curve's coordinate size.
    ///
    /// # Errors
    /// Returns `Error::Overflow` if a coordinate is wider than the curve allows, or
    /// `Error::Jwt` if `jsonwebtoken` rejects the components.
    pub fn to_decoding_key(&self) -> Result<DecodingKey> {
        let size = self.curve.params().coordinate_size;
        let x = encode_coordinate("x", &self.x, size)?;
        let y = encode_coordinate("y", &self.y, size)?;

        Ok(DecodingKey::from_ec_components(&x, &y)?)
    }

    /// JWS algorithm matching this key's curve
    pub fn algorithm(&self) -> Algorithm {
        self.curve.params().algorithm
    }
}

fn encode_coordinate(field: &'static str, value: &BigUint, size: usize) -> Result<String> {
    let bytes = value.to_bytes_be();
    if bytes.len() > size {
        return Err(Error::Overflow {
            field,
            len: bytes.len(),
        });
    }

    let mut padded = vec![0u8; size - bytes.len()];
    padded.extend_from_slice(&bytes);

    Ok(URL_SAFE_NO_PAD.encode(padded))
}

/// Decode an ECDSA JWK record into an [`EcdsaPublicKey`]
///
/// # Errors
/// Returns `Error::Encoding` if `x` or `y` is not valid base64url, and `Error::InvalidCurve`
/// if `crv` names a curve outside the supported set.
pub fn decode_ecdsa_key(record: &EcdsaJwk) -> Result<EcdsaPublicKey> {
    let x = BigUint::from_bytes_be(&decode_field("x", &record.x)?);
    let y = BigUint::from_bytes_be(&decode_field("y", &record.y)?);
    let curve = Curve::from_name(&record.crv)?;

    Ok(EcdsaPublicKey {
        id: record.kid.clone(),
        curve,
        x,
        y,
    })
}
