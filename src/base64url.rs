//! Base64URL field decoding for JWK members
//!
//! JWK numeric members (`n`, `e`, `x`, `y`) are big-endian byte strings encoded with the
//! URL-safe alphabet and no padding (RFC 7518, section 2).

use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::GeneralPurpose;
use base64::engine::GeneralPurposeConfig;
use base64::Engine;

use crate::error::encoding_error;
use crate::error::Error;
use crate::error::Result;

const UINT_WIDTH: usize = std::mem::size_of::<u64>();

/// Unpadded URL-safe engine that ignores non-zero trailing bits in the last symbol
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decode an unpadded base64url field into raw bytes
pub fn decode_bytes(field: &str) -> Result<Vec<u8>> {
    decode_field("field", field)
}

/// Decode an unpadded base64url field into a big-endian `u64`
///
/// The decoded bytes are right-aligned into an 8-byte buffer, so short values such as the
/// 3-byte RSA exponent `AQAB` are zero-extended on the left.
///
/// # Errors
/// Returns `Error::Encoding` for malformed input and `Error::Overflow` if the field decodes
/// to more than 8 bytes.
pub fn decode_uint(field: &str) -> Result<u64> {
    decode_uint_field("field", field)
}

pub(crate) fn decode_field(name: &'static str, field: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT.decode(field).map_err(encoding_error(name))
}

pub(crate) fn decode_uint_field(name: &'static str, field: &str) -> Result<u64> {
    let bytes = decode_field(name, field)?;

    if bytes.len() > UINT_WIDTH {
        return Err(Error::Overflow {
            field: name,
            len: bytes.len(),
        });
    }

    let mut buf = [0u8; UINT_WIDTH];
    buf[UINT_WIDTH - bytes.len()..].copy_from_slice(&bytes);

    Ok(u64::from_be_bytes(buf))
}
