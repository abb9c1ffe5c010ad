//! # jwkeys
//!
//! A Rust library that turns JSON Web Key (JWK) sets into RSA and ECDSA public keys,
//! indexed by key id, ready for JWT signature verification.
//!
//! ## Features
//!
//! - Base64url decoding of JWK members with 64-bit overflow checks for the RSA exponent
//! - RSA keys (modulus + exponent) of arbitrary modulus width
//! - ECDSA keys resolved through a closed curve table (`P-256`)
//! - All-or-nothing key map construction: one bad key fails the whole set
//! - Optional HTTP fetching of a JWKS endpoint
//! - Conversion into `jsonwebtoken::DecodingKey`
//!
//! Keys are never cached or refreshed; every fetch or decode builds a fresh map.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jwkeys::{FetchKeyMap, JwksFetcher, JwksFetcherConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = JwksFetcherConfig::new().with_timeout(Duration::from_secs(10));
//!     let fetcher = JwksFetcher::new(config)?;
//!
//!     let keys = fetcher
//!         .fetch_rsa_key_map("https://auth.example.com/jwks")
//!         .await?;
//!
//!     if let Some(key) = keys.get("key-1") {
//!         println!("modulus bits: {}", key.modulus.bits());
//!         println!("exponent: {}", key.exponent);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Already retrieved bodies can be decoded without the fetcher:
//!
//! ```rust
//! let body = br#"{"jwks":[{"kty":"RSA","kid":"key1","n":"AQAB","e":"AQAB"}]}"#;
//! let keys = jwkeys::parse_rsa_key_map(body).unwrap();
//! assert_eq!(keys["key1"].exponent, 65537);
//! ```

pub mod base64url;
mod config;
mod ecdsa_key;
mod error;
mod fetcher;
mod jwk;
mod key_map;
mod rsa_key;

// Re-exports for public API
pub use config::JwksFetcherConfig;
pub use ecdsa_key::decode_ecdsa_key;
pub use ecdsa_key::Curve;
pub use ecdsa_key::CurveParams;
pub use ecdsa_key::EcdsaPublicKey;
pub use error::Error;
pub use error::Result;
pub use fetcher::FetchKeyMap;
pub use fetcher::JwksFetcher;
pub use jwk::EcdsaJwk;
pub use jwk::JwksResponse;
pub use jwk::RsaJwk;
pub use key_map::build_ecdsa_key_map;
pub use key_map::build_key_map;
pub use key_map::build_rsa_key_map;
pub use key_map::parse_ecdsa_key_map;
pub use key_map::parse_key_map;
pub use key_map::parse_rsa_key_map;
pub use key_map::Ecdsa;
pub use key_map::EcdsaKeyMap;
pub use key_map::KeyFamily;
pub use key_map::KeyMap;
pub use key_map::Rsa;
pub use key_map::RsaKeyMap;
pub use rsa_key::decode_rsa_key;
pub use rsa_key::RsaPublicKey;

/// Big unsigned integer type used for key components
pub use rsa::BigUint;
