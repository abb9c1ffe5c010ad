use async_trait::async_trait;
use reqwest::Client;

use crate::config::JwksFetcherConfig;
use crate::error::fetch_jwks_error;
use crate::error::Result;
use crate::key_map::parse_key_map;
use crate::key_map::Ecdsa;
use crate::key_map::EcdsaKeyMap;
use crate::key_map::KeyFamily;
use crate::key_map::KeyMap;
use crate::key_map::Rsa;
use crate::key_map::RsaKeyMap;

/// Trait for retrieving a key map from a JWKS endpoint
#[async_trait]
pub trait FetchKeyMap {
    /// Fetch an RSA key set and decode it into a key map
    async fn fetch_rsa_key_map(&self, endpoint: &str) -> Result<RsaKeyMap>;

    /// Fetch an ECDSA key set and decode it into a key map
    async fn fetch_ecdsa_key_map(&self, endpoint: &str) -> Result<EcdsaKeyMap>;
}

/// Fetches JWK sets over HTTP and decodes them
///
/// Every call performs exactly one GET; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct JwksFetcher {
    client: Client,
}

impl JwksFetcher {
    /// Create a new fetcher with the given configuration
    ///
    /// # Errors
    /// Returns `Error::Fetch` if the default HTTP client cannot be built.
    pub fn new(config: JwksFetcherConfig) -> Result<Self> {
        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(fetch_jwks_error)?,
        };

        Ok(Self { client })
    }

    /// Fetch the key set at `endpoint` and decode it as family `F`
    ///
    /// Non-success HTTP statuses and transport failures are `Error::Fetch`; a body that is
    /// not a key set is `Error::Json`. Decoding keeps its all-or-nothing semantics.
    #[tracing::instrument(skip(self), fields(family = F::NAME))]
    pub async fn fetch_key_map<F: KeyFamily>(&self, endpoint: &str) -> Result<KeyMap<F>> {
        let body = self
            .client
            .get(endpoint)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fetch_jwks_error)?
            .bytes()
            .await
            .map_err(fetch_jwks_error)?;

        let keys = parse_key_map::<F>(&body).inspect_err(|error| {
            tracing::warn!(%error, "rejected JWKS response");
        })?;

        tracing::debug!(keys = keys.len(), "fetched JWKS");
        Ok(keys)
    }
}

#[async_trait]
impl FetchKeyMap for JwksFetcher {
    async fn fetch_rsa_key_map(&self, endpoint: &str) -> Result<RsaKeyMap> {
        self.fetch_key_map::<Rsa>(endpoint).await
    }

    async fn fetch_ecdsa_key_map(&self, endpoint: &str) -> Result<EcdsaKeyMap> {
        self.fetch_key_map::<Ecdsa>(endpoint).await
    }
}
