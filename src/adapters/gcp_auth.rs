use crate::domain::ports::TokenProvider;
use crate::utils::error::{CleanupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const METADATA_TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";

/// Fixed token supplied through configuration. Used with the Firestore
/// emulator and in tests; an empty token disables the Authorization header.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[derive(Debug, Deserialize)]
struct MetadataToken {
    access_token: String,
}

/// Fetches short-lived service-account tokens from the GCE / Cloud Run
/// metadata server. Tokens are requested per invocation; the metadata server
/// caches them until shortly before expiry, so no local caching is done here.
pub struct MetadataTokenProvider {
    client: Client,
    endpoint: String,
}

impl MetadataTokenProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for MetadataTokenProvider {
    async fn access_token(&self) -> Result<String> {
        let url = format!(
            "{}{}",
            self.endpoint.trim_end_matches('/'),
            METADATA_TOKEN_PATH
        );

        let response = self
            .client
            .get(&url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CleanupError::AuthError {
                message: format!("metadata server returned {}", response.status()),
            });
        }

        let token: MetadataToken = response.json().await?;
        Ok(token.access_token)
    }
}
