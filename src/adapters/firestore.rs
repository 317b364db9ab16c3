use crate::adapters::gcp_auth::{MetadataTokenProvider, StaticTokenProvider};
use crate::domain::ports::{ConfigProvider, ProfileStore, TokenProvider};
use crate::utils::error::{CleanupError, Result};
use crate::utils::validation;
use reqwest::Client;

/// Delete-by-key against the Firestore REST v1 API.
///
/// Only document deletes in the configured collection are issued; the adapter
/// never addresses any other path in the database.
pub struct FirestoreStore {
    client: Client,
    endpoint: String,
    project_id: String,
    collection: String,
    tokens: Box<dyn TokenProvider>,
}

impl FirestoreStore {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        collection: impl Into<String>,
        tokens: Box<dyn TokenProvider>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            collection: collection.into(),
            tokens,
        }
    }

    /// Builds the store from a resolved configuration. A static token from
    /// the config wins; otherwise credentials come from the metadata server.
    pub fn from_config(client: Client, config: &impl ConfigProvider) -> Self {
        let tokens: Box<dyn TokenProvider> = match config.access_token() {
            Some(token) => Box::new(StaticTokenProvider::new(token)),
            None => Box::new(MetadataTokenProvider::new(
                client.clone(),
                config.metadata_endpoint(),
            )),
        };

        Self::new(
            client,
            config.firestore_endpoint(),
            config.project_id(),
            config.collection(),
            tokens,
        )
    }

    fn document_url(&self, user_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.collection,
            user_id
        )
    }
}

impl ProfileStore for FirestoreStore {
    async fn delete_profile(&self, user_id: &str) -> Result<()> {
        // An id carrying path segments would address a document outside the
        // configured collection; refuse it before building the URL.
        validation::validate_document_id("user_id", user_id)?;

        let token = self.tokens.access_token().await?;

        let mut request = self.client.delete(self.document_url(user_id));
        // An empty token means unauthenticated access (Firestore emulator).
        if !token.is_empty() {
            request = request.bearer_auth(&token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CleanupError::StoreError {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(())
    }
}
