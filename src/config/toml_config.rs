use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CleanupError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub(crate) const DEFAULT_COLLECTION: &str = "users";
pub(crate) const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com";
pub(crate) const DEFAULT_METADATA_ENDPOINT: &str = "http://metadata.google.internal";

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_firestore_endpoint() -> String {
    DEFAULT_FIRESTORE_ENDPOINT.to_string()
}

fn default_metadata_endpoint() -> String {
    DEFAULT_METADATA_ENDPOINT.to_string()
}

/// Configuration loaded from a TOML file, for local and emulator runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project_id: String,

    #[serde(default = "default_collection")]
    pub collection: String,

    #[serde(default = "default_firestore_endpoint")]
    pub firestore_endpoint: String,

    #[serde(default = "default_metadata_endpoint")]
    pub metadata_endpoint: String,

    /// Static bearer token. When set, the metadata server is never queried.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CleanupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CleanupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn firestore_endpoint(&self) -> &str {
        &self.firestore_endpoint
    }

    fn metadata_endpoint(&self) -> &str {
        &self.metadata_endpoint
    }

    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_gcp_project_id("project_id", &self.project_id)?;
        validation::validate_collection_id("collection", &self.collection)?;
        validation::validate_url("firestore_endpoint", &self.firestore_endpoint)?;
        validation::validate_url("metadata_endpoint", &self.metadata_endpoint)?;
        Ok(())
    }
}
