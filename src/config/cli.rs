use crate::config::toml_config::{
    TomlConfig, DEFAULT_COLLECTION, DEFAULT_FIRESTORE_ENDPOINT, DEFAULT_METADATA_ENDPOINT,
};
use crate::utils::error::{CleanupError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "auth-cleanup")]
#[command(about = "Replays an account-deletion event against the profile document store")]
pub struct CliConfig {
    /// Identifier of the deleted user whose profile document should be removed
    #[arg(long)]
    pub user_id: String,

    #[arg(long)]
    pub project_id: Option<String>,

    #[arg(long, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    #[arg(long, default_value = DEFAULT_FIRESTORE_ENDPOINT)]
    pub firestore_endpoint: String,

    #[arg(long, default_value = DEFAULT_METADATA_ENDPOINT)]
    pub metadata_endpoint: String,

    /// Static bearer token (use an empty string against the emulator)
    #[arg(long)]
    pub access_token: Option<String>,

    /// TOML config file; when given it replaces the connection flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves flags (or the referenced config file) into the connection
    /// settings used to build the store.
    pub fn resolve(&self) -> Result<TomlConfig> {
        if let Some(path) = &self.config {
            return TomlConfig::from_file(path);
        }

        let project_id =
            self.project_id
                .clone()
                .ok_or_else(|| CleanupError::MissingConfigError {
                    field: "project_id".to_string(),
                })?;

        Ok(TomlConfig {
            project_id,
            collection: self.collection.clone(),
            firestore_endpoint: self.firestore_endpoint.clone(),
            metadata_endpoint: self.metadata_endpoint.clone(),
            access_token: self.access_token.clone(),
        })
    }
}
