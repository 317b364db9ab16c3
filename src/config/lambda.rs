use crate::config::toml_config::{
    DEFAULT_COLLECTION, DEFAULT_FIRESTORE_ENDPOINT, DEFAULT_METADATA_ENDPOINT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CleanupError, Result};
use crate::utils::validation::{self, Validate};
use std::env;

/// Environment-driven configuration for the managed-runtime binary.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub project_id: String,
    pub collection: String,
    pub firestore_endpoint: String,
    pub metadata_endpoint: String,
    pub access_token: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let project_id = env::var("GCP_PROJECT")
            .or_else(|_| env::var("GOOGLE_CLOUD_PROJECT"))
            .map_err(|_| CleanupError::ConfigError {
                message: "GCP_PROJECT environment variable is required".to_string(),
            })?;

        Ok(Self {
            project_id,
            collection: env::var("USERS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
            firestore_endpoint: env::var("FIRESTORE_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_FIRESTORE_ENDPOINT.to_string()),
            metadata_endpoint: env::var("METADATA_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_METADATA_ENDPOINT.to_string()),
            access_token: env::var("GOOGLE_ACCESS_TOKEN").ok(),
        })
    }
}

impl ConfigProvider for LambdaConfig {
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

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_gcp_project_id("project_id", &self.project_id)?;
        validation::validate_collection_id("collection", &self.collection)?;
        validation::validate_url("firestore_endpoint", &self.firestore_endpoint)?;
        validation::validate_url("metadata_endpoint", &self.metadata_endpoint)?;

        tracing::info!("Runtime configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // from_env reads process-wide state, so tests take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "GCP_PROJECT",
        "GOOGLE_CLOUD_PROJECT",
        "USERS_COLLECTION",
        "FIRESTORE_ENDPOINT",
        "METADATA_ENDPOINT",
        "GOOGLE_ACCESS_TOKEN",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_missing_project_fails_at_startup() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let error = LambdaConfig::from_env().expect_err("missing project must fail");
        assert!(error.to_string().contains("GCP_PROJECT"));
    }

    #[test]
    fn test_from_env_applies_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("GCP_PROJECT", "demo-project");

        let config = LambdaConfig::from_env().unwrap();
        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.collection, "users");
        assert_eq!(config.firestore_endpoint, "https://firestore.googleapis.com");
        assert_eq!(config.metadata_endpoint, "http://metadata.google.internal");
        assert!(config.access_token.is_none());
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    fn test_env_overrides_and_project_fallback() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("GOOGLE_CLOUD_PROJECT", "fallback-project");
        env::set_var("USERS_COLLECTION", "profiles");
        env::set_var("FIRESTORE_ENDPOINT", "http://localhost:8080");
        env::set_var("GOOGLE_ACCESS_TOKEN", "static-test-token");

        let config = LambdaConfig::from_env().unwrap();
        assert_eq!(config.project_id, "fallback-project");
        assert_eq!(config.collection, "profiles");
        assert_eq!(config.firestore_endpoint, "http://localhost:8080");
        assert_eq!(config.access_token.as_deref(), Some("static-test-token"));

        clear_env();
    }
}
