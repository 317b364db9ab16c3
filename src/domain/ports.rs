use crate::utils::error::Result;
use async_trait::async_trait;

/// Delete-by-key access to the external profile document store.
pub trait ProfileStore: Send + Sync {
    fn delete_profile(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn project_id(&self) -> &str;
    fn collection(&self) -> &str;
    fn firestore_endpoint(&self) -> &str;
    fn metadata_endpoint(&self) -> &str;
    fn access_token(&self) -> Option<&str>;
}

/// Source of the bearer credential for outbound store calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}
