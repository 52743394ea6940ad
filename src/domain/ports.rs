use crate::utils::error::Result;
use async_trait::async_trait;

/// External naming collaborator. Returns between 0 and `count` labels; internal
/// failures never cross this boundary, they collapse to an empty list so the
/// grouping engine can fill the shortfall itself. Single attempt, no retry.
#[async_trait]
pub trait NamingProvider: Send + Sync {
    async fn generate_names(&self, count: usize, theme: &str) -> Vec<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn naming_endpoint(&self) -> &str;
    fn naming_model(&self) -> &str;
    fn api_key_env(&self) -> &str;
    fn naming_timeout_seconds(&self) -> u64;
    fn default_group_size(&self) -> usize;
    fn default_theme(&self) -> &str;
    fn default_repeatable(&self) -> bool;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
