use crate::domain::model::{Document, SanitizeReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can turn a URL into an HTML payload.
pub trait ContentSource: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn document_name(&self) -> &str;
    fn base_url(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn strict(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Document>;
    async fn transform(&self, document: Document) -> Result<SanitizeReport>;
    async fn load(&self, report: SanitizeReport) -> Result<String>;
}
