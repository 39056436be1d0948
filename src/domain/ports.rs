use crate::domain::model::{MenuSet, Theme};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> Vec<OutputFormat>;
    fn heatmap(&self) -> bool;
}

/// Source of generated menu content. One attempt per call, no retry.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn generate(&self, theme: Theme) -> Result<MenuSet>;
}
