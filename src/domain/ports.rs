use crate::domain::model::{CaseBatch, RunReport};
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

pub trait ConfigProvider: Send + Sync {
    fn test_file(&self) -> &str;
    fn fail_file(&self) -> &str;
    fn log_file(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<CaseBatch>;
    async fn process(&self, batch: CaseBatch) -> Result<RunReport>;
    async fn load(&self, report: RunReport) -> Result<String>;
}
