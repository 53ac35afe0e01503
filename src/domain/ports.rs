use crate::domain::model::{ProxyReply, Snapshot};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot>;
}

#[async_trait]
pub trait WriteEndpoint: Send + Sync {
    async fn propagate(
        &self,
        action: &str,
        params: &HashMap<String, String>,
    ) -> Result<ProxyReply>;
}

#[async_trait]
pub trait AnswerModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
