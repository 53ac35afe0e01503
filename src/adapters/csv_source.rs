use crate::core::sheet;
use crate::domain::model::Snapshot;
use crate::domain::ports::SheetSource;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// 以 HTTP 抓取 CSV 匯出內容的資料來源,每次呼叫都重新抓,不快取不重試
pub struct CsvSheetSource {
    client: Client,
    url: String,
}

impl CsvSheetSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl SheetSource for CsvSheetSource {
    async fn fetch(&self) -> Result<Snapshot> {
        tracing::debug!("Fetching CSV from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GatewayError::SourceUnavailable {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(GatewayError::SourceUnavailable {
                reason: format!("sheet source returned HTTP {}", response.status()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::SourceUnavailable {
                reason: e.to_string(),
            })?;

        let snapshot = sheet::parse_snapshot(&body).map_err(|e| match e {
            already @ GatewayError::SourceUnavailable { .. } => already,
            other => GatewayError::SourceUnavailable {
                reason: other.to_string(),
            },
        })?;

        tracing::debug!(
            "Fetched {} records across {} columns",
            snapshot.records.len(),
            snapshot.columns.len()
        );
        Ok(snapshot)
    }
}
