use crate::domain::model::ProxyReply;
use crate::domain::ports::WriteEndpoint;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

/// Apps Script 形式的寫入端點。參數加上 action 一起轉發,
/// 成功時狀態碼與 JSON 內容原樣帶回
pub struct AppsScriptEndpoint {
    client: Client,
    exec_url: String,
}

impl AppsScriptEndpoint {
    pub fn new(script_url: &str) -> Self {
        Self {
            client: Client::new(),
            exec_url: normalize_exec_url(script_url),
        }
    }

    pub fn exec_url(&self) -> &str {
        &self.exec_url
    }
}

/// 寫入端點網址必須以 /exec 結尾
pub fn normalize_exec_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with("/exec") {
        trimmed.to_string()
    } else {
        format!("{}/exec", trimmed.trim_end_matches('/'))
    }
}

#[async_trait]
impl WriteEndpoint for AppsScriptEndpoint {
    async fn propagate(
        &self,
        action: &str,
        params: &HashMap<String, String>,
    ) -> Result<ProxyReply> {
        let mut query: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        query.push(("action", action));

        tracing::debug!("Relaying '{}' to write endpoint: {}", action, self.exec_url);

        let response = self
            .client
            .get(&self.exec_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| GatewayError::UpstreamWriteFailure {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamWriteFailure {
                reason: format!("write endpoint returned HTTP {}", status),
            });
        }

        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| GatewayError::UpstreamWriteFailure {
                    reason: format!("write endpoint returned a non-JSON body: {}", e),
                })?;

        Ok(ProxyReply {
            status: status.as_u16(),
            body,
        })
    }
}
