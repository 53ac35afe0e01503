use crate::domain::ports::AnswerModel;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// 固定使用的對話模型
const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI 相容的 chat-completions 客戶端。單輪訊息,不串流
pub struct OpenAiModel {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiModel {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AnswerModel for OpenAiModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": CHAT_MODEL,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ModelUnavailable {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::ModelUnavailable {
                reason: format!("model service returned HTTP {}", status),
            });
        }

        let payload: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| GatewayError::ModelUnavailable {
                    reason: e.to_string(),
                })?;

        let answer = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| GatewayError::ModelUnavailable {
                reason: "model response carried no message content".to_string(),
            })?;

        Ok(answer.to_string())
    }
}
