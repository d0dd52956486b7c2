use super::http_client::build_backend_client;
use super::scrub::sanitize_api_error;
use super::traits::GenerationClient;
use super::types::{CompletionOptions, CompletionRequest, Message, RawReply};
use crate::config::BackendConfig;
use crate::error::LlmError;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// YandexGPT completion endpoint client.
pub struct YandexGptClient {
    api_url: String,
    api_key: Option<String>,
    folder_id: String,
    model_uri: String,
    temperature: f64,
    max_tokens: u32,
    system_prompt: String,
    timeout_secs: u64,
    client: Client,
}

impl YandexGptClient {
    pub const NAME: &'static str = "yandexgpt";

    pub fn new(config: &BackendConfig, client: Client) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            folder_id: config.folder_id.clone(),
            model_uri: config.model_uri(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system_prompt: config.system_prompt.clone(),
            timeout_secs: config.timeout_secs,
            client,
        }
    }

    /// Build with a dedicated client sized to `config.timeout_secs`.
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config, build_backend_client(config.timeout_secs))
    }

    fn build_request(&self, prompt: &str) -> CompletionRequest {
        let mut messages = Vec::with_capacity(2);

        if !self.system_prompt.is_empty() {
            messages.push(Message {
                role: "system",
                text: self.system_prompt.clone(),
            });
        }

        messages.push(Message {
            role: "user",
            text: prompt.to_string(),
        });

        CompletionRequest {
            model_uri: self.model_uri.clone(),
            completion_options: CompletionOptions {
                stream: false,
                temperature: self.temperature,
                max_tokens: self.max_tokens.to_string(),
            },
            messages,
        }
    }

    fn transport_error(&self, err: &reqwest::Error) -> LlmError {
        if err.is_timeout() {
            return LlmError::Timeout {
                backend: Self::NAME.into(),
                secs: self.timeout_secs,
            };
        }
        LlmError::Transport {
            backend: Self::NAME.into(),
            message: sanitize_api_error(&err.to_string()),
        }
    }

    async fn call_api(&self, prompt: &str, request_id: &str) -> Result<RawReply, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingApiKey {
                backend: Self::NAME.into(),
            })?;

        let request = self.build_request(prompt);
        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Api-Key {api_key}"))
            .header("x-folder-id", &self.folder_id)
            .header("x-client-request-id", request_id)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read backend error body>".to_string());
            return Err(LlmError::Status {
                backend: Self::NAME.into(),
                status: status.as_u16(),
                body: sanitize_api_error(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| LlmError::Decode {
            backend: Self::NAME.into(),
            message: e.to_string(),
        })?;
        Ok(RawReply::new(value))
    }
}

impl GenerationClient for YandexGptClient {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RawReply, LlmError>> + Send + 'a>> {
        Box::pin(async move {
            let request_id = Uuid::new_v4().to_string();
            tracing::debug!(
                request_id = %request_id,
                prompt_chars = prompt.chars().count(),
                "sending generation request"
            );

            let started = Instant::now();
            let bound = Duration::from_secs(self.timeout_secs);
            let result = tokio::time::timeout(bound, self.call_api(prompt, &request_id))
                .await
                .unwrap_or_else(|_| {
                    Err(LlmError::Timeout {
                        backend: Self::NAME.into(),
                        secs: self.timeout_secs,
                    })
                });

            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            match &result {
                Ok(_) => tracing::info!(request_id = %request_id, elapsed_ms, "backend replied"),
                Err(err) => {
                    tracing::warn!(request_id = %request_id, elapsed_ms, error = %err, "backend call failed");
                }
            }
            result
        })
    }
}
