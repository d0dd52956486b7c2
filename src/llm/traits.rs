use super::types::RawReply;
use crate::error::LlmError;
use std::future::Future;
use std::pin::Pin;

pub trait GenerationClient: Send + Sync {
    /// Backend identifier used in errors and logs (e.g. "yandexgpt").
    fn name(&self) -> &str;

    /// Send one prompt and return the backend's reply as-is.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RawReply, LlmError>> + Send + 'a>>;
}
