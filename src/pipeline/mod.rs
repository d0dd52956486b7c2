//! Prompt → backend → processed text.
//!
//! Every failure is returned as-is; nothing here substitutes fallback text
//! or retries. Card rendering is a separate call made by the caller.

use crate::context::{Context, PlanRequest};
use crate::error::Result;
use crate::llm::GenerationClient;
use crate::prompt::{PlanPromptBuilder, PromptBuilder, RevisionPromptBuilder};
use crate::response::ResponseProcessor;
use std::sync::Arc;

pub struct ContentGenerator {
    prompts: Arc<dyn PromptBuilder>,
    revisions: Arc<dyn RevisionPromptBuilder>,
    plans: Arc<dyn PlanPromptBuilder>,
    client: Arc<dyn GenerationClient>,
    processor: Arc<dyn ResponseProcessor>,
}

impl ContentGenerator {
    pub fn new(
        prompts: Arc<dyn PromptBuilder>,
        revisions: Arc<dyn RevisionPromptBuilder>,
        plans: Arc<dyn PlanPromptBuilder>,
        client: Arc<dyn GenerationClient>,
        processor: Arc<dyn ResponseProcessor>,
    ) -> Self {
        Self {
            prompts,
            revisions,
            plans,
            client,
            processor,
        }
    }

    pub async fn generate_content(&self, context: &Context, user_text: &str) -> Result<String> {
        let prompt = self.prompts.build_prompt(context, user_text);
        tracing::info!(
            goal = context.goal(),
            platform = context.platform(),
            prompt_chars = prompt.chars().count(),
            "generating post"
        );
        self.complete(&prompt).await
    }

    /// Validate loose input first; an invalid mapping never reaches the
    /// backend.
    pub async fn generate_content_from_value(
        &self,
        value: &serde_json::Value,
        user_text: &str,
    ) -> Result<String> {
        let context = Context::from_value(value)?;
        self.generate_content(&context, user_text).await
    }

    pub async fn refactor_content(
        &self,
        context: &Context,
        post: &str,
        request: &str,
    ) -> Result<String> {
        let prompt = self.revisions.build_refactor_prompt(context, post, request);
        tracing::info!(
            post_chars = post.chars().count(),
            prompt_chars = prompt.chars().count(),
            "refactoring post"
        );
        self.complete(&prompt).await
    }

    pub async fn edit_text(&self, text: &str, details: &str) -> Result<String> {
        let prompt = self.revisions.build_edit_prompt(text, details);
        tracing::info!(
            text_chars = text.chars().count(),
            prompt_chars = prompt.chars().count(),
            "editing text"
        );
        self.complete(&prompt).await
    }

    pub async fn content_plan(&self, plan: &PlanRequest) -> Result<String> {
        let prompt = self.plans.build_content_plan_prompt(plan);
        tracing::info!(
            period = plan.period(),
            prompt_chars = prompt.chars().count(),
            "generating content plan"
        );
        self.complete(&prompt).await
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let reply = self.client.generate(prompt).await?;
        let text = self.processor.process(&reply)?;
        tracing::info!(
            backend = self.client.name(),
            text_chars = text.chars().count(),
            "generation finished"
        );
        Ok(text)
    }
}
