//! Construction-time wiring. Long-lived resources are created here once and
//! handed to component constructors.

use crate::card::{CardRenderer, HtmlCardRenderer, TemplateRegistry};
use crate::config::Config;
use crate::error::{CardError, PostcraftError};
use crate::llm::{YandexGptClient, build_backend_client};
use crate::pipeline::ContentGenerator;
use crate::prompt::PostPromptBuilder;
use crate::response::YandexResponseProcessor;
use std::sync::Arc;

/// The text pipeline with its shared HTTP client.
pub fn content_generator(config: &Config) -> ContentGenerator {
    let http = build_backend_client(config.backend.timeout_secs);
    let prompts = Arc::new(PostPromptBuilder::new());
    ContentGenerator::new(
        prompts.clone(),
        prompts.clone(),
        prompts,
        Arc::new(YandexGptClient::new(&config.backend, http)),
        Arc::new(YandexResponseProcessor::new()),
    )
}

/// Built-in templates plus `render.templates_dir`, if set.
pub fn template_registry(config: &Config) -> Result<TemplateRegistry, CardError> {
    match config.render.resolved_templates_dir() {
        Some(dir) => TemplateRegistry::with_dir(&dir),
        None => TemplateRegistry::new(),
    }
}

/// The rendering engine and the card renderer built on it. Call
/// [`shutdown`](Self::shutdown) before exiting.
pub struct RenderResources {
    renderer: Arc<dyn CardRenderer>,
    #[cfg(feature = "chromium")]
    engine: Arc<crate::card::ChromiumEngine>,
    #[cfg(feature = "chromium")]
    handler: tokio::task::JoinHandle<()>,
}

impl RenderResources {
    #[cfg(feature = "chromium")]
    pub async fn launch(config: &Config) -> Result<Self, PostcraftError> {
        let templates = Arc::new(template_registry(config)?);
        let (engine, handler) = crate::card::ChromiumEngine::launch(&config.render).await?;
        let engine = Arc::new(engine);
        let renderer = Arc::new(HtmlCardRenderer::new(templates, engine.clone()));
        Ok(Self {
            renderer,
            engine,
            handler,
        })
    }

    #[cfg(not(feature = "chromium"))]
    pub async fn launch(config: &Config) -> Result<Self, PostcraftError> {
        template_registry(config)?;
        Err(CardError::Render("built without the `chromium` feature".into()).into())
    }

    pub fn renderer(&self) -> Arc<dyn CardRenderer> {
        Arc::clone(&self.renderer)
    }

    /// Close the browser and wait for its event loop to finish.
    pub async fn shutdown(self) {
        #[cfg(feature = "chromium")]
        {
            self.engine.close().await;
            if let Err(err) = self.handler.await {
                tracing::warn!(error = %err, "browser handler task failed");
            }
        }
    }
}
