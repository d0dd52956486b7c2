use super::engine::RenderEngine;
use super::png::png_dimensions;
use super::spec::CardSpec;
use super::templates::TemplateRegistry;
use crate::error::CardError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub trait CardRenderer: Send + Sync {
    fn render_card<'a>(
        &'a self,
        spec: &'a CardSpec,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CardError>> + Send + 'a>>;
}

/// Fills an HTML template and hands it to the shared render engine.
pub struct HtmlCardRenderer {
    templates: Arc<TemplateRegistry>,
    engine: Arc<dyn RenderEngine>,
}

impl HtmlCardRenderer {
    pub fn new(templates: Arc<TemplateRegistry>, engine: Arc<dyn RenderEngine>) -> Self {
        Self { templates, engine }
    }

    async fn render(&self, spec: &CardSpec) -> Result<Vec<u8>, CardError> {
        spec.validate()?;
        let markup = self.templates.render(spec)?;

        tracing::debug!(
            template_id = %spec.template_id,
            width = spec.width,
            height = spec.height,
            markup_bytes = markup.len(),
            "capturing card"
        );
        let png = self.engine.capture(&markup, spec.width, spec.height).await?;

        match png_dimensions(&png) {
            Some(dims) if dims == (spec.width, spec.height) => {}
            Some((width, height)) => {
                return Err(CardError::Render(format!(
                    "engine returned {width}x{height}, expected {}x{}",
                    spec.width, spec.height
                )));
            }
            None => return Err(CardError::Render("engine did not return a PNG".into())),
        }

        tracing::info!(
            template_id = %spec.template_id,
            png_bytes = png.len(),
            "card rendered"
        );
        Ok(png)
    }
}

impl CardRenderer for HtmlCardRenderer {
    fn render_card<'a>(
        &'a self,
        spec: &'a CardSpec,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CardError>> + Send + 'a>> {
        Box::pin(self.render(spec))
    }
}
