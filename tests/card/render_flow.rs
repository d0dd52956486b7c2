use super::png::png_header;
use postcraft::card::{
    CardRenderer, CardSpec, HtmlCardRenderer, RenderEngine, TemplateRegistry, png_dimensions,
};
use postcraft::context::{Context, NgoProfile};
use postcraft::error::CardError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Keeps every markup it was asked to capture.
#[derive(Default)]
struct RecordingEngine {
    markups: Mutex<Vec<String>>,
}

impl RenderEngine for RecordingEngine {
    fn capture<'a>(
        &'a self,
        markup: &'a str,
        width: u32,
        height: u32,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CardError>> + Send + 'a>> {
        self.markups.lock().unwrap().push(markup.to_string());
        Box::pin(async move { Ok(png_header(width, height)) })
    }
}

fn context(platform: &str, goal: &str) -> Context {
    Context::builder()
        .goal(goal)
        .audience(["students"])
        .platform(platform)
        .content_format(["story"])
        .volume("short")
        .ngo(NgoProfile::new("Shelter Inc"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn instagram_post_renders_portrait_default_card() {
    let engine = Arc::new(RecordingEngine::default());
    let renderer = HtmlCardRenderer::new(
        Arc::new(TemplateRegistry::new().unwrap()),
        engine.clone(),
    );

    let spec = CardSpec::for_context(
        &context("instagram", "attract_volunteers"),
        "Come help!",
        None,
    );
    assert_eq!(spec.template_id, "default");
    assert_eq!((spec.width, spec.height), (1080, 1350));
    assert_eq!(spec.organization_name, "Shelter Inc");

    let png = renderer.render_card(&spec).await.unwrap();
    assert_eq!(png_dimensions(&png), Some((1080, 1350)));

    let markups = engine.markups.lock().unwrap();
    assert_eq!(markups.len(), 1);
    assert!(markups[0].contains("Come help!"));
    assert!(markups[0].contains("Shelter Inc"));
    assert!(markups[0].contains(&spec.primary_color));
}

#[tokio::test]
async fn body_markup_is_escaped_and_line_breaks_kept() {
    let engine = Arc::new(RecordingEngine::default());
    let renderer = HtmlCardRenderer::new(
        Arc::new(TemplateRegistry::new().unwrap()),
        engine.clone(),
    );

    let spec = CardSpec::for_context(
        &context("telegram", "announce_event"),
        "<b>Picnic</b>\nSunday",
        Some("Green Hands"),
    );
    renderer.render_card(&spec).await.unwrap();

    let markup = engine.markups.lock().unwrap()[0].clone();
    assert!(markup.contains("&lt;b&gt;Picnic&lt;&#x2F;b&gt;<br>Sunday"));
    assert!(markup.contains("Green Hands"));
    assert!(!markup.contains("<b>Picnic"));
}

#[tokio::test]
async fn templates_dir_adds_custom_card() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("poster.html"),
        "<html><body><h1>{{ title }}</h1><p>{{ organization_name }}</p></body></html>",
    )
    .unwrap();

    let engine = Arc::new(RecordingEngine::default());
    let renderer = HtmlCardRenderer::new(
        Arc::new(TemplateRegistry::with_dir(tmp.path()).unwrap()),
        engine.clone(),
    );

    let mut spec = CardSpec::for_context(&context("vk", "find_sponsors"), "Thanks", None);
    spec.template_id = "poster".into();
    renderer.render_card(&spec).await.unwrap();

    let markup = engine.markups.lock().unwrap()[0].clone();
    assert!(markup.contains("<h1>Support our mission</h1>"));
}

#[test]
fn vk_card_is_square() {
    let spec = CardSpec::for_context(&context("VK", "attract_volunteers"), "Come help!", None);
    assert_eq!(spec.template_id, "vk");
    assert_eq!((spec.width, spec.height), (1080, 1080));
    assert_eq!(spec.title, "Join our volunteers");
}

#[test]
fn long_body_is_shortened_on_card() {
    let body = "a".repeat(400);
    let spec = CardSpec::for_context(&context("vk", "attract_volunteers"), &body, None);
    assert_eq!(spec.body_text.chars().count(), 300);
    assert!(spec.body_text.ends_with("..."));
}
