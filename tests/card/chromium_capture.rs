#![cfg(feature = "chromium")]

use postcraft::card::{
    CardRenderer, CardSpec, ChromiumEngine, HtmlCardRenderer, TemplateRegistry, png_dimensions,
};
use postcraft::config::RenderConfig;
use std::sync::Arc;

#[tokio::test]
#[ignore = "needs a local Chromium"]
async fn chromium_captures_card_of_requested_size() {
    let (engine, handler) = ChromiumEngine::launch(&RenderConfig::default())
        .await
        .unwrap();
    let engine = Arc::new(engine);
    let renderer = HtmlCardRenderer::new(
        Arc::new(TemplateRegistry::new().unwrap()),
        engine.clone(),
    );

    let spec = CardSpec {
        template_id: "default".into(),
        title: "Join us".into(),
        body_text: "Come help!".into(),
        primary_color: "#FF0000".into(),
        organization_name: "Shelter Inc".into(),
        width: 1080,
        height: 1080,
    };
    let png = renderer.render_card(&spec).await;

    engine.close().await;
    handler.await.unwrap();

    assert_eq!(png_dimensions(&png.unwrap()), Some((1080, 1080)));
}
