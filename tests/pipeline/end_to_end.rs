use postcraft::bootstrap;
use postcraft::config::{BackendConfig, Config};
use postcraft::context::{Context, NgoProfile, PlanRequest};
use postcraft::error::{LlmError, PostcraftError, ValidationError};
use postcraft::prompt::CLOSING_INSTRUCTION;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETION_PATH: &str = "/foundationModels/v1/completion";

fn config_for(server: &MockServer) -> Config {
    Config {
        backend: BackendConfig {
            api_url: format!("{}{COMPLETION_PATH}", server.uri()),
            api_key: Some("AQVN-integration".into()),
            folder_id: "b1gtest".into(),
            timeout_secs: 5,
            ..BackendConfig::default()
        },
        ..Config::default()
    }
}

fn reply(text: &str) -> Value {
    json!({
        "result": {
            "alternatives": [{"message": {"role": "assistant", "text": text}}],
            "usage": {"inputTextTokens": "120", "completionTokens": "40"},
        }
    })
}

fn event_context() -> Context {
    Context::builder()
        .goal("announce_event")
        .audience(["families"])
        .platform("telegram")
        .content_format(["event_reminder"])
        .volume("short")
        .has_event(true)
        .event_detail("date", "June 1")
        .event_detail("place", "City park")
        .ngo(NgoProfile::new("Green Hands").with_contact("+7 900 000-00-00"))
        .build()
        .unwrap()
}

async fn sent_prompt(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    messages.last().unwrap()["text"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn generated_post_is_cleaned_before_return() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(&format!(
            "Join us on June 1 in the City park!\n\n\n\nCall !+7 900 000-00-00!   \n{CLOSING_INSTRUCTION}"
        ))))
        .mount(&server)
        .await;

    let generator = bootstrap::content_generator(&config_for(&server));
    let post = generator
        .generate_content(&event_context(), "Picnic for the whole family")
        .await
        .unwrap();

    assert_eq!(
        post,
        "Join us on June 1 in the City park!\n\nCall +7 900 000-00-00"
    );

    let prompt = sent_prompt(&server).await;
    assert!(prompt.contains("Picnic for the whole family"));
    assert!(prompt.contains("June 1"));
    assert!(prompt.contains("Green Hands"));
}

#[tokio::test]
async fn backend_error_status_surfaces_without_secrets() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("denied for Api-Key AQVN-integration"),
        )
        .mount(&server)
        .await;

    let generator = bootstrap::content_generator(&config_for(&server));
    let err = generator
        .generate_content(&event_context(), "")
        .await
        .unwrap_err();

    match err {
        PostcraftError::Llm(LlmError::Status { status, body, .. }) => {
            assert_eq!(status, 403);
            assert!(!body.contains("AQVN-integration"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn reply_without_text_is_a_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {}})))
        .mount(&server)
        .await;

    let generator = bootstrap::content_generator(&config_for(&server));
    let err = generator.edit_text("Helo wrld", "").await.unwrap_err();
    assert!(matches!(err, PostcraftError::Response(_)));
}

#[tokio::test]
async fn invalid_loose_context_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let generator = bootstrap::content_generator(&config_for(&server));
    let err = generator
        .generate_content_from_value(
            &json!({
                "goal": "attract_volunteers",
                "audience": [],
                "platform": "vk",
                "content_format": ["story"],
                "volume": "short",
            }),
            "",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PostcraftError::Validation(ValidationError::EmptyTags("audience"))
    ));
}

#[tokio::test]
async fn refactor_sends_original_post_and_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Shorter post")))
        .mount(&server)
        .await;

    let generator = bootstrap::content_generator(&config_for(&server));
    let revised = generator
        .refactor_content(&event_context(), "A long original post", "make it shorter")
        .await
        .unwrap();
    assert_eq!(revised, "Shorter post");

    let prompt = sent_prompt(&server).await;
    assert!(prompt.contains("A long original post"));
    assert!(prompt.contains("make it shorter"));
}

#[tokio::test]
async fn content_plan_goes_through_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(
            "Week 1: volunteer story\nWeek 2: fundraising report",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let generator = bootstrap::content_generator(&config_for(&server));
    let plan = PlanRequest::new("one month", "once a week", "volunteering, fundraising")
        .unwrap()
        .with_details("no posts on holidays");
    let text = generator.content_plan(&plan).await.unwrap();
    assert_eq!(text, "Week 1: volunteer story\nWeek 2: fundraising report");

    let prompt = sent_prompt(&server).await;
    assert!(prompt.contains("• Posting frequency: once a week"));
    assert!(prompt.contains("• Special requirements: no posts on holidays"));
}
