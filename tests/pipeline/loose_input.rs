use postcraft::context::Context;
use postcraft::prompt::{PostPromptBuilder, PromptBuilder};
use postcraft::questionnaire::{Answer, Questionnaire};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn loose_mapping_builds_same_prompt_as_typed_context() {
    let loose = Context::from_value(&json!({
        "goal": "attract_volunteers",
        "audience": "students",
        "platform": "vk",
        "format": ["story", "call_to_action"],
        "volume": "medium",
        "has_event": "no",
        "free_text": "Tree planting season starts",
    }))
    .unwrap();

    let typed = Context::builder()
        .goal("attract_volunteers")
        .audience(["students"])
        .platform("vk")
        .content_format(["story", "call_to_action"])
        .volume("medium")
        .free_text("Tree planting season starts")
        .build()
        .unwrap();

    let builder = PostPromptBuilder::new();
    assert_eq!(
        builder.build_prompt(&loose, ""),
        builder.build_prompt(&typed, "")
    );
}

#[test]
fn questionnaire_answers_build_a_prompt_with_event_section() {
    let mut questionnaire = Questionnaire::new();
    questionnaire
        .answer(Answer::Choice("announce_event".into()))
        .unwrap();
    questionnaire
        .answer(Answer::Choices(vec!["families".into()]))
        .unwrap();
    questionnaire
        .answer(Answer::Choice("telegram".into()))
        .unwrap();
    questionnaire
        .answer(Answer::Choices(vec!["event_reminder".into()]))
        .unwrap();
    questionnaire.answer(Answer::Choice("short".into())).unwrap();
    questionnaire.answer(Answer::YesNo(true)).unwrap();
    questionnaire
        .answer(Answer::Pairs(BTreeMap::from([(
            "date".to_string(),
            "June 1".to_string(),
        )])))
        .unwrap();
    questionnaire
        .answer(Answer::Text("Bring a blanket".into()))
        .unwrap();
    assert!(questionnaire.is_done());

    let (context, notes) = questionnaire.finish().unwrap();
    let prompt = PostPromptBuilder::new().build_prompt(&context, &notes);

    assert!(prompt.contains(postcraft::prompt::EVENT_SECTION_MARKER));
    assert!(prompt.contains("June 1"));
    assert!(prompt.contains("Bring a blanket"));
}
