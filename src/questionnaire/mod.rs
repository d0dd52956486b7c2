//! Interactive questionnaire that collects one [`Context`].
//!
//! The flow is a fixed state machine; [`transition`] is the whole edge table
//! and knows nothing about generation.

use crate::context::{Context, NgoProfile};
use crate::error::ValidationError;
use serde_json::{Value, json};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum QuestionnaireState {
    Goal,
    Audience,
    Platform,
    Format,
    Volume,
    HasEvent,
    EventDetails,
    Notes,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(String),
    Choices(Vec<String>),
    YesNo(bool),
    Pairs(BTreeMap<String, String>),
    Text(String),
}

impl Answer {
    fn kind(&self) -> &'static str {
        match self {
            Self::Choice(_) => "a single choice",
            Self::Choices(_) => "a list of choices",
            Self::YesNo(_) => "yes or no",
            Self::Pairs(_) => "key/value pairs",
            Self::Text(_) => "free text",
        }
    }
}

pub const GOALS: &[&str] = &[
    "attract_volunteers",
    "find_sponsors",
    "announce_event",
    "raise_awareness",
    "strengthen_relationships",
];
pub const AUDIENCES: &[&str] = &["youth", "families", "business", "seniors", "adults"];
pub const PLATFORMS: &[&str] = &["vk", "telegram", "website", "instagram"];
pub const FORMATS: &[&str] = &["informational", "entertaining", "engaging", "event_reminder"];
pub const VOLUMES: &[&str] = &["short", "medium", "long"];
pub const EVENT_FIELDS: &[&str] = &["type", "date", "place", "audience"];

impl QuestionnaireState {
    pub fn question(self) -> &'static str {
        match self {
            Self::Goal => "What is the goal of the post?",
            Self::Audience => "Who is the target audience?",
            Self::Platform => "Where will it be published?",
            Self::Format => "Which content format?",
            Self::Volume => "How long should it be?",
            Self::HasEvent => "Is the post about a specific event?",
            Self::EventDetails => "Describe the event",
            Self::Notes => "Anything else the post should say?",
            Self::Done => "",
        }
    }

    /// Suggested values for choice questions, empty otherwise.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Goal => GOALS,
            Self::Audience => AUDIENCES,
            Self::Platform => PLATFORMS,
            Self::Format => FORMATS,
            Self::Volume => VOLUMES,
            Self::EventDetails => EVENT_FIELDS,
            Self::HasEvent | Self::Notes | Self::Done => &[],
        }
    }
}

/// Next state after `answer`, or an error if the answer kind does not fit.
pub fn transition(
    state: QuestionnaireState,
    answer: &Answer,
) -> Result<QuestionnaireState, ValidationError> {
    use QuestionnaireState as S;

    let next = match (state, answer) {
        (S::Goal, Answer::Choice(_)) => S::Audience,
        (S::Audience, Answer::Choices(_)) => S::Platform,
        (S::Platform, Answer::Choice(_)) => S::Format,
        (S::Format, Answer::Choices(_)) => S::Volume,
        (S::Volume, Answer::Choice(_)) => S::HasEvent,
        (S::HasEvent, Answer::YesNo(true)) => S::EventDetails,
        (S::HasEvent, Answer::YesNo(false)) => S::Notes,
        (S::EventDetails, Answer::Pairs(_)) => S::Notes,
        (S::Notes, Answer::Text(_)) => S::Done,
        (S::Done, _) => {
            return Err(ValidationError::Questionnaire(
                "questionnaire is already finished".into(),
            ));
        }
        (state, answer) => {
            return Err(ValidationError::Questionnaire(format!(
                "`{state}` does not accept {}",
                answer.kind()
            )));
        }
    };
    Ok(next)
}

#[derive(Debug, Clone)]
pub struct Questionnaire {
    state: QuestionnaireState,
    goal: String,
    audience: Vec<String>,
    platform: String,
    content_format: Vec<String>,
    volume: String,
    has_event: bool,
    event_details: BTreeMap<String, String>,
    notes: String,
    ngo: Option<NgoProfile>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Questionnaire {
    pub fn new() -> Self {
        Self {
            state: QuestionnaireState::Goal,
            goal: String::new(),
            audience: Vec::new(),
            platform: String::new(),
            content_format: Vec::new(),
            volume: String::new(),
            has_event: false,
            event_details: BTreeMap::new(),
            notes: String::new(),
            ngo: None,
        }
    }

    /// Attach the organisation profile used for the resulting context.
    pub fn with_ngo(mut self, ngo: NgoProfile) -> Self {
        self.ngo = Some(ngo);
        self
    }

    pub fn state(&self) -> QuestionnaireState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == QuestionnaireState::Done
    }

    /// Record `answer` for the current question and advance. On error the
    /// state is unchanged.
    pub fn answer(&mut self, answer: Answer) -> Result<QuestionnaireState, ValidationError> {
        let next = transition(self.state, &answer)?;
        Self::check_not_blank(self.state, &answer)?;

        match answer {
            Answer::Choice(value) => match self.state {
                QuestionnaireState::Goal => self.goal = value,
                QuestionnaireState::Platform => self.platform = value,
                _ => self.volume = value,
            },
            Answer::Choices(values) => {
                if self.state == QuestionnaireState::Audience {
                    self.audience = values;
                } else {
                    self.content_format = values;
                }
            }
            Answer::YesNo(has_event) => {
                self.has_event = has_event;
                if !has_event {
                    self.event_details.clear();
                }
            }
            Answer::Pairs(details) => self.event_details = details,
            Answer::Text(notes) => self.notes = notes,
        }

        tracing::debug!(from = %self.state, to = %next, "questionnaire advanced");
        self.state = next;
        Ok(next)
    }

    fn check_not_blank(state: QuestionnaireState, answer: &Answer) -> Result<(), ValidationError> {
        let blank = match answer {
            Answer::Choice(value) => value.trim().is_empty(),
            Answer::Choices(values) => values.iter().all(|v| v.trim().is_empty()),
            Answer::Pairs(details) => details.values().all(|v| v.trim().is_empty()),
            Answer::YesNo(_) | Answer::Text(_) => false,
        };
        if !blank {
            return Ok(());
        }
        Err(match state {
            QuestionnaireState::EventDetails => ValidationError::EventDetailsMissing,
            state => ValidationError::Questionnaire(format!("`{state}` needs an answer")),
        })
    }

    /// Answers so far in the loose mapping shape [`Context::from_value`]
    /// reads.
    pub fn snapshot(&self) -> Value {
        let mut value = json!({
            "goal": self.goal,
            "audience": self.audience,
            "platform": self.platform,
            "content_format": self.content_format,
            "volume": self.volume,
            "has_event": self.has_event,
            "event_details": self.event_details,
            "free_text": self.notes,
        });
        if let Some(ngo) = &self.ngo
            && let Some(obj) = value.as_object_mut()
        {
            obj.insert(
                "ngo".into(),
                json!({
                    "name": ngo.name,
                    "description": ngo.description,
                    "activities": ngo.activities,
                    "contact": ngo.contact,
                }),
            );
        }
        value
    }

    /// The finished [`Context`] and the free-text notes.
    pub fn finish(self) -> Result<(Context, String), ValidationError> {
        if !self.is_done() {
            return Err(ValidationError::Questionnaire(format!(
                "questionnaire is not finished, waiting for `{}`",
                self.state
            )));
        }

        let mut builder = Context::builder()
            .goal(self.goal)
            .audience(self.audience)
            .platform(self.platform)
            .content_format(self.content_format)
            .volume(self.volume)
            .has_event(self.has_event)
            .event_details(self.event_details)
            .free_text(self.notes.clone());
        if let Some(ngo) = self.ngo {
            builder = builder.ngo(ngo);
        }
        Ok((builder.build()?, self.notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(value: &str) -> Answer {
        Answer::Choice(value.into())
    }

    fn choices(values: &[&str]) -> Answer {
        Answer::Choices(values.iter().map(ToString::to_string).collect())
    }

    fn answer_basics(q: &mut Questionnaire) {
        q.answer(choice("announce_event")).unwrap();
        q.answer(choices(&["families"])).unwrap();
        q.answer(choice("telegram")).unwrap();
        q.answer(choices(&["event_reminder"])).unwrap();
        q.answer(choice("short")).unwrap();
    }

    #[test]
    fn no_event_skips_details() {
        let mut q = Questionnaire::new();
        answer_basics(&mut q);
        assert_eq!(q.answer(Answer::YesNo(false)).unwrap(), QuestionnaireState::Notes);
        assert_eq!(
            q.answer(Answer::Text("Bring friends".into())).unwrap(),
            QuestionnaireState::Done
        );

        let (ctx, notes) = q.finish().unwrap();
        assert_eq!(notes, "Bring friends");
        assert!(!ctx.has_event());
        assert_eq!(ctx.free_text(), "Bring friends");
    }

    #[test]
    fn event_path_collects_details() {
        let mut q = Questionnaire::new();
        answer_basics(&mut q);
        assert_eq!(
            q.answer(Answer::YesNo(true)).unwrap(),
            QuestionnaireState::EventDetails
        );

        let details = BTreeMap::from([("date".to_string(), "June 1".to_string())]);
        q.answer(Answer::Pairs(details)).unwrap();
        q.answer(Answer::Text(String::new())).unwrap();

        let (ctx, _) = q.finish().unwrap();
        assert!(ctx.has_event());
        assert_eq!(ctx.event_details().get("date").map(String::as_str), Some("June 1"));
    }

    #[test]
    fn wrong_kind_is_rejected_without_advancing() {
        let mut q = Questionnaire::new();
        let err = q.answer(Answer::YesNo(true)).unwrap_err();
        assert!(matches!(err, ValidationError::Questionnaire(msg) if msg.contains("goal")));
        assert_eq!(q.state(), QuestionnaireState::Goal);
    }

    #[test]
    fn empty_event_details_are_rejected() {
        let mut q = Questionnaire::new();
        answer_basics(&mut q);
        q.answer(Answer::YesNo(true)).unwrap();

        let details = BTreeMap::from([("date".to_string(), " ".to_string())]);
        assert_eq!(
            q.answer(Answer::Pairs(details)).unwrap_err(),
            ValidationError::EventDetailsMissing
        );
        assert_eq!(q.state(), QuestionnaireState::EventDetails);
    }

    #[test]
    fn answering_after_done_fails() {
        assert!(transition(QuestionnaireState::Done, &Answer::Text("x".into())).is_err());
    }

    #[test]
    fn finish_before_done_fails() {
        let mut q = Questionnaire::new();
        q.answer(choice("raise_awareness")).unwrap();
        assert!(matches!(q.finish(), Err(ValidationError::Questionnaire(_))));
    }

    #[test]
    fn snapshot_rebuilds_same_context() {
        let mut q = Questionnaire::new().with_ngo(NgoProfile::new("Shelter Inc"));
        answer_basics(&mut q);
        q.answer(Answer::YesNo(false)).unwrap();
        q.answer(Answer::Text("Bring snacks".into())).unwrap();

        let rebuilt = Context::from_value(&q.snapshot()).unwrap();
        let (ctx, _) = q.finish().unwrap();
        assert_eq!(rebuilt, ctx);
    }

    #[test]
    fn every_state_has_an_edge() {
        use QuestionnaireState as S;
        let table = [
            (S::Goal, choice("g"), S::Audience),
            (S::Audience, choices(&["a"]), S::Platform),
            (S::Platform, choice("p"), S::Format),
            (S::Format, choices(&["f"]), S::Volume),
            (S::Volume, choice("v"), S::HasEvent),
            (S::HasEvent, Answer::YesNo(true), S::EventDetails),
            (S::HasEvent, Answer::YesNo(false), S::Notes),
            (S::EventDetails, Answer::Pairs(BTreeMap::new()), S::Notes),
            (S::Notes, Answer::Text(String::new()), S::Done),
        ];
        for (from, answer, to) in table {
            assert_eq!(transition(from, &answer).unwrap(), to);
        }
    }
}
