//! What the user wants generated.
//!
//! A [`Context`] is built once per request, either through [`ContextBuilder`]
//! or from an untyped JSON mapping via [`Context::from_value`], and is
//! immutable afterwards. Both paths run the same validation.

mod loose;
mod plan;
pub(crate) mod tags;

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use plan::PlanRequest;

/// Placeholder the questionnaire stores for skipped organisation fields.
const NOT_SPECIFIED: &str = "not specified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    goal: String,
    audience: Vec<String>,
    platform: String,
    content_format: Vec<String>,
    volume: String,
    has_event: bool,
    event_details: BTreeMap<String, String>,
    free_text: String,
    narrative_style: Option<String>,
    ngo: Option<NgoProfile>,
}

impl Context {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Rebuild a context from loose input (questionnaire state dumps, legacy
    /// JSON). See [`loose`] for the accepted shapes.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        loose::parse(value)?.build()
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn audience(&self) -> &[String] {
        &self.audience
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn content_format(&self) -> &[String] {
        &self.content_format
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn has_event(&self) -> bool {
        self.has_event
    }

    /// Event details, keyed in sorted order. Always empty when
    /// [`has_event`](Self::has_event) is false.
    pub fn event_details(&self) -> &BTreeMap<String, String> {
        &self.event_details
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn narrative_style(&self) -> Option<&str> {
        self.narrative_style.as_deref()
    }

    pub fn ngo(&self) -> Option<&NgoProfile> {
        self.ngo.as_ref()
    }
}

/// Organisation profile used to personalise posts and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgoProfile {
    pub name: String,
    pub description: Option<String>,
    pub activities: Option<String>,
    pub contact: Option<String>,
}

impl NgoProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            description: None,
            activities: None,
            contact: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = specified(description.into());
        self
    }

    pub fn with_activities(mut self, activities: impl Into<String>) -> Self {
        self.activities = specified(activities.into());
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = specified(contact.into());
        self
    }
}

fn specified(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_SPECIFIED) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter()
        .map(Into::into)
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    goal: String,
    audience: Vec<String>,
    platform: String,
    content_format: Vec<String>,
    volume: String,
    has_event: bool,
    event_details: BTreeMap<String, String>,
    free_text: String,
    narrative_style: Option<String>,
    ngo: Option<NgoProfile>,
}

impl ContextBuilder {
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into().trim().to_string();
        self
    }

    pub fn audience<I, S>(mut self, audience: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audience = normalize_tags(audience);
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into().trim().to_string();
        self
    }

    pub fn content_format<I, S>(mut self, content_format: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_format = normalize_tags(content_format);
        self
    }

    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = volume.into().trim().to_string();
        self
    }

    pub fn has_event(mut self, has_event: bool) -> Self {
        self.has_event = has_event;
        self
    }

    pub fn event_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into().trim().to_string();
        if !key.is_empty() {
            self.event_details.insert(key, value.into().trim().to_string());
        }
        self
    }

    pub fn event_details<I, K, V>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in details {
            self = self.event_detail(key, value);
        }
        self
    }

    pub fn free_text(mut self, free_text: impl Into<String>) -> Self {
        self.free_text = free_text.into();
        self
    }

    pub fn narrative_style(mut self, style: impl Into<String>) -> Self {
        self.narrative_style = specified(style.into());
        self
    }

    pub fn ngo(mut self, ngo: NgoProfile) -> Self {
        self.ngo = Some(ngo);
        self
    }

    pub fn build(self) -> Result<Context, ValidationError> {
        if self.goal.is_empty() {
            return Err(ValidationError::MissingField("goal"));
        }
        if self.platform.is_empty() {
            return Err(ValidationError::MissingField("platform"));
        }
        if self.volume.is_empty() {
            return Err(ValidationError::MissingField("volume"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::EmptyTags("audience"));
        }
        if self.content_format.is_empty() {
            return Err(ValidationError::EmptyTags("content_format"));
        }
        if let Some(ngo) = &self.ngo
            && ngo.name.is_empty()
        {
            return Err(ValidationError::MissingField("ngo.name"));
        }

        let has_any_detail = self.event_details.values().any(|v| !v.is_empty());
        let event_details = if self.has_event {
            if !has_any_detail {
                return Err(ValidationError::EventDetailsMissing);
            }
            self.event_details
        } else {
            if !self.event_details.is_empty() {
                tracing::debug!(
                    count = self.event_details.len(),
                    "discarding event details because has_event is false"
                );
            }
            BTreeMap::new()
        };

        Ok(Context {
            goal: self.goal,
            audience: self.audience,
            platform: self.platform,
            content_format: self.content_format,
            volume: self.volume,
            has_event: self.has_event,
            event_details,
            free_text: self.free_text,
            narrative_style: self.narrative_style,
            ngo: self.ngo,
        })
    }
}
