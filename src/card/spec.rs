use super::params::{
    CardType, DEFAULT_ORGANIZATION, color_for_goal, dimensions_for, template_for_platform,
    title_for_goal,
};
use crate::context::Context;
use crate::error::CardError;
use serde::{Deserialize, Serialize};

/// Longest body text put on a card, in characters.
pub const MAX_BODY_CHARS: usize = 300;

/// Everything a card template needs. All fields are required; callers fill
/// visual defaults before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub template_id: String,
    pub title: String,
    pub body_text: String,
    pub primary_color: String,
    pub organization_name: String,
    pub width: u32,
    pub height: u32,
}

impl CardSpec {
    /// Card parameters derived from the request context: template and size
    /// from the platform, colour and title from the goal.
    ///
    /// `organization_name` falls back to the context's NGO profile, then to
    /// a generic name.
    pub fn for_context(context: &Context, body_text: &str, organization_name: Option<&str>) -> Self {
        Self::for_context_as(context, body_text, organization_name, CardType::Post)
    }

    /// Like [`for_context`](Self::for_context), sized for `card_type`.
    pub fn for_context_as(
        context: &Context,
        body_text: &str,
        organization_name: Option<&str>,
        card_type: CardType,
    ) -> Self {
        let (width, height) = dimensions_for(context.platform(), card_type);
        let organization_name = organization_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| context.ngo().map(|ngo| ngo.name.as_str()))
            .unwrap_or(DEFAULT_ORGANIZATION);

        Self {
            template_id: template_for_platform(context.platform()).to_string(),
            title: title_for_goal(context.goal()).to_string(),
            body_text: shorten(body_text.trim(), MAX_BODY_CHARS),
            primary_color: color_for_goal(context.goal()).to_string(),
            organization_name: organization_name.to_string(),
            width,
            height,
        }
    }

    pub fn validate(&self) -> Result<(), CardError> {
        let required = [
            ("template_id", &self.template_id),
            ("title", &self.title),
            ("primary_color", &self.primary_color),
            ("organization_name", &self.organization_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CardError::InvalidSpec(format!("`{field}` must not be empty")));
        }
        if self.width == 0 || self.height == 0 {
            return Err(CardError::InvalidSpec(format!(
                "dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Cut to `max` characters, the last three replaced by `...`.
fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
