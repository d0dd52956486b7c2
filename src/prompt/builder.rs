use super::tables::{
    audience_tone, format_directives, goal_statement, platform_constraints, volume_directive,
};
use super::{CLOSING_INSTRUCTION, EVENT_SECTION_MARKER, REVISION_CLOSING_INSTRUCTION};
use crate::context::{Context, NgoProfile, PlanRequest};
use std::collections::BTreeMap;

/// Turns a [`Context`] plus free text into the prompt sent to the backend.
///
/// Implementations must be pure: no I/O, identical inputs give an identical
/// prompt.
pub trait PromptBuilder: Send + Sync {
    /// `user_text` is the content seed. When it is empty the context's
    /// `free_text` is used instead; when both are set and differ, the
    /// context notes follow the seed as additional notes.
    fn build_prompt(&self, context: &Context, user_text: &str) -> String;
}

/// Prompts that revise text the user already has.
pub trait RevisionPromptBuilder: Send + Sync {
    /// Rework a generated `post` following the user's `request`.
    fn build_refactor_prompt(&self, context: &Context, post: &str, request: &str) -> String;

    /// Proofread arbitrary user text.
    fn build_edit_prompt(&self, text: &str, details: &str) -> String;
}

/// Prompts for a posting schedule rather than a single post.
pub trait PlanPromptBuilder: Send + Sync {
    fn build_content_plan_prompt(&self, plan: &PlanRequest) -> String;
}

const ROLE_FRAMING: &str = "Act as a professional SMM manager of a non-profit organisation.";

const REQUIREMENTS: &[&str] = &[
    "Additional requirements:",
    "• Do not mention restricted facilities, security, military bases or movement restrictions.",
    "• Focus on the social mission and on helping people.",
    "• Always add contact details and a call to a specific action.",
];

const EVENT_CHECKLIST: &str = "\
• State the exact date and time.
• State the venue (without mentioning restricted areas).
• Explain why the event matters and what will be interesting.
• Tell participants what they will get.
• Add an urgent call to register if there is a deadline.";

const EXAMPLE_POSTS: &[&str] = &[
    "Examples of successful posts for inspiration:",
    "• \"🌟 Friends, we need volunteers! Help children from large families get ready for school. Your help will change their lives!\"",
    "• \"💡 Your support matters! Thanks to you we collected 100 school kits for children in our city.\"",
    "• \"We invite you to a charity concert! December 15 at the House of Culture. All proceeds go to repairing the playground.\"",
];

const PLAN_FORMATTING: &[&str] = &[
    "Also explain why you suggest exactly this plan.",
    "Use indents, lists and emoji for readability. Do not overload the text.",
    "Use text formatting that displays correctly in Telegram.",
];

const EMPTY_SEED: &str =
    "No notes were provided: invent suitable content from the parameters above.";

/// The prompt builder for non-profit social posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostPromptBuilder;

impl PostPromptBuilder {
    pub fn new() -> Self {
        Self
    }

    fn parameter_lines(context: &Context) -> Vec<String> {
        let formats = context.content_format().join(", ");
        let directives = format_directives(context.content_format()).join("; ");

        let mut lines = vec![
            format!("• Goal: {}", goal_statement(context.goal())),
            format!("• Target audience: {}", context.audience().join(", ")),
            format!(
                "• Platform: {} ({})",
                context.platform(),
                platform_constraints(context.platform())
            ),
            format!("• Format: {formats} ({directives})"),
            format!(
                "• Volume: {} ({})",
                context.volume(),
                volume_directive(context.volume())
            ),
            format!("• Style and tone: {}", audience_tone(context.audience())),
        ];

        if let Some(style) = context.narrative_style() {
            lines.push(format!("• Narrative style: {style}"));
        }
        lines
    }

    fn ngo_lines(ngo: &NgoProfile, usage: &str) -> Vec<String> {
        let mut lines = vec![
            "Organisation information:".to_string(),
            format!("• Name: {}", ngo.name),
        ];
        if let Some(description) = &ngo.description {
            lines.push(format!("• Description: {description}"));
        }
        if let Some(activities) = &ngo.activities {
            lines.push(format!("• Activities: {activities}"));
        }
        if let Some(contact) = &ngo.contact {
            lines.push(format!("• Contacts: {contact}"));
        }
        lines.push(usage.to_string());
        lines
    }

    /// `None` unless the context carries an event; an empty section is never
    /// emitted.
    fn event_section(context: &Context) -> Option<String> {
        if !context.has_event() {
            return None;
        }
        let summary = format_event_details(context.event_details());
        if summary.is_empty() {
            return None;
        }
        Some(format!("{EVENT_SECTION_MARKER}\n{summary}\n{EVENT_CHECKLIST}"))
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn format_event_details(details: &BTreeMap<String, String>) -> String {
    details
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}: {value}", capitalize(key)))
        .collect::<Vec<_>>()
        .join("; ")
}

impl PromptBuilder for PostPromptBuilder {
    fn build_prompt(&self, context: &Context, user_text: &str) -> String {
        let mut sections = vec![
            ROLE_FRAMING.to_string(),
            "Prepare a post with the following parameters:".to_string(),
        ];
        sections.extend(Self::parameter_lines(context));

        if let Some(ngo) = context.ngo() {
            sections.extend(Self::ngo_lines(
                ngo,
                "Be sure to use this information in the post.",
            ));
        }

        sections.extend(REQUIREMENTS.iter().map(ToString::to_string));

        if let Some(event) = Self::event_section(context) {
            sections.push(event);
        }

        let notes = context.free_text();
        let seed = if user_text.is_empty() { notes } else { user_text };
        if seed.is_empty() {
            sections.push(EMPTY_SEED.to_string());
        } else {
            sections.push("User notes:".to_string());
            sections.push(seed.to_string());
        }
        if !user_text.is_empty() && !notes.is_empty() && notes != user_text {
            sections.push("Additional notes:".to_string());
            sections.push(notes.to_string());
        }

        sections.extend(EXAMPLE_POSTS.iter().map(ToString::to_string));
        sections.push(CLOSING_INSTRUCTION.to_string());

        sections.join("\n")
    }
}

impl RevisionPromptBuilder for PostPromptBuilder {
    fn build_refactor_prompt(&self, context: &Context, post: &str, request: &str) -> String {
        let mut sections = vec![
            ROLE_FRAMING.to_string(),
            format!("Edit the post according to this request: {request}"),
            "General information about the post:".to_string(),
        ];
        sections.extend(Self::parameter_lines(context));

        if let Some(ngo) = context.ngo() {
            sections.extend(Self::ngo_lines(
                ngo,
                "Be sure to use this information when editing the post.",
            ));
        }

        if let Some(event) = Self::event_section(context) {
            sections.push(event);
        }

        sections.extend(REQUIREMENTS.iter().map(ToString::to_string));
        sections.push("Here is the post to edit:".to_string());
        sections.push(post.to_string());
        sections.push(REVISION_CLOSING_INSTRUCTION.to_string());

        sections.join("\n")
    }

    fn build_edit_prompt(&self, text: &str, details: &str) -> String {
        let mut sections = vec![
            "Task: edit the text for grammar, spelling, logic and style.".to_string(),
            "Try to keep the main topic of the original text.".to_string(),
            "Show the corrected version and list which mistakes were found and how they were fixed."
                .to_string(),
            format!("Original text: {text}"),
        ];

        let details = details.trim();
        if !details.is_empty() {
            sections.push(format!(
                "Additional details to consider while editing: {details}"
            ));
        }

        sections.join("\n")
    }
}

impl PlanPromptBuilder for PostPromptBuilder {
    fn build_content_plan_prompt(&self, plan: &PlanRequest) -> String {
        let mut sections = vec![
            "Task: draw up a content plan for a non-profit's social media channel. State the days and categories of posts.".to_string(),
            "Context:".to_string(),
            format!("• Period: {}", plan.period()),
            format!("• Posting frequency: {}", plan.frequency()),
            format!("• Themes: {}", plan.themes()),
        ];
        if let Some(details) = plan.details() {
            sections.push(format!("• Special requirements: {details}"));
        }
        sections.extend(PLAN_FORMATTING.iter().map(ToString::to_string));

        sections.join("\n")
    }
}
