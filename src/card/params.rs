//! Platform and goal → visual card parameters.
//!
//! Tags are matched word by word, the same way the prompt style tables match
//! them.

use crate::context::tags::matches_any;

pub const DEFAULT_TEMPLATE: &str = "default";
pub const DEFAULT_DIMENSIONS: (u32, u32) = (1200, 630);
pub const DEFAULT_COLOR: &str = "#667EEA";
pub const DEFAULT_TITLE: &str = "News from our organisation";
pub const DEFAULT_ORGANIZATION: &str = "Your NGO";

pub const STORY_DIMENSIONS: (u32, u32) = (1080, 1920);
pub const SQUARE_DIMENSIONS: (u32, u32) = (1080, 1080);
pub const OG_DIMENSIONS: (u32, u32) = (1200, 630);

/// Card layout within a platform. `post` is the platform's feed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardType {
    #[default]
    Post,
    Story,
    Square,
    Og,
}

struct PlatformEntry {
    aliases: &'static [&'static str],
    template: &'static str,
    dimensions: (u32, u32),
    has_stories: bool,
}

const PLATFORMS: &[PlatformEntry] = &[
    PlatformEntry {
        aliases: &["vk", "vkontakte"],
        template: "vk",
        dimensions: (1080, 1080),
        has_stories: true,
    },
    PlatformEntry {
        aliases: &["telegram", "tg"],
        template: "telegram",
        dimensions: (1280, 720),
        has_stories: true,
    },
    PlatformEntry {
        aliases: &["website", "site", "newsletter"],
        template: "website",
        dimensions: (1200, 630),
        has_stories: false,
    },
    PlatformEntry {
        aliases: &["instagram", "insta"],
        template: DEFAULT_TEMPLATE,
        dimensions: (1080, 1350),
        has_stories: true,
    },
];

struct GoalEntry {
    aliases: &'static [&'static str],
    color: &'static str,
    title: &'static str,
}

const GOALS: &[GoalEntry] = &[
    GoalEntry {
        aliases: &["volunteer"],
        color: "#4CAF50",
        title: "Join our volunteers",
    },
    GoalEntry {
        aliases: &["sponsor", "donor"],
        color: "#FF9800",
        title: "Support our mission",
    },
    GoalEntry {
        aliases: &["event"],
        color: "#667EEA",
        title: "Join our event",
    },
    GoalEntry {
        aliases: &["awareness"],
        color: "#E91E63",
        title: "Did you know?",
    },
    GoalEntry {
        aliases: &["relationship", "supporter"],
        color: "#009688",
        title: "Thank you for being with us",
    },
];

fn platform_entry(platform: &str) -> Option<&'static PlatformEntry> {
    PLATFORMS.iter().find(|entry| matches_any(entry.aliases, platform))
}

fn goal_entry(goal: &str) -> Option<&'static GoalEntry> {
    GOALS.iter().find(|entry| matches_any(entry.aliases, goal))
}

pub fn template_for_platform(platform: &str) -> &'static str {
    platform_entry(platform).map_or(DEFAULT_TEMPLATE, |entry| entry.template)
}

/// `(width, height)` in CSS pixels.
pub fn dimensions_for_platform(platform: &str) -> (u32, u32) {
    platform_entry(platform).map_or(DEFAULT_DIMENSIONS, |entry| entry.dimensions)
}

/// Size of a `card_type` card on `platform`. A story on a platform without
/// stories falls back to the feed size.
pub fn dimensions_for(platform: &str, card_type: CardType) -> (u32, u32) {
    match card_type {
        CardType::Post => dimensions_for_platform(platform),
        CardType::Story => match platform_entry(platform) {
            Some(entry) if entry.has_stories => STORY_DIMENSIONS,
            _ => dimensions_for_platform(platform),
        },
        CardType::Square => SQUARE_DIMENSIONS,
        CardType::Og => OG_DIMENSIONS,
    }
}

pub fn color_for_goal(goal: &str) -> &'static str {
    goal_entry(goal).map_or(DEFAULT_COLOR, |entry| entry.color)
}

pub fn title_for_goal(goal: &str) -> &'static str {
    goal_entry(goal).map_or(DEFAULT_TITLE, |entry| entry.title)
}
