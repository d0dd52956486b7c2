//! Style lookup tables.
//!
//! Tags are matched against each entry's aliases word by word (see
//! [`crate::context::tags`]), so decorated questionnaire labels such as
//! `"Youth (14-25)"` still resolve. Entries are tried in table order.

use crate::context::tags::matches_any;

pub(crate) struct StyleEntry {
    pub aliases: &'static [&'static str],
    pub text: &'static str,
}

pub(crate) const DEFAULT_AUDIENCE_TONE: &str = "universal, friendly but professional";

/// Audience → tone. The first audience tag that matches any entry wins.
pub(crate) const AUDIENCE_TONES: &[StyleEntry] = &[
    StyleEntry {
        aliases: &["youth", "student", "14-25", "young"],
        text: "informal, energetic, an emoji at the start of paragraphs, modern slang",
    },
    StyleEntry {
        aliases: &["famil", "parent"],
        text: "warm, caring, no jargon, emphasis on family values",
    },
    StyleEntry {
        aliases: &["business", "organization", "organisation", "compan", "corporate"],
        text: "professional, emphasis on social responsibility and measurable results",
    },
    StyleEntry {
        aliases: &["senior", "45+", "elder", "older"],
        text: "respectful, clear, no complex terms, emphasis on tradition and care",
    },
    StyleEntry {
        aliases: &["adult", "25-45"],
        text: "friendly, concise, practical, respectful of the reader's time",
    },
];

pub(crate) const GENERIC_PLATFORM_CONSTRAINTS: &str = "universal social-media requirements";

pub(crate) const PLATFORM_CONSTRAINTS: &[StyleEntry] = &[
    StyleEntry {
        aliases: &["vk", "vkontakte"],
        text: "3–5 emoji in the text, 3–5 relevant hashtags at the end, short paragraphs (1–2 sentences)",
    },
    StyleEntry {
        aliases: &["telegram", "tg"],
        text: "use **bold** for headings, --- as separators, 1–2 key hashtags, minimal emoji",
    },
    StyleEntry {
        aliases: &["website", "site", "newsletter"],
        text: "formal style, complete sentences, no emoji",
    },
    StyleEntry {
        aliases: &["instagram", "insta"],
        text: "visual-first caption, up to 2200 characters, 5–10 hashtags at the end, emoji welcome",
    },
];

pub(crate) const GOALS: &[StyleEntry] = &[
    StyleEntry {
        aliases: &["volunteer"],
        text: "attract volunteers",
    },
    StyleEntry {
        aliases: &["sponsor", "donor"],
        text: "find sponsors and donors",
    },
    StyleEntry {
        aliases: &["event"],
        text: "tell people about an upcoming event",
    },
    StyleEntry {
        aliases: &["awareness"],
        text: "raise awareness of the problem",
    },
    StyleEntry {
        aliases: &["relationship", "supporter"],
        text: "strengthen relationships with supporters",
    },
];

pub(crate) const DEFAULT_FORMAT_DIRECTIVE: &str = "regular social-media post";

pub(crate) const FORMAT_DIRECTIVES: &[StyleEntry] = &[
    StyleEntry {
        aliases: &["inform"],
        text: "informational post with facts and a clear takeaway",
    },
    StyleEntry {
        aliases: &["entertain", "emotion"],
        text: "entertaining or emotional story that moves the reader",
    },
    StyleEntry {
        aliases: &["engage"],
        text: "engagement post that invites readers to respond",
    },
    StyleEntry {
        aliases: &["reminder"],
        text: "event reminder with date, place and how to join",
    },
];

pub(crate) const DEFAULT_VOLUME_DIRECTIVE: &str = "length at your discretion";

pub(crate) const VOLUME_DIRECTIVES: &[StyleEntry] = &[
    StyleEntry {
        aliases: &["short"],
        text: "1–3 sentences",
    },
    StyleEntry {
        aliases: &["medium"],
        text: "3–5 sentences",
    },
    StyleEntry {
        aliases: &["long", "detailed"],
        text: "5 or more sentences",
    },
];

pub(crate) fn lookup(table: &'static [StyleEntry], tag: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| matches_any(entry.aliases, tag))
        .map(|entry| entry.text)
}

/// First audience tag with a known tone wins; no match falls back to the
/// universal tone.
pub(crate) fn audience_tone(audience: &[String]) -> &'static str {
    audience
        .iter()
        .find_map(|tag| lookup(AUDIENCE_TONES, tag))
        .unwrap_or(DEFAULT_AUDIENCE_TONE)
}

pub(crate) fn platform_constraints(platform: &str) -> &'static str {
    lookup(PLATFORM_CONSTRAINTS, platform).unwrap_or(GENERIC_PLATFORM_CONSTRAINTS)
}

pub(crate) fn goal_statement(goal: &str) -> String {
    lookup(GOALS, goal).map_or_else(|| goal.replace('_', " "), str::to_string)
}

/// Directives for every format tag, deduplicated, in tag order.
pub(crate) fn format_directives(formats: &[String]) -> Vec<&'static str> {
    let mut directives: Vec<&'static str> = Vec::new();
    for tag in formats {
        let directive = lookup(FORMAT_DIRECTIVES, tag).unwrap_or(DEFAULT_FORMAT_DIRECTIVE);
        if !directives.contains(&directive) {
            directives.push(directive);
        }
    }
    directives
}

pub(crate) fn volume_directive(volume: &str) -> &'static str {
    lookup(VOLUME_DIRECTIVES, volume).unwrap_or(DEFAULT_VOLUME_DIRECTIVE)
}
