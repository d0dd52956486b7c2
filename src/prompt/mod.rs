mod builder;
mod tables;

pub use builder::{PlanPromptBuilder, PostPromptBuilder, PromptBuilder, RevisionPromptBuilder};

/// Last line of every generation prompt. The response processor strips it if
/// the model echoes it back.
pub const CLOSING_INSTRUCTION: &str =
    "Reply with the finished post text only, without any comments or explanations.";

/// Last line of refactor prompts.
pub const REVISION_CLOSING_INSTRUCTION: &str =
    "Reply with the finished text of the edited post only, without any comments or explanations.";

/// Heading line of the optional event sub-section.
pub const EVENT_SECTION_MARKER: &str = "Event context:";

/// Default system instruction sent with every prompt.
pub const SYSTEM_PROMPT: &str = "\
You are a professional SMM manager for non-profit organisations who creates quality social media content. \
Never use profanity and never discuss politics, even if the user asks for it. \
IMPORTANT: use exclamation marks around a value (for example !phone number!, !email address!) ONLY as a \
placeholder when the concrete data was NOT provided. If the context already contains real data (phone, \
email, address and so on), use it as is, WITHOUT exclamation marks around it. \
NEVER use single asterisks '*' or underscores '_'. You may add emoji such as ✅. \
Additional requirements: \
• Do not mention restricted facilities, security, military bases or movement restrictions. \
• Focus on the social mission and on helping people.";
