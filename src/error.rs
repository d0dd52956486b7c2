use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `postcraft`.
///
/// Each pipeline stage defines its own error type and surfaces it unchanged.
/// Callers match on these to decide what to show the user; the binary edge
/// uses `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum PostcraftError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Context validation ──────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Generation backend ──────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Response processing ─────────────────────────────────────────────
    #[error("response: {0}")]
    Response(#[from] ResponseError),

    // ── Card rendering ──────────────────────────────────────────────────
    #[error("card: {0}")]
    Card(#[from] CardError),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Context validation errors ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),

    #[error("field `{0}` must contain at least one tag")]
    EmptyTags(&'static str),

    #[error("has_event is set but event_details is empty")]
    EventDetailsMissing,

    #[error("field `{field}` has an unsupported type: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("questionnaire: {0}")]
    Questionnaire(String),
}

// ─── Generation backend errors ──────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("backend {backend} request failed: {message}")]
    Transport { backend: String, message: String },

    #[error("backend {backend} returned HTTP {status}: {body}")]
    Status {
        backend: String,
        status: u16,
        body: String,
    },

    #[error("backend {backend} returned malformed JSON: {message}")]
    Decode { backend: String, message: String },

    #[error("backend {backend} timed out after {secs}s")]
    Timeout { backend: String, secs: u64 },

    #[error("backend {backend} API key is not set")]
    MissingApiKey { backend: String },
}

impl LlmError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// ─── Response processing errors ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("malformed response: {0}")]
    Malformed(String),
}

// ─── Card rendering errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CardError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("invalid card spec: {0}")]
    InvalidSpec(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("render timed out after {secs}s")]
    Timeout { secs: u64 },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, PostcraftError>;
