use crate::error::ValidationError;

/// Parameters of a content plan: how long it covers, how often to post and
/// what about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    period: String,
    frequency: String,
    themes: String,
    details: Option<String>,
}

impl PlanRequest {
    pub fn new(
        period: impl Into<String>,
        frequency: impl Into<String>,
        themes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let period = required(period.into(), "period")?;
        let frequency = required(frequency.into(), "frequency")?;
        let themes = required(themes.into(), "themes")?;
        Ok(Self {
            period,
            frequency,
            themes,
            details: None,
        })
    }

    /// Extra requirements; blank text is ignored.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        let details = details.trim();
        self.details = (!details.is_empty()).then(|| details.to_string());
        self
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn themes(&self) -> &str {
        &self.themes
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
