use super::placeholders::unwrap_real_data;
use super::{ResponseProcessor, SCAFFOLDING_MARKERS};
use crate::error::ResponseError;
use crate::llm::RawReply;
use crate::prompt::{CLOSING_INSTRUCTION, REVISION_CLOSING_INSTRUCTION};
use serde_json::Value;

const TEXT_POINTER: &str = "/result/alternatives/0/message/text";

/// Cleans replies shaped like the YandexGPT completion response.
#[derive(Debug, Clone, Copy, Default)]
pub struct YandexResponseProcessor;

impl YandexResponseProcessor {
    pub fn new() -> Self {
        Self
    }

    fn extract(reply: &RawReply) -> Result<&str, ResponseError> {
        reply
            .as_value()
            .pointer(TEXT_POINTER)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ResponseError::Malformed("missing result.alternatives[0].message.text".into())
            })
    }

    /// `None` when the line should be dropped entirely.
    fn strip_scaffolding(line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed == CLOSING_INSTRUCTION || trimmed == REVISION_CLOSING_INSTRUCTION {
            return None;
        }

        let mut cleaned = line.to_string();
        let mut had_marker = false;
        for marker in SCAFFOLDING_MARKERS {
            if cleaned.contains(marker) {
                cleaned = cleaned.replace(marker, "");
                had_marker = true;
            }
        }

        if had_marker && cleaned.trim().is_empty() {
            None
        } else if had_marker {
            Some(cleaned.trim_start().to_string())
        } else {
            Some(cleaned)
        }
    }

    /// Trailing whitespace trimmed per line, blank runs collapsed to one,
    /// surrounding blank lines removed.
    fn normalize_whitespace(lines: impl Iterator<Item = String>) -> String {
        let mut out: Vec<String> = Vec::new();
        for line in lines {
            let line = line.trim_end().to_string();
            if line.is_empty() && out.last().is_none_or(String::is_empty) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(String::is_empty) {
            out.pop();
        }
        out.join("\n").trim().to_string()
    }
}

impl ResponseProcessor for YandexResponseProcessor {
    fn process(&self, reply: &RawReply) -> Result<String, ResponseError> {
        let raw = Self::extract(reply)?;
        let unwrapped = unwrap_real_data(raw);
        let text = Self::normalize_whitespace(
            unwrapped.lines().filter_map(Self::strip_scaffolding),
        );

        tracing::debug!(
            raw_chars = raw.chars().count(),
            text_chars = text.chars().count(),
            "processed backend reply"
        );
        Ok(text)
    }
}
