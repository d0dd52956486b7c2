//! Loose mapping → [`ContextBuilder`].
//!
//! Accepted shapes:
//! - a string where a tag sequence is expected becomes a one-element sequence;
//! - blank strings and `null` items are dropped;
//! - the legacy key `format` is read when `content_format` is absent;
//! - `has_event` accepts booleans and the strings `true`/`yes`/`1`;
//! - scalar event-detail values are stringified, `null` values skipped;
//! - an `ngo` object or the flat `ngo_name`/`ngo_description`/... keys.

use super::{Context, ContextBuilder, NgoProfile};
use crate::error::ValidationError;
use serde_json::{Map, Value};

pub(super) fn parse(value: &Value) -> Result<ContextBuilder, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::InvalidType {
        field: "context",
        expected: "object",
    })?;

    let format_value = obj.get("content_format").or_else(|| obj.get("format"));

    let mut builder = Context::builder()
        .goal(string_field(obj, "goal")?)
        .audience(tag_list(obj.get("audience"), "audience")?)
        .platform(string_field(obj, "platform")?)
        .content_format(tag_list(format_value, "content_format")?)
        .volume(string_field(obj, "volume")?)
        .has_event(bool_field(obj.get("has_event"), "has_event")?)
        .event_details(string_map(obj.get("event_details"), "event_details")?)
        .free_text(string_field(obj, "free_text")?);

    let style = string_field(obj, "narrative_style")?;
    if !style.is_empty() {
        builder = builder.narrative_style(style);
    }

    if let Some(ngo) = ngo_profile(obj)? {
        builder = builder.ngo(ngo);
    }

    Ok(builder)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn string_field(obj: &Map<String, Value>, key: &'static str) -> Result<String, ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(value) => scalar_to_string(value).ok_or(ValidationError::InvalidType {
            field: key,
            expected: "string",
        }),
    }
}

fn tag_list(value: Option<&Value>, field: &'static str) -> Result<Vec<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| {
                scalar_to_string(item).ok_or(ValidationError::InvalidType {
                    field,
                    expected: "sequence of strings",
                })
            })
            .collect(),
        Some(_) => Err(ValidationError::InvalidType {
            field,
            expected: "sequence of strings",
        }),
    }
}

fn bool_field(value: Option<&Value>, field: &'static str) -> Result<bool, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => Ok(matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        )),
        Some(Value::Number(n)) => Ok(n.as_i64().is_some_and(|v| v != 0)),
        Some(_) => Err(ValidationError::InvalidType {
            field,
            expected: "boolean",
        }),
    }
}

fn string_map(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Vec<(String, String)>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(map)) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                scalar_to_string(v)
                    .map(|s| (k.clone(), s))
                    .ok_or(ValidationError::InvalidType {
                        field,
                        expected: "mapping of strings",
                    })
            })
            .collect(),
        Some(_) => Err(ValidationError::InvalidType {
            field,
            expected: "mapping of strings",
        }),
    }
}

fn ngo_profile(obj: &Map<String, Value>) -> Result<Option<NgoProfile>, ValidationError> {
    if let Some(Value::Object(ngo)) = obj.get("ngo") {
        let name = string_field(ngo, "name")?;
        return Ok(Some(
            NgoProfile::new(name)
                .with_description(string_field(ngo, "description")?)
                .with_activities(string_field(ngo, "activities")?)
                .with_contact(string_field(ngo, "contact")?),
        ));
    }

    let has_info = bool_field(obj.get("has_ngo_info"), "has_ngo_info")?;
    let name = string_field(obj, "ngo_name")?;
    if !has_info || name.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(
        NgoProfile::new(name)
            .with_description(string_field(obj, "ngo_description")?)
            .with_activities(string_field(obj, "ngo_activities")?)
            .with_contact(string_field(obj, "ngo_contact")?),
    ))
}
