//! `!value!` placeholder cleanup.
//!
//! The system prompt tells the model to wrap values it could not fill in with
//! exclamation marks (`!phone number!`). Models sometimes also wrap real data
//! they were given, which is unwrapped here. Single exclamation marks and
//! wrapped text with whitespace just inside the marks are never touched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static WRAPPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!([^!\s](?:[^!\n]*[^!\s])?)!").expect("Invalid placeholder regex")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,20}$").expect("Invalid phone regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s!]+$").expect("Invalid URL regex"));

/// Words that mark the content as a template slot, not data.
const TEMPLATE_KEYWORDS: &[&str] = &[
    "number", "phone", "address", "email", "e-mail", "contact", "website", "link",
];

fn is_template(content: &str) -> bool {
    let lower = content.to_lowercase();
    TEMPLATE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn is_real_data(content: &str) -> bool {
    PHONE.is_match(content) || EMAIL.is_match(content) || URL.is_match(content)
}

pub(super) fn unwrap_real_data(text: &str) -> String {
    WRAPPED
        .replace_all(text, |caps: &Captures<'_>| {
            let content = &caps[1];
            if !is_template(content) && is_real_data(content) {
                content.to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_phone_email_and_url() {
        assert_eq!(
            unwrap_real_data("Call !+7 (900) 123-45-67! or write !help@shelter.org!"),
            "Call +7 (900) 123-45-67 or write help@shelter.org"
        );
        assert_eq!(
            unwrap_real_data("Details: !https://shelter.org/join!"),
            "Details: https://shelter.org/join"
        );
    }

    #[test]
    fn template_slots_are_kept() {
        let text = "Call !phone number! or write !email address!";
        assert_eq!(unwrap_real_data(text), text);
    }

    #[test]
    fn ordinary_exclamations_are_kept() {
        let text = "Come help us! We need 20 volunteers! Thank you!";
        assert_eq!(unwrap_real_data(text), text);
    }

    #[test]
    fn exclamation_before_data_does_not_swallow_sentence() {
        assert_eq!(
            unwrap_real_data("Join us! Call !8 800 555-35-35! today!"),
            "Join us! Call 8 800 555-35-35 today!"
        );
    }

    #[test]
    fn wrapped_words_stay_wrapped() {
        let text = "This is !important! news";
        assert_eq!(unwrap_real_data(text), text);
    }
}
