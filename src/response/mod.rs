//! Reply → final post text.

mod placeholders;
mod yandex;

pub use yandex::YandexResponseProcessor;

use crate::error::ResponseError;
use crate::llm::RawReply;

pub trait ResponseProcessor: Send + Sync {
    fn process(&self, reply: &RawReply) -> Result<String, ResponseError>;
}

/// Literal scaffolding the model tends to echo back. Removed wherever they
/// appear; a line left blank by the removal is dropped.
///
/// Text without any of these markers comes back unchanged except for
/// whitespace normalisation and one more rewrite: real contact data wrapped
/// in exclamation marks (`!help@shelter.org!`) is unwrapped.
pub const SCAFFOLDING_MARKERS: &[&str] = &[
    "### ANSWER ###",
    "### RESPONSE FORMAT ###",
    "Only the finished post text:",
    "Finished post text:",
    "Post text:",
    "Without additional comments:",
];
