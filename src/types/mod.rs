//! Shared type definitions
//!
//! Record types persisted by the content stores, plus the trait that ties a
//! record type to its storage key, stored shape and migration.

pub mod artwork;
pub mod category;
pub mod project;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Record identifier: a creation timestamp in milliseconds
pub type RecordId = i64;

/// A record kept as a whole list under one storage key
pub trait Record: Clone + Serialize + 'static {
    /// Shape found in storage, possibly legacy
    type Stored: DeserializeOwned;
    /// A single-field change
    type Edit;

    /// Key the list is stored under
    const STORAGE_KEY: &'static str;
    /// Human-readable kind, for logs
    const KIND: &'static str;

    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);

    /// Normalize a stored record to the canonical shape
    fn migrate(stored: Self::Stored) -> Self;

    /// Whether the required fields are filled in
    fn is_complete(&self) -> bool;

    fn apply(&mut self, edit: Self::Edit);

    /// Built-in list used to seed an empty store
    fn defaults() -> Vec<Self>;
}

/// Split a textarea value into image URLs, one per non-blank line
pub fn parse_image_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_first_image(images: &[String]) -> bool {
    images.first().is_some_and(|url| !url.trim().is_empty())
}

fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Legacy records carry one `image` string; blank means none
fn images_from_legacy(image: Option<String>) -> Vec<String> {
    image.into_iter().filter(|url| non_blank(url)).collect()
}

/// Optional text; blank means missing
fn optional(value: String) -> Option<String> {
    if non_blank(&value) {
        Some(value)
    } else {
        None
    }
}

/// Text of a stored scalar; `null` is empty and other values keep their JSON text
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Stored text field that tolerates `null` and non-string values
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional stored text field that tolerates non-string values
fn lenient_optional<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// Stored `images`: an array of URLs, or a bare URL string
fn lenient_images<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let images = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(value_text).collect(),
        Value::String(url) if non_blank(&url) => vec![url],
        _ => Vec::new(),
    };
    Ok(images)
}

fn current_year() -> String {
    use chrono::Datelike;
    chrono::Local::now().year().to_string()
}
