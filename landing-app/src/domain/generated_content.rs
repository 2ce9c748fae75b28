use serde::{Deserialize, Serialize};

pub const META_DESCRIPTION_MAX_CHARS: usize = 160;
pub const TITLE_TAG_MAX_CHARS: usize = 60;
pub const ALT_TEXT_MAX_CHARS: usize = 125;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub rewritten_description: String,
    pub meta_description: String,
    pub title_tag: String,
    pub alt_text: String,
}

/// Cuts `text` to at most `max_chars` characters, never inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
