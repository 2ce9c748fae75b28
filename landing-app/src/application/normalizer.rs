use regex_lite::Regex;
use std::sync::LazyLock;

/// JSON field the prompt contract asks the model to answer in.
pub const RAW_FIELD: &str = "raw";

const QUOTE_CHARS: &[char] = &['"', '\''];
const EMPHASIS_CHARS: &[char] = &['*', '_', '`'];
const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

// Leaked protocol commentary starts at any of these, checked in order.
const LEAK_MARKERS: &[&str] = &["(Dharma", "Dharma", "Protocol", "Verified", "**", "::"];

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.])").expect("static pattern"));
static REPEATED_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",{2,}").expect("static pattern"));
static REPEATED_PERIODS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("static pattern"));

/// Turns raw model output into a single clean line of plain text.
///
/// A JSON object carrying a `raw` string field is unwrapped first; anything
/// else is cleaned as-is. An input that cleans down to nothing comes back as
/// an empty string rather than a lone `.`.
pub fn normalize(raw_text: &str) -> String {
    let working = extract_raw_field(raw_text).unwrap_or_else(|| raw_text.to_string());
    clean_text(&working)
}

fn extract_raw_field(raw_text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw_text.trim()).ok()?;
    value
        .get(RAW_FIELD)
        .and_then(|field| field.as_str())
        .map(|text| text.trim().to_string())
}

fn clean_text(text: &str) -> String {
    let mut text = text
        .trim()
        .trim_matches(QUOTE_CHARS)
        .replace(EMPHASIS_CHARS, "");

    for marker in LEAK_MARKERS {
        if let Some(idx) = text.find(marker) {
            text.truncate(idx);
        }
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = SPACE_BEFORE_PUNCTUATION.replace_all(&text, "$1");
    let text = REPEATED_COMMAS.replace_all(&text, ",");
    let mut text = REPEATED_PERIODS.replace_all(&text, ".").trim().to_string();

    if text.is_empty() {
        return text;
    }

    if !text.ends_with(TERMINAL_PUNCTUATION) {
        text.push('.');
    }

    if text.matches('.').count() > 1 {
        if let Some(last_period) = text.rfind('.') {
            text.truncate(last_period + 1);
        }
    }

    capitalize_first(&text)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
