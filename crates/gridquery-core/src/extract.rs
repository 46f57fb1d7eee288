//! Tolerant JSON extraction from model completions
//!
//! Text-generation APIs wrap structured output in markdown fencing or
//! explanatory prose regardless of instruction. The extractor tries the most
//! reliable delimiters first and degrades to span recovery, so callers get a
//! parsed value or a typed failure, never a panic.

use crate::error::{Error, Result};
use serde_json::Value;

/// Extract a JSON object or array from raw completion text
///
/// Candidate sources, in priority order; the first that parses wins:
/// 1. the interior of the first ```` ```json ```` fenced block,
/// 2. the interior of the first plain ```` ``` ```` fenced block,
/// 3. the entire text,
/// 4. the span from the first `{` to the last `}`,
/// 5. the span from the first `[` to the last `]`.
///
/// Scalars are not accepted: the payload contract is always an object or an
/// array. On failure the error carries the complete original text, not
/// whichever candidate happened to be tried last.
pub fn extract_json(raw: &str) -> Result<Value> {
    let candidates = [
        fenced_block(raw, "```json"),
        fenced_block(raw, "```"),
        Some(raw),
        delimited_span(raw, '{', '}'),
        delimited_span(raw, '[', ']'),
    ];

    for candidate in candidates.into_iter().flatten() {
        if let Ok(value) = serde_json::from_str::<Value>(candidate.trim()) {
            if value.is_object() || value.is_array() {
                return Ok(value);
            }
        }
    }

    Err(Error::MalformedPayload {
        raw: raw.to_string(),
    })
}

/// The text strictly between an opening fence marker and the next closing
/// ``` marker, or `None` when either delimiter is missing.
fn fenced_block<'a>(raw: &'a str, open: &str) -> Option<&'a str> {
    let start = raw.find(open)? + open.len();
    let rest = &raw[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}

/// The span from the first `open` to the last `close`, inclusive.
fn delimited_span(raw: &str, open: char, close: char) -> Option<&str> {
    let i = raw.find(open)?;
    let j = raw.rfind(close)?;
    if j <= i {
        return None;
    }
    Some(&raw[i..=j])
}
