//! The active-session record: the single on-disk document whose existence
//! means a session is running.

use serde::{Deserialize, Serialize};

use crate::utils::time;
use chrono::NaiveDateTime;

/// Contents of `current_session.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// OS account that started the session.
    pub name: String,
    /// Local wall-clock start, `YYYY-MM-DDTHH:MM:SS`.
    pub start_time: String,
    /// Sanitized single-line task description.
    pub description: String,
}

impl SessionRecord {
    pub fn new(name: String, start: NaiveDateTime, description: String) -> Self {
        SessionRecord {
            name,
            start_time: time::format_iso(start),
            description,
        }
    }

    /// Parsed start instant. The record stores the raw string so that a
    /// hand-edited file still loads; callers needing arithmetic go through
    /// here.
    pub fn start(&self) -> crate::errors::AppResult<NaiveDateTime> {
        time::parse_iso(&self.start_time)
    }

    /// Permissive fallback parser: scan each line for the literal field
    /// names and take the value between the quotes following the colon.
    /// Tolerates whitespace, reordering and unknown lines; a record missing
    /// `start_time` or `description` is rejected.
    pub fn from_loose_text(text: &str) -> Option<SessionRecord> {
        let mut name = None;
        let mut start_time = None;
        let mut description = None;

        for line in text.lines() {
            if let Some(v) = loose_value(line, "name") {
                name = Some(v);
            }
            if let Some(v) = loose_value(line, "start_time") {
                start_time = Some(v);
            }
            if let Some(v) = loose_value(line, "description") {
                description = Some(v);
            }
        }

        Some(SessionRecord {
            name: name.unwrap_or_else(|| "unknown".to_string()),
            start_time: start_time?,
            description: description?,
        })
    }
}

/// Extract `"<value>"` from a line shaped like `"key": "<value>"`, with any
/// amount of surrounding noise.
fn loose_value(line: &str, key: &str) -> Option<String> {
    let marker = format!("\"{}\"", key);
    let key_pos = line.find(&marker)?;
    let after_key = &line[key_pos + marker.len()..];
    let colon = after_key.find(':')?;
    let after_colon = &after_key[colon + 1..];
    let open = after_colon.find('"')?;
    let rest = &after_colon[open + 1..];
    let close = rest.find('"')?;
    Some(rest[..close].to_string())
}
