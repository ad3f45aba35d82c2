//! Record rendering for the two output formats.
//!
//! Text renders one `key=value` line per record; JSON renders one
//! pretty-printed object per record, newline-terminated so a streaming
//! reader can still pick records apart. Both carry the full timestamp in
//! [`TIMESTAMP_FORMAT`].

use std::fmt::{self, Write as _};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::level::Level;

/// Timestamp pattern shared by both formats: `YYYY-MM-DD HH:MM:SS.mmm`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Output encoding for a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    Text,
    Json,
}

impl FormatterKind {
    /// Resolve a formatter name.
    ///
    /// Unlike severity names there is no fallback: a name outside the table
    /// indicates a defect in the caller and fails construction.
    pub fn from_name(name: &str) -> Result<FormatterKind, BuildError> {
        match name {
            "text" => Ok(FormatterKind::Text),
            "json" => Ok(FormatterKind::Json),
            other => Err(BuildError::UnknownFormatter(other.to_string())),
        }
    }

    /// Lowercase name, matching the resolution table.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Text => "text",
            FormatterKind::Json => "json",
        }
    }

    pub(crate) fn render(&self, record: &Record<'_>) -> String {
        match self {
            FormatterKind::Text => render_text(record),
            FormatterKind::Json => render_json(record),
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location of the emit call site.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single record on its way to the sink.
pub(crate) struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub caller: Option<Caller>,
    pub message: &'a str,
    pub fields: &'a [(String, Value)],
}

fn render_text(record: &Record<'_>) -> String {
    let mut line = format!(
        "time=\"{}\" level={}",
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.level,
    );
    if let Some(caller) = record.caller {
        let _ = write!(line, " caller={caller}");
    }
    let _ = write!(line, " msg={:?}", record.message);
    for (key, value) in record.fields {
        let _ = write!(line, " {key}={}", text_value(value));
    }
    line.push('\n');
    line
}

// Strings are quoted when they would be ambiguous on a key=value line;
// everything else keeps its compact JSON form.
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() || s.contains([' ', '=', '"']) => format!("{s:?}"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_json(record: &Record<'_>) -> String {
    let mut object = Map::new();
    for (key, value) in record.fields {
        object.insert(key.clone(), value.clone());
    }
    if let Some(caller) = record.caller {
        object.insert("caller".into(), Value::String(caller.to_string()));
    }
    object.insert("level".into(), Value::String(record.level.to_string()));
    object.insert("msg".into(), Value::String(record.message.to_string()));
    object.insert(
        "time".into(),
        Value::String(record.timestamp.format(TIMESTAMP_FORMAT).to_string()),
    );
    // Serializing a Map<String, Value> cannot fail.
    let mut out = serde_json::to_string_pretty(&Value::Object(object)).unwrap_or_default();
    out.push('\n');
    out
}
