//! Structured one-line JSON events for the browser console.

use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

/// `level` and `event` plus every key of `fields`. Non-object `fields` are
/// dropped.
pub fn event_line(level: LogLevel, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

pub fn dom_write_failure(operation: &str, name: &str, detail: &str) -> Value {
    serde_json::json!({
        "operation": operation,
        "name": name,
        "detail": detail,
    })
}
