// Replay entity
// Head metadata of a finished match, cached verbatim

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayRecord {
    #[serde(rename = "_id")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<String>,
    #[serde(default)]
    pub unique_id: String,
    #[serde(default)]
    pub end_time: i64,
    pub payload: Value,
}

impl ReplayRecord {
    /// Builds a record from a successful head body. Returns `None` when the
    /// body carries no usable uuid.
    pub fn from_head(payload: Value, contest_hint: Option<&str>) -> Option<Self> {
        let uuid = payload
            .get("uuid")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())?
            .to_string();
        let unique_id = payload
            .pointer("/config/meta/contest_uid")
            .map(json_scalar_to_string)
            .unwrap_or_default();
        let end_time = payload
            .get("end_time")
            .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
            .unwrap_or_default();
        Some(Self {
            uuid,
            contest_id: contest_hint
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string),
            unique_id,
            end_time,
            payload,
        })
    }
}

fn json_scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}
