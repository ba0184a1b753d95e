// src/data.rs
//
// Input payload: { "date": "YYYY-MM-DD", "picks": [{ "title", "url", "tag" }] }
//
// Decoding is lenient on shape and strict on syntax. Anything that parses as
// JSON yields a request; only a syntax error is reported.
// - empty input               -> {}
// - non-object top level      -> {}
// - picks not an array        -> no picks
// - non-object pick           -> pick with no fields
// - "", 0, false, null fields -> absent; other numbers/true -> their text

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Pick {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tag: Option<String>,
}

impl Pick {
    pub fn new(title: &str, url: &str) -> Self {
        Self { title: Some(s!(title)), url: Some(s!(url)), tag: None }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(s!(tag));
        self
    }
}

/// A fully defaulted request: `date` is always set, `picks` may be empty
/// and is not truncated here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateRequest {
    pub date: String,
    pub picks: Vec<Pick>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient_picks")]
    picks: Vec<Pick>,
}

impl UpdateRequest {
    pub fn new(date: &str, picks: Vec<Pick>) -> Self {
        Self { date: s!(date), picks }
    }

    /// Decode a payload, defaulting the date to today (UTC).
    pub fn from_json(raw: &str) -> Result<Self> {
        Self::from_json_on(raw, Utc::now().date_naive())
    }

    /// Decode a payload with an explicit "today" for the date default.
    pub fn from_json_on(raw: &str, today: NaiveDate) -> Result<Self> {
        let raw = raw.trim();
        let value: Value = if raw.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(raw)?
        };

        let parsed = match value {
            Value::Object(_) => RawRequest::deserialize(value)?,
            other => {
                debug!(kind = json_kind(&other), "payload is not an object; using defaults");
                RawRequest::default()
            }
        };

        let date = match parsed.date {
            Some(d) => {
                if NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_err() {
                    warn!(date = %d, "date is not YYYY-MM-DD; rendering it as given");
                }
                d
            }
            None => today.format("%Y-%m-%d").to_string(),
        };

        Ok(Self { date, picks: parsed.picks })
    }
}

fn lenient_text<'de, D>(d: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(match v {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(s!("true")),
        _ => None,
    })
}

fn lenient_picks<'de, D>(d: D) -> std::result::Result<Vec<Pick>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(d)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!(kind = json_kind(&other), "picks is not an array; treating as empty");
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => Pick::deserialize(item).unwrap_or_default(),
            _ => Pick::default(),
        })
        .collect())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
