use gloss_core::AnnotationQuery;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RequestError;

/// A validated annotation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotateRequest {
    pub source_lang: String,
    pub target_lang: String,
    #[serde(rename = "freqThreshold")]
    pub freq_threshold: u32,
    pub show_all: bool,
    pub text: String,
}

impl AnnotateRequest {
    /// Raw input line as read from the wire
    pub fn from_slice(line: &[u8]) -> Result<Self, RequestError> {
        Self::from_json(std::str::from_utf8(line)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Check every field once; nothing downstream sees an untyped payload
    pub fn from_value(value: &Value) -> Result<Self, RequestError> {
        let object = value.as_object().ok_or(RequestError::NotAnObject)?;

        Ok(Self {
            source_lang: language_code(object, "source_lang")?,
            target_lang: language_code(object, "target_lang")?,
            freq_threshold: threshold(object, "freqThreshold")?,
            show_all: field(object, "show_all")?
                .as_bool()
                .ok_or_else(|| invalid("show_all", "expected a boolean"))?,
            text: field(object, "text")?
                .as_str()
                .ok_or_else(|| invalid("text", "expected a string"))?
                .to_string(),
        })
    }
}

impl From<AnnotateRequest> for AnnotationQuery {
    fn from(request: AnnotateRequest) -> Self {
        AnnotationQuery {
            source_lang: request.source_lang,
            target_lang: request.target_lang,
            freq_threshold: request.freq_threshold,
            show_all: request.show_all,
            text: request.text,
        }
    }
}

fn field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, RequestError> {
    object.get(name).ok_or(RequestError::MissingField(name))
}

fn invalid(field: &'static str, reason: &str) -> RequestError {
    RequestError::InvalidField {
        field,
        reason: reason.to_string(),
    }
}

/// Two ASCII letters, lower-cased
fn language_code(object: &Map<String, Value>, name: &'static str) -> Result<String, RequestError> {
    let code = field(object, name)?
        .as_str()
        .ok_or_else(|| invalid(name, "expected a string"))?;

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(name, &format!("'{code}' is not a two-letter language code")));
    }
    Ok(code.to_ascii_lowercase())
}

/// A non-negative integer, or a string holding one (form values)
fn threshold(object: &Map<String, Value>, name: &'static str) -> Result<u32, RequestError> {
    let parsed = match field(object, name)? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(name, "expected a non-negative integer"))
}
