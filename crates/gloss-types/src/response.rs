use gloss_core::GlossRecord;
use serde::{Deserialize, Serialize};

/// One gloss as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossResult {
    pub key: String,
    pub source: String,
    #[serde(rename = "wordType")]
    pub word_type: String,
    pub target: String,
    pub freq: String,
}

impl From<GlossRecord> for GlossResult {
    fn from(record: GlossRecord) -> Self {
        Self {
            key: record.key,
            source: record.source,
            word_type: record.word_type,
            target: record.target,
            freq: record.freq,
        }
    }
}

/// `{"results": [...]}` or `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotateResponse {
    Results { results: Vec<GlossResult> },
    Error { error: String },
}

impl AnnotateResponse {
    pub fn results(records: Vec<GlossRecord>) -> Self {
        AnnotateResponse::Results {
            results: records.into_iter().map(GlossResult::from).collect(),
        }
    }

    pub fn error(message: impl ToString) -> Self {
        AnnotateResponse::Error {
            error: message.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnnotateResponse::Error { .. })
    }
}
