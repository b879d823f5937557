#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Invalid variant pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
