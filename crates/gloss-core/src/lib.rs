pub mod dictionary;
pub mod engine;
pub mod error;
pub mod language;
pub mod preprocess;
pub mod ranking;
pub mod resolver;
pub mod session;
pub mod tokenizer;
pub mod types;

pub use dictionary::{DictionaryEntry, DictionaryStore};
pub use engine::GlossEngine;
pub use error::{EngineError, ProfileError};
pub use language::{
    DefaultRules, FrequencyLevel, LanguageProfile, LanguageRules, RARE, VariantPattern,
};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use ranking::RankingFilter;
pub use resolver::Resolver;
pub use session::ResolutionSession;
pub use tokenizer::Tokenizer;
pub use types::{AnnotationCandidate, AnnotationQuery, GlossRecord, Quality};

#[cfg(test)]
mod tests;
