use std::collections::HashMap;

use crate::dictionary::DictionaryStore;
use crate::error::EngineError;
use crate::language::LanguageProfile;
use crate::ranking::RankingFilter;
use crate::resolver::Resolver;
use crate::session::ResolutionSession;
use crate::tokenizer::Tokenizer;
use crate::types::{AnnotationCandidate, AnnotationQuery, GlossRecord};

/// Reference data for every loaded language and language pair. Read-only once
/// built; each request gets its own session, so one engine can serve
/// concurrent requests.
#[derive(Default)]
pub struct GlossEngine {
    languages: HashMap<String, LanguageProfile>,
    dictionaries: HashMap<(String, String), DictionaryStore>,
}

impl GlossEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_language(&mut self, profile: LanguageProfile) {
        self.languages.insert(profile.code().to_string(), profile);
    }

    pub fn add_dictionary(&mut self, dictionary: DictionaryStore) {
        let pair = (
            dictionary.source_lang().to_string(),
            dictionary.target_lang().to_string(),
        );
        self.dictionaries.insert(pair, dictionary);
    }

    pub fn language(&self, code: &str) -> Option<&LanguageProfile> {
        self.languages.get(code)
    }

    pub fn dictionary(&self, source_lang: &str, target_lang: &str) -> Option<&DictionaryStore> {
        self.dictionaries
            .get(&(source_lang.to_string(), target_lang.to_string()))
    }

    /// Loaded (source, target) pairs, sorted
    pub fn supported_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self.dictionaries.keys().cloned().collect();
        pairs.sort();
        pairs
    }

    /// Tokenize and resolve without ranking. Known words are included with
    /// `suppressed` set.
    pub fn candidates(&self, query: &AnnotationQuery) -> Result<Vec<AnnotationCandidate>, EngineError> {
        let (profile, dictionary) = self.reference_data(&query.source_lang, &query.target_lang)?;

        let mut session = ResolutionSession::new(query.freq_threshold, query.show_all);
        let tokenizer = Tokenizer::new(profile, dictionary);
        let resolver = Resolver::new(dictionary, profile);

        let mut candidates = Vec::new();
        let mut token_count = 0;
        for sentence in tokenizer.tokenize(&query.text) {
            token_count += sentence.len();
            for index in 0..sentence.len() {
                candidates.extend(resolver.resolve(&mut session, &sentence, index));
            }
        }

        tracing::debug!(
            "Resolved {} tokens into {} candidates",
            token_count,
            candidates.len()
        );
        Ok(candidates)
    }

    /// Glosses for the words of `query.text` the learner does not know yet
    pub fn annotate(&self, query: &AnnotationQuery) -> Result<Vec<GlossRecord>, EngineError> {
        let mut candidates = self.candidates(query)?;
        candidates.retain(|c| !c.suppressed);

        let ranked = RankingFilter::new(query.show_all).apply(candidates);
        Ok(ranked.iter().map(GlossRecord::from).collect())
    }

    fn reference_data(
        &self,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<(&LanguageProfile, &DictionaryStore), EngineError> {
        let profile = self
            .language(source_lang)
            .ok_or_else(|| EngineError::UnknownLanguage(source_lang.to_string()))?;

        let dictionary = self.dictionary(source_lang, target_lang).ok_or_else(|| {
            EngineError::UnsupportedLanguagePair {
                from: source_lang.to_string(),
                to: target_lang.to_string(),
            }
        })?;

        Ok((profile, dictionary))
    }
}
