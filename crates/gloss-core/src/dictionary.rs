use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::types::AnnotationCandidate;

static ANNOTATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]|\([^)]*\)|\{[^}]*\}|<[^>]*>").expect("Invalid annotation pattern")
});

// Object markers like "sb.", "etw.", "jdm."
static ABBREVIATION_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s0-9]+\.").expect("Invalid abbreviation pattern"));

/// A single headword sense as loaded from the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub source: String,
    pub target: String,
    pub word_type: String,
}

/// Glosses for one language pair, indexed by lookup key
#[derive(Debug, Default)]
pub struct DictionaryStore {
    source_lang: String,
    target_lang: String,
    entries: HashMap<String, Vec<DictionaryEntry>>,
    entry_count: usize,
}

impl DictionaryStore {
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        Self {
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            entries: HashMap::new(),
            entry_count: 0,
        }
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Index one sense. Returns false when the headword does not reduce to a
    /// single-token key.
    pub fn add_entry(&mut self, source: &str, target: &str, word_type: &str) -> bool {
        let Some(key) = lookup_key(source) else {
            return false;
        };

        self.entries.entry(key).or_default().push(DictionaryEntry {
            source: source.to_string(),
            target: target.to_string(),
            word_type: word_type.to_string(),
        });
        self.entry_count += 1;
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Consolidated view of everything recorded under `key`: one candidate per
    /// (word type, headword) pair, targets in insertion order.
    pub fn lookup(&self, key: &str) -> Vec<AnnotationCandidate> {
        let Some(meanings) = self.entries.get(key) else {
            return Vec::new();
        };

        let mut groups: Vec<(&str, &str, Vec<String>)> = Vec::new();
        for meaning in meanings {
            match groups.iter_mut().find(|(word_type, source, _)| {
                *word_type == meaning.word_type && *source == meaning.source
            }) {
                Some((_, _, targets)) => targets.push(meaning.target.clone()),
                None => groups.push((
                    meaning.word_type.as_str(),
                    meaning.source.as_str(),
                    vec![meaning.target.clone()],
                )),
            }
        }

        groups
            .into_iter()
            .map(|(word_type, source, targets)| AnnotationCandidate::new(key, source, word_type, targets))
            .collect()
    }
}

/// Derive the index key for a headword, or None if it is not a single token
pub fn lookup_key(source: &str) -> Option<String> {
    let stripped = ANNOTATIONS.replace_all(source, "");

    // only the leading object marker: "jdm. etw. geben" stays multi-word
    let stripped = if stripped.split_whitespace().nth(1).is_some() {
        ABBREVIATION_MARKERS.replace(&stripped, "").into_owned()
    } else {
        stripped.into_owned()
    };

    let mut words = stripped.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => Some(word.nfc().collect()),
        _ => None,
    }
}
