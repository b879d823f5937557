mod resolver_tests;

use crate::dictionary::DictionaryStore;
use crate::language::{LanguageProfile, LanguageRules};

/// German-like rules without pulling in the language crate
pub(crate) struct TestRules;

impl LanguageRules for TestRules {
    fn is_infinitive(&self, key: &str) -> bool {
        key.ends_with("en")
    }

    fn capitalizes_compounds(&self) -> bool {
        true
    }

    fn is_compound_exception(&self, token: &str) -> bool {
        token.to_lowercase().ends_with("hundert")
    }
}

pub(crate) fn profile(frequent: &[&str]) -> LanguageProfile {
    let mut profile = LanguageProfile::with_rules("de", Box::new(TestRules));
    profile.add_frequency_records(frequent.iter().map(|word| (*word, None)));
    profile
}

pub(crate) fn dictionary(entries: &[(&str, &str, &str)]) -> DictionaryStore {
    let mut dictionary = DictionaryStore::new("de", "en");
    for (source, target, word_type) in entries {
        assert!(dictionary.add_entry(source, target, word_type), "rejected {source}");
    }
    dictionary
}

pub(crate) fn sentence(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
