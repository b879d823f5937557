use std::sync::LazyLock;

use gloss_core::LanguageRules;
use regex::Regex;

// Morphemes of spelled-out numbers: "dreihundertzwanzig", "siebzehn", "sechzig"
static NUMBER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(ein|eins|zwei|drei|vier|fünf|sech|sechs|sieb|sieben|acht|neun|zehn|elf|zwölf|zwanzig|dreißig|zig|und|hundert|tausend)+$",
    )
    .expect("Invalid number word pattern")
});

const INFINITIVE_ENDINGS: &[&str] = &["en", "ern", "eln"];

/// German infinitives and noun compounding
pub struct GermanRules;

impl LanguageRules for GermanRules {
    fn is_infinitive(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        INFINITIVE_ENDINGS.iter().any(|ending| key.ends_with(ending))
    }

    fn capitalizes_compounds(&self) -> bool {
        true
    }

    fn is_compound_exception(&self, token: &str) -> bool {
        NUMBER_WORD.is_match(token)
    }
}
