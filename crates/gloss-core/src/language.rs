use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ProfileError;

/// Rank of a word that is not in the frequency list
pub const RARE: u32 = u32::MAX;

/// Ranks up to here are kept exact
const EXACT_RANKS: u32 = 10_000;
/// Up to here ranks are rounded down to the thousand
const THOUSAND_BUCKETS: u32 = 30_000;
/// Up to here ranks are rounded down to the ten-thousand, beyond they are capped
const MAX_RANK: u32 = 100_000;

static GROUP_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)").expect("Invalid group reference pattern"));

/// Language-specific predicates the resolver needs but that cannot be
/// expressed as data
pub trait LanguageRules: Send + Sync {
    /// Could `key` be the dictionary form of a verb
    fn is_infinitive(&self, _key: &str) -> bool {
        true
    }

    /// Are compound pieces looked up capitalized (German nouns)
    fn capitalizes_compounds(&self) -> bool {
        false
    }

    /// Tokens whose compound pieces keep their case, e.g. spelled-out numbers
    fn is_compound_exception(&self, _token: &str) -> bool {
        false
    }
}

pub struct DefaultRules;
impl LanguageRules for DefaultRules {}

/// Coarse frequency band of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrequencyLevel {
    VeryCommon,
    Common,
    Uncommon,
    Rare,
    VeryRare,
}

impl FrequencyLevel {
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            0..=1_000 => FrequencyLevel::VeryCommon,
            1_001..=5_000 => FrequencyLevel::Common,
            5_001..=10_000 => FrequencyLevel::Uncommon,
            10_001..=30_000 => FrequencyLevel::Rare,
            _ => FrequencyLevel::VeryRare,
        }
    }
}

/// Rewrite rule from an inflected form to a hypothesized dictionary form
#[derive(Debug, Clone)]
pub struct VariantPattern {
    pub pattern: Regex,
    pub replacement: String,
    pub last_resort: bool,
}

impl VariantPattern {
    /// `replacement` may use `$1` style group references
    pub fn new(pattern: &str, replacement: &str, last_resort: bool) -> Result<Self, ProfileError> {
        let compiled = Regex::new(pattern).map_err(|source| ProfileError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // "$1en" would otherwise name a group called "1en"
        let replacement = GROUP_REFERENCE
            .replace_all(replacement, |caps: &Captures| format!("${{{}}}", &caps[1]))
            .into_owned();

        Ok(Self {
            pattern: compiled,
            replacement,
            last_resort,
        })
    }

    /// Rewrite `word`, None if the pattern does not apply
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.pattern.is_match(word) {
            return None;
        }
        let rewritten = self.pattern.replace(word, self.replacement.as_str());
        (rewritten != word).then(|| rewritten.into_owned())
    }
}

/// Read-only reference data for one source language
pub struct LanguageProfile {
    code: String,
    frequency: HashMap<String, u32>,
    frequency_count: u32,
    variant_patterns: Vec<VariantPattern>,
    // keyed by variant for reverse lookup
    explicit_variants: HashMap<String, Vec<String>>,
    separable_prefixes: HashSet<String>,
    rules: Box<dyn LanguageRules>,
}

impl LanguageProfile {
    pub fn new(code: &str) -> Self {
        Self::with_rules(code, Box::new(DefaultRules))
    }

    pub fn with_rules(code: &str, rules: Box<dyn LanguageRules>) -> Self {
        Self {
            code: code.to_string(),
            frequency: HashMap::new(),
            frequency_count: 0,
            variant_patterns: Vec::new(),
            explicit_variants: HashMap::new(),
            separable_prefixes: HashSet::new(),
            rules,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn rules(&self) -> &dyn LanguageRules {
        self.rules.as_ref()
    }

    /// Append the next word of a frequency-ordered list. Words already present
    /// keep their earlier rank.
    pub fn add_to_frequency_list(&mut self, word: &str) {
        if word.is_empty() || self.frequency.contains_key(word) {
            return;
        }
        self.frequency_count += 1;
        self.frequency
            .insert(word.to_string(), coarsen_rank(self.frequency_count));
    }

    /// Load `(word, occurrence count)` records. Records are expected in
    /// descending count order; they are re-sorted (stably) when they are not.
    pub fn add_frequency_records<I, S>(&mut self, records: I)
    where
        I: IntoIterator<Item = (S, Option<u64>)>,
        S: AsRef<str>,
    {
        let mut records: Vec<(S, Option<u64>)> = records.into_iter().collect();
        if records.iter().all(|(_, count)| count.is_some()) {
            records.sort_by(|a, b| b.1.cmp(&a.1));
        }
        for (word, _) in &records {
            self.add_to_frequency_list(word.as_ref());
        }
    }

    /// Exact-case rank, then lower-cased, else `RARE`
    pub fn frequency_rank(&self, word: &str) -> u32 {
        self.frequency
            .get(word)
            .or_else(|| self.frequency.get(&word.to_lowercase()))
            .copied()
            .unwrap_or(RARE)
    }

    pub fn is_in_frequency_list(&self, word: &str) -> bool {
        self.frequency_rank(word) <= self.frequency_count
    }

    pub fn frequency_level(&self, word: &str) -> FrequencyLevel {
        FrequencyLevel::from_rank(self.frequency_rank(word))
    }

    pub fn add_variant_pattern(
        &mut self,
        variant: &str,
        canonical: &str,
        last_resort: bool,
    ) -> Result<(), ProfileError> {
        self.variant_patterns
            .push(VariantPattern::new(variant, canonical, last_resort)?);
        Ok(())
    }

    pub fn variant_patterns(&self) -> &[VariantPattern] {
        &self.variant_patterns
    }

    /// Irregular form that no pattern covers, e.g. "rannte" for "rennen"
    pub fn add_explicit_variant(&mut self, canonical: &str, variant: &str) {
        let canonicals = self.explicit_variants.entry(variant.to_string()).or_default();
        if !canonicals.iter().any(|c| c == canonical) {
            canonicals.push(canonical.to_string());
        }
    }

    /// Candidate dictionary forms of `word` from one tier of rules, in
    /// declaration order without duplicates
    pub fn canonicals(&self, word: &str, last_resort: bool) -> Vec<String> {
        let mut canonicals: Vec<String> = if last_resort {
            Vec::new()
        } else {
            self.explicit_variants.get(word).cloned().unwrap_or_default()
        };

        for pattern in self.variant_patterns.iter().filter(|p| p.last_resort == last_resort) {
            if let Some(canonical) = pattern.apply(word) {
                if !canonicals.contains(&canonical) {
                    canonicals.push(canonical);
                }
            }
        }

        canonicals
    }

    pub fn add_separable_prefix(&mut self, prefix: &str) {
        self.separable_prefixes.insert(prefix.to_string());
    }

    pub fn is_separable_prefix(&self, word: &str) -> bool {
        self.separable_prefixes.contains(word)
    }

    pub fn separable_prefix_count(&self) -> usize {
        self.separable_prefixes.len()
    }
}

/// Rank for the `position`-th word of the list. Exact ranking past 10,000
/// carries no information, so those ranks are bucketed.
pub fn coarsen_rank(position: u32) -> u32 {
    match position {
        0..=EXACT_RANKS => position,
        p if p <= THOUSAND_BUCKETS => p / 1_000 * 1_000,
        p if p <= MAX_RANK => p / 10_000 * 10_000,
        _ => MAX_RANK,
    }
}
