use tracing::debug;

use crate::dictionary::DictionaryStore;
use crate::language::{FrequencyLevel, LanguageProfile};
use crate::preprocess::{capitalize, contains_alpha};
use crate::session::ResolutionSession;
use crate::types::AnnotationCandidate;

/// Shortest preceding token tried as the stem of a separated verb
const MIN_SEPARABLE_STEM_LEN: usize = 3;
/// Shortest piece a compound is split into
const MIN_COMPOUND_PIECE_LEN: usize = 2;
/// Compound pieces this short must not be very rare
const MAX_NOISE_KEY_LEN: usize = 3;

/// Outcome of probing one or more keys. `matched` is set when a key exists in
/// the dictionary even if it was already resolved earlier in the request and
/// so contributes no candidates.
#[derive(Debug, Default)]
struct Found {
    matched: bool,
    candidates: Vec<AnnotationCandidate>,
}

impl Found {
    fn seen() -> Self {
        Self {
            matched: true,
            candidates: Vec::new(),
        }
    }

    fn absorb(&mut self, other: Found) {
        self.matched |= other.matched;
        self.candidates.extend(other.candidates);
    }
}

/// Multi-stage search for the meanings of a token
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    dictionary: &'a DictionaryStore,
    profile: &'a LanguageProfile,
}

impl<'a> Resolver<'a> {
    pub fn new(dictionary: &'a DictionaryStore, profile: &'a LanguageProfile) -> Self {
        Self {
            dictionary,
            profile,
        }
    }

    /// Candidates for the token at `index` of `sentence`. Known words come back
    /// with `suppressed` set; a token already handled in this session yields
    /// nothing.
    pub fn resolve(
        &self,
        session: &mut ResolutionSession,
        sentence: &[String],
        index: usize,
    ) -> Vec<AnnotationCandidate> {
        let Some(token) = sentence.get(index) else {
            return Vec::new();
        };
        if session.is_searched(token) {
            return Vec::new();
        }

        let direct = self.lookup_with_fallbacks(session, token);
        let mut matched = direct.matched;
        let mut results = self.gate(session, direct.candidates);

        if self.profile.is_separable_prefix(token) {
            let recombined = self.recombine_separable(session, token, &sentence[..index]);
            matched |= recombined.matched;
            results.extend(self.gate(session, recombined.candidates));
        }

        let rank = self.profile.frequency_rank(token);
        if !matched && !session.is_known_rank(rank) {
            let pieces = self.decompose_compound(session, token);
            matched = pieces.matched;
            results.extend(pieces.candidates);
        }

        if !matched && session.show_all {
            let placeholder = AnnotationCandidate::unresolved(token, rank);
            results.extend(self.gate(session, vec![placeholder]));
        }

        debug!("Token '{}': {} candidates", token, results.len());
        results
    }

    /// Direct and canonical lookup, then case variants, then hyphen trimming
    fn lookup_with_fallbacks(&self, session: &mut ResolutionSession, token: &str) -> Found {
        let any = |_: &str| true;

        let mut found = self.lookup_word_and_canonicals(session, token, &any);
        session.mark_searched(token);
        if self.is_known(session, &found.candidates) {
            return found;
        }

        // sentence-initial capitalization
        let lower = token.to_lowercase();
        if lower != token {
            found.absorb(self.lookup_word_and_canonicals(session, &lower, &any));
            if self.is_known(session, &found.candidates) {
                return found;
            }
        }

        if !found.matched {
            let capitalized = capitalize(token);
            if capitalized != token {
                found.absorb(self.lookup_word_and_canonicals(session, &capitalized, &any));
            }
        }

        // fragments of words hyphenated at a line break
        if !found.matched && (token.starts_with('-') || token.ends_with('-')) {
            let trimmed = token.trim_matches('-');
            if session.is_searched(trimmed) {
                found.absorb(Found::seen());
            } else if contains_alpha(trimmed) {
                found.absorb(self.lookup_with_fallbacks(session, trimmed));
            }
        }

        found
    }

    /// Look up `word` and its canonical forms. The last-resort tier is only
    /// consulted when nothing matched so far. Keys rejected by `accept` are not
    /// looked up.
    fn lookup_word_and_canonicals(
        &self,
        session: &mut ResolutionSession,
        word: &str,
        accept: &dyn Fn(&str) -> bool,
    ) -> Found {
        let mut found = Found::default();
        if accept(word) {
            found.absorb(self.lookup_key(session, word));
        }

        for last_resort in [false, true] {
            if last_resort && found.matched {
                break;
            }
            for canonical in self.profile.canonicals(word, last_resort) {
                if accept(&canonical) {
                    found.absorb(self.lookup_key(session, &canonical));
                }
            }
        }

        found
    }

    fn lookup_key(&self, session: &mut ResolutionSession, key: &str) -> Found {
        if !self.dictionary.contains(key) {
            return Found::default();
        }
        if !session.mark_searched(key) {
            return Found::seen();
        }

        let frequency = self.profile.frequency_rank(key);
        let candidates = self
            .dictionary
            .lookup(key)
            .into_iter()
            .map(|mut candidate| {
                candidate.frequency = frequency;
                candidate
            })
            .collect();

        Found {
            matched: true,
            candidates,
        }
    }

    /// Join a separable prefix with a preceding token of the same sentence,
    /// nearest first, and accept the first combination that is an infinitive
    fn recombine_separable(
        &self,
        session: &mut ResolutionSession,
        prefix: &str,
        preceding: &[String],
    ) -> Found {
        let rules = self.profile.rules();
        let is_infinitive = |key: &str| rules.is_infinitive(key);

        for stem in preceding.iter().rev() {
            if stem.chars().count() < MIN_SEPARABLE_STEM_LEN {
                continue;
            }

            let combined = format!("{}{}", prefix, stem.to_lowercase());
            let found = self.lookup_word_and_canonicals(session, &combined, &is_infinitive);
            if !found.matched {
                continue;
            }

            debug!("Recombined separable verb: {} + {}", stem, prefix);
            let marker = format!("({stem}...{prefix}) ");
            let candidates = found
                .candidates
                .into_iter()
                .map(|mut candidate| {
                    candidate.source.insert_str(0, &marker);
                    candidate
                })
                .collect();

            return Found {
                matched: true,
                candidates,
            };
        }

        Found::default()
    }

    /// Explain `token` as a sequence of known pieces, tail first. Each piece is
    /// the longest resolvable suffix of what is left of the token.
    fn decompose_compound(&self, session: &mut ResolutionSession, token: &str) -> Found {
        let rules = self.profile.rules();
        let capitalize_pieces = rules.capitalizes_compounds() && !rules.is_compound_exception(token);
        let not_noise = |key: &str| !self.is_noise_key(key);

        let chars: Vec<char> = token.chars().collect();
        let mut result = Found::default();
        let mut end = chars.len();
        // the whole token has already failed
        let mut first_start = 1;

        while end >= MIN_COMPOUND_PIECE_LEN {
            let mut piece_found = None;

            for start in first_start..=end - MIN_COMPOUND_PIECE_LEN {
                let piece: String = chars[start..end].iter().collect();
                let piece = if capitalize_pieces {
                    capitalize(&piece)
                } else {
                    piece
                };

                let found = self.lookup_word_and_canonicals(session, &piece, &not_noise);
                if found.matched {
                    debug!("Compound piece of '{}': {}", token, piece);
                    piece_found = Some((start, found));
                    break;
                }
            }

            let Some((start, found)) = piece_found else {
                break;
            };
            result.matched = true;
            result.candidates.extend(self.gate(session, found.candidates));
            end = start;
            first_start = 0;
        }

        result
    }

    fn is_noise_key(&self, key: &str) -> bool {
        key.chars().count() <= MAX_NOISE_KEY_LEN
            && self.profile.frequency_level(key) == FrequencyLevel::VeryRare
    }

    fn is_known(&self, session: &ResolutionSession, candidates: &[AnnotationCandidate]) -> bool {
        candidates
            .iter()
            .map(|c| c.frequency)
            .min()
            .is_some_and(|rank| session.is_known_rank(rank))
    }

    /// Mark a batch as known when its most frequent candidate is within the
    /// threshold
    fn gate(
        &self,
        session: &ResolutionSession,
        mut candidates: Vec<AnnotationCandidate>,
    ) -> Vec<AnnotationCandidate> {
        if self.is_known(session, &candidates) {
            for candidate in &mut candidates {
                candidate.suppressed = true;
            }
        }
        candidates
    }
}
