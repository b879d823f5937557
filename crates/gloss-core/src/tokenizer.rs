use crate::dictionary::DictionaryStore;
use crate::language::LanguageProfile;
use crate::preprocess::{DefaultPreprocessor, Preprocessor, contains_alpha, is_punctuation};

/// Splits text into sentences of word tokens
#[derive(Clone, Copy)]
pub struct Tokenizer<'a> {
    profile: &'a LanguageProfile,
    dictionary: &'a DictionaryStore,
}

impl<'a> Tokenizer<'a> {
    pub fn new(profile: &'a LanguageProfile, dictionary: &'a DictionaryStore) -> Self {
        Self {
            profile,
            dictionary,
        }
    }

    /// Lazily segment `text`. The iterator can be cloned to restart from any
    /// point.
    pub fn tokenize(&self, text: &str) -> Sentences<'a> {
        Sentences {
            text: DefaultPreprocessor.process(text),
            pos: 0,
            tokenizer: *self,
        }
    }

    /// In the frequency list or in the dictionary
    pub fn is_known_word(&self, word: &str) -> bool {
        self.profile.is_in_frequency_list(word) || self.dictionary.contains(word)
    }

    fn period_role(&self, candidate: &str) -> PeriodRole {
        if candidate
            .chars()
            .all(|c| c.is_ascii_digit() || is_punctuation(c))
        {
            // "3." is an ordinal or a number, "..." ends the sentence
            return if candidate.chars().any(|c| c.is_ascii_digit()) {
                PeriodRole::Abbreviation
            } else {
                PeriodRole::Terminator
            };
        }

        if self.is_known_word(&format!("{candidate}.")) {
            PeriodRole::Abbreviation
        } else {
            PeriodRole::Terminator
        }
    }
}

enum PeriodRole {
    Abbreviation,
    Terminator,
}

/// Iterator over the sentences of one cleaned text
#[derive(Clone)]
pub struct Sentences<'a> {
    text: String,
    pos: usize,
    tokenizer: Tokenizer<'a>,
}

impl Iterator for Sentences<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let mut sentence = Vec::new();
            let mut current = String::new();
            let mut consumed = rest.len();

            let mut chars = rest.char_indices().peekable();
            while let Some((i, ch)) = chars.next() {
                match ch {
                    ' ' => push_token(&mut sentence, &mut current),
                    '!' | '?' | ';' => {
                        push_token(&mut sentence, &mut current);
                        consumed = i + ch.len_utf8();
                        break;
                    }
                    '.' => {
                        // "z.B.", "3.14": the period is inside the word
                        if chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric()) {
                            current.push('.');
                            continue;
                        }
                        match self.tokenizer.period_role(&current) {
                            PeriodRole::Abbreviation => {
                                current.push('.');
                                push_token(&mut sentence, &mut current);
                            }
                            PeriodRole::Terminator => {
                                push_token(&mut sentence, &mut current);
                                consumed = i + ch.len_utf8();
                                break;
                            }
                        }
                    }
                    _ => current.push(ch),
                }
            }
            push_token(&mut sentence, &mut current);

            self.pos += consumed;
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

fn push_token(sentence: &mut Vec<String>, current: &mut String) {
    let token = current.trim_matches('\'');
    if contains_alpha(token) {
        sentence.push(token.to_string());
    }
    current.clear();
}
