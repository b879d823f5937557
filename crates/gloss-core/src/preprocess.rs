use unicode_normalization::UnicodeNormalization;

const SOFT_HYPHEN: char = '\u{00AD}';

pub trait Preprocessor {
    /// Strip everything that cannot be part of a word or end a sentence
    fn process(&self, text: &str) -> String {
        clean_text(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Collapse whitespace, drop control characters and soft hyphens, and turn
/// punctuation other than `. ! ? ; ' -` into spaces. Idempotent.
pub fn clean_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfc() {
        let replacement = if is_whitespace(ch) {
            Some(' ')
        } else if is_control_char(ch) || ch == SOFT_HYPHEN {
            None
        } else if is_punctuation(ch) {
            if is_sentence_terminator(ch) || is_word_punctuation(ch) {
                Some(ch)
            } else {
                Some(' ')
            }
        } else {
            Some(ch)
        };

        match replacement {
            Some(' ') => pending_space = !result.is_empty(),
            Some(ch) => {
                if pending_space {
                    result.push(' ');
                    pending_space = false;
                }
                result.push(ch);
            }
            None => {}
        }
    }

    // dropping characters can leave a base letter next to a combining mark
    result.nfc().collect()
}

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
        // non-breaking spaces and the word joiner
        || matches!(ch, '\u{00A0}' | '\u{202F}' | '\u{2007}' | '\u{2060}')
        || ch.is_whitespace()
}

pub fn is_control_char(ch: char) -> bool {
    (ch <= '\u{001F}' || ('\u{007F}'..='\u{009F}').contains(&ch)) && !is_whitespace(ch)
}

/// Punctuation and symbols in Basic Latin, Latin-1 Supplement and General
/// Punctuation
pub fn is_punctuation(ch: char) -> bool {
    matches!(ch,
        '\u{0021}'..='\u{002F}'
        | '\u{003A}'..='\u{0040}'
        | '\u{005B}'..='\u{0060}'
        | '\u{007B}'..='\u{007E}'
        | '\u{00A0}'..='\u{00BF}'
        | '\u{00D7}'
        | '\u{00F7}'
        | '\u{2000}'..='\u{206F}')
}

pub fn is_alpha(ch: char) -> bool {
    match ch {
        'a'..='z' | 'A'..='Z' => true,
        // rest of Basic Latin and the symbol half of Latin-1
        '\u{0000}'..='\u{00BF}' => false,
        // Latin-1 letters, Latin Extended-A and B
        '\u{00C0}'..='\u{024F}' => ch != '\u{00D7}' && ch != '\u{00F7}',
        // IPA: no dictionary headword contains these
        '\u{0250}'..='\u{02AF}' => false,
        _ => !is_whitespace(ch) && !is_punctuation(ch),
    }
}

pub fn contains_alpha(word: &str) -> bool {
    word.chars().any(is_alpha)
}

pub fn is_word_punctuation(ch: char) -> bool {
    matches!(ch, '\'' | '-' | '.')
}

pub fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | ';')
}

/// First letter upper-cased, the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
