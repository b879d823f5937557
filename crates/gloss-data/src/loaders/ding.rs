//! Ding dictionary lines:
//!
//! ```text
//! Haus {n} | Häuser {pl} :: house | houses
//! abholen {vt}; holen {vt} :: to fetch; to collect
//! ```
//!
//! `|` separates senses, `;` separates synonyms. Only the first sense is
//! indexed, plus the plural sense of nouns.

use std::sync::LazyLock;

use gloss_core::DictionaryStore;
use regex::Regex;

static WORD_TYPE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("Invalid word type pattern"));

const NOUN_GENDERS: &[&str] = &["f", "m", "n", "pl"];

pub fn parse_line(dict: &mut DictionaryStore, line: &str) -> bool {
    let mut sides = line.split("::");
    let (Some(sources), Some(targets), None) = (sides.next(), sides.next(), sides.next()) else {
        return false;
    };

    let word_type = word_type(sources);
    let sources: Vec<&str> = sources.split('|').collect();
    let targets: Vec<&str> = targets.split('|').collect();

    let mut synonyms: Vec<String> = sources[0].split(';').map(str::to_string).collect();
    if word_type != "noun" {
        propagate_annotations(&mut synonyms);
    }
    let mut added = add_synonyms(dict, &synonyms, targets[0], &word_type);

    if word_type == "noun" && sources.len() > 1 && targets.len() > 1 {
        let plurals: Vec<String> = sources[1].split(';').map(str::to_string).collect();
        added |= add_synonyms(dict, &plurals, targets[1], &word_type);
    }

    added
}

fn add_synonyms(dict: &mut DictionaryStore, synonyms: &[String], target: &str, word_type: &str) -> bool {
    let target = target.trim();
    let mut added = false;
    for synonym in synonyms {
        added |= dict.add_entry(synonym.trim(), target, word_type);
    }
    added
}

/// Word type from the first `{...}` tag of the source side
pub fn word_type(sources: &str) -> String {
    let Some(caps) = WORD_TYPE_TAG.captures(sources) else {
        return String::new();
    };
    let tag = &caps[1];

    if tag.starts_with('v') {
        "verb".to_string()
    } else if tag.contains("adv") {
        "adv".to_string()
    } else if tag.contains("adj") {
        "adj".to_string()
    } else if tag.contains("pron") {
        "pron".to_string()
    } else {
        let gender = tag.split(',').next().unwrap_or_default();
        if NOUN_GENDERS.contains(&gender) {
            "noun".to_string()
        } else {
            tag.to_string()
        }
    }
}

/// "abholen; holen {vt}": a tag only written on the last synonym applies to
/// the earlier ones too
pub fn propagate_annotations(synonyms: &mut [String]) {
    let mut carried = String::new();
    for synonym in synonyms.iter_mut().rev() {
        match WORD_TYPE_TAG.find(synonym) {
            Some(tag) => carried = format!(" {}", tag.as_str()),
            None if !carried.is_empty() => synonym.push_str(&carried),
            None => {}
        }
    }
}
