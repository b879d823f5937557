use super::{dictionary, profile, sentence};
use crate::language::RARE;
use crate::resolver::Resolver;
use crate::session::ResolutionSession;
use crate::types::AnnotationCandidate;

fn keys(candidates: &[AnnotationCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.key.as_str()).collect()
}

#[test]
fn test_direct_lookup_carries_frequency() {
    let dict = dictionary(&[("Hund {m}", "dog", "noun")]);
    let profile = profile(&["der", "Hund"]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let found = resolver.resolve(&mut session, &sentence(&["Hund"]), 0);
    assert_eq!(keys(&found), vec!["Hund"]);
    assert_eq!(found[0].frequency, 2);
    assert!(!found[0].suppressed);
}

#[test]
fn test_known_words_are_suppressed() {
    let dict = dictionary(&[("der", "the", "art"), ("Hund {m}", "dog", "noun")]);
    let profile = profile(&["der", "Hund"]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(1, false);

    let words = sentence(&["der", "Hund"]);
    let article = resolver.resolve(&mut session, &words, 0);
    let noun = resolver.resolve(&mut session, &words, 1);

    assert!(article.iter().all(|c| c.suppressed));
    assert!(noun.iter().all(|c| !c.suppressed));
}

#[test]
fn test_known_token_is_not_decomposed() {
    let dict = dictionary(&[("Haus {n}", "house", "noun"), ("Boot {n}", "boat", "noun")]);
    let profile = profile(&["Hausboot", "Haus", "Boot"]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(5, true);

    let found = resolver.resolve(&mut session, &sentence(&["Hausboot"]), 0);
    assert_eq!(found.len(), 1);
    assert!(found[0].unresolved);
    assert!(found[0].suppressed);
}

#[test]
fn test_token_is_resolved_once_per_session() {
    let dict = dictionary(&[("Hund {m}", "dog", "noun")]);
    let profile = profile(&[]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let words = sentence(&["Hund", "Hund"]);
    assert_eq!(resolver.resolve(&mut session, &words, 0).len(), 1);
    assert!(resolver.resolve(&mut session, &words, 1).is_empty());
}

#[test]
fn test_case_fallbacks() {
    let dict = dictionary(&[("laufen", "to run", "verb"), ("Haus {n}", "house", "noun")]);
    let profile = profile(&[]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let words = sentence(&["Laufen", "haus"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 0)), vec!["laufen"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 1)), vec!["Haus"]);
}

#[test]
fn test_lowercase_already_resolved_is_not_decomposed() {
    let dict = dictionary(&[("der", "the", "art"), ("Er", "he", "pron")]);
    let profile = profile(&["Er"]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let first = sentence(&["der", "Mann"]);
    let second = sentence(&["Der", "Hund"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &first, 0)), vec!["der"]);
    assert!(resolver.resolve(&mut session, &second, 0).is_empty());
}

#[test]
fn test_primary_variants_before_last_resort() {
    let dict = dictionary(&[("rufen", "to call", "verb"), ("rufsen", "bogus", "verb")]);
    let mut profile = profile(&[]);
    profile.add_variant_pattern("st$", "en", false).unwrap();
    profile.add_variant_pattern("t$", "en", true).unwrap();
    let resolver = Resolver::new(&dict, &profile);

    let mut session = ResolutionSession::new(0, false);
    let found = resolver.resolve(&mut session, &sentence(&["rufst"]), 0);
    assert_eq!(keys(&found), vec!["rufen"]);
    assert!(!session.is_searched("rufsen"));

    let mut session = ResolutionSession::new(0, false);
    let found = resolver.resolve(&mut session, &sentence(&["ruft"]), 0);
    assert_eq!(keys(&found), vec!["rufen"]);
}

#[test]
fn test_explicit_variants() {
    let dict = dictionary(&[("rennen", "to run", "verb")]);
    let mut profile = profile(&[]);
    profile.add_explicit_variant("rennen", "rannte");
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let found = resolver.resolve(&mut session, &sentence(&["rannte"]), 0);
    assert_eq!(keys(&found), vec!["rennen"]);
    assert_eq!(found[0].targets, vec!["to run"]);
}

#[test]
fn test_hyphenated_fragments() {
    let dict = dictionary(&[("Haus {n}", "house", "noun"), ("Tür {f}", "door", "noun")]);
    let profile = profile(&[]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let words = sentence(&["Haus-", "-tür"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 0)), vec!["Haus"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 1)), vec!["Tür"]);
}

#[test]
fn test_separable_verb_is_recombined() {
    let dict = dictionary(&[("jdn. anrufen", "to call sb.", "verb"), ("an", "at", "prep")]);
    let mut profile = profile(&[]);
    profile.add_variant_pattern("e$", "en", false).unwrap();
    profile.add_separable_prefix("an");
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let words = sentence(&["Ich", "rufe", "dich", "an"]);
    let found = resolver.resolve(&mut session, &words, 3);

    assert_eq!(keys(&found), vec!["an", "anrufen"]);
    assert_eq!(found[1].source, "(rufe...an) jdn. anrufen");
}

#[test]
fn test_separable_prefix_without_verb() {
    let dict = dictionary(&[("an", "at", "prep")]);
    let mut profile = profile(&[]);
    profile.add_separable_prefix("an");
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let words = sentence(&["Er", "kommt", "an"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 2)), vec!["an"]);
}

#[test]
fn test_compound_is_split_tail_first() {
    let dict = dictionary(&[("Haus {n}", "house", "noun"), ("Tür {f}", "door", "noun")]);
    let profile = profile(&["Haus", "Tür"]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let found = resolver.resolve(&mut session, &sentence(&["Haustür"]), 0);
    assert_eq!(keys(&found), vec!["Tür", "Haus"]);
}

#[test]
fn test_compound_piece_already_seen() {
    let dict = dictionary(&[("Haus {n}", "house", "noun"), ("Tür {f}", "door", "noun")]);
    let profile = profile(&["Haus", "Tür"]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, false);

    let words = sentence(&["Haus", "Haustür"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 0)), vec!["Haus"]);
    assert_eq!(keys(&resolver.resolve(&mut session, &words, 1)), vec!["Tür"]);
}

#[test]
fn test_rare_short_pieces_are_noise() {
    let dict = dictionary(&[("Ei {n}", "egg", "noun")]);

    let rare = profile(&[]);
    let resolver = Resolver::new(&dict, &rare);
    let mut session = ResolutionSession::new(0, false);
    assert!(resolver.resolve(&mut session, &sentence(&["Quarkei"]), 0).is_empty());

    let common = profile(&["Ei"]);
    let resolver = Resolver::new(&dict, &common);
    let mut session = ResolutionSession::new(0, false);
    let found = resolver.resolve(&mut session, &sentence(&["Quarkei"]), 0);
    assert_eq!(keys(&found), vec!["Ei"]);
}

#[test]
fn test_unresolved_placeholder_needs_show_all() {
    let dict = dictionary(&[]);
    let profile = profile(&[]);
    let resolver = Resolver::new(&dict, &profile);

    let mut session = ResolutionSession::new(0, false);
    assert!(resolver.resolve(&mut session, &sentence(&["Quatsch"]), 0).is_empty());

    let mut session = ResolutionSession::new(0, true);
    let found = resolver.resolve(&mut session, &sentence(&["Quatsch"]), 0);
    assert_eq!(found.len(), 1);
    assert!(found[0].unresolved);
    assert_eq!(found[0].frequency, RARE);
    assert_eq!(found[0].joined_target(), "???");
}

#[test]
fn test_out_of_range_index() {
    let dict = dictionary(&[]);
    let profile = profile(&[]);
    let resolver = Resolver::new(&dict, &profile);
    let mut session = ResolutionSession::new(0, true);

    assert!(resolver.resolve(&mut session, &sentence(&["a"]), 5).is_empty());
}
