mod state_tests;

use std::sync::Arc;

use gloss_config::Config;
use gloss_core::{DictionaryStore, GlossEngine};
use gloss_lang_german::GermanProfile;

use crate::state::AppState;

pub(crate) fn engine() -> GlossEngine {
    let mut profile = GermanProfile::with_defaults().expect("default patterns compile");
    profile.add_frequency_records(["der", "ich", "dich"].into_iter().map(|w| (w, None)));

    let mut dict = DictionaryStore::new("de", "en");
    dict.add_entry("der", "the", "art");
    dict.add_entry("Hund {m}", "dog", "noun");
    dict.add_entry("bellen", "to bark", "verb");
    dict.add_entry("jdn. anrufen", "to call sb.", "verb");

    let mut engine = GlossEngine::new();
    engine.add_language(profile);
    engine.add_dictionary(dict);
    engine
}

pub(crate) fn state() -> Arc<AppState> {
    Arc::new(AppState::new(Config::default(), engine()))
}

pub(crate) fn request(text: &str, show_all: bool) -> String {
    serde_json::json!({
        "source_lang": "de",
        "target_lang": "en",
        "freqThreshold": 3,
        "show_all": show_all,
        "text": text,
    })
    .to_string()
}
