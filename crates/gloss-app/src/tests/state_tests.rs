use std::fs;
use std::path::PathBuf;

use gloss_config::Config;
use gloss_core::AnnotationQuery;

use crate::state::{build_engine, language_rules};

/// Scratch data directory removed on drop
struct DataDir(PathBuf);

impl DataDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("gloss-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(path.join("dict")).unwrap();
        fs::create_dir_all(path.join("lang").join("de")).unwrap();
        DataDir(path)
    }

    fn write(&self, relative: &str, content: &str) {
        fs::write(self.0.join(relative), content).unwrap();
    }

    fn config(&self) -> Config {
        Config {
            data_dir: self.0.clone(),
            ..Config::default()
        }
    }
}

impl Drop for DataDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_builds_engine_from_data_dir() {
    let dir = DataDir::new("complete");
    dir.write(
        "dict/de-en.txt",
        "# Ding export\nder {art} :: the\nHund {m} | Hunde {pl} :: dog | dogs\nbellen {vi} :: to bark\n",
    );
    dir.write("lang/de/frequency.txt", "der 5311231\nund 2417230\n");

    let engine = build_engine(&dir.config()).unwrap();
    assert_eq!(engine.supported_pairs(), vec![("de".to_string(), "en".to_string())]);

    // Built-in patterns fill in for the missing pattern file
    let german = engine.language("de").unwrap();
    assert!(!german.variant_patterns().is_empty());
    assert!(german.is_separable_prefix("an"));

    let records = engine
        .annotate(&AnnotationQuery {
            source_lang: "de".to_string(),
            target_lang: "en".to_string(),
            freq_threshold: 2,
            show_all: false,
            text: "Die Hunde bellten.".to_string(),
        })
        .unwrap();
    let keys: Vec<_> = records.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["Hund", "Hunde", "bellen"]);
}

#[test]
fn test_missing_dictionary_fails() {
    let dir = DataDir::new("no-dict");
    dir.write("lang/de/frequency.txt", "der\n");

    let Err(err) = build_engine(&dir.config()) else {
        panic!("engine built without required files");
    };
    assert!(format!("{err:#}").contains("File not found"), "{err:#}");
}

#[test]
fn test_missing_frequency_list_fails() {
    let dir = DataDir::new("no-freq");
    dir.write("dict/de-en.txt", "der {art} :: the\n");

    let Err(err) = build_engine(&dir.config()) else {
        panic!("engine built without required files");
    };
    assert!(format!("{err:#}").contains("loading language 'de'"), "{err:#}");
}

#[test]
fn test_rules_by_language() {
    assert!(language_rules("de").is_infinitive("laufen"));
    assert!(language_rules("de").is_compound_exception("dreihundert"));
    assert!(!language_rules("xx").capitalizes_compounds());
}
