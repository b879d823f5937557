use gloss_data::DictionaryFormat;
use serde::{Deserialize, Serialize};

fn default_format() -> DictionaryFormat {
    DictionaryFormat::Ding
}

fn default_pairs() -> Vec<DictionaryPair> {
    vec![DictionaryPair {
        source: "de".to_string(),
        target: "en".to_string(),
        file: "de-en.txt".to_string(),
        format: default_format(),
    }]
}

/// One dictionary file under `<data_dir>/dict`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DictionaryPair {
    pub source: String,
    pub target: String,
    pub file: String,
    #[serde(default = "default_format")]
    pub format: DictionaryFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_pairs")]
    pub pairs: Vec<DictionaryPair>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
        }
    }
}
