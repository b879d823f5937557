use gloss_data::LanguageFiles;
use serde::{Deserialize, Serialize};

fn default_codes() -> Vec<String> {
    vec!["de".to_string()]
}

fn default_frequency_file() -> String {
    "frequency.txt".to_string()
}

fn default_variant_patterns_file() -> String {
    "variant-patterns.txt".to_string()
}

fn default_separable_prefixes_file() -> String {
    "separable-prefixes.txt".to_string()
}

fn default_explicit_variants_file() -> String {
    "explicit-variants.txt".to_string()
}

/// Languages loaded from `<data_dir>/lang/<code>`
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LanguageConfig {
    #[serde(default = "default_codes")]
    pub codes: Vec<String>,
    #[serde(default = "default_frequency_file")]
    pub frequency_file: String,
    #[serde(default = "default_variant_patterns_file")]
    pub variant_patterns_file: String,
    #[serde(default = "default_separable_prefixes_file")]
    pub separable_prefixes_file: String,
    #[serde(default = "default_explicit_variants_file")]
    pub explicit_variants_file: String,
}

impl LanguageConfig {
    pub fn files(&self) -> LanguageFiles {
        LanguageFiles {
            frequency: self.frequency_file.clone(),
            variant_patterns: self.variant_patterns_file.clone(),
            separable_prefixes: self.separable_prefixes_file.clone(),
            explicit_variants: self.explicit_variants_file.clone(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            codes: default_codes(),
            frequency_file: default_frequency_file(),
            variant_patterns_file: default_variant_patterns_file(),
            separable_prefixes_file: default_separable_prefixes_file(),
            explicit_variants_file: default_explicit_variants_file(),
        }
    }
}
