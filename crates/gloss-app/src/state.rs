use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use gloss_config::Config;
use gloss_core::{DefaultRules, GlossEngine, LanguageProfile, LanguageRules};
use gloss_data::{load_dictionary, load_language};
use gloss_lang_german::{GermanProfile, GermanRules};

pub struct AppState {
    pub config: Config,
    pub engine: Arc<GlossEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: GlossEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }

    /// Load every configured language and dictionary. Any missing required
    /// file aborts startup.
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let engine = build_engine(&config)?;
        Ok(Self::new(config, engine))
    }
}

pub fn build_engine(config: &Config) -> anyhow::Result<GlossEngine> {
    let start = Instant::now();
    let mut engine = GlossEngine::new();

    let files = config.languages.files();
    for code in &config.languages.codes {
        let dir = config.language_dir(code);
        let mut profile = load_language(&dir, code, language_rules(code), &files)
            .with_context(|| format!("loading language '{code}'"))?;
        add_builtin_defaults(&mut profile)?;
        engine.add_language(profile);
    }

    for pair in &config.dictionaries.pairs {
        if engine.language(&pair.source).is_none() {
            tracing::warn!(
                "Dictionary {} -> {} has no loaded source language, requests will fail",
                pair.source,
                pair.target
            );
        }
        let path = config.dictionary_path(pair);
        let dict = load_dictionary(&path, pair.format, &pair.source, &pair.target)
            .with_context(|| format!("loading dictionary {} -> {}", pair.source, pair.target))?;
        engine.add_dictionary(dict);
    }

    tracing::info!(
        "Reference data ready in {:?}: pairs {:?}",
        start.elapsed(),
        engine.supported_pairs()
    );
    Ok(engine)
}

pub fn language_rules(code: &str) -> Box<dyn LanguageRules> {
    match code {
        gloss_lang_german::LANGUAGE_CODE => Box::new(GermanRules),
        _ => Box::new(DefaultRules),
    }
}

/// German ships built-in variants and prefixes for data directories that lack
/// those files
fn add_builtin_defaults(profile: &mut LanguageProfile) -> anyhow::Result<()> {
    if profile.code() != gloss_lang_german::LANGUAGE_CODE {
        return Ok(());
    }
    if profile.variant_patterns().is_empty() {
        tracing::info!("Using built-in German variant patterns");
        GermanProfile::add_default_variants(profile)?;
    }
    if profile.separable_prefix_count() == 0 {
        tracing::info!("Using built-in German separable prefixes");
        GermanProfile::add_default_prefixes(profile);
    }
    Ok(())
}
