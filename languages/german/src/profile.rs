use gloss_core::{LanguageProfile, ProfileError};

use crate::defaults::{EXPLICIT_VARIANTS, SEPARABLE_PREFIXES, VARIANT_PATTERNS};
use crate::rules::GermanRules;

pub const LANGUAGE_CODE: &str = "de";

pub struct GermanProfile;

impl GermanProfile {
    /// Empty profile with the German rules attached
    pub fn new() -> LanguageProfile {
        LanguageProfile::with_rules(LANGUAGE_CODE, Box::new(GermanRules))
    }

    /// Profile with the built-in variants and separable prefixes, no
    /// frequency list
    pub fn with_defaults() -> Result<LanguageProfile, ProfileError> {
        let mut profile = Self::new();
        Self::add_default_variants(&mut profile)?;
        Self::add_default_prefixes(&mut profile);
        Ok(profile)
    }

    pub fn add_default_variants(profile: &mut LanguageProfile) -> Result<(), ProfileError> {
        for (pattern, replacement, last_resort) in VARIANT_PATTERNS {
            profile.add_variant_pattern(pattern, replacement, *last_resort)?;
        }
        for (canonical, variant) in EXPLICIT_VARIANTS {
            profile.add_explicit_variant(canonical, variant);
        }

        tracing::debug!(
            "Added {} default variant patterns and {} irregular forms",
            VARIANT_PATTERNS.len(),
            EXPLICIT_VARIANTS.len()
        );
        Ok(())
    }

    pub fn add_default_prefixes(profile: &mut LanguageProfile) {
        for prefix in SEPARABLE_PREFIXES {
            profile.add_separable_prefix(prefix);
        }
    }
}
