use crate::language::RARE;

/// Gloss rendered for a token nothing could be found for
pub const UNRESOLVED_GLOSS: &str = "???";

/// Separator used when a candidate's targets are joined for display
pub const TARGET_SEPARATOR: &str = "; ";

/// Ranks below this are shown as exact numbers
const EXACT_RANK_LIMIT: u32 = 10_000;

/// One annotation request as the engine sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationQuery {
    pub source_lang: String,
    pub target_lang: String,
    pub freq_threshold: u32,
    pub show_all: bool,
    pub text: String,
}

/// Ordinal usefulness of a gloss, higher is better
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quality {
    Vulgar = 0,
    Specific = 1,
    #[default]
    Plain = 2,
    High = 3,
}

/// One candidate meaning for a token, as produced by the resolver
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationCandidate {
    pub key: String,
    pub source: String,
    pub word_type: String,
    pub targets: Vec<String>,
    /// Frequency rank of `key`, `RARE` when not in the frequency list
    pub frequency: u32,
    /// The learner already knows this word (rank within the threshold)
    pub suppressed: bool,
    /// Placeholder for a token without any dictionary match
    pub unresolved: bool,

    // Filled in by the ranking stage
    pub specific_term: bool,
    pub specific_meaning: bool,
    pub vulgar: bool,
    pub def_count: usize,
    pub quality: Quality,
}

impl AnnotationCandidate {
    pub fn new(key: &str, source: &str, word_type: &str, targets: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            source: source.to_string(),
            word_type: word_type.to_string(),
            def_count: targets.len(),
            targets,
            frequency: RARE,
            suppressed: false,
            unresolved: false,
            specific_term: false,
            specific_meaning: false,
            vulgar: false,
            quality: Quality::default(),
        }
    }

    /// Placeholder for a word nothing was found for
    pub fn unresolved(token: &str, frequency: u32) -> Self {
        Self {
            frequency,
            unresolved: true,
            ..Self::new(token, token, "", Vec::new())
        }
    }

    /// Targets joined into the display gloss
    pub fn joined_target(&self) -> String {
        if self.unresolved {
            UNRESOLVED_GLOSS.to_string()
        } else {
            self.targets.join(TARGET_SEPARATOR)
        }
    }
}

/// Final, display-ready annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossRecord {
    pub key: String,
    pub source: String,
    pub word_type: String,
    pub target: String,
    pub freq: String,
}

impl From<&AnnotationCandidate> for GlossRecord {
    fn from(candidate: &AnnotationCandidate) -> Self {
        Self {
            key: candidate.key.clone(),
            source: candidate.source.clone(),
            word_type: candidate.word_type.clone(),
            target: candidate.joined_target(),
            freq: render_frequency(candidate.frequency, candidate.unresolved),
        }
    }
}

/// Display form of a frequency rank
pub fn render_frequency(rank: u32, unresolved: bool) -> String {
    match rank {
        RARE if unresolved => String::new(),
        RARE => ">100000".to_string(),
        rank if rank < EXACT_RANK_LIMIT => rank.to_string(),
        rank => format!(">{rank}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_rendering() {
        assert_eq!(render_frequency(42, false), "42");
        assert_eq!(render_frequency(9_999, false), "9999");
        assert_eq!(render_frequency(20_000, false), ">20000");
        assert_eq!(render_frequency(RARE, false), ">100000");
        assert_eq!(render_frequency(RARE, true), "");
    }

    #[test]
    fn placeholder_renders_marker() {
        let record = GlossRecord::from(&AnnotationCandidate::unresolved("Quatsch", RARE));
        assert_eq!(record.target, UNRESOLVED_GLOSS);
        assert_eq!(record.source, "Quatsch");
        assert_eq!(record.freq, "");
    }
}
