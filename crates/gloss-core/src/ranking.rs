use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{AnnotationCandidate, Quality};

/// Broad headwords with this many meanings are usually right when ambiguous
const HIGH_QUALITY_DEF_COUNT: usize = 5;

// Annotation prefixes, matched case-insensitively after '['
const VULGAR_MARKERS: &[&str] = &["[vulg", "[derb", "[pej"];
const GENERAL_MARKERS: &[&str] = &["[allg", "[general"];

/// Scores, orders, prunes and deduplicates resolver output
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingFilter {
    show_all: bool,
}

impl RankingFilter {
    pub fn new(show_all: bool) -> Self {
        Self { show_all }
    }

    pub fn apply(&self, mut candidates: Vec<AnnotationCandidate>) -> Vec<AnnotationCandidate> {
        candidates.iter_mut().for_each(score);
        sort_candidates(&mut candidates);

        let candidates = if self.show_all {
            candidates
        } else {
            filter_redundant(candidates)
        };

        deduplicate(candidates)
    }
}

/// Fill in the quality flags of a candidate. Repeated targets are dropped.
pub fn score(candidate: &mut AnnotationCandidate) {
    let mut seen = HashSet::new();
    candidate.targets.retain(|target| seen.insert(target.clone()));

    candidate.specific_term = candidate.source.contains('[');
    candidate.specific_meaning =
        !candidate.targets.is_empty() && candidate.targets.iter().all(|t| t.contains('['));
    candidate.vulgar = has_marker(candidate, VULGAR_MARKERS);
    candidate.def_count = candidate.targets.len();

    let general = has_marker(candidate, GENERAL_MARKERS);
    candidate.quality = if candidate.vulgar {
        Quality::Vulgar
    } else if general || candidate.def_count >= HIGH_QUALITY_DEF_COUNT {
        Quality::High
    } else if candidate.specific_term || candidate.specific_meaning {
        Quality::Specific
    } else {
        Quality::Plain
    };
}

fn has_marker(candidate: &AnnotationCandidate, markers: &[&str]) -> bool {
    std::iter::once(&candidate.source)
        .chain(candidate.targets.iter())
        .map(|text| text.to_lowercase())
        .any(|text| markers.iter().any(|marker| text.contains(marker)))
}

/// Stable: frequency, key, then better quality and more meanings first
pub fn sort_candidates(candidates: &mut [AnnotationCandidate]) {
    candidates.sort_by(compare);
}

fn compare(a: &AnnotationCandidate, b: &AnnotationCandidate) -> Ordering {
    a.frequency
        .cmp(&b.frequency)
        .then_with(|| a.key.cmp(&b.key))
        .then_with(|| b.quality.cmp(&a.quality))
        .then_with(|| b.def_count.cmp(&a.def_count))
}

/// Drop lower-quality repeats of a word already explained. Expects sorted
/// input.
pub fn filter_redundant(candidates: Vec<AnnotationCandidate>) -> Vec<AnnotationCandidate> {
    let mut kept: Vec<AnnotationCandidate> = Vec::with_capacity(candidates.len());
    let mut best_quality = Quality::default();

    for candidate in candidates {
        match kept.last() {
            Some(last) if last.key == candidate.key => {
                if candidate.quality == best_quality || candidate.quality >= Quality::High {
                    kept.push(candidate);
                }
            }
            _ => {
                best_quality = candidate.quality;
                kept.push(candidate);
            }
        }
    }

    kept
}

/// Keep the first of candidates with equal word type, headword and gloss
pub fn deduplicate(candidates: Vec<AnnotationCandidate>) -> Vec<AnnotationCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert((c.word_type.clone(), c.source.clone(), c.joined_target())))
        .collect()
}
