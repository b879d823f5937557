use std::collections::HashSet;

/// Mutable state of one annotation request. Never shared between requests.
#[derive(Debug, Clone, Default)]
pub struct ResolutionSession {
    /// Words with a rank up to this are known to the learner
    pub freq_threshold: u32,
    /// Keep placeholders and redundant meanings
    pub show_all: bool,
    /// Tokens and keys already resolved during this request
    pub searched: HashSet<String>,
}

impl ResolutionSession {
    pub fn new(freq_threshold: u32, show_all: bool) -> Self {
        Self {
            freq_threshold,
            show_all,
            searched: HashSet::new(),
        }
    }

    pub fn is_searched(&self, word: &str) -> bool {
        self.searched.contains(word)
    }

    /// Returns false if `word` was already marked
    pub fn mark_searched(&mut self, word: &str) -> bool {
        self.searched.insert(word.to_string())
    }

    pub fn is_known_rank(&self, rank: u32) -> bool {
        rank <= self.freq_threshold
    }
}
