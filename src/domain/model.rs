/// A page as returned by the content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub html: String,
}

/// Result of one pass of the rule sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeReport {
    pub html: String,
    /// One entry per rule, in rule order: how many matches the rule replaced.
    pub matches: Vec<(&'static str, usize)>,
}

impl SanitizeReport {
    pub fn total_matches(&self) -> usize {
        self.matches.iter().map(|(_, count)| count).sum()
    }

    pub fn matches_for(&self, rule: &str) -> Option<usize> {
        self.matches
            .iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, count)| *count)
    }
}
