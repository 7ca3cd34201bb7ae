//! Recent queries, newest first.

/// Bounded list of recent queries. Re-searching a query moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
    min_query_len: usize,
}

impl SearchHistory {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: usize, min_query_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            min_query_len,
        }
    }

    /// Restores persisted entries, trimmed to capacity.
    pub fn with_entries(mut self, mut entries: Vec<String>) -> Self {
        entries.truncate(self.capacity);
        self.entries = entries;
        self
    }

    /// Returns false (and records nothing) for queries shorter than the minimum.
    pub fn record(&mut self, query: &str) -> bool {
        if query.chars().count() < self.min_query_len {
            return false;
        }
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_deduplicated_and_bounded() {
        let mut history = SearchHistory::new(SearchHistory::DEFAULT_CAPACITY, 2);
        for q in ["rice", "pizza", "soup", "suya", "rolls", "rice", "salad"] {
            history.record(q);
        }
        assert_eq!(
            history.entries(),
            &["salad", "rice", "rolls", "suya", "soup"]
        );
    }

    #[test]
    fn short_queries_are_not_recorded() {
        let mut history = SearchHistory::new(5, 2);
        assert!(!history.record("r"));
        assert!(history.record("ri"));
        assert_eq!(history.entries(), &["ri"]);
        history.clear();
        assert!(history.entries().is_empty());
    }
}
