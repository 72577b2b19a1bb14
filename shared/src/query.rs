//! Ordered query-parameter builder.
//!
//! Replaces the original handler's ad-hoc string concatenation with a pure
//! builder: insertion order is preserved, keys are matched
//! case-insensitively, and duplicates are rejected (first occurrence wins)
//! so a caller cannot smuggle a second `limit` past the pagination loop.

/// Ordered set of query pairs with first-wins deduplication.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unless the key is already present.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        if !self.contains(key) {
            self.pairs.push((key.to_string(), value.into()));
        }
    }

    /// Append a pair, replacing any existing value for the key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self
            .pairs
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            existing.1 = value;
        } else {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Append every pair from `pairs`, keeping existing keys untouched.
    pub fn extend_from(&mut self, pairs: &[(String, String)]) {
        for (key, value) in pairs {
            self.push(key, value.clone());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    /// Pairs in insertion order, ready for `reqwest`'s query encoder.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
