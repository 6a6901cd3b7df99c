use std::collections::HashMap;
use time::OffsetDateTime;

///
/// Dedupe keys already used, with the time each one was registered
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupeRegistry {
    entries: HashMap<String, OffsetDateTime>,
}

impl DedupeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn register(&mut self, key: impl Into<String>, at: OffsetDateTime) {
        self.entries.insert(key.into(), at);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, OffsetDateTime)> {
        self.entries.iter().map(|(key, at)| (key.as_str(), *at))
    }

    ///
    /// Keeps only `capacity` most recently registered keys.
    ///
    /// ### Returns
    /// Number of removed keys
    ///
    pub fn trim(&mut self, capacity: usize) -> usize {
        let len_before = self.entries.len();
        if len_before <= capacity {
            return 0;
        }

        let mut entries = self.entries.drain().collect::<Vec<_>>();
        entries.sort_by(|(key_a, at_a), (key_b, at_b)| {
            at_b.cmp(at_a).then_with(|| key_a.cmp(key_b))
        });
        entries.truncate(capacity);
        self.entries.extend(entries);

        len_before - self.entries.len()
    }
}

impl FromIterator<(String, OffsetDateTime)> for DedupeRegistry {
    fn from_iter<T: IntoIterator<Item = (String, OffsetDateTime)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
