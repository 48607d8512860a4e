//! The bundled course catalog: the last-resort, zero-latency course source.

pub mod bundled;

use crate::domain::course::CourseRecord;
use std::sync::Arc;

/// An immutable, in-process list of course records.
pub struct StaticCatalog {
    records: Vec<Arc<CourseRecord>>,
}

impl StaticCatalog {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(bundled::courses())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Finds a course by `id` first, then by `slug`; the first match in list order wins.
    ///
    /// Pure and synchronous. Blank identifiers never match.
    pub fn find_local(&self, identifier: &str) -> Option<Arc<CourseRecord>> {
        if identifier.trim().is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.id.as_deref() == Some(identifier))
            .or_else(|| {
                self.records
                    .iter()
                    .find(|r| r.slug.as_deref() == Some(identifier))
            })
            .cloned()
    }

    pub fn list(&self) -> &[Arc<CourseRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<&str>, slug: Option<&str>, title: &str) -> CourseRecord {
        CourseRecord {
            id: id.map(str::to_string),
            slug: slug.map(str::to_string),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn id_match_takes_precedence_over_earlier_slug_match() {
        let catalog = StaticCatalog::new(vec![
            record(Some("a"), Some("shared"), "Slug owner"),
            record(Some("shared"), None, "Id owner"),
        ]);
        assert_eq!(catalog.find_local("shared").unwrap().title, "Id owner");
        assert_eq!(catalog.find_local("a").unwrap().title, "Slug owner");
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let catalog = StaticCatalog::new(vec![
            record(None, Some("dup"), "First"),
            record(None, Some("dup"), "Second"),
        ]);
        assert_eq!(catalog.find_local("dup").unwrap().title, "First");
    }

    #[test]
    fn blank_and_unknown_identifiers_miss() {
        let catalog = StaticCatalog::bundled();
        assert!(catalog.find_local("").is_none());
        assert!(catalog.find_local("   ").is_none());
        assert!(catalog.find_local("does-not-exist").is_none());
    }

    #[test]
    fn bundled_records_are_keyed_and_unique() {
        let catalog = StaticCatalog::bundled();
        assert!(!catalog.is_empty());
        let mut keys = std::collections::HashSet::new();
        for r in catalog.list() {
            let key = r.key().expect("bundled record without key");
            assert!(keys.insert(key.to_string()), "duplicate key {}", key);
            assert!(catalog.find_local(key).is_some());
            if let Some(slug) = r.slug.as_deref() {
                assert_eq!(catalog.find_local(slug).unwrap().key(), Some(key));
            }
        }
    }
}
