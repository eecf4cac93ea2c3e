use std::collections::HashMap;

use log::warn;

use crate::config::CatalogConfig;
use crate::record::FileRecord;

/// In-memory index of [`FileRecord`]s grouped by directory path.
///
/// Each bucket keeps its records in insertion order. The catalog is
/// single-threaded; callers needing shared access must wrap it in their own
/// lock.
pub struct Catalog {
    config: CatalogConfig,
    groups: HashMap<String, Vec<FileRecord>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            groups: HashMap::new(),
        }
    }

    /// Files `record` under its own path, creating the bucket if absent.
    /// Duplicates are allowed.
    pub fn add(&mut self, record: FileRecord) {
        self.groups
            .entry(record.path().to_string())
            .or_default()
            .push(record);
    }

    /// All records filed under `path`, in insertion order. Empty when the
    /// path is unknown.
    pub fn find(&self, path: &str) -> &[FileRecord] {
        self.groups.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The records under `path` no larger than `max_size` bytes (inclusive
    /// bound), in insertion order.
    pub fn filter_by_size(&self, path: &str, max_size: u64) -> Vec<FileRecord> {
        self.find(path)
            .iter()
            .filter(|record| record.size() <= max_size)
            .cloned()
            .collect()
    }

    /// Drops the whole bucket for `path`. Unknown paths are a no-op.
    pub fn remove(&mut self, path: &str) {
        self.groups.remove(path);
    }

    /// Every record in the catalog, sorted ascending by size. The sort is
    /// stable, so equal-size records keep their bucket order; tie order
    /// across buckets follows the map's iteration order and is unspecified.
    pub fn sort_by_size(&self) -> Vec<FileRecord> {
        let mut all: Vec<_> = self.groups.values().flatten().cloned().collect();
        all.sort_by_key(|record| record.size());
        all
    }

    /// Files `record` under the parent directory of its path, but only when
    /// that bucket is empty or was opened by a record with the same full
    /// path. Returns whether the record was kept; a rejected record is
    /// reported through the log and dropped, leaving the bucket unchanged.
    pub fn add_with_consistency_check(&mut self, record: FileRecord) -> bool {
        let key = self.parent_key(record.path());
        let bucket = self.groups.entry(key).or_default();
        match bucket.first() {
            Some(first) if first.path() != record.path() => {
                warn!("inconsistent file path: {}", record.path());
                false
            }
            _ => {
                bucket.push(record);
                true
            }
        }
    }

    /// The bucket key for the consistency-checked path: everything before
    /// the last separator, or the path itself when no separator occurs. A
    /// trailing separator yields the path minus that separator.
    fn parent_key(&self, path: &str) -> String {
        match path.rfind(self.config.separator.as_str()) {
            Some(index) => path[..index].to_string(),
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_key() {
        let catalog = Catalog::default();
        assert_eq!(catalog.parent_key("/path/to/file"), "/path/to");
        assert_eq!(catalog.parent_key("/another/path/"), "/another/path");
        assert_eq!(catalog.parent_key("relative"), "relative");
        assert_eq!(catalog.parent_key(""), "");
    }

    #[test]
    fn test_parent_key_custom_separator() {
        let catalog = Catalog::new(CatalogConfig {
            separator: ":".to_string(),
        });
        assert_eq!(catalog.parent_key("drive:folder:file"), "drive:folder");
        assert_eq!(catalog.parent_key("/no/colons/here"), "/no/colons/here");
    }

    /// Basic happy path test.
    #[test]
    fn test_add_then_find() {
        let mut catalog = Catalog::default();
        let record = FileRecord::new("files.txt", 1024, "/path/to/file");
        catalog.add(record.clone());

        assert_eq!(catalog.find("/path/to/file"), [record]);
        assert!(catalog.find("/path/to").is_empty());
    }
}
