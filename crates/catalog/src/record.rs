use serde::{Deserialize, Serialize};

/// Metadata for a single file: its name, size in bytes, and the directory
/// path it is filed under. Immutable once constructed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    name: String,
    size: u64,
    path: String,
}

impl FileRecord {
    /// Stores the given values verbatim. Nothing is validated here; an empty
    /// name or a malformed path is accepted as-is.
    pub fn new(name: &str, size: u64, path: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            path: path.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
