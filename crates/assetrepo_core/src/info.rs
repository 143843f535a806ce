use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a single asset, as reported by the source that serves it.
///
/// The layered repository never looks inside this; it is handed back
/// exactly as the owning source produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// The asset name e.g. "textures/test.png".
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Permission bits e.g. `0o644`.
    pub mode: u32,

    /// Last modification time.
    pub modified: DateTime<Utc>,

    pub is_dir: bool,
}

impl AssetInfo {
    /// A read-only regular file stamped with the UNIX epoch.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mode: 0o444,
            modified: DateTime::<Utc>::UNIX_EPOCH,
            is_dir: false,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    /// Marks the record as a directory.
    pub fn dir(mut self) -> Self {
        self.is_dir = true;
        self
    }
}
