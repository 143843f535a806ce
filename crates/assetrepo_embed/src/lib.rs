//! # assetrepo embedded source
//!
//! An in-memory [`AssetSource`] for blobs compiled into the binary with
//! `include_bytes!`, or handed over at runtime.
//!
//! ## Usage
//!
//! ```
//! use assetrepo_core::prelude::*;
//! use assetrepo_embed::EmbeddedSource;
//!
//! static ASSETS: &[(&str, &[u8])] = &[
//!     ("shaders/basic.wgsl", b"// shader"),
//!     ("ui/theme.css", b"body {}"),
//! ];
//!
//! let source = EmbeddedSource::new().with_static(ASSETS);
//! assert_eq!(source.names(), vec!["shaders/basic.wgsl", "ui/theme.css"]);
//! ```

use assetrepo_core::path;
use assetrepo_core::prelude::*;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Permission bits reported for every embedded asset.
const EMBEDDED_MODE: u32 = 0o444;

#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    assets: BTreeMap<String, Bytes>,
    modified: DateTime<Utc>,
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self {
            assets: BTreeMap::new(),
            modified: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a single asset.
    pub fn with_asset(mut self, name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.insert(name, data);
        self
    }

    /// Adds a table of `'static` blobs without copying them.
    pub fn with_static(mut self, assets: &'static [(&'static str, &'static [u8])]) -> Self {
        for &(name, data) in assets {
            self.insert(name, Bytes::from_static(data));
        }
        self
    }

    /// Timestamp reported by [`stat`](AssetSource::stat). Defaults to the UNIX epoch.
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Bytes>) {
        self.assets.insert(name.into(), data.into());
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for EmbeddedSource {
    fn fetch(&self, name: &str) -> Result<Bytes, AssetError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    fn names(&self) -> Vec<String> {
        self.assets.keys().cloned().collect()
    }

    fn stat(&self, name: &str) -> Result<AssetInfo, AssetError> {
        let data = self
            .assets
            .get(name)
            .ok_or_else(|| AssetError::InfoNotFound(name.to_string()))?;

        Ok(AssetInfo::file(name, data.len() as u64)
            .with_mode(EMBEDDED_MODE)
            .with_modified(self.modified))
    }

    fn list_children(&self, prefix: &str) -> Result<Vec<String>, AssetError> {
        let normalized = path::normalize(prefix);
        let prefix: &str = &normalized;

        let matching = self
            .assets
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(name, _)| name.as_str())
            .take_while(|name| name.starts_with(prefix));

        Ok(path::children(matching, prefix))
    }
}
