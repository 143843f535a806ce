//! # assetrepo FileSystem Source
//!
//! A local filesystem source for assetrepo.
//!
//! This crate implements the [`AssetSource`] trait over a directory tree.
//! Asset names are paths relative to the root, always separated by `/`.
//!
//! ## Features
//!
//! * **Confined Lookups**: Names with `..`, root or drive components are refused before the disk is touched.
//!
//! ## Usage
//!
//! ```no_run
//! use assetrepo_core::prelude::*;
//! use assetrepo_fs::FileSystemSource;
//!
//! let mut repo = Layered::new();
//! repo.add_source(FileSystemSource::new("./mods"));
//! repo.add_source(FileSystemSource::new("./assets"));
//! ```

use assetrepo_core::path;
use assetrepo_core::prelude::*;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
    follow_links: bool,
}

impl FileSystemSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            root: path.into(),
            follow_links: false,
        }
    }

    /// Whether symbolic links are followed while listing names.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps an asset name onto the tree, or `None` if it would escape the root.
    fn get_path(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        confined.then(|| self.root.join(relative))
    }

    fn to_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
        Some(parts?.join("/"))
    }
}

impl AssetSource for FileSystemSource {
    fn fetch(&self, name: &str) -> Result<Bytes, AssetError> {
        let path = self
            .get_path(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;

        match fs::read(&path) {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(name.to_string()))
            }
            Err(e) => Err(AssetError::Io(e)),
        }
    }

    fn names(&self) -> Vec<String> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %self.root.display(), "Skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match self.to_name(entry.path()) {
                Some(name) => names.push(name),
                None => warn!("Skipping non UTF-8 path {}", entry.path().display()),
            }
        }

        debug!(root = %self.root.display(), count = names.len(), "Listed assets");
        names
    }

    fn stat(&self, name: &str) -> Result<AssetInfo, AssetError> {
        let path = self
            .get_path(name)
            .ok_or_else(|| AssetError::InfoNotFound(name.to_string()))?;

        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetError::InfoNotFound(name.to_string()));
            }
            Err(e) => return Err(AssetError::Io(e)),
        };

        let mut info = AssetInfo::file(name, meta.len()).with_mode(mode_bits(&meta));
        if let Ok(modified) = meta.modified() {
            info = info.with_modified(DateTime::<Utc>::from(modified));
        }
        if meta.is_dir() {
            info = info.dir();
        }
        Ok(info)
    }

    fn list_children(&self, prefix: &str) -> Result<Vec<String>, AssetError> {
        let normalized = path::normalize(prefix);
        let dir = self
            .get_path(normalized.trim_end_matches('/'))
            .ok_or_else(|| AssetError::NotFound(prefix.to_string()))?;

        let mut children = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => children.push(name),
                Err(raw) => warn!("Skipping non UTF-8 entry {raw:?}"),
            }
        }
        children.sort();
        Ok(children)
    }
}

#[cfg(unix)]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}
