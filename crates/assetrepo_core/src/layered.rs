//! Several [`AssetSource`]s merged into one namespace.
//!
//! Sources are consulted in registration order: when two sources both list
//! a name, the one registered first serves it. The merged index is derived
//! data and is rebuilt from scratch every time a source is added, which
//! keeps it trivially consistent at the cost of an O(total names) walk.
//! Registration is expected to happen at startup, so that cost is paid
//! rarely.

use crate::error::AssetError;
use crate::info::AssetInfo;
use crate::path;
use crate::traits::{AssetSource, must};

use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Name lookup derived from the registered sources.
#[derive(Debug, Default)]
struct Index {
    /// Name -> position of the winning source in `Layered::sources`.
    owners: BTreeMap<String, usize>,
    /// Every distinct name, sorted.
    names: Vec<String>,
}

impl Index {
    fn build(sources: &[Arc<dyn AssetSource>]) -> Self {
        let mut owners = BTreeMap::new();
        let mut shadowed = 0usize;

        for (position, source) in sources.iter().enumerate() {
            for name in source.names() {
                if owners.contains_key(&name) {
                    shadowed += 1;
                    continue;
                }
                owners.insert(name, position);
            }
        }

        let names: Vec<String> = owners.keys().cloned().collect();
        debug!(
            sources = sources.len(),
            names = names.len(),
            shadowed,
            "rebuilt layered asset index"
        );

        Self { owners, names }
    }
}

/// A read-only view over an ordered stack of asset sources.
///
/// ```
/// use assetrepo_core::prelude::*;
/// use bytes::Bytes;
///
/// let base = FnSource::new(
///     |name| Ok(Bytes::from(format!("base:{name}"))),
///     |name| Bytes::from(format!("base:{name}")),
///     || vec!["ui/theme.css".to_string()],
///     |name| Ok(AssetInfo::file(name, 0)),
///     |_| Ok(Vec::new()),
/// );
///
/// let mut repo = Layered::new();
/// repo.add_source(base);
/// assert_eq!(repo.get("ui/theme.css").unwrap(), "base:ui/theme.css");
/// assert_eq!(repo.dir("ui/").unwrap(), vec!["theme.css"]);
/// ```
#[derive(Default)]
pub struct Layered {
    sources: Vec<Arc<dyn AssetSource>>,
    index: Index,
}

impl Layered {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every source in iteration order and indexes once.
    pub fn with_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn AssetSource>>,
    {
        let sources: Vec<_> = sources.into_iter().collect();
        let index = Index::build(&sources);
        Self { sources, index }
    }

    /// Appends `source` below every source already registered.
    pub fn add_source(&mut self, source: impl AssetSource) {
        self.add_shared(Arc::new(source));
    }

    /// Like [`add_source`](Self::add_source) for a source that is shared
    /// with other owners.
    pub fn add_shared(&mut self, source: Arc<dyn AssetSource>) {
        self.sources.push(source);
        self.reindex();
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<Bytes, AssetError> {
        self.owner(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?
            .fetch(name)
    }

    /// Returns the asset or panics.
    ///
    /// Meant for assets whose absence is a bug. The panic message carries
    /// the asset name and the underlying error.
    #[track_caller]
    pub fn must_get(&self, name: &str) -> Bytes {
        must(name, self.get(name))
    }

    pub fn info(&self, name: &str) -> Result<AssetInfo, AssetError> {
        self.owner(name)
            .ok_or_else(|| AssetError::InfoNotFound(name.to_string()))?
            .stat(name)
    }

    /// Lists the distinct first path segments of every name starting with
    /// `prefix`, sorted. Backslashes in `prefix` are treated as `/`.
    ///
    /// Never fails; a prefix nothing matches yields an empty list.
    pub fn dir(&self, prefix: &str) -> Result<Vec<String>, AssetError> {
        let normalized = path::normalize(prefix);
        let prefix: &str = &normalized;

        let names = &self.index.names;
        let start = names.partition_point(|name| name.as_str() < prefix);
        let matching = names[start..]
            .iter()
            .map(String::as_str)
            .take_while(|name| name.starts_with(prefix));

        Ok(path::children(matching, prefix))
    }

    /// Every distinct name across all sources, sorted.
    pub fn names(&self) -> &[String] {
        &self.index.names
    }

    fn owner(&self, name: &str) -> Option<&dyn AssetSource> {
        self.index
            .owners
            .get(name)
            .map(|&position| self.sources[position].as_ref())
    }

    fn reindex(&mut self) {
        self.index = Index::build(&self.sources);
    }
}

impl FromIterator<Arc<dyn AssetSource>> for Layered {
    fn from_iter<I: IntoIterator<Item = Arc<dyn AssetSource>>>(iter: I) -> Self {
        Self::with_sources(iter)
    }
}

impl std::fmt::Debug for Layered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layered")
            .field("sources", &self.sources.len())
            .field("names", &self.index.names.len())
            .finish()
    }
}

/// A layered repository is itself a source, so stacks can be nested.
impl AssetSource for Layered {
    fn fetch(&self, name: &str) -> Result<Bytes, AssetError> {
        self.get(name)
    }

    fn must_fetch(&self, name: &str) -> Bytes {
        self.must_get(name)
    }

    fn names(&self) -> Vec<String> {
        self.index.names.clone()
    }

    fn stat(&self, name: &str) -> Result<AssetInfo, AssetError> {
        self.info(name)
    }

    fn list_children(&self, prefix: &str) -> Result<Vec<String>, AssetError> {
        self.dir(prefix)
    }
}
