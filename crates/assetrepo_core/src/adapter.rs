use crate::error::AssetError;
use crate::info::AssetInfo;
use crate::traits::AssetSource;

use bytes::Bytes;

type FetchFn = dyn Fn(&str) -> Result<Bytes, AssetError> + Send + Sync;
type MustFetchFn = dyn Fn(&str) -> Bytes + Send + Sync;
type NamesFn = dyn Fn() -> Vec<String> + Send + Sync;
type StatFn = dyn Fn(&str) -> Result<AssetInfo, AssetError> + Send + Sync;
type ChildrenFn = dyn Fn(&str) -> Result<Vec<String>, AssetError> + Send + Sync;

/// An [`AssetSource`] assembled from plain closures.
///
/// Every method forwards to its closure and returns whatever it returns.
pub struct FnSource {
    fetch: Box<FetchFn>,
    must_fetch: Box<MustFetchFn>,
    names: Box<NamesFn>,
    stat: Box<StatFn>,
    list_children: Box<ChildrenFn>,
}

impl FnSource {
    pub fn new<F, M, N, S, C>(fetch: F, must_fetch: M, names: N, stat: S, list_children: C) -> Self
    where
        F: Fn(&str) -> Result<Bytes, AssetError> + Send + Sync + 'static,
        M: Fn(&str) -> Bytes + Send + Sync + 'static,
        N: Fn() -> Vec<String> + Send + Sync + 'static,
        S: Fn(&str) -> Result<AssetInfo, AssetError> + Send + Sync + 'static,
        C: Fn(&str) -> Result<Vec<String>, AssetError> + Send + Sync + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            must_fetch: Box::new(must_fetch),
            names: Box::new(names),
            stat: Box::new(stat),
            list_children: Box::new(list_children),
        }
    }
}

impl AssetSource for FnSource {
    fn fetch(&self, name: &str) -> Result<Bytes, AssetError> {
        (self.fetch)(name)
    }

    fn must_fetch(&self, name: &str) -> Bytes {
        (self.must_fetch)(name)
    }

    fn names(&self) -> Vec<String> {
        (self.names)()
    }

    fn stat(&self, name: &str) -> Result<AssetInfo, AssetError> {
        (self.stat)(name)
    }

    fn list_children(&self, prefix: &str) -> Result<Vec<String>, AssetError> {
        (self.list_children)(prefix)
    }
}

impl std::fmt::Debug for FnSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}
