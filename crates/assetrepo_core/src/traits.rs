use crate::error::*;
use crate::info::AssetInfo;

use bytes::Bytes;

/// Anything that can serve named, read-only blobs.
///
/// Names are case-sensitive and use `/` as a nominal separator. They are
/// only required to be unique within one source.
pub trait AssetSource: Send + Sync + 'static {
    fn fetch(&self, name: &str) -> Result<Bytes, AssetError>;

    /// Like [`fetch`](Self::fetch) but panics when the asset cannot be read.
    ///
    /// Only call this for assets the program cannot run without.
    #[track_caller]
    fn must_fetch(&self, name: &str) -> Bytes {
        must(name, self.fetch(name))
    }

    /// Every name this source can serve, as of the time of the call.
    fn names(&self) -> Vec<String>;

    fn stat(&self, name: &str) -> Result<AssetInfo, AssetError>;

    /// Directory-style listing. What counts as a child is up to the source.
    fn list_children(&self, prefix: &str) -> Result<Vec<String>, AssetError>;
}

/// Unwraps a fetch result or aborts with the asset name and the cause.
///
/// This is intentionally not recoverable: a missing required asset is a
/// programming error, not a runtime condition.
#[track_caller]
pub fn must<T>(name: &str, result: Result<T, AssetError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("asset: Asset({name}): {e}"),
    }
}
