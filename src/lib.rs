//! # assetrepo
//!
//! Uniform, read-only asset lookup over heterogeneous stores, and a
//! [`Layered`](layered::Layered) repository that merges them into one
//! namespace. Concrete sources live behind features:
//!
//! * `fs`: [`FileSystemSource`](fs::FileSystemSource), a directory tree.
//! * `embed`: [`EmbeddedSource`](embed::EmbeddedSource), blobs held in memory.

pub use assetrepo_core::*;

#[cfg(feature = "fs")]
pub mod fs {
    pub use assetrepo_fs::*;
}

#[cfg(feature = "embed")]
pub mod embed {
    pub use assetrepo_embed::*;
}

pub mod prelude {
    pub use assetrepo_core::prelude::*;

    #[cfg(feature = "fs")]
    pub use assetrepo_fs::FileSystemSource;

    #[cfg(feature = "embed")]
    pub use assetrepo_embed::EmbeddedSource;
}
