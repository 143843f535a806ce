//! # assetrepo core
//!
//! Types and traits shared by every asset source.
//!
//! - **[`AssetSource`](traits::AssetSource)**: The contract a backing store implements (embedded blobs, directories, archives).
//! - **[`Layered`](layered::Layered)**: Merges several sources into one namespace. The first source registered wins a name.
//! - **[`FnSource`](adapter::FnSource)**: Builds a source out of five closures.

pub mod adapter;
pub mod error;
pub mod info;
pub mod layered;
pub mod path;
pub mod traits;

pub mod prelude {
    pub use super::adapter::*;
    pub use super::error::*;
    pub use super::info::*;
    pub use super::layered::*;
    pub use super::traits::*;
}
