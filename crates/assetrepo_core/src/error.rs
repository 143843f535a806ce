use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset {0} not found")]
    NotFound(String),

    #[error("Asset info for {0} not found")]
    InfoNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source error: {0}")]
    Generic(String),
}

impl AssetError {
    /// True for both lookup misses, whichever query produced them.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InfoNotFound(_))
    }
}
