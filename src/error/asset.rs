use std::path::PathBuf;
use thiserror::Error;

/// Failures while caching the static game-data assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset file could not be read from disk.
    #[error("Failed to read asset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset file is not a JSON array of objects.
    #[error("Failed to parse asset {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record lacks the field its table is keyed by.
    ///
    /// Records must carry a string or integer value for the key field so they can
    /// be looked up by commands.
    #[error("Record {index} in {} has no usable `{key}` field", path.display())]
    MissingKey {
        path: PathBuf,
        index: usize,
        key: &'static str,
    },
}
