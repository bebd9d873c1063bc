use crate::types::Compression;
use thiserror::Error;

/// Errors that can occur during BLP encoding operations
#[derive(Debug, Error)]
pub enum Error {
    /// Image dimensions cannot be stored, e.g. they are not powers of two
    #[error("Invalid image: {0}")]
    Validation(String),
    /// Writing the encoded bytes to the output sink failed
    #[error("Failed to write BLP data: {0}")]
    Serialization(#[from] std::io::Error),
    /// The encoder has no implementation for the compression
    #[error("Encoding with {0} compression is not supported")]
    UnsupportedCompression(Compression),
    /// Filesystem operation failed
    #[error("Failed to proceed {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}
