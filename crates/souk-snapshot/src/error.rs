use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encode(String),

    #[error("snapshot decoding failed: {0}")]
    Decode(String),

    #[error("malformed snapshot: {0}")]
    Malformed(String),

    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u16),

    #[error("snapshot checksum mismatch")]
    ChecksumMismatch,
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
