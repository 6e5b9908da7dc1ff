use thiserror::Error;

/// Failures of the persistent key-value store or of the data kept in it.
///
/// These never escape [`crate::store::ColumnStateStore`]; they exist so the
/// boundary can log precisely what went wrong before degrading to a no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to read key `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("stored column state is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("column state could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported page size {0}, expected one of 10, 20, 50 or 100")]
pub struct PageSizeError(pub u32);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dashboard config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("synthetic row count must be positive")]
    EmptySyntheticSet,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("embedded sample dataset could not be decoded: {0}")]
    Sample(#[from] serde_json::Error),
}
