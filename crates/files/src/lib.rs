//! Filestore file ingestion
//!
//! This crate copies source files into a managed storage directory and keeps one fixed-width
//! metadata record per stored artifact.
//!
//! ## Components
//!
//! - [`paths`]: stateless filesystem predicates (existence, size, directory checks, extension
//!   extraction) plus single-file removal and non-clobbering copy.
//! - [`StorageEngine`]: validates a candidate source, creates the storage directory, derives a
//!   timestamped destination path and streams bytes into it.
//! - [`metadata`]: encodes [`FileMetadata`] into a constant-length little-endian record and
//!   performs create, load and in-place update of record files.
//! - [`FileIngestor`]: runs the whole pipeline for one source file.
//!
//! ## Storage Layout
//!
//! ```text
//! <storage_dir>/
//! ├── 20261018_142233_report.pdf        # artifact
//! └── 20261018_142233_report.pdf.meta   # 317-byte metadata record
//! ```
//!
//! The record naming shown above is the convention used by [`FileIngestor`]; the record store
//! itself accepts any path.
//!
//! ## Example Usage
//!
//! ```no_run
//! use filestore_files::{FileIngestor, StorageConfig};
//! use filestore_uuid::UuidGenerator;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ingestor = FileIngestor::new("catalog", StorageConfig::default(), UuidGenerator::new()?);
//! let stored = ingestor.ingest(Path::new("report.pdf"))?;
//! println!("{}", stored.metadata);
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod ingest;
pub mod metadata;
pub mod paths;
mod storage;
mod stream;

use std::path::PathBuf;

pub use config::StorageConfig;
pub use constants::{
    DEFAULT_COPY_BUFFER_SIZE, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_PATH_LEN, DEFAULT_STORAGE_DIR,
    FILENAME_CAPACITY, IDENTIFIER_CAPACITY, RECORD_FILE_EXTENSION, RECORD_LEN,
};
pub use ingest::{record_path_for, FileIngestor, StoredFile};
pub use metadata::FileMetadata;
pub use storage::StorageEngine;

/// Errors from the path and validation helpers in [`paths`]
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Nothing exists at the path, or it cannot be inspected
    #[error("no entry at {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry exists but could not be deleted
    #[error("failed to remove {}: {source}", .path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A copy target already exists and will not be overwritten
    #[error("target already exists: {}", .path.display())]
    TargetExists { path: PathBuf },

    /// The copy source could not be opened
    #[error("failed to open source {}: {source}", .path.display())]
    OpenSourceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The copy target could not be created
    #[error("failed to open target {}: {source}", .path.display())]
    OpenTargetFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the copy source failed part way through
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the copy target failed part way through
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the [`StorageEngine`]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The source is missing, not a regular file, or empty
    #[error("file does not exist or is empty: {}", .path.display())]
    NotFoundOrEmpty { path: PathBuf },

    /// The source exceeds the configured size ceiling
    #[error("file {} is {size} bytes, limit is {limit}", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The storage directory could not be created
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The composed destination path exceeds the configured maximum length
    #[error("path exceeds maximum length ({len} > {limit} bytes)")]
    PathTooLong { len: usize, limit: usize },

    /// The source could not be opened for reading
    #[error("failed to open source {}: {source}", .path.display())]
    OpenSourceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination could not be opened for writing
    #[error("failed to open target {}: {source}", .path.display())]
    OpenTargetFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the source failed part way through
    #[error("failed to read source {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the destination failed part way through
    #[error("failed to write target {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the metadata record store in [`metadata`]
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// A required argument was empty
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// The record file could not be opened
    #[error("failed to open record {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file is absent, empty or truncated
    #[error("record {} is empty or truncated ({actual} of {expected} bytes)", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// Reading the record file failed with an I/O error
    #[error("failed to read record {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A full-length record holds values that cannot be decoded
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Writing the record failed
    #[error("failed to write record {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Flushing the record to disk failed after the write completed
    #[error("failed to close record {}: {source}", .path.display())]
    CloseFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the [`FileIngestor`] pipeline
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The source path has no usable UTF-8 file name
    #[error("invalid source path: {0}")]
    InvalidSource(String),

    /// The timestamped destination is already occupied
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Errors from resolving a [`StorageConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

pub type PathResult<T> = std::result::Result<T, PathError>;
pub type StorageResult<T> = std::result::Result<T, StorageError>;
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;
pub type IngestResult<T> = std::result::Result<T, IngestError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
