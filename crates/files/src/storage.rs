//! Validation and placement of source files in managed storage
//!
//! The [`StorageEngine`] covers the first half of ingestion: deciding whether a source file is
//! acceptable, making sure the storage directory exists, choosing where the copy goes and
//! streaming the bytes there.
//!
//! # Destination naming
//!
//! Copies are named `<directory>/<YYYYMMDD_HHMMSS>_<file name>` using local wall-clock time at
//! one-second resolution. Two placements of the same file name within the same second produce
//! the same path. Callers that need stronger uniqueness must detect or avoid the collision
//! themselves; [`crate::FileIngestor`] refuses to overwrite an occupied destination.
//!
//! # Failure model
//!
//! - Every file handle is scoped to the call that opened it and released on all exit paths
//! - [`StorageEngine::save`] does not roll back: after a read or write failure the destination
//!   may hold a partial copy, and the caller is responsible for removing it
//! - The source file is only ever read

use crate::constants::DESTINATION_TIMESTAMP_FORMAT;
use crate::stream::{copy_stream, StreamError};
use crate::{StorageConfig, StorageError, StorageResult};
use chrono::{Local, NaiveDateTime};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Places validated source files into a managed storage directory.
///
/// The engine holds only its [`StorageConfig`]; every operation takes the paths it works on.
#[derive(Debug, Clone, Default)]
pub struct StorageEngine {
    config: StorageConfig,
}

impl StorageEngine {
    /// Creates a new `StorageEngine` with the given limits.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Returns the limits this engine enforces.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Checks that `path` is an acceptable source file.
    ///
    /// Side-effect free.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFoundOrEmpty`] if `path` does not exist, is not a regular file, or
    ///   is zero bytes long
    /// - [`StorageError::TooLarge`] if the file exceeds the configured maximum size
    pub fn validate(&self, path: &Path) -> StorageResult<()> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                return Err(StorageError::NotFoundOrEmpty {
                    path: path.to_path_buf(),
                })
            }
        };

        let size = metadata.len();
        if size == 0 {
            return Err(StorageError::NotFoundOrEmpty {
                path: path.to_path_buf(),
            });
        }

        if size > self.config.max_file_size() {
            return Err(StorageError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.config.max_file_size(),
            });
        }

        Ok(())
    }

    /// Makes sure `path` is an existing directory.
    ///
    /// Succeeds without touching anything if the directory already exists. Otherwise creates
    /// exactly that directory (parents are not created) with mode `0755` on Unix.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CreateFailed`] if creation fails or if `path` exists but is not a
    /// directory.
    pub fn ensure_directory(&self, path: &Path) -> StorageResult<()> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => return Ok(()),
            Ok(_) => {
                return Err(StorageError::CreateFailed {
                    path: path.to_path_buf(),
                    source: io::Error::other("path exists but is not a directory"),
                })
            }
            Err(_) => {}
        }

        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use crate::constants::STORAGE_DIR_MODE;
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(STORAGE_DIR_MODE);
        }

        match builder.create(path) {
            Ok(()) => {
                tracing::debug!("created storage directory {}", path.display());
                Ok(())
            }
            // Lost a race with another creator; the directory is there now
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(source) => Err(StorageError::CreateFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Composes `directory/<YYYYMMDD_HHMMSS>_<file_name>` from the current local time.
    ///
    /// See [`Self::unique_destination_path_at`] for the rules.
    pub fn unique_destination_path(
        &self,
        directory: &Path,
        file_name: &str,
    ) -> StorageResult<PathBuf> {
        self.unique_destination_path_at(directory, file_name, Local::now().naive_local())
    }

    /// Composes `directory/<YYYYMMDD_HHMMSS>_<file_name>` for the given wall-clock time.
    ///
    /// The timestamp has one-second resolution and no counter or random suffix is added, so
    /// identical inputs always yield identical paths.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::PathTooLong`] if the composed path is longer than the configured
    /// maximum path length in bytes.
    pub fn unique_destination_path_at(
        &self,
        directory: &Path,
        file_name: &str,
        at: NaiveDateTime,
    ) -> StorageResult<PathBuf> {
        let stamped = format!("{}_{}", at.format(DESTINATION_TIMESTAMP_FORMAT), file_name);
        let destination = directory.join(stamped);

        let len = destination.as_os_str().len();
        if len > self.config.max_path_len() {
            return Err(StorageError::PathTooLong {
                len,
                limit: self.config.max_path_len(),
            });
        }

        Ok(destination)
    }

    /// Copies `source` to `destination`, returning the number of bytes copied.
    ///
    /// The source is opened first, so a missing source never creates a destination file. The
    /// destination is created or truncated. Data moves through a buffer of the configured
    /// copy buffer size.
    ///
    /// # Errors
    ///
    /// - [`StorageError::OpenSourceFailed`] if the source cannot be opened
    /// - [`StorageError::OpenTargetFailed`] if the destination cannot be opened
    /// - [`StorageError::ReadFailed`] if reading the source fails mid-copy
    /// - [`StorageError::WriteFailed`] on any write or flush failure
    ///
    /// After a read or write failure the destination is left in an indeterminate state.
    pub fn save(&self, source: &Path, destination: &Path) -> StorageResult<u64> {
        let mut source_file = File::open(source).map_err(|e| {
            tracing::warn!("failed to open source {}: {}", source.display(), e);
            StorageError::OpenSourceFailed {
                path: source.to_path_buf(),
                source: e,
            }
        })?;

        let mut target_file = File::create(destination).map_err(|e| {
            tracing::warn!("failed to open target {}: {}", destination.display(), e);
            StorageError::OpenTargetFailed {
                path: destination.to_path_buf(),
                source: e,
            }
        })?;

        let copied = copy_stream(
            &mut source_file,
            &mut target_file,
            self.config.copy_buffer_size(),
        )
        .map_err(|e| match e {
            StreamError::Read(e) => StorageError::ReadFailed {
                path: source.to_path_buf(),
                source: e,
            },
            StreamError::Write(e) => StorageError::WriteFailed {
                path: destination.to_path_buf(),
                source: e,
            },
        })?;

        tracing::debug!(
            "saved {} bytes from {} to {}",
            copied,
            source.display(),
            destination.display()
        );
        Ok(copied)
    }
}
