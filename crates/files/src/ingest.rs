//! End-to-end ingestion of source files
//!
//! [`FileIngestor`] runs the full pipeline for one source file:
//!
//! 1. validate the source against the configured size limits
//! 2. create the storage directory if it is missing
//! 3. derive the timestamped destination path
//! 4. stream the bytes into place
//! 5. write a fresh metadata record next to the copy
//!
//! It also offers the follow-up operations that rewrite an existing record in place.
//!
//! # Record placement
//!
//! The record for `<storage_dir>/<stamp>_<name>` is written to
//! `<storage_dir>/<stamp>_<name>.meta` (see [`record_path_for`]).
//!
//! # Failure handling
//!
//! - A destination or record path that already exists (same name within the same second, or an
//!   earlier artifact whose name ends in `.meta`) is never overwritten
//! - A failed copy has its partial destination removed before the error is returned
//! - A failure while writing the record leaves the copied artifact in place; the two files are
//!   not updated atomically

use crate::constants::RECORD_FILE_EXTENSION;
use crate::metadata::{self, FileMetadata};
use crate::paths;
use crate::{IngestError, IngestResult, StorageConfig, StorageEngine};
use filestore_uuid::{IdentifierGenerator, UuidGenerator};
use std::path::{Path, PathBuf};

/// Outcome of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Location of the copied artifact inside the storage directory
    pub destination_path: PathBuf,

    /// Location of the artifact's metadata record
    pub record_path: PathBuf,

    /// The record as written
    pub metadata: FileMetadata,
}

/// Ingests source files into one managed storage directory.
///
/// # Design
///
/// - Directory-scoped: each ingestor places files under a single storage directory
/// - Lazy: the storage directory is created on first ingestion, not at construction
/// - Pluggable identifiers: records are keyed by whatever the [`IdentifierGenerator`] returns
#[derive(Debug)]
pub struct FileIngestor<G = UuidGenerator> {
    storage_dir: PathBuf,
    engine: StorageEngine,
    generator: G,
}

impl<G: IdentifierGenerator> FileIngestor<G> {
    /// Creates a new `FileIngestor`
    ///
    /// # Arguments
    ///
    /// * `storage_dir` - Directory that will hold copied artifacts and their records
    /// * `config` - Size and path limits to enforce
    /// * `generator` - Source of record identifiers
    pub fn new(storage_dir: impl Into<PathBuf>, config: StorageConfig, generator: G) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            engine: StorageEngine::new(config),
            generator,
        }
    }

    /// Returns the managed storage directory
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Returns the underlying storage engine
    pub fn engine(&self) -> &StorageEngine {
        &self.engine
    }

    /// Copies `source` into storage and writes its metadata record
    ///
    /// The record's filename is the source's file name and its size is the number of bytes
    /// copied.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` if:
    /// - The source fails validation (missing, empty, too large)
    /// - The source path has no UTF-8 file name
    /// - The storage directory cannot be created
    /// - The destination path is too long, or it or its record path already exists
    /// - Copying fails (the partial destination is removed)
    /// - The record cannot be written
    pub fn ingest(&self, source: &Path) -> IngestResult<StoredFile> {
        self.engine.validate(source)?;

        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                IngestError::InvalidSource(format!(
                    "no UTF-8 file name in {}",
                    source.display()
                ))
            })?;

        self.engine.ensure_directory(&self.storage_dir)?;

        let destination_path = self
            .engine
            .unique_destination_path(&self.storage_dir, file_name)?;
        let record_path = record_path_for(&destination_path);
        // Either slot may already hold an earlier artifact, e.g. `<stamp>_a.txt.meta`
        // stored before `a.txt` in the same second.
        for occupied in [&destination_path, &record_path] {
            if paths::file_exists(occupied) {
                return Err(IngestError::DestinationExists(occupied.clone()));
            }
        }

        let size = match self.engine.save(source, &destination_path) {
            Ok(size) => size,
            Err(e) => {
                discard_partial(&destination_path);
                return Err(e.into());
            }
        };

        let record = FileMetadata::new(&self.generator.new_identifier(), file_name, size);
        metadata::create(&record_path, &record)?;

        tracing::info!(
            "ingested {} as {} ({} bytes, id {})",
            source.display(),
            destination_path.display(),
            size,
            record.identifier()
        );

        Ok(StoredFile {
            destination_path,
            record_path,
            metadata: record,
        })
    }

    /// Changes the filename stored in an existing record
    ///
    /// Every other field is carried forward from the current record; `modified_at` advances.
    pub fn rename(&self, record_path: &Path, filename: &str) -> IngestResult<FileMetadata> {
        let mut record = metadata::load(record_path)?;
        record.set_filename(filename);
        metadata::update(record_path, &record)?;
        Ok(record)
    }

    /// Re-reads an artifact's size from disk and stores it in its record
    ///
    /// Every other field is carried forward from the current record; `modified_at` advances.
    pub fn refresh_size(&self, record_path: &Path, artifact: &Path) -> IngestResult<FileMetadata> {
        let size = paths::file_size(artifact)?;
        let mut record = metadata::load(record_path)?;
        record.set_size(size);
        metadata::update(record_path, &record)?;
        Ok(record)
    }
}

/// Returns the record path paired with an artifact: the artifact path plus `.meta`.
pub fn record_path_for(artifact: &Path) -> PathBuf {
    let mut record = artifact.as_os_str().to_owned();
    record.push(".");
    record.push(RECORD_FILE_EXTENSION);
    PathBuf::from(record)
}

fn discard_partial(destination: &Path) {
    if !paths::file_exists(destination) {
        return;
    }

    if let Err(e) = paths::remove_file(destination) {
        tracing::warn!(
            "failed to remove partial copy {}: {}",
            destination.display(),
            e
        );
    }
}
