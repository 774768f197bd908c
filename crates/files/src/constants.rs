//! Constants used throughout the filestore files crate.
//!
//! Limits listed here are defaults; [`crate::StorageConfig`] may override the ones marked as such.

/// Default ceiling on the size of an ingested source file (5 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Default maximum length in bytes of a composed destination path.
pub const DEFAULT_MAX_PATH_LEN: usize = 256;

/// Default size of the intermediate buffer used when streaming file content.
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 1024;

/// Default managed storage directory when none is configured.
pub const DEFAULT_STORAGE_DIR: &str = "catalog";

/// Extension appended to an artifact path to name its metadata record.
pub const RECORD_FILE_EXTENSION: &str = "meta";

/// `strftime` pattern for the timestamp prefix of destination file names.
pub(crate) const DESTINATION_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Permission bits for a newly created storage directory (rwxr-xr-x, before umask).
#[cfg(unix)]
pub(crate) const STORAGE_DIR_MODE: u32 = 0o755;

/// Byte capacity of the identifier field in a metadata record.
pub const IDENTIFIER_CAPACITY: usize = 37;

/// Byte capacity of the filename field in a metadata record.
pub const FILENAME_CAPACITY: usize = 256;

pub(crate) const IDENTIFIER_OFFSET: usize = 0;
pub(crate) const FILENAME_OFFSET: usize = IDENTIFIER_OFFSET + IDENTIFIER_CAPACITY;
pub(crate) const SIZE_OFFSET: usize = FILENAME_OFFSET + FILENAME_CAPACITY;
pub(crate) const CREATED_AT_OFFSET: usize = SIZE_OFFSET + 8;
pub(crate) const MODIFIED_AT_OFFSET: usize = CREATED_AT_OFFSET + 8;

/// Exact byte length of an encoded metadata record.
pub const RECORD_LEN: usize = MODIFIED_AT_OFFSET + 8;
