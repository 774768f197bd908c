//! Fixed-width metadata records
//!
//! Each stored artifact has exactly one [`FileMetadata`] record, persisted to its own file.
//! Records always encode to [`RECORD_LEN`] bytes regardless of their contents, which lets
//! [`update`] rewrite a record in place without ever growing or truncating the file.
//!
//! # Wire layout
//!
//! All integers are little-endian and there is no padding between fields.
//!
//! ```text
//! offset  width  field
//!      0     37  identifier   UTF-8, NUL-padded
//!     37    256  filename     UTF-8, NUL-padded
//!    293      8  size         u64
//!    301      8  created_at   i64 seconds since the Unix epoch
//!    309      8  modified_at  i64 seconds since the Unix epoch
//! ```
//!
//! Text longer than its field is truncated when the record is built, not when it is written,
//! so a record in memory is always identical to the record a later [`load`] returns.
//!
//! Text fields are NUL-padded, not NUL-terminated. A value that fills its whole field (for
//! example a 37-byte identifier) is stored with no trailing NUL and decodes to all of its bytes.
//! A canonical 36-character identifier always leaves one NUL, so the field still reads as a
//! NUL-terminated string for generated identifiers.
//!
//! # Record lifecycle
//!
//! `absent → create → update* → (external deletion)`. Concurrent updates of the same record
//! file are not coordinated; the last writer wins.

use crate::constants::{
    CREATED_AT_OFFSET, FILENAME_CAPACITY, FILENAME_OFFSET, IDENTIFIER_CAPACITY,
    IDENTIFIER_OFFSET, MODIFIED_AT_OFFSET, RECORD_LEN, SIZE_OFFSET,
};
use crate::{MetadataError, MetadataResult};
use chrono::{DateTime, SubsecRound, Utc};
use filestore_types::BoundedText;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Metadata for one stored artifact.
///
/// `identifier` and `created_at` are fixed when the record is built. Changing `filename` or
/// `size` through the setters also advances `modified_at`. Timestamps are held at whole-second
/// precision, matching the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileMetadata {
    identifier: BoundedText<IDENTIFIER_CAPACITY>,
    filename: BoundedText<FILENAME_CAPACITY>,
    size: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    modified_at: DateTime<Utc>,
}

impl FileMetadata {
    /// Builds a record for a newly stored artifact, stamped with the current time.
    pub fn new(identifier: &str, filename: &str, size: u64) -> Self {
        let now = now_seconds();
        Self::from_parts(identifier, filename, size, now, now)
    }

    /// Builds a record from explicit field values.
    ///
    /// Over-long text is truncated to its field capacity and timestamps are truncated to whole
    /// seconds.
    pub fn from_parts(
        identifier: &str,
        filename: &str,
        size: u64,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier: BoundedText::new(identifier),
            filename: BoundedText::new(filename),
            size,
            created_at: created_at.trunc_subsecs(0),
            modified_at: modified_at.trunc_subsecs(0),
        }
    }

    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    pub fn filename(&self) -> &str {
        self.filename.as_str()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Renames the artifact and advances `modified_at`.
    pub fn set_filename(&mut self, filename: &str) {
        self.filename = BoundedText::new(filename);
        self.touch();
    }

    /// Records a new artifact size and advances `modified_at`.
    pub fn set_size(&mut self, size: u64) {
        self.size = size;
        self.touch();
    }

    /// Sets `modified_at` to the current time.
    pub fn touch(&mut self) {
        self.modified_at = now_seconds();
    }

    /// Encodes the record to its exact wire representation.
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];

        let mut identifier = [0u8; IDENTIFIER_CAPACITY];
        self.identifier.encode_into(&mut identifier);
        out[IDENTIFIER_OFFSET..FILENAME_OFFSET].copy_from_slice(&identifier);

        let mut filename = [0u8; FILENAME_CAPACITY];
        self.filename.encode_into(&mut filename);
        out[FILENAME_OFFSET..SIZE_OFFSET].copy_from_slice(&filename);

        out[SIZE_OFFSET..CREATED_AT_OFFSET].copy_from_slice(&self.size.to_le_bytes());
        out[CREATED_AT_OFFSET..MODIFIED_AT_OFFSET]
            .copy_from_slice(&self.created_at.timestamp().to_le_bytes());
        out[MODIFIED_AT_OFFSET..RECORD_LEN]
            .copy_from_slice(&self.modified_at.timestamp().to_le_bytes());
        out
    }

    /// Decodes a record from its wire representation.
    ///
    /// Bytes beyond [`RECORD_LEN`] are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Corrupt`] if `bytes` is shorter than a record, a text field is
    /// not valid UTF-8, or a timestamp is out of range.
    pub fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        if bytes.len() < RECORD_LEN {
            return Err(MetadataError::Corrupt(format!(
                "record too short: expected {RECORD_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let identifier = BoundedText::decode(&bytes[IDENTIFIER_OFFSET..FILENAME_OFFSET])
            .map_err(|e| MetadataError::Corrupt(format!("identifier is not UTF-8: {e}")))?;
        let filename = BoundedText::decode(&bytes[FILENAME_OFFSET..SIZE_OFFSET])
            .map_err(|e| MetadataError::Corrupt(format!("filename is not UTF-8: {e}")))?;

        let size = u64::from_le_bytes(field_at(bytes, SIZE_OFFSET));
        let created_at = timestamp_at(bytes, CREATED_AT_OFFSET, "created_at")?;
        let modified_at = timestamp_at(bytes, MODIFIED_AT_OFFSET, "modified_at")?;

        Ok(Self {
            identifier,
            filename,
            size,
            created_at,
            modified_at,
        })
    }

    /// Returns a human-readable rendering of every field.
    ///
    /// Diagnostic only; this is not part of the persisted format.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const CTIME: &str = "%a %b %e %H:%M:%S %Y";

        writeln!(f, "File Metadata:")?;
        writeln!(f, "  UUID: {}", self.identifier)?;
        writeln!(f, "  Filename: {}", self.filename)?;
        writeln!(f, "  Size: {} bytes", self.size)?;
        writeln!(f, "  Created at: {} UTC", self.created_at.format(CTIME))?;
        write!(f, "  Modified at: {} UTC", self.modified_at.format(CTIME))
    }
}

/// Writes `record` to `path`, replacing any existing content.
///
/// # Errors
///
/// - [`MetadataError::InvalidArgs`] if `path` is empty or the record has no identifier
/// - [`MetadataError::OpenFailed`] if the file cannot be created or truncated
/// - [`MetadataError::WriteFailed`] if the record cannot be written in full
/// - [`MetadataError::CloseFailed`] if flushing to disk fails after the write
pub fn create(path: &Path, record: &FileMetadata) -> MetadataResult<()> {
    check_args(path, Some(record))?;

    let mut file = File::create(path).map_err(|source| {
        tracing::warn!("failed to open record {}: {}", path.display(), source);
        MetadataError::OpenFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    write_record(&mut file, path, record)?;

    tracing::debug!(
        "created record {} for {}",
        path.display(),
        record.identifier()
    );
    Ok(())
}

/// Reads the record stored at `path`.
///
/// # Errors
///
/// - [`MetadataError::InvalidArgs`] if `path` is empty
/// - [`MetadataError::OpenFailed`] if the file cannot be opened (including when it is absent)
/// - [`MetadataError::ShortRead`] if the file holds fewer than [`RECORD_LEN`] bytes
/// - [`MetadataError::ReadFailed`] on any other read error
/// - [`MetadataError::Corrupt`] if the bytes do not decode
pub fn load(path: &Path) -> MetadataResult<FileMetadata> {
    check_args(path, None)?;

    let mut file = File::open(path).map_err(|source| {
        tracing::warn!("failed to open record {}: {}", path.display(), source);
        MetadataError::OpenFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let bytes = read_record(&mut file, path)?;
    FileMetadata::decode(&bytes)
}

/// Replaces the record at `path` with `record`, rewriting it in place.
///
/// A complete record must already exist. The whole record is overwritten: fields are not merged
/// with the previous contents, so callers carry forward whatever they want to keep. The file is
/// never created, truncated or extended.
///
/// # Errors
///
/// - [`MetadataError::InvalidArgs`] if `path` is empty or the record has no identifier
/// - [`MetadataError::ShortRead`] if the file is absent or shorter than [`RECORD_LEN`]; nothing
///   is written in that case
/// - [`MetadataError::OpenFailed`] if an existing file cannot be opened for read and write
/// - [`MetadataError::ReadFailed`] on any other read error
/// - [`MetadataError::WriteFailed`] if seeking or writing fails
/// - [`MetadataError::CloseFailed`] if flushing to disk fails after the write
pub fn update(path: &Path, record: &FileMetadata) -> MetadataResult<()> {
    check_args(path, Some(record))?;

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                tracing::warn!("no record to update at {}", path.display());
                MetadataError::ShortRead {
                    path: path.to_path_buf(),
                    expected: RECORD_LEN,
                    actual: 0,
                }
            } else {
                tracing::warn!("failed to open record {}: {}", path.display(), source);
                MetadataError::OpenFailed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    read_record(&mut file, path)?;

    file.seek(SeekFrom::Start(0))
        .map_err(|source| MetadataError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    write_record(&mut file, path, record)?;

    tracing::debug!(
        "updated record {} for {}",
        path.display(),
        record.identifier()
    );
    Ok(())
}

/// Returns the human-readable rendering of `record`.
pub fn describe(record: &FileMetadata) -> String {
    record.describe()
}

fn check_args(path: &Path, record: Option<&FileMetadata>) -> MetadataResult<()> {
    if path.as_os_str().is_empty() {
        return Err(MetadataError::InvalidArgs("record path is empty".into()));
    }

    if record.is_some_and(|r| r.identifier.is_empty()) {
        return Err(MetadataError::InvalidArgs(
            "record identifier is empty".into(),
        ));
    }

    Ok(())
}

/// Reads exactly one record's worth of bytes from the current position.
fn read_record(file: &mut File, path: &Path) -> MetadataResult<[u8; RECORD_LEN]> {
    let mut buffer = [0u8; RECORD_LEN];
    let mut filled = 0;

    while filled < RECORD_LEN {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                tracing::warn!("error reading record {}: {}", path.display(), source);
                return Err(MetadataError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    if filled < RECORD_LEN {
        tracing::warn!("record {} is empty or corrupted", path.display());
        return Err(MetadataError::ShortRead {
            path: path.to_path_buf(),
            expected: RECORD_LEN,
            actual: filled,
        });
    }

    Ok(buffer)
}

fn write_record(file: &mut File, path: &Path, record: &FileMetadata) -> MetadataResult<()> {
    file.write_all(&record.encode()).map_err(|source| {
        tracing::warn!("error writing record {}: {}", path.display(), source);
        MetadataError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    file.sync_all().map_err(|source| {
        tracing::warn!("error closing record {}: {}", path.display(), source);
        MetadataError::CloseFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn now_seconds() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

fn field_at(bytes: &[u8], offset: usize) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes[offset..offset + 8]);
    out
}

fn timestamp_at(bytes: &[u8], offset: usize, field: &str) -> MetadataResult<DateTime<Utc>> {
    let seconds = i64::from_le_bytes(field_at(bytes, offset));
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| MetadataError::Corrupt(format!("{field} out of range: {seconds}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEST_UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn ts(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    fn test_metadata() -> FileMetadata {
        FileMetadata::from_parts(
            TEST_UUID,
            "test_file.txt",
            1234,
            ts(1_700_000_000),
            ts(1_700_000_100),
        )
    }

    #[test]
    fn test_record_len_is_fixed() {
        assert_eq!(RECORD_LEN, 317);

        let small = FileMetadata::from_parts("a", "b", 0, ts(0), ts(0));
        let large = FileMetadata::from_parts(
            &"x".repeat(100),
            &"y".repeat(1000),
            u64::MAX,
            ts(i32::MAX as i64),
            ts(i32::MAX as i64),
        );

        assert_eq!(small.encode().len(), large.encode().len());
    }

    #[test]
    fn test_encode_layout_is_little_endian() {
        let record = FileMetadata::from_parts("id", "f", 0x0102, ts(1), ts(2));
        let bytes = record.encode();

        assert_eq!(&bytes[0..3], b"id\0");
        assert_eq!(&bytes[37..39], b"f\0");
        assert_eq!(&bytes[293..301], &[0x02, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[301..309], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[309..317], &[2, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_full_width_identifier_has_no_terminator() {
        let full = "i".repeat(IDENTIFIER_CAPACITY);
        let record = FileMetadata::from_parts(&full, "f", 0, ts(0), ts(0));
        let bytes = record.encode();

        assert_eq!(&bytes[..IDENTIFIER_CAPACITY], full.as_bytes());
        assert_eq!(bytes[FILENAME_OFFSET], b'f');
        assert_eq!(FileMetadata::decode(&bytes).unwrap().identifier(), full);

        let canonical = test_metadata().encode();
        assert_eq!(canonical[TEST_UUID.len()], 0);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let mut bytes = test_metadata().encode();
        bytes[FILENAME_OFFSET] = 0xff;

        assert!(matches!(
            FileMetadata::decode(&bytes),
            Err(MetadataError::Corrupt(_))
        ));
    }

    #[test]
    fn test_decode_rejects_out_of_range_timestamp() {
        let mut bytes = test_metadata().encode();
        bytes[CREATED_AT_OFFSET..MODIFIED_AT_OFFSET].copy_from_slice(&i64::MAX.to_le_bytes());

        assert!(matches!(
            FileMetadata::decode(&bytes),
            Err(MetadataError::Corrupt(_))
        ));
    }

    #[test]
    fn test_from_parts_truncates_subseconds() {
        let precise = DateTime::from_timestamp(1_700_000_000, 987_654_321).unwrap();
        let record = FileMetadata::from_parts(TEST_UUID, "f", 1, precise, precise);

        assert_eq!(record.created_at(), ts(1_700_000_000));
    }

    #[test]
    fn test_setters_advance_modified_at_only() {
        let mut record = test_metadata();

        record.set_filename("renamed.txt");
        record.set_size(99);

        assert_eq!(record.identifier(), TEST_UUID);
        assert_eq!(record.created_at(), ts(1_700_000_000));
        assert_eq!(record.filename(), "renamed.txt");
        assert_eq!(record.size(), 99);
        assert!(record.modified_at() > ts(1_700_000_100));
    }

    #[test]
    fn test_create_writes_exactly_one_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test_metadata.dat");

        create(&path, &test_metadata()).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), RECORD_LEN as u64);
    }

    #[test]
    fn test_create_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test_metadata.dat");
        let record = test_metadata();

        create(&path, &record).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, record);
    }

    #[test]
    fn test_round_trip_applies_truncation_consistently() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("long.dat");
        let long_name = "n".repeat(FILENAME_CAPACITY + 50);
        let record = FileMetadata::new(TEST_UUID, &long_name, 1);

        create(&path, &record).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.filename().len(), FILENAME_CAPACITY);
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_create_overwrites_existing_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("record.dat");
        fs::write(&path, vec![0xaa; 1000]).unwrap();

        create(&path, &test_metadata()).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), RECORD_LEN as u64);
        assert_eq!(load(&path).unwrap(), test_metadata());
    }

    #[test]
    fn test_create_rejects_empty_path() {
        let result = create(Path::new(""), &test_metadata());
        assert!(matches!(result, Err(MetadataError::InvalidArgs(_))));
    }

    #[test]
    fn test_create_rejects_record_without_identifier() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("record.dat");
        let record = FileMetadata::new("", "file.txt", 1);

        assert!(matches!(
            create(&path, &record),
            Err(MetadataError::InvalidArgs(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_create_in_missing_directory_fails_to_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("record.dat");

        assert!(matches!(
            create(&path, &test_metadata()),
            Err(MetadataError::OpenFailed { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_open_failure() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            load(&temp.path().join("missing.dat")),
            Err(MetadataError::OpenFailed { .. })
        ));
    }

    #[test]
    fn test_load_empty_file_is_short_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.dat");
        fs::write(&path, b"").unwrap();

        match load(&path) {
            Err(MetadataError::ShortRead {
                expected, actual, ..
            }) => {
                assert_eq!(expected, RECORD_LEN);
                assert_eq!(actual, 0);
            }
            other => panic!("Expected ShortRead, got {:?}", other),
        }
    }

    #[test]
    fn test_load_truncated_file_is_short_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("truncated.dat");
        fs::write(&path, &test_metadata().encode()[..RECORD_LEN - 1]).unwrap();

        assert!(matches!(
            load(&path),
            Err(MetadataError::ShortRead { actual, .. }) if actual == RECORD_LEN - 1
        ));
    }

    #[test]
    fn test_load_rejects_empty_path() {
        assert!(matches!(
            load(Path::new("")),
            Err(MetadataError::InvalidArgs(_))
        ));
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test_metadata.dat");
        let original = test_metadata();
        create(&path, &original).unwrap();

        let replacement = FileMetadata::from_parts(
            "00000000-0000-4000-8000-000000000000",
            "updated_file.txt",
            5678,
            ts(1_800_000_000),
            ts(1_800_000_001),
        );
        update(&path, &replacement).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, replacement);
        assert_ne!(loaded.identifier(), original.identifier());
        assert_eq!(fs::metadata(&path).unwrap().len(), RECORD_LEN as u64);
    }

    #[test]
    fn test_update_carrying_fields_forward() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test_metadata.dat");
        create(&path, &test_metadata()).unwrap();

        let mut updated = load(&path).unwrap();
        updated.set_filename("updated_file.txt");
        updated.set_size(5678);
        update(&path, &updated).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.identifier(), TEST_UUID);
        assert_eq!(loaded.filename(), "updated_file.txt");
        assert_eq!(loaded.size(), 5678);
        assert_eq!(loaded.created_at(), ts(1_700_000_000));
        assert_eq!(loaded.modified_at(), updated.modified_at());
    }

    #[test]
    fn test_update_preserves_trailing_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("padded.dat");
        let mut content = test_metadata().encode().to_vec();
        content.extend_from_slice(b"trailer");
        fs::write(&path, &content).unwrap();

        let mut record = test_metadata();
        record.set_size(1);
        update(&path, &record).unwrap();

        let after = fs::read(&path).unwrap();
        assert_eq!(after.len(), RECORD_LEN + 7);
        assert_eq!(&after[RECORD_LEN..], b"trailer");
        assert_eq!(load(&path).unwrap(), record);
    }

    #[test]
    fn test_update_missing_file_is_short_read_and_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.dat");

        let result = update(&path, &test_metadata());

        assert!(matches!(result, Err(MetadataError::ShortRead { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_update_truncated_file_is_short_read_and_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("truncated.dat");
        let partial = test_metadata().encode()[..100].to_vec();
        fs::write(&path, &partial).unwrap();

        let result = update(&path, &test_metadata());

        assert!(matches!(result, Err(MetadataError::ShortRead { actual: 100, .. })));
        assert_eq!(fs::read(&path).unwrap(), partial);
    }

    #[test]
    fn test_update_empty_file_is_short_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.dat");
        fs::write(&path, b"").unwrap();

        assert!(matches!(
            update(&path, &test_metadata()),
            Err(MetadataError::ShortRead { actual: 0, .. })
        ));
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_update_rejects_empty_path() {
        assert!(matches!(
            update(Path::new(""), &test_metadata()),
            Err(MetadataError::InvalidArgs(_))
        ));
    }

    #[test]
    fn test_describe_lists_every_field() {
        let text = describe(&test_metadata());

        assert!(text.starts_with("File Metadata:"));
        assert!(text.contains(&format!("UUID: {}", TEST_UUID)));
        assert!(text.contains("Filename: test_file.txt"));
        assert!(text.contains("Size: 1234 bytes"));
        // 1_700_000_000 is Tue Nov 14 22:13:20 2023 UTC
        assert!(text.contains("Created at: Tue Nov 14 22:13:20 2023 UTC"));
        assert!(text.contains("Modified at: Tue Nov 14 22:15:00 2023 UTC"));
    }

    #[test]
    fn test_serde_json_uses_epoch_seconds() {
        let json = serde_json::to_value(test_metadata()).unwrap();

        assert_eq!(json["identifier"], TEST_UUID);
        assert_eq!(json["size"], 1234);
        assert_eq!(json["created_at"], 1_700_000_000);

        let back: FileMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, test_metadata());
    }
}
