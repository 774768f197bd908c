//! Stateless filesystem helpers.
//!
//! These functions inspect entries with `stat` semantics (symlinks are followed) and carry no
//! state between calls. Only [`remove_file`] and [`copy_file`] have side effects.

use crate::constants::DEFAULT_COPY_BUFFER_SIZE;
use crate::stream::{copy_stream, StreamError};
use crate::{PathError, PathResult};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Returns true if any entry (file, directory or other) exists at `path`.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns whether `path` is a directory.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if nothing exists at `path`, which is distinct from
/// `Ok(false)` for an existing non-directory.
pub fn is_directory(path: &Path) -> PathResult<bool> {
    fs::metadata(path)
        .map(|m| m.is_dir())
        .map_err(|source| PathError::NotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Returns the size of the entry at `path` in bytes.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if nothing exists at `path`.
pub fn file_size(path: &Path) -> PathResult<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| PathError::NotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Returns the text after the last `.` in `path`.
///
/// Returns `None` when there is no `.` at all, and when the only candidate `.` is the first
/// character (dot-files such as `.gitignore` have no extension). The whole string is scanned,
/// not just the final component.
pub fn extension_of(path: &str) -> Option<&str> {
    match path.rfind('.') {
        None | Some(0) => None,
        Some(dot) => Some(&path[dot + 1..]),
    }
}

/// Deletes the file at `path`.
///
/// # Errors
///
/// - [`PathError::NotFound`] if nothing exists at `path`
/// - [`PathError::RemoveFailed`] if the entry exists but cannot be deleted
pub fn remove_file(path: &Path) -> PathResult<()> {
    fs::symlink_metadata(path).map_err(|source| PathError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    fs::remove_file(path).map_err(|source| PathError::RemoveFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies `source` to a new file at `target`, returning the number of bytes copied.
///
/// The target is created with create-new semantics, so an existing file is never overwritten.
/// A failure after the target was created leaves a partial file behind.
///
/// # Errors
///
/// - [`PathError::OpenSourceFailed`] if the source cannot be opened
/// - [`PathError::TargetExists`] if something already exists at `target`
/// - [`PathError::OpenTargetFailed`] if the target cannot be created for another reason
/// - [`PathError::ReadFailed`] / [`PathError::WriteFailed`] on I/O failure mid-copy
pub fn copy_file(source: &Path, target: &Path) -> PathResult<u64> {
    let mut source_file = File::open(source).map_err(|e| PathError::OpenSourceFailed {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut target_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                PathError::TargetExists {
                    path: target.to_path_buf(),
                }
            } else {
                PathError::OpenTargetFailed {
                    path: target.to_path_buf(),
                    source: e,
                }
            }
        })?;

    copy_stream(&mut source_file, &mut target_file, DEFAULT_COPY_BUFFER_SIZE).map_err(|e| match e {
        StreamError::Read(e) => PathError::ReadFailed {
            path: source.to_path_buf(),
            source: e,
        },
        StreamError::Write(e) => PathError::WriteFailed {
            path: target.to_path_buf(),
            source: e,
        },
    })
}
