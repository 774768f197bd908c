//! Storage runtime configuration.
//!
//! Limits are resolved once at process startup and passed into the [`crate::StorageEngine`].
//! Library code never reads environment variables itself; the binary gathers raw values and
//! hands them to [`StorageConfig::from_env_values`].

use crate::constants::{DEFAULT_COPY_BUFFER_SIZE, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_PATH_LEN};
use crate::{ConfigError, ConfigResult};
use std::str::FromStr;

/// Storage limits resolved at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    max_file_size: u64,
    max_path_len: usize,
    copy_buffer_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_path_len: DEFAULT_MAX_PATH_LEN,
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
        }
    }
}

impl StorageConfig {
    /// Create a new `StorageConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any limit is zero.
    pub fn new(
        max_file_size: u64,
        max_path_len: usize,
        copy_buffer_size: usize,
    ) -> ConfigResult<Self> {
        require_non_zero("max_file_size", max_file_size)?;
        require_non_zero("max_path_len", max_path_len as u64)?;
        require_non_zero("copy_buffer_size", copy_buffer_size as u64)?;

        Ok(Self {
            max_file_size,
            max_path_len,
            copy_buffer_size,
        })
    }

    /// Build a config from optional raw values, typically read from the environment.
    ///
    /// `None` or blank values fall back to the defaults in [`crate::constants`].
    pub fn from_env_values(
        max_file_size: Option<String>,
        max_path_len: Option<String>,
        copy_buffer_size: Option<String>,
    ) -> ConfigResult<Self> {
        let defaults = Self::default();

        Self::new(
            parse_or("max_file_size", max_file_size, defaults.max_file_size)?,
            parse_or("max_path_len", max_path_len, defaults.max_path_len)?,
            parse_or(
                "copy_buffer_size",
                copy_buffer_size,
                defaults.copy_buffer_size,
            )?,
        )
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    pub fn copy_buffer_size(&self) -> usize {
        self.copy_buffer_size
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(v) => v.parse::<T>().map_err(|e| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
            value: v,
        }),
        None => Ok(default),
    }
}

fn require_non_zero(name: &'static str, value: u64) -> ConfigResult<()> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            name,
            value: "0".into(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}
