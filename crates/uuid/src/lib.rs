//! Record identifier generation.
//!
//! Every stored artifact's metadata record carries an identifier drawn from a cryptographically
//! secure random source and rendered in the textual form of a version 4 UUID:
//! **36 lowercase hexadecimal characters with hyphens** (`8-4-4-4-12`).
//!
//! This crate provides:
//! - The [`IdentifierGenerator`] seam that storage code depends on.
//! - [`UuidGenerator`], the production implementation. Its random source is seeded from the
//!   operating system once, when the generator is constructed; construction fails if no entropy
//!   is available.
//! - [`RecordId`], a wrapper type that guarantees the canonical hyphenated form once constructed.
//!
//! ## Canonical form
//! - Length: 36
//! - Hyphens at byte offsets 8, 13, 18 and 23
//! - Every other character is `0-9` or `a-f`
//! - Example: `123e4567-e89b-42d3-a456-426614174000`

mod service;

// Re-export public types
pub use service::{IdentifierGenerator, RecordId, Uuid, UuidGenerator};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operating system entropy source could not seed the generator
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
