//! Internal implementation of identifier generation.

use crate::{UuidError, UuidResult};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::sync::Mutex;
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Source of record identifiers.
///
/// Storage code depends on this trait rather than on a concrete generator so that tests can
/// supply deterministic identifiers. Implementations must return the canonical 36-character
/// hyphenated form; callers consume the value without validating it.
pub trait IdentifierGenerator {
    /// Returns a freshly generated identifier.
    fn new_identifier(&self) -> String;
}

/// Canonical record identifier (36 lowercase hex characters, hyphenated).
///
/// Once constructed, the contained UUID is known to render in canonical form.
///
/// # Construction
/// - [`UuidGenerator::generate`] produces a fresh random identifier.
/// - [`RecordId::parse`] validates an externally supplied identifier.
///
/// # Display format
/// Always the lowercase hyphenated form, e.g. `123e4567-e89b-42d3-a456-426614174000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Length in bytes of the canonical textual form.
    pub const CANONICAL_LEN: usize = 36;

    /// Validates and parses an identifier that must already be in canonical form.
    ///
    /// Uppercase, braced, URN-prefixed and unhyphenated forms are rejected rather than
    /// normalised.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "identifier must be 36 lowercase hex characters in 8-4-4-4-12 groups, got: '{}'",
                input
            )));
        }

        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(format!("invalid identifier '{}': {}", input, e)))
    }

    /// Returns true if `input` is in canonical hyphenated form.
    ///
    /// This is a purely syntactic check; the version and variant bits are not inspected.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == Self::CANONICAL_LEN
            && input.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
    }

    /// Returns the inner `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Cryptographically secure generator of version 4 identifiers.
///
/// The generator owns a CSPRNG seeded from the operating system when it is constructed.
/// Seeding is the only step that can fail, so generation itself is infallible.
#[derive(Debug)]
pub struct UuidGenerator {
    rng: Mutex<StdRng>,
}

impl UuidGenerator {
    /// Seeds a new generator from the operating system entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::EntropyUnavailable`] if the entropy source cannot be read.
    pub fn new() -> UuidResult<Self> {
        let rng = StdRng::from_rng(OsRng)
            .map_err(|e| UuidError::EntropyUnavailable(e.to_string()))?;

        Ok(Self {
            rng: Mutex::new(rng),
        })
    }

    /// Generates a new random identifier.
    ///
    /// Sixteen random bytes are drawn, the version nibble is set to 4 and the variant bits to
    /// RFC 4122.
    pub fn generate(&self) -> RecordId {
        let mut bytes = [0u8; 16];
        {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.fill_bytes(&mut bytes);
        }

        RecordId(::uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl IdentifierGenerator for UuidGenerator {
    fn new_identifier(&self) -> String {
        self.generate().to_string()
    }
}
