//! Value types shared across the filestore crates.

use std::str::Utf8Error;

/// A string type with a fixed byte capacity of `N`.
///
/// This type backs the text fields of fixed-width on-disk records. Every value it holds can be
/// written into an `N`-byte, null-padded buffer and read back unchanged, so the text stored in
/// memory is always exactly the text a later decode would produce.
///
/// Construction never fails. Input is cut at the first NUL byte and then truncated to at most
/// `N` bytes, backing off to the nearest UTF-8 character boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedText<const N: usize>(String);

impl<const N: usize> BoundedText<N> {
    /// Maximum number of bytes this text can hold.
    pub const CAPACITY: usize = N;

    /// Creates a new `BoundedText`, truncating the input if it does not fit.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    pub fn new(input: impl AsRef<str>) -> Self {
        let input = input.as_ref();
        let input = match input.find('\0') {
            Some(nul) => &input[..nul],
            None => input,
        };

        let mut end = input.len().min(N);
        while !input.is_char_boundary(end) {
            end -= 1;
        }

        Self(input[..end].to_owned())
    }

    /// Returns true if `input` would be stored without modification.
    pub fn fits(input: &str) -> bool {
        input.len() <= N && !input.contains('\0')
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Writes the text into `out`, padding the remainder with NUL bytes.
    pub fn encode_into(&self, out: &mut [u8; N]) {
        out.fill(0);
        out[..self.0.len()].copy_from_slice(self.0.as_bytes());
    }

    /// Reads text from a null-padded field.
    ///
    /// At most `N` bytes of `field` are considered and reading stops at the first NUL byte.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`Utf8Error`] if the field does not hold valid UTF-8.
    pub fn decode(field: &[u8]) -> Result<Self, Utf8Error> {
        let field = &field[..field.len().min(N)];
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        let text = std::str::from_utf8(&field[..end])?;
        Ok(Self(text.to_owned()))
    }
}

impl<const N: usize> std::fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const N: usize> AsRef<str> for BoundedText<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> From<&str> for BoundedText<N> {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl<const N: usize> serde::Serialize for BoundedText<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, const N: usize> serde::Deserialize<'de> for BoundedText<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(BoundedText::new(s))
    }
}
