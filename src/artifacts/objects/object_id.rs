//! Object identifier
//!
//! Object IDs are 16-character lowercase hexadecimal strings rendered from a 64-bit digest.
//! They identify both blobs and commits.
//!
//! ## Format
//!
//! - Full: 16 hex characters (e.g., "00000000000016c7")
//! - Short: First 7 characters, for display only; never used as a lookup key

use crate::artifacts::objects::digest;
use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};

/// Object identifier
///
/// A fixed-width hexadecimal string produced by [`digest::digest`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 16-character lowercase hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    pub(crate) fn from_hash(hash: u64) -> Self {
        Self(digest::render(hash))
    }

    /// Get abbreviated form of the object ID
    pub fn to_short_oid(&self) -> &str {
        self.abbreviate(SHORT_OBJECT_ID_LENGTH)
    }

    /// First `length` characters of the object ID, clamped to the full length
    pub fn abbreviate(&self, length: usize) -> &str {
        &self.0[..length.min(self.0.len())]
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
