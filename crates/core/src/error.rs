//! Error types for primary-key packing
//!
//! This module defines the error taxonomy shared by every packer and the
//! packer registry. We use `thiserror` for automatic `Display` and `Error`
//! trait implementations.
//!
//! Boundary ambiguity in the variable-length string packers is NOT an error:
//! those packers stop scanning at the first undecodable byte and hand the rest
//! back as remainder. Nothing in this module represents that case.

use thiserror::Error;

/// Result type alias for pack/unpack operations
pub type PackResult<T> = std::result::Result<T, PackError>;

/// Errors produced while packing or unpacking a primary key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Buffer is shorter than the packer needs
    #[error("Truncated input for packer {packer}: need {needed} bytes, got {available}")]
    Truncated {
        /// Packer that attempted the unpack
        packer: &'static str,
        /// Number of bytes required
        needed: usize,
        /// Number of bytes available
        available: usize,
    },

    /// Integer key does not fit in a signed 32-bit integer
    #[error("Integer key {value} is out of range for a signed 32-bit packer")]
    OutOfRange {
        /// The rejected value
        value: i64,
    },

    /// Registry lookup for a tag outside the supported set
    #[error("Unknown key type tag: {0}")]
    UnknownTag(String),

    /// Key handed to a packer built for a different key kind
    #[error("Packer {packer} expects a {expected} key, got {actual}")]
    KindMismatch {
        /// Packer that rejected the key
        packer: &'static str,
        /// Kind of key the packer handles
        expected: &'static str,
        /// Kind of key it received
        actual: &'static str,
    },

    /// Length header of a length-prefixed payload could not be decoded
    #[error("Malformed length prefix for packer {packer}")]
    MalformedLength {
        /// Packer that attempted the unpack
        packer: &'static str,
    },

    /// Length-prefixed payload is not valid UTF-8
    ///
    /// Only raised where the payload boundary is known up front; the greedy
    /// strategies absorb decode failures instead.
    #[error("Invalid UTF-8 in packer {packer} payload after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Packer that attempted the unpack
        packer: &'static str,
        /// Length of the valid prefix
        valid_up_to: usize,
    },
}

impl PackError {
    /// Create a truncation error.
    pub fn truncated(packer: &'static str, needed: usize, available: usize) -> Self {
        PackError::Truncated {
            packer,
            needed,
            available,
        }
    }

    /// Create an unknown-tag error.
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        PackError::UnknownTag(tag.into())
    }

    /// Create a kind-mismatch error.
    pub fn kind_mismatch(packer: &'static str, expected: &'static str, actual: &'static str) -> Self {
        PackError::KindMismatch {
            packer,
            expected,
            actual,
        }
    }

    /// Whether this error came from a buffer that ended too early
    pub fn is_truncated(&self) -> bool {
        matches!(self, PackError::Truncated { .. })
    }
}
