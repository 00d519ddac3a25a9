//! Key-type tags
//!
//! Callers describe the representation of a primary key with one of four
//! tags. The tags name *key representation kinds*, not the model field classes
//! of whatever data layer produced the key; mapping a data layer's field onto
//! a tag is the caller's job.
//!
//! | Tag | Packed as | Width |
//! |-----|-----------|-------|
//! | `AutoField` | signed 32-bit integer | 4 |
//! | `IntegerField` | signed 32-bit integer | 4 |
//! | `UUIDField` | 128-bit UUID | 16 |
//! | `CharField` | UTF-8 string | variable |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PackError;

/// Width in bytes of a packed integer key
pub const INT_PACKED_LEN: usize = 4;

/// Width in bytes of a packed UUID key
pub const UUID_PACKED_LEN: usize = 16;

/// The four supported key-type tags
///
/// ## Invariant
///
/// `AutoField` and `IntegerField` always resolve to the same packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    /// Auto-incrementing integer key
    AutoField,
    /// Plain integer key
    IntegerField,
    /// UUID key
    #[serde(rename = "UUIDField")]
    UuidField,
    /// String key
    CharField,
}

impl KeyKind {
    /// All key kinds (for iteration)
    pub const ALL: [KeyKind; 4] = [
        KeyKind::AutoField,
        KeyKind::IntegerField,
        KeyKind::UuidField,
        KeyKind::CharField,
    ];

    /// Tag string as seen by callers
    pub const fn tag(&self) -> &'static str {
        match self {
            KeyKind::AutoField => "AutoField",
            KeyKind::IntegerField => "IntegerField",
            KeyKind::UuidField => "UUIDField",
            KeyKind::CharField => "CharField",
        }
    }

    /// Parse from a tag string
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AutoField" => Some(KeyKind::AutoField),
            "IntegerField" => Some(KeyKind::IntegerField),
            "UUIDField" => Some(KeyKind::UuidField),
            "CharField" => Some(KeyKind::CharField),
            _ => None,
        }
    }

    /// Fixed packed width, or `None` for variable-width keys
    pub const fn packed_len(&self) -> Option<usize> {
        match self {
            KeyKind::AutoField | KeyKind::IntegerField => Some(INT_PACKED_LEN),
            KeyKind::UuidField => Some(UUID_PACKED_LEN),
            KeyKind::CharField => None,
        }
    }

    /// Check if keys of this kind pack to a fixed number of bytes
    pub const fn is_fixed_width(&self) -> bool {
        self.packed_len().is_some()
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for KeyKind {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyKind::from_tag(s).ok_or_else(|| PackError::unknown_tag(s))
    }
}
