//! Primary-key values
//!
//! A [`PrimaryKey`] is the scalar identifier a data layer hands over for
//! packing. It is immutable and lives only for the call that packs or unpacks
//! it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{PackError, PackResult};

/// A primary-key value
///
/// The integer variant carries an `i64` because data layers hand out wider
/// integers than the packed form holds; packing checks the value against the
/// signed 32-bit range. Unpacked integers always fit in `i32`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryKey {
    /// Integer key
    Int(i64),
    /// UUID key
    Uuid(Uuid),
    /// UTF-8 string key
    Str(String),
}

impl PrimaryKey {
    /// Short name of the value's kind, used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            PrimaryKey::Int(_) => "int",
            PrimaryKey::Uuid(_) => "uuid",
            PrimaryKey::Str(_) => "str",
        }
    }

    /// Integer value, if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PrimaryKey::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// UUID value, if this is a UUID key
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            PrimaryKey::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// String value, if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimaryKey::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value narrowed to `i32`
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the value does not fit; `None` if this is not an
    /// integer key.
    pub fn to_i32(&self) -> Option<PackResult<i32>> {
        self.as_int()
            .map(|v| i32::try_from(v).map_err(|_| PackError::OutOfRange { value: v }))
    }
}

impl From<i32> for PrimaryKey {
    fn from(v: i32) -> Self {
        PrimaryKey::Int(i64::from(v))
    }
}

impl From<i64> for PrimaryKey {
    fn from(v: i64) -> Self {
        PrimaryKey::Int(v)
    }
}

impl From<Uuid> for PrimaryKey {
    fn from(u: Uuid) -> Self {
        PrimaryKey::Uuid(u)
    }
}

impl From<&str> for PrimaryKey {
    fn from(s: &str) -> Self {
        PrimaryKey::Str(s.to_string())
    }
}

impl From<String> for PrimaryKey {
    fn from(s: String) -> Self {
        PrimaryKey::Str(s)
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Int(v) => write!(f, "{}", v),
            PrimaryKey::Uuid(u) => write!(f, "{}", u),
            PrimaryKey::Str(s) => f.write_str(s),
        }
    }
}
