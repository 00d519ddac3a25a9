//! Core types for Sesame primary-key packing
//!
//! This crate defines the foundational types used by the packers:
//! - PrimaryKey: Scalar key value (integer, UUID, or string)
//! - KeyKind: The key-type tags a packer is looked up by
//! - PackError: Error taxonomy for pack/unpack and registry lookup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod kind;

pub use error::{PackError, PackResult};
pub use key::PrimaryKey;
pub use kind::{KeyKind, INT_PACKED_LEN, UUID_PACKED_LEN};

// Re-export so downstream crates name the same UUID type
pub use uuid::Uuid;
