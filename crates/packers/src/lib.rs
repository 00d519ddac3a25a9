//! Primary-key packers for Sesame tokens
//!
//! This crate turns primary keys into the compact byte payload at the front of
//! a signed token, and reads them back from a token buffer that still carries
//! the signing layer's trailing bytes:
//!
//! - PkPacker: The pack/unpack contract every packer implements
//! - IntPacker / UuidPacker: Fixed-width packers (4 and 16 bytes)
//! - StrPacker: Variable-width string packer with a choice of boundary strategy
//! - PackerRegistry: Immutable tag-to-packer mapping
//! - PackerConfig: `sesame.toml` configuration
//!
//! # Usage
//!
//! ```
//! use sesame_packers::get_packer;
//! use sesame_core::PrimaryKey;
//!
//! let packer = get_packer("IntegerField").unwrap();
//! let mut token = packer.pack_pk(&PrimaryKey::Int(-42)).unwrap();
//! token.extend_from_slice(b"sig");
//!
//! let (pk, rest) = packer.unpack_pk(&token).unwrap();
//! assert_eq!(pk, PrimaryKey::Int(-42));
//! assert_eq!(rest, b"sig");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
mod int;
pub mod registry;
pub mod string;
mod traits;
mod uuid_packer;

pub use config::{ConfigError, PackerConfig, CONFIG_FILE_NAME};
pub use int::IntPacker;
pub use registry::{get_packer, registry, PackerRegistry};
pub use string::{
    decode_utf8_prefix, valid_utf8_prefix_len, StrPacker, StringStrategy,
    DEFAULT_ANCHOR_SUFFIX_LEN,
};
pub use traits::PkPacker;
pub use uuid_packer::UuidPacker;
