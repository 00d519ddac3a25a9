//! Sesame - primary-key packing for signed login tokens
//!
//! Sesame packs an application's primary keys (integers, UUIDs, or strings)
//! into the compact payload at the front of a signed token and recovers them
//! from a token whose signature suffix is still attached.
//!
//! # Quick Start
//!
//! ```
//! use sesame::{get_packer, PrimaryKey, Uuid};
//!
//! let packer = get_packer("UUIDField")?;
//! let uuid = Uuid::from_u128(1);
//!
//! let mut token = packer.pack_pk(&PrimaryKey::Uuid(uuid))?;
//! token.extend_from_slice(b"signature");
//!
//! let (pk, rest) = packer.unpack_pk(&token)?;
//! assert_eq!(pk, PrimaryKey::Uuid(uuid));
//! assert_eq!(rest, b"signature");
//! # Ok::<(), sesame::PackError>(())
//! ```
//!
//! # Architecture
//!
//! Key types and errors live in `sesame-core`; packers, the registry and
//! configuration live in `sesame-packers`. Signing, expiry and URL handling
//! belong to the caller.

pub use sesame_core::*;
pub use sesame_packers::*;
