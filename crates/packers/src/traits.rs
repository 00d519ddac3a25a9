//! Packer trait definitions.

use sesame_core::{PackError, PackResult, PrimaryKey};
use std::fmt;

/// Primary-key packer trait.
///
/// A packer turns one kind of primary key into a compact byte sequence for
/// embedding at the front of a signed token, and recovers the key from a
/// buffer that carries trailing bytes the packer knows nothing about.
///
/// # Framing
///
/// Packed bytes carry no terminator. Fixed-width packers know where their
/// payload ends; variable-width packers infer it (see [`crate::StrPacker`]).
/// Whatever follows the payload is returned untouched by `unpack_pk`.
///
/// # Thread Safety
///
/// Packers are stateless and must be `Send + Sync` so a single instance can
/// be shared by every caller in the process.
pub trait PkPacker: Send + Sync + fmt::Debug {
    /// Pack a key into bytes.
    ///
    /// Fails if the key is of the wrong kind for this packer or, for integer
    /// keys, if the value does not fit the packed width.
    fn pack_pk(&self, pk: &PrimaryKey) -> PackResult<Vec<u8>>;

    /// Unpack a key from the front of `data`.
    ///
    /// Returns the key and the bytes that follow it.
    fn unpack_pk<'a>(&self, data: &'a [u8]) -> PackResult<(PrimaryKey, &'a [u8])>;

    /// Unique packer identifier.
    fn packer_id(&self) -> &'static str;
}

/// Split a fixed-width payload off the front of `data`.
pub(crate) fn split_fixed<'a>(
    packer: &'static str,
    data: &'a [u8],
    width: usize,
) -> PackResult<(&'a [u8], &'a [u8])> {
    if data.len() < width {
        return Err(PackError::truncated(packer, width, data.len()));
    }
    Ok(data.split_at(width))
}
