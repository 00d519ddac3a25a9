//! Fixed-width integer packer.
//!
//! Integer keys are packed as a big-endian (network order) two's-complement
//! signed 32-bit integer.

use byteorder::{BigEndian, ByteOrder};
use sesame_core::{PackError, PackResult, PrimaryKey, INT_PACKED_LEN};

use crate::traits::{split_fixed, PkPacker};

/// Integer packer - 4 bytes, big-endian `i32`.
///
/// # Example
///
/// ```
/// use sesame_packers::{IntPacker, PkPacker};
/// use sesame_core::PrimaryKey;
///
/// let packed = IntPacker.pack_pk(&PrimaryKey::Int(-42)).unwrap();
/// assert_eq!(packed, vec![0xFF, 0xFF, 0xFF, 0xD6]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntPacker;

impl IntPacker {
    /// Packer identifier
    pub const ID: &'static str = "int";
}

impl PkPacker for IntPacker {
    fn pack_pk(&self, pk: &PrimaryKey) -> PackResult<Vec<u8>> {
        let value = match pk.to_i32() {
            Some(narrowed) => narrowed?,
            None => return Err(PackError::kind_mismatch(Self::ID, "int", pk.type_name())),
        };

        let mut buf = [0u8; INT_PACKED_LEN];
        BigEndian::write_i32(&mut buf, value);
        Ok(buf.to_vec())
    }

    fn unpack_pk<'a>(&self, data: &'a [u8]) -> PackResult<(PrimaryKey, &'a [u8])> {
        let (head, rest) = split_fixed(Self::ID, data, INT_PACKED_LEN)?;
        let value = BigEndian::read_i32(head);
        Ok((PrimaryKey::from(value), rest))
    }

    fn packer_id(&self) -> &'static str {
        Self::ID
    }
}
