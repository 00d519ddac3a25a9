//! Fixed-width UUID packer.
//!
//! UUIDs pass through in their native 16-byte layout.

use sesame_core::{PackError, PackResult, PrimaryKey, UUID_PACKED_LEN};
use uuid::Uuid;

use crate::traits::{split_fixed, PkPacker};

/// UUID packer - 16 bytes, `Uuid::as_bytes` order.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidPacker;

impl UuidPacker {
    /// Packer identifier
    pub const ID: &'static str = "uuid";
}

impl PkPacker for UuidPacker {
    fn pack_pk(&self, pk: &PrimaryKey) -> PackResult<Vec<u8>> {
        match pk.as_uuid() {
            Some(uuid) => Ok(uuid.as_bytes().to_vec()),
            None => Err(PackError::kind_mismatch(Self::ID, "uuid", pk.type_name())),
        }
    }

    fn unpack_pk<'a>(&self, data: &'a [u8]) -> PackResult<(PrimaryKey, &'a [u8])> {
        let (head, rest) = split_fixed(Self::ID, data, UUID_PACKED_LEN)?;
        let mut bytes = [0u8; UUID_PACKED_LEN];
        bytes.copy_from_slice(head);
        Ok((PrimaryKey::Uuid(Uuid::from_bytes(bytes)), rest))
    }

    fn packer_id(&self) -> &'static str {
        Self::ID
    }
}
