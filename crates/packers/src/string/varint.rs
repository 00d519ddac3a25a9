//! Varint (LEB128) length prefix for the prefixed string strategy.

use sesame_core::{PackError, PackResult};

/// Maximum encoded size of a u64 varint
pub(crate) const MAX_VARINT_LEN: usize = 10;

/// Encode a u64 as a variable-length integer (LEB128).
pub(crate) fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Decode a varint from a byte slice, returning (value, bytes_consumed).
pub(crate) fn decode_varint(packer: &'static str, data: &[u8]) -> PackResult<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift = 0;
    for (i, &byte) in data.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(PackError::MalformedLength { packer }); // overflow
        }
        value |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
    }
    Err(PackError::truncated(packer, data.len() + 1, data.len()))
}
