//! Variable-length string packer.
//!
//! A string key has no fixed width, so once a signature suffix is appended
//! the token looks like `[string bytes][suffix bytes]` with no delimiter.
//! Unpacking has to find the boundary again. How it does that is the
//! [`StringStrategy`]:
//!
//! | Strategy | Packed form | Boundary |
//! |----------|-------------|----------|
//! | `Greedy` (default) | raw UTF-8 | longest valid UTF-8 prefix of the whole buffer |
//! | `Anchored` | raw UTF-8 | longest valid UTF-8 prefix of all but the last `suffix_len` bytes |
//! | `Prefixed` | LEB128 length + UTF-8 | stored length |
//!
//! ## Boundary ambiguity
//!
//! `Greedy` and `Anchored` carry no length, so a suffix that starts with
//! bytes extending a valid UTF-8 run is read as part of the string. That is
//! deterministic and never reported as an error; the caller sees a longer (or,
//! for `Anchored`, shorter) string and a correspondingly shifted remainder.
//! `Prefixed` avoids the ambiguity but produces tokens that the other two
//! strategies cannot read, so it is only used when configured explicitly.

mod scan;
mod varint;

pub use scan::{decode_utf8_prefix, valid_utf8_prefix_len};

use sesame_core::{PackError, PackResult, PrimaryKey};
use tracing::{debug, trace};

use crate::traits::PkPacker;

/// Suffix length assumed by the anchored strategy when none is configured
pub const DEFAULT_ANCHOR_SUFFIX_LEN: usize = 16;

/// How a string packer finds the end of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringStrategy {
    /// Decode the whole buffer, stop at the first invalid UTF-8 offset
    #[default]
    Greedy,

    /// Assume the trailing suffix is exactly `suffix_len` bytes and only
    /// decode what comes before it
    Anchored {
        /// Length of the trailing suffix
        suffix_len: usize,
    },

    /// Prefix the payload with its LEB128 byte length
    ///
    /// Not wire-compatible with `Greedy` or `Anchored`.
    Prefixed,
}

impl StringStrategy {
    /// Anchored strategy with the default suffix length
    pub const fn anchored() -> Self {
        StringStrategy::Anchored {
            suffix_len: DEFAULT_ANCHOR_SUFFIX_LEN,
        }
    }

    /// Short identifier (used in config files)
    pub const fn name(&self) -> &'static str {
        match self {
            StringStrategy::Greedy => "greedy",
            StringStrategy::Anchored { .. } => "anchored",
            StringStrategy::Prefixed => "prefixed",
        }
    }

    /// Parse from short identifier
    ///
    /// `anchor_suffix_len` is only used for `"anchored"`.
    pub fn from_name(name: &str, anchor_suffix_len: usize) -> Option<Self> {
        match name {
            "greedy" => Some(StringStrategy::Greedy),
            "anchored" => Some(StringStrategy::Anchored {
                suffix_len: anchor_suffix_len,
            }),
            "prefixed" => Some(StringStrategy::Prefixed),
            _ => None,
        }
    }

    /// Identifier of the packer using this strategy
    pub const fn packer_id(&self) -> &'static str {
        match self {
            StringStrategy::Greedy => "str-greedy",
            StringStrategy::Anchored { .. } => "str-anchored",
            StringStrategy::Prefixed => "str-prefixed",
        }
    }
}

/// String packer.
///
/// # Example
///
/// ```
/// use sesame_packers::{PkPacker, StrPacker};
/// use sesame_core::PrimaryKey;
///
/// let packer = StrPacker::greedy();
/// let mut token = packer.pack_pk(&PrimaryKey::from("abc")).unwrap();
/// assert_eq!(token, b"abc");
///
/// token.extend_from_slice(&[0x80, 0x01]);
/// let (pk, rest) = packer.unpack_pk(&token).unwrap();
/// assert_eq!(pk, PrimaryKey::from("abc"));
/// assert_eq!(rest, &[0x80, 0x01]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StrPacker {
    strategy: StringStrategy,
}

impl StrPacker {
    /// Create a packer using `strategy`
    pub const fn new(strategy: StringStrategy) -> Self {
        StrPacker { strategy }
    }

    /// Greedy full-buffer packer
    pub const fn greedy() -> Self {
        Self::new(StringStrategy::Greedy)
    }

    /// Anchored packer assuming a `suffix_len`-byte suffix
    pub const fn anchored(suffix_len: usize) -> Self {
        Self::new(StringStrategy::Anchored { suffix_len })
    }

    /// Length-prefixed packer
    pub const fn prefixed() -> Self {
        Self::new(StringStrategy::Prefixed)
    }

    /// Strategy in use
    pub const fn strategy(&self) -> StringStrategy {
        self.strategy
    }

    fn unpack_scanned<'a>(&self, data: &'a [u8], candidate_end: usize) -> (PrimaryKey, &'a [u8]) {
        let (decoded, consumed) = decode_utf8_prefix(&data[..candidate_end]);
        // Greedy always stops short when a suffix follows; anchored should not
        if consumed < candidate_end && matches!(self.strategy, StringStrategy::Anchored { .. }) {
            debug!(
                packer = self.packer_id(),
                consumed,
                undecoded = candidate_end - consumed,
                "String payload stopped before end of candidate bytes"
            );
        }
        trace!(
            packer = self.packer_id(),
            consumed,
            remaining = data.len() - consumed,
            "Unpacked string key"
        );
        (PrimaryKey::Str(decoded), &data[consumed..])
    }

    fn unpack_prefixed<'a>(&self, data: &'a [u8]) -> PackResult<(PrimaryKey, &'a [u8])> {
        let packer = self.packer_id();
        let (len, header) = varint::decode_varint(packer, data)?;
        let len = usize::try_from(len).map_err(|_| PackError::MalformedLength { packer })?;
        let end = header
            .checked_add(len)
            .ok_or(PackError::MalformedLength { packer })?;
        if data.len() < end {
            return Err(PackError::truncated(packer, end, data.len()));
        }

        let payload = &data[header..end];
        let decoded = std::str::from_utf8(payload).map_err(|e| PackError::InvalidUtf8 {
            packer,
            valid_up_to: e.valid_up_to(),
        })?;
        trace!(packer, consumed = end, remaining = data.len() - end, "Unpacked string key");
        Ok((PrimaryKey::Str(decoded.to_string()), &data[end..]))
    }
}

impl PkPacker for StrPacker {
    fn pack_pk(&self, pk: &PrimaryKey) -> PackResult<Vec<u8>> {
        let s = pk
            .as_str()
            .ok_or_else(|| PackError::kind_mismatch(self.packer_id(), "str", pk.type_name()))?;

        match self.strategy {
            StringStrategy::Greedy | StringStrategy::Anchored { .. } => Ok(s.as_bytes().to_vec()),
            StringStrategy::Prefixed => {
                let mut buf = Vec::with_capacity(varint::MAX_VARINT_LEN + s.len());
                varint::encode_varint(s.len() as u64, &mut buf);
                buf.extend_from_slice(s.as_bytes());
                Ok(buf)
            }
        }
    }

    fn unpack_pk<'a>(&self, data: &'a [u8]) -> PackResult<(PrimaryKey, &'a [u8])> {
        match self.strategy {
            StringStrategy::Greedy => Ok(self.unpack_scanned(data, data.len())),
            StringStrategy::Anchored { suffix_len } => {
                let candidate_end = data.len().saturating_sub(suffix_len);
                Ok(self.unpack_scanned(data, candidate_end))
            }
            StringStrategy::Prefixed => self.unpack_prefixed(data),
        }
    }

    fn packer_id(&self) -> &'static str {
        self.strategy.packer_id()
    }
}
