//! Packer registry
//!
//! Maps a key-type tag to the packer that handles it. A registry is built
//! once and never changes; there is no API to add or replace entries.
//!
//! | Tag | Packer |
//! |-----|--------|
//! | `AutoField` | [`IntPacker`] |
//! | `IntegerField` | [`IntPacker`] (same instance as `AutoField`) |
//! | `UUIDField` | [`UuidPacker`] |
//! | `CharField` | [`StrPacker`] with the registry's [`StringStrategy`] |

use once_cell::sync::Lazy;
use sesame_core::{KeyKind, PackResult, PrimaryKey};
use std::sync::Arc;
use tracing::debug;

use crate::config::{ConfigError, PackerConfig};
use crate::int::IntPacker;
use crate::string::{StrPacker, StringStrategy};
use crate::traits::PkPacker;
use crate::uuid_packer::UuidPacker;

/// Process-wide registry using the default (greedy) string strategy
static DEFAULT_REGISTRY: Lazy<PackerRegistry> = Lazy::new(PackerRegistry::default);

/// Immutable tag-to-packer mapping
#[derive(Debug, Clone)]
pub struct PackerRegistry {
    int: Arc<dyn PkPacker>,
    uuid: Arc<dyn PkPacker>,
    string: Arc<dyn PkPacker>,
    string_strategy: StringStrategy,
}

impl PackerRegistry {
    /// Build a registry whose `CharField` packer uses `string_strategy`.
    pub fn new(string_strategy: StringStrategy) -> Self {
        debug!(
            string_strategy = string_strategy.name(),
            "Built packer registry"
        );
        PackerRegistry {
            int: Arc::new(IntPacker),
            uuid: Arc::new(UuidPacker),
            string: Arc::new(StrPacker::new(string_strategy)),
            string_strategy,
        }
    }

    /// Build a registry from a loaded config.
    pub fn from_config(config: &PackerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.string_strategy()?))
    }

    /// Look up the packer for a tag.
    ///
    /// # Errors
    ///
    /// `UnknownTag` for anything other than the four supported tags.
    pub fn lookup(&self, tag: &str) -> PackResult<Arc<dyn PkPacker>> {
        let kind: KeyKind = tag.parse()?;
        Ok(self.lookup_kind(kind))
    }

    /// Look up the packer for an already-parsed key kind.
    pub fn lookup_kind(&self, kind: KeyKind) -> Arc<dyn PkPacker> {
        match kind {
            KeyKind::AutoField | KeyKind::IntegerField => Arc::clone(&self.int),
            KeyKind::UuidField => Arc::clone(&self.uuid),
            KeyKind::CharField => Arc::clone(&self.string),
        }
    }

    /// String strategy used for `CharField`
    pub fn string_strategy(&self) -> StringStrategy {
        self.string_strategy
    }

    /// Supported tags
    pub fn tags() -> impl Iterator<Item = &'static str> {
        KeyKind::ALL.into_iter().map(|kind| kind.tag())
    }

    /// Pack `pk` with the packer registered for `tag`.
    pub fn pack(&self, tag: &str, pk: &PrimaryKey) -> PackResult<Vec<u8>> {
        self.lookup(tag)?.pack_pk(pk)
    }

    /// Unpack a key from the front of `data` with the packer registered for `tag`.
    pub fn unpack<'a>(&self, tag: &str, data: &'a [u8]) -> PackResult<(PrimaryKey, &'a [u8])> {
        self.lookup(tag)?.unpack_pk(data)
    }
}

impl Default for PackerRegistry {
    fn default() -> Self {
        Self::new(StringStrategy::default())
    }
}

/// The process-wide default registry.
pub fn registry() -> &'static PackerRegistry {
    &DEFAULT_REGISTRY
}

/// Get a packer by key-type tag from the default registry.
///
/// # Known Tags
///
/// - `"AutoField"`, `"IntegerField"`: 4-byte integer packer
/// - `"UUIDField"`: 16-byte UUID packer
/// - `"CharField"`: greedy string packer
pub fn get_packer(tag: &str) -> PackResult<Arc<dyn PkPacker>> {
    registry().lookup(tag)
}
