//! Tier 3: string boundary behaviour
//!
//! Without a length prefix, suffix bytes that decode as UTF-8 are read as
//! part of the key. These tests pin that behaviour down: it is deterministic
//! and never surfaces as an error.

use crate::test_utils::*;
use proptest::prelude::*;
use sesame::{PackerRegistry, PrimaryKey, StringStrategy};

#[test]
fn boundary_suffix_continuing_utf8_is_absorbed() {
    init_tracing();
    let registry = PackerRegistry::default();
    // Suffix opens with a complete "é" (C3 A9) followed by an invalid byte
    let suffix = [0xC3, 0xA9, 0xFF, 0x00];
    let data = token(&registry, "CharField", &PrimaryKey::from("café"), &suffix);

    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from("caféé"));
    assert_eq!(rest, &[0xFF, 0x00]);
}

#[test]
fn boundary_ascii_suffix_is_absorbed_entirely() {
    let registry = PackerRegistry::default();
    let data = token(&registry, "CharField", &PrimaryKey::from("user"), b"sig");

    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from("usersig"));
    assert!(rest.is_empty());
}

#[test]
fn boundary_partial_sequence_in_suffix_is_left_behind() {
    let registry = PackerRegistry::default();
    // E2 82 is a truncated "€"; the following 0x41 is not a continuation
    let suffix = [0xE2, 0x82, 0x41];
    let data = token(&registry, "CharField", &PrimaryKey::from("a"), &suffix);

    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from("a"));
    assert_eq!(rest, &suffix);
}

#[test]
fn boundary_invalid_front_yields_empty_key() {
    let registry = PackerRegistry::default();
    let data = [0xFF, b'a', b'b'];

    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from(""));
    assert_eq!(rest, &data);
}

#[test]
fn boundary_anchored_short_token_yields_empty_key() {
    init_tracing();
    let registry = PackerRegistry::new(StringStrategy::anchored());
    let data = token(&registry, "CharField", &PrimaryKey::from("abc"), &[0x80; 4]);

    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from(""));
    assert_eq!(rest, data.as_slice());
}

#[test]
fn boundary_anchored_invalid_candidate_bytes_return_with_suffix() {
    let registry = PackerRegistry::new(StringStrategy::anchored());
    let mut data = vec![b'o', b'k', 0xC3, b'x'];
    data.extend_from_slice(&SIGNATURE_LIKE_SUFFIX);

    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from("ok"));
    assert_eq!(&rest[..2], &[0xC3, b'x']);
    assert_eq!(&rest[2..], &SIGNATURE_LIKE_SUFFIX[..]);
}

#[test]
fn boundary_strategies_disagree_on_ascii_suffix() {
    let suffix = *b"0123456789abcdef";
    let pk = PrimaryKey::from("key");

    let greedy = PackerRegistry::default();
    let data = token(&greedy, "CharField", &pk, &suffix);
    assert_eq!(
        greedy.unpack("CharField", &data).unwrap().0,
        PrimaryKey::from("key0123456789abcdef")
    );

    let anchored = PackerRegistry::new(StringStrategy::anchored());
    assert_eq!(anchored.unpack("CharField", &data).unwrap().0, pk);

    let prefixed = PackerRegistry::new(StringStrategy::Prefixed);
    let data = token(&prefixed, "CharField", &pk, &suffix);
    assert_eq!(prefixed.unpack("CharField", &data).unwrap(), (pk, &suffix[..]));
}

proptest! {
    #[test]
    fn boundary_scans_never_error(data in proptest::collection::vec(any::<u8>(), 0..80)) {
        for strategy in [StringStrategy::Greedy, StringStrategy::anchored()] {
            let registry = PackerRegistry::new(strategy);
            let (pk, rest) = registry.unpack("CharField", &data).unwrap();
            let consumed = data.len() - rest.len();
            prop_assert_eq!(pk.as_str().map(|s| s.len()), Some(consumed));
            prop_assert_eq!(rest, &data[consumed..]);
        }
    }
}
