//! Tier 1: exact byte scenarios

use crate::test_utils::*;
use sesame::{get_packer, PackError, PackerRegistry, PrimaryKey, Uuid};

#[test]
fn scenario_pack_negative_int() {
    let packed = get_packer("IntegerField")
        .unwrap()
        .pack_pk(&PrimaryKey::Int(-42))
        .unwrap();
    assert_eq!(packed, vec![0xFF, 0xFF, 0xFF, 0xD6]);
}

#[test]
fn scenario_unpack_negative_int_with_three_byte_suffix() {
    let data = [0xFF, 0xFF, 0xFF, 0xD6, 0x01, 0x02, 0x03];
    let (pk, rest) = get_packer("AutoField").unwrap().unpack_pk(&data).unwrap();
    assert_eq!(pk, PrimaryKey::Int(-42));
    assert_eq!(rest, &[0x01, 0x02, 0x03]);
}

#[test]
fn scenario_uuid_one() {
    init_tracing();
    let uuid = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
    let registry = PackerRegistry::default();

    let packed = registry.pack("UUIDField", &PrimaryKey::Uuid(uuid)).unwrap();
    assert_eq!(packed.len(), 16);
    assert_eq!(packed.last(), Some(&0x01));

    let data = token(&registry, "UUIDField", &PrimaryKey::Uuid(uuid), b"any suffix");
    let (pk, rest) = registry.unpack("UUIDField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::Uuid(uuid));
    assert_eq!(rest, b"any suffix");
}

#[test]
fn scenario_string_abc() {
    init_tracing();
    let registry = PackerRegistry::default();

    let packed = registry.pack("CharField", &PrimaryKey::from("abc")).unwrap();
    assert_eq!(packed, vec![0x61, 0x62, 0x63]);

    let suffix = [0x80, 0x61, 0x62];
    let data = token(&registry, "CharField", &PrimaryKey::from("abc"), &suffix);
    let (pk, rest) = registry.unpack("CharField", &data).unwrap();
    assert_eq!(pk, PrimaryKey::from("abc"));
    assert_eq!(rest, &suffix);
}

#[test]
fn int_rejects_short_buffers() {
    let packer = get_packer("IntegerField").unwrap();
    for len in 0..4 {
        let err = packer.unpack_pk(&vec![0u8; len]).unwrap_err();
        assert_eq!(err, PackError::truncated("int", 4, len));
    }
}

#[test]
fn uuid_rejects_short_buffers() {
    let packer = get_packer("UUIDField").unwrap();
    for len in [0usize, 1, 8, 15] {
        let err = packer.unpack_pk(&vec![0u8; len]).unwrap_err();
        assert!(err.is_truncated(), "len {} should be truncated", len);
    }
}

#[test]
fn int_rejects_values_beyond_32_bits() {
    let packer = get_packer("IntegerField").unwrap();
    let err = packer.pack_pk(&PrimaryKey::Int(1 << 31)).unwrap_err();
    assert_eq!(err, PackError::OutOfRange { value: 1 << 31 });
}
