//! Tier 5: configuration drives the registry

use sesame::{
    ConfigError, PackerConfig, PackerRegistry, PrimaryKey, StringStrategy, CONFIG_FILE_NAME,
};
use tempfile::TempDir;

#[test]
fn registry_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "string_strategy = \"anchored\"\nanchor_suffix_len = 4\n",
    )
    .unwrap();

    let config = PackerConfig::from_file(&path).unwrap();
    let registry = PackerRegistry::from_config(&config).unwrap();
    assert_eq!(
        registry.string_strategy(),
        StringStrategy::Anchored { suffix_len: 4 }
    );

    let (pk, rest) = registry.unpack("CharField", b"userSIGN").unwrap();
    assert_eq!(pk, PrimaryKey::from("user"));
    assert_eq!(rest, b"SIGN");
}

#[test]
fn default_config_file_builds_greedy_registry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    PackerConfig::write_default_if_missing(&path).unwrap();
    let config = PackerConfig::from_file(&path).unwrap();
    let registry = PackerRegistry::from_config(&config).unwrap();

    assert_eq!(registry.string_strategy(), StringStrategy::Greedy);
}

#[test]
fn invalid_strategy_in_file_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "string_strategy = \"magic\"\n").unwrap();

    let err = PackerConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStrategy(ref s) if s == "magic"));
}
