//! Integration tests for the descriptor wire types and export macro.

use modmeta_sdk::{RawDescriptor, RawStr, Version, DESCRIPTOR_ABI_VERSION};

// Compiles the full export surface into the test binary.
modmeta_sdk::declare_plugin!("Test Harness", "SDK Tests", "Exercises declare_plugin!");

#[test]
fn test_descriptor_fields_read_back() {
    let raw = RawDescriptor {
        abi_version: DESCRIPTOR_ABI_VERSION,
        name: RawStr::from_str("Example"),
        author: RawStr::from_str("Dev"),
        description: RawStr::from_str("Test plugin"),
        version: Version::new(1, 2, 3),
    };

    assert_eq!(raw.abi_version, DESCRIPTOR_ABI_VERSION);
    assert_eq!(raw.name.to_str().unwrap(), "Example");
    assert_eq!(raw.author.to_str().unwrap(), "Dev");
    assert_eq!(raw.description.to_str().unwrap(), "Test plugin");
    assert_eq!(raw.version, Version::new(1, 2, 3));
}

#[test]
fn test_descriptor_allows_empty_fields() {
    let raw = RawDescriptor {
        abi_version: DESCRIPTOR_ABI_VERSION,
        name: RawStr::from_str("Example"),
        author: RawStr::empty(),
        description: RawStr::empty(),
        version: Version::default(),
    };

    assert_eq!(raw.author.to_str().unwrap(), "");
    assert!(raw.description.is_empty());
}

#[test]
fn test_raw_str_views_are_copyable() {
    let view = RawStr::from_str("shared");
    let copy = view;
    assert_eq!(view.to_str().unwrap(), copy.to_str().unwrap());
}
