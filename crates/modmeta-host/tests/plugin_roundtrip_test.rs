//! End-to-end tests against a real plugin module.
//!
//! These build the example plugin cdylib once per test run and exercise the
//! success path of the locate flow against the produced artifact.

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use modmeta_host::{ffi, PluginLocator, Version};

/// Build the example plugin and return the path of the produced library.
fn example_plugin() -> &'static PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let workspace_root = manifest_dir
            .parent()
            .and_then(|p| p.parent())
            .expect("workspace root")
            .to_path_buf();

        let status = Command::new(env!("CARGO"))
            .args(["build", "-p", "modmeta-example-plugin"])
            .current_dir(&workspace_root)
            .status()
            .expect("failed to run cargo");
        assert!(status.success(), "building the example plugin failed");

        let target_dir = std::env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace_root.join("target"));

        target_dir.join("debug").join(format!(
            "{}modmeta_example_plugin{}",
            std::env::consts::DLL_PREFIX,
            std::env::consts::DLL_SUFFIX
        ))
    })
}

#[test]
fn test_locate_round_trip_returns_declared_metadata() {
    let locator = PluginLocator::new();
    let guard = locator.locate(example_plugin()).unwrap();

    assert_eq!(guard.name(), "Example");
    assert_eq!(guard.author(), "Dev");
    assert_eq!(guard.description(), "Test plugin");
    assert_eq!(guard.version(), Version::new(1, 2, 3));

    guard.release();
}

#[test]
fn test_guards_on_the_same_path_are_independent() {
    let locator = PluginLocator::new();
    let first = locator.locate(example_plugin()).unwrap();
    let second = locator.locate(example_plugin()).unwrap();

    // Releasing one claim must not invalidate the other.
    first.release();

    assert_eq!(second.name(), "Example");
    assert_eq!(second.author(), "Dev");
    assert_eq!(second.version(), Version::new(1, 2, 3));
    second.release();
}

#[test]
fn test_repeated_load_release_cycles() {
    let locator = PluginLocator::new();
    for _ in 0..50 {
        let guard = locator.locate(example_plugin()).unwrap();
        assert_eq!(guard.name(), "Example");
        guard.release();
    }
}

#[test]
fn test_discovery_finds_the_built_plugin() {
    let plugin = example_plugin();
    let dir = plugin.parent().unwrap();

    let mut locator = PluginLocator::new();
    locator.add_search_path(dir);
    let found = locator.discover();

    assert!(found
        .iter()
        .any(|p| p.path == *plugin && p.descriptor.name() == "Example"));
}

#[test]
fn test_ffi_round_trip() {
    let path: Vec<u16> = example_plugin().to_string_lossy().encode_utf16().collect();

    let handle = unsafe { ffi::modmeta_get_plugin_data(path.as_ptr(), path.len()) };
    assert!(!handle.is_null());

    unsafe {
        assert_eq!(ffi::modmeta_plugin_name(handle).to_str().unwrap(), "Example");
        assert_eq!(ffi::modmeta_plugin_author(handle).to_str().unwrap(), "Dev");
        assert_eq!(
            ffi::modmeta_plugin_description(handle).to_str().unwrap(),
            "Test plugin"
        );
        assert_eq!(ffi::modmeta_plugin_version(handle), Version::new(1, 2, 3));

        ffi::modmeta_free_plugin(handle);
    }
}
