//! Minimal plugin that declares its metadata and nothing else.
//!
//! Build this crate, then point the CLI at the produced library:
//!
//! ```text
//! cargo build -p modmeta-example-plugin
//! modmeta info target/debug/libmodmeta_example_plugin.so
//! ```

modmeta_sdk::declare_plugin!("Example", "Dev", "Test plugin");
