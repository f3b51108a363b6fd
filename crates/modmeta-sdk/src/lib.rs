//! SDK for modmeta plugins.
//!
//! A native module opts into metadata discovery by exporting a descriptor
//! under a well-known symbol. [`declare_plugin!`] does this in one line:
//!
//! ```ignore
//! modmeta_sdk::declare_plugin!("Example", "Dev", "Test plugin");
//! ```
//!
//! The macro embeds the crate's own `CARGO_PKG_VERSION` and emits both entry
//! forms the host recognizes: a pre-populated [`RawDescriptor`] data symbol
//! and a callable returning a pointer to it. Hosts read the descriptor with
//! the `modmeta-host` crate without initializing any plugin functionality.

pub mod descriptor;
#[macro_use]
pub mod macros;

pub use descriptor::{
    parse_version_component, RawDescriptor, RawStr, Version, DESCRIBE_SYMBOL,
    DESCRIPTOR_ABI_VERSION, DESCRIPTOR_SYMBOL,
};
