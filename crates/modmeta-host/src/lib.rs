//! Host-side plugin metadata discovery.
//!
//! Given a path to a candidate native module, [`PluginLocator::locate`]
//! loads it, resolves the well-known descriptor entry point, validates the
//! ABI tag and every text field, and hands back a [`DescriptorGuard`] that
//! keeps the module loaded while its metadata is in use. Dropping the guard
//! releases the metadata and unloads the module.
//!
//! ```no_run
//! use modmeta_host::PluginLocator;
//!
//! # fn main() -> Result<(), modmeta_host::LocateError> {
//! let locator = PluginLocator::new();
//! let guard = locator.locate("plugins/example.so")?;
//! println!("{} v{} by {}", guard.name(), guard.version(), guard.author());
//! guard.release();
//! # Ok(())
//! # }
//! ```
//!
//! Loading a module runs its static initializers; that trust boundary is
//! inherent to reading author-supplied metadata out of an author-supplied
//! file and is not sandboxed here.

pub mod descriptor;
pub mod error;
pub mod ffi;
pub mod guard;
pub mod locator;
pub mod module;

pub use descriptor::Descriptor;
pub use error::{DescriptorError, LocateError};
pub use guard::DescriptorGuard;
pub use locator::{DiscoveredPlugin, PluginLocator};
pub use module::ModuleHandle;

pub use modmeta_sdk::{RawDescriptor, RawStr, Version, DESCRIPTOR_ABI_VERSION};
