//! Scoped ownership of a located descriptor.

use std::fmt;
use std::path::Path;

use modmeta_sdk::Version;

use crate::descriptor::Descriptor;
use crate::module::ModuleHandle;

/// Host-owned wrapper around one located descriptor.
///
/// The guard keeps the source module loaded for as long as it lives, so a
/// host that decides to load the plugin further can rely on the mapping
/// staying in place. Dropping the guard (or calling [`release`]) frees the
/// metadata and unloads the module; ownership guarantees this happens
/// exactly once on every exit path, and the borrow checker prevents any
/// accessor result from outliving the guard.
///
/// Two guards for the same path are fully independent: each holds its own
/// module claim and its own copy of the metadata.
///
/// [`release`]: DescriptorGuard::release
pub struct DescriptorGuard {
    descriptor: Descriptor,
    module: ModuleHandle,
}

impl DescriptorGuard {
    pub(crate) fn new(descriptor: Descriptor, module: ModuleHandle) -> Self {
        Self { descriptor, module }
    }

    /// Plugin name; the view is valid for the guard's lifetime.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Author name; may be empty.
    pub fn author(&self) -> &str {
        self.descriptor.author()
    }

    /// Description; may be empty.
    pub fn description(&self) -> &str {
        self.descriptor.description()
    }

    /// Plugin version, copied by value.
    pub fn version(&self) -> Version {
        self.descriptor.version()
    }

    /// The validated descriptor backing the accessors.
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Path of the module backing this guard.
    pub fn module_path(&self) -> &Path {
        self.module.path()
    }

    /// Detach the owned descriptor, unloading the module immediately.
    ///
    /// Use this when only the metadata is needed past the locate call.
    pub fn into_descriptor(self) -> Descriptor {
        self.descriptor
    }

    /// Release the guard, unloading the module.
    ///
    /// Equivalent to dropping; provided so release points read explicitly
    /// at call sites.
    pub fn release(self) {
        drop(self);
    }
}

impl fmt::Debug for DescriptorGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorGuard")
            .field("descriptor", &self.descriptor)
            .field("module", &self.module)
            .finish()
    }
}
