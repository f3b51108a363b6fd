//! Descriptor locator and directory discovery.

use std::path::{Path, PathBuf};

use modmeta_sdk::{RawDescriptor, DESCRIBE_SYMBOL, DESCRIPTOR_SYMBOL};
use serde::Serialize;

use crate::descriptor::Descriptor;
use crate::error::LocateError;
use crate::guard::DescriptorGuard;
use crate::module::ModuleHandle;

/// Signature of the exported descriptor callable.
type DescribeFn = unsafe extern "C" fn() -> *const RawDescriptor<'static>;

/// A plugin found during discovery.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredPlugin {
    /// Path of the module that declared the descriptor.
    pub path: PathBuf,

    /// The validated descriptor, copied out of the module before unload.
    pub descriptor: Descriptor,
}

/// Locates plugin descriptors in candidate modules.
///
/// `locate` inspects one path; `discover` scans the configured search paths
/// and skips candidates that do not yield a descriptor.
#[derive(Debug, Default)]
pub struct PluginLocator {
    search_paths: Vec<PathBuf>,
}

impl PluginLocator {
    /// Create a locator with no search paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory to scan during discovery.
    pub fn add_search_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Directories scanned during discovery.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Read and validate the descriptor of the module at `path`.
    ///
    /// Loads the module, resolves the descriptor entry point (the exported
    /// `modmeta_descriptor` data symbol, or the `modmeta_describe` callable
    /// as a fallback), checks the ABI tag before anything else, validates
    /// every text field, and wraps the validated copy together with the
    /// still-loaded module in a [`DescriptorGuard`].
    ///
    /// Discovery is all or nothing: any failure means no guard, and the
    /// module is unloaded on the way out.
    pub fn locate(&self, path: impl AsRef<Path>) -> Result<DescriptorGuard, LocateError> {
        let path = path.as_ref();
        let module = ModuleHandle::load(path)?;

        let raw = Self::resolve_descriptor(&module)?;

        // Safety: the pointer came from the module's own export and the
        // module stays loaded for the duration of the copy.
        let descriptor = unsafe { Descriptor::from_raw(&*raw) }?;

        tracing::info!(
            path = %path.display(),
            plugin = %descriptor.name(),
            version = %descriptor.version(),
            "located plugin descriptor"
        );

        Ok(DescriptorGuard::new(descriptor, module))
    }

    /// Scan all search paths for plugins.
    pub fn discover(&self) -> Vec<DiscoveredPlugin> {
        let mut found = Vec::new();
        for dir in &self.search_paths {
            found.extend(self.discover_dir(dir));
        }
        found
    }

    /// Scan one directory for plugins.
    ///
    /// Candidates that fail to yield a descriptor are logged and skipped;
    /// one bad file never fails the scan as a whole.
    pub fn discover_dir(&self, dir: &Path) -> Vec<DiscoveredPlugin> {
        let mut found = Vec::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot read plugin directory");
                return found;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !is_module_library(&path) {
                continue;
            }

            match self.locate(&path) {
                Ok(guard) => found.push(DiscoveredPlugin {
                    descriptor: guard.into_descriptor(),
                    path,
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping candidate");
                }
            }
        }

        found
    }

    /// Resolve either entry form to a raw descriptor pointer.
    fn resolve_descriptor(
        module: &ModuleHandle,
    ) -> Result<*const RawDescriptor<'static>, LocateError> {
        // Static export first; it needs nothing from the plugin beyond the
        // load itself.
        //
        // Safety: the symbol types are part of the export contract. A
        // module exporting these names with other types is out of contract,
        // the same exposure as loading the file at all.
        let from_static =
            unsafe { module.symbol::<*const RawDescriptor<'static>>(DESCRIPTOR_SYMBOL) };
        if let Ok(symbol) = from_static {
            return Ok(*symbol);
        }

        tracing::debug!(
            path = %module.path().display(),
            "no descriptor data symbol, trying the describe callable"
        );

        let describe = unsafe { module.symbol::<DescribeFn>(DESCRIBE_SYMBOL) }
            .map_err(|_| LocateError::MissingDescriptor)?;

        // Safety: narrowly-scoped metadata call defined by the entry
        // contract; it constructs no plugin state.
        let raw = unsafe { describe() };
        if raw.is_null() {
            return Err(LocateError::NullDescriptor);
        }
        Ok(raw)
    }
}

/// Whether a path has the platform's dynamic-library extension.
fn is_module_library(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.extension().and_then(|e| e.to_str()) == Some(std::env::consts::DLL_EXTENSION)
}
