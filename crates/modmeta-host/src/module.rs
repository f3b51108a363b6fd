//! Thin shim over the OS module loader.

use std::fmt;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::error::LocateError;

/// A loaded native module.
///
/// Wraps [`libloading::Library`]; the module stays mapped into the process
/// until the handle is dropped, at which point it is unloaded exactly once.
///
/// Loading runs the module's static initializers. There is no way to read
/// author-supplied metadata without mapping the author-supplied file, so
/// only load candidates you are prepared to trust that far.
pub struct ModuleHandle {
    library: Library,
    path: PathBuf,
}

impl ModuleHandle {
    /// Load a module by path.
    pub fn load(path: &Path) -> Result<Self, LocateError> {
        if !path.is_file() {
            return Err(LocateError::NotFound(path.to_path_buf()));
        }

        // Safety: mapping a foreign module executes its initializers; see
        // the type-level note.
        let library = unsafe { Library::new(path) }.map_err(|source| LocateError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Resolve an exported symbol by name.
    ///
    /// # Safety
    /// `T` must match the actual type of the exported symbol; a mismatch is
    /// undefined behavior.
    pub unsafe fn symbol<T>(&self, name: &[u8]) -> Result<Symbol<'_, T>, libloading::Error> {
        unsafe { self.library.get(name) }
    }

    /// Path the module was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
