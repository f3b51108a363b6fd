//! Error types for descriptor discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Why a raw descriptor failed validation.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The protocol tag is not one this host understands.
    ///
    /// Too-new descriptors land here without any later field being
    /// interpreted; the plugin is simply not loadable by this host version.
    #[error("unsupported descriptor ABI version {found} (host supports {supported})")]
    UnsupportedAbi { found: u32, supported: u32 },

    /// A text field is not valid UTF-8 within its declared length.
    #[error("invalid UTF-8 in descriptor field '{field}'")]
    InvalidUtf8 {
        field: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Why `locate` produced no guard.
///
/// The C boundary collapses all of these into a null return; the Rust API
/// keeps the cause as an out-of-band diagnostic.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The path does not name a regular file.
    #[error("module not found: {0:?}")]
    NotFound(PathBuf),

    /// The OS loader refused the file.
    #[error("failed to load module {path:?}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// Neither descriptor entry point is exported.
    #[error("module does not export a descriptor entry point")]
    MissingDescriptor,

    /// The describe callable returned null.
    #[error("descriptor entry point returned null")]
    NullDescriptor,

    /// The descriptor was found but failed validation.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}
