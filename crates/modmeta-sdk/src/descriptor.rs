//! Plugin descriptor wire types.
//!
//! A plugin identifies itself by exporting a [`RawDescriptor`] under a
//! well-known symbol. The record is a flat `#[repr(C)]` struct with the ABI
//! tag first, so a host can check the tag before interpreting any later
//! field. Strings are embedded as length-prefixed views rather than
//! null-terminated buffers; they may be empty and may contain any UTF-8
//! byte sequence.

use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::slice;
use std::str;

use serde::{Deserialize, Serialize};

/// Current descriptor ABI version.
///
/// The host rejects any descriptor whose tag differs from this value.
pub const DESCRIPTOR_ABI_VERSION: u32 = 1;

/// Name of the exported descriptor data symbol.
pub const DESCRIPTOR_SYMBOL: &[u8] = b"modmeta_descriptor";

/// Name of the exported descriptor callable.
pub const DESCRIBE_SYMBOL: &[u8] = b"modmeta_describe";

/// Borrowed, length-prefixed UTF-8 string view.
///
/// FFI-safe: a raw pointer plus an explicit byte length, with no terminator.
/// The view never owns its bytes and is valid only while the memory it
/// points into stays mapped.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct RawStr<'a> {
    data: *const u8,
    len: usize,
    _marker: PhantomData<&'a str>,
}

// Safety: a RawStr is a read-only view; the bytes behind it are never
// written through it.
unsafe impl Send for RawStr<'_> {}
unsafe impl Sync for RawStr<'_> {}

impl<'a> RawStr<'a> {
    /// Create a view over a string slice.
    pub const fn from_str(s: &'a str) -> Self {
        Self {
            data: s.as_ptr(),
            len: s.len(),
            _marker: PhantomData,
        }
    }

    /// Create an empty view.
    pub const fn empty() -> Self {
        Self::from_str("")
    }

    /// Create a view from a raw pointer and byte length.
    ///
    /// # Safety
    /// `data` must point to `len` readable bytes that stay valid for `'a`.
    /// The bytes are not required to be UTF-8; use [`RawStr::to_str`] to
    /// validate before treating them as text.
    pub const unsafe fn from_raw_parts(data: *const u8, len: usize) -> Self {
        Self {
            data,
            len,
            _marker: PhantomData,
        }
    }

    /// Length of the view in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is zero-length.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes of the view. A null data pointer reads as empty.
    pub fn as_bytes(&self) -> &'a [u8] {
        if self.data.is_null() {
            &[]
        } else {
            // Safety: construction guarantees `data` points to `len`
            // readable bytes for 'a.
            unsafe { slice::from_raw_parts(self.data, self.len) }
        }
    }

    /// Borrow the view as `&str`, validating UTF-8.
    pub fn to_str(&self) -> Result<&'a str, str::Utf8Error> {
        str::from_utf8(self.as_bytes())
    }
}

impl Debug for RawStr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Ok(s) => Debug::fmt(s, f),
            Err(_) => f.write_str("<non-utf8>"),
        }
    }
}

/// Semantic plugin version, copied by value across the boundary.
///
/// Ordered component-wise, most significant first (field order gives the
/// derived ordering exactly that meaning).
#[repr(C)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Descriptor record a plugin exports.
///
/// Field order is part of the wire contract: `abi_version` comes first so a
/// host can check compatibility before reading anything else. Once exported
/// the record is never mutated.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RawDescriptor<'a> {
    /// Must equal [`DESCRIPTOR_ABI_VERSION`].
    pub abi_version: u32,
    pub name: RawStr<'a>,
    pub author: RawStr<'a>,
    pub description: RawStr<'a>,
    pub version: Version,
}

/// Parse one `CARGO_PKG_VERSION_*` component at compile time.
///
/// Panics at compile time on anything that is not a decimal number fitting
/// in u16, which fails the plugin's build rather than producing a bogus
/// descriptor.
#[doc(hidden)]
pub const fn parse_version_component(s: &str) -> u16 {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty version component");

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        assert!(b.is_ascii_digit(), "version component is not a number");
        value = value * 10 + (b - b'0') as u32;
        assert!(value <= u16::MAX as u32, "version component out of range");
        i += 1;
    }
    value as u16
}
