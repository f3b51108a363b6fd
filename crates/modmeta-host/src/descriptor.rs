//! Owned descriptor and validation.

use std::fmt::{self, Display, Formatter};

use modmeta_sdk::{RawDescriptor, RawStr, Version, DESCRIPTOR_ABI_VERSION};
use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Validated plugin metadata with host-owned strings.
///
/// Immutable once constructed; plain data that can be cloned and moved
/// across threads freely, independent of the module it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    name: String,
    author: String,
    description: String,
    version: Version,
}

impl Descriptor {
    /// Validate a raw descriptor and copy it into host-owned storage.
    ///
    /// The ABI tag is checked before any string view is dereferenced. Each
    /// text field must be valid UTF-8 within its declared length; one bad
    /// field fails the whole conversion, and no partial descriptor is ever
    /// produced.
    ///
    /// # Safety
    /// The raw descriptor's string views must point to readable memory of
    /// their declared lengths for the duration of the call.
    pub unsafe fn from_raw(raw: &RawDescriptor<'_>) -> Result<Self, DescriptorError> {
        if raw.abi_version != DESCRIPTOR_ABI_VERSION {
            return Err(DescriptorError::UnsupportedAbi {
                found: raw.abi_version,
                supported: DESCRIPTOR_ABI_VERSION,
            });
        }

        let copy_field =
            |view: RawStr<'_>, field: &'static str| -> Result<String, DescriptorError> {
                view.to_str()
                    .map(str::to_owned)
                    .map_err(|source| DescriptorError::InvalidUtf8 { field, source })
            };

        Ok(Self {
            name: copy_field(raw.name, "name")?,
            author: copy_field(raw.author, "author")?,
            description: copy_field(raw.description, "description")?,
            version: raw.version,
        })
    }

    /// Plugin display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author name; may be empty.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Free-form description; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Plugin version.
    pub fn version(&self) -> Version {
        self.version
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} ({})", self.name, self.version, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(abi_version: u32) -> RawDescriptor<'static> {
        RawDescriptor {
            abi_version,
            name: RawStr::from_str("Example"),
            author: RawStr::from_str("Dev"),
            description: RawStr::from_str("Test plugin"),
            version: Version::new(1, 2, 3),
        }
    }

    #[test]
    fn test_round_trip_returns_exact_values() {
        let descriptor = unsafe { Descriptor::from_raw(&raw(DESCRIPTOR_ABI_VERSION)) }.unwrap();

        assert_eq!(descriptor.name(), "Example");
        assert_eq!(descriptor.author(), "Dev");
        assert_eq!(descriptor.description(), "Test plugin");
        assert_eq!(descriptor.version(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let descriptor = unsafe { Descriptor::from_raw(&raw(DESCRIPTOR_ABI_VERSION)) }.unwrap();

        assert_eq!(descriptor.name(), descriptor.name());
        assert_eq!(descriptor.version(), descriptor.version());
    }

    #[test]
    fn test_too_new_tag_is_rejected() {
        // Well-formed in every other field; the tag alone must reject it.
        let err = unsafe { Descriptor::from_raw(&raw(DESCRIPTOR_ABI_VERSION + 1)) }.unwrap_err();

        assert!(matches!(
            err,
            DescriptorError::UnsupportedAbi {
                found,
                supported: DESCRIPTOR_ABI_VERSION,
            } if found == DESCRIPTOR_ABI_VERSION + 1
        ));
    }

    #[test]
    fn test_older_tag_is_rejected() {
        let err = unsafe { Descriptor::from_raw(&raw(0)) }.unwrap_err();
        assert!(matches!(err, DescriptorError::UnsupportedAbi { found: 0, .. }));
    }

    #[test]
    fn test_empty_description_is_valid() {
        let mut raw = raw(DESCRIPTOR_ABI_VERSION);
        raw.description = RawStr::empty();

        let descriptor = unsafe { Descriptor::from_raw(&raw) }.unwrap();
        assert_eq!(descriptor.description(), "");
    }

    #[test]
    fn test_bad_utf8_fails_the_whole_conversion() {
        static BYTES: [u8; 3] = [0xf0, 0x28, 0x8c];

        let mut raw = raw(DESCRIPTOR_ABI_VERSION);
        raw.author = unsafe { RawStr::from_raw_parts(BYTES.as_ptr(), BYTES.len()) };

        let err = unsafe { Descriptor::from_raw(&raw) }.unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidUtf8 { field: "author", .. }));
    }

    #[test]
    fn test_display_includes_name_and_version() {
        let descriptor = unsafe { Descriptor::from_raw(&raw(DESCRIPTOR_ABI_VERSION)) }.unwrap();
        assert_eq!(descriptor.to_string(), "Example v1.2.3 (Dev)");
    }
}
