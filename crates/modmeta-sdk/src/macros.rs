//! Export macro for plugin authors.

/// Declare a plugin's metadata.
///
/// Expands to both entry points the host recognizes: the
/// `modmeta_descriptor` static holding a pre-populated
/// [`RawDescriptor`](crate::RawDescriptor), and the `modmeta_describe`
/// callable returning a pointer to it. The plugin version comes from the
/// crate's own `CARGO_PKG_VERSION` unless given explicitly.
///
/// In the crate root of a `cdylib`:
///
/// ```ignore
/// modmeta_sdk::declare_plugin!("Example", "Dev", "Test plugin");
/// ```
///
/// An explicit version is also accepted:
///
/// ```ignore
/// modmeta_sdk::declare_plugin!("Example", "Dev", "Test plugin",
///     version: modmeta_sdk::Version::new(1, 2, 3));
/// ```
#[macro_export]
macro_rules! declare_plugin {
    ($name:expr, $author:expr, $desc:expr) => {
        $crate::declare_plugin!(
            $name,
            $author,
            $desc,
            version: $crate::Version::new(
                $crate::parse_version_component(env!("CARGO_PKG_VERSION_MAJOR")),
                $crate::parse_version_component(env!("CARGO_PKG_VERSION_MINOR")),
                $crate::parse_version_component(env!("CARGO_PKG_VERSION_PATCH")),
            )
        );
    };
    ($name:expr, $author:expr, $desc:expr, version: $version:expr) => {
        const _: () = {
            #[no_mangle]
            #[allow(non_upper_case_globals)]
            pub static modmeta_descriptor: $crate::RawDescriptor<'static> =
                $crate::RawDescriptor {
                    abi_version: $crate::DESCRIPTOR_ABI_VERSION,
                    name: $crate::RawStr::from_str($name),
                    author: $crate::RawStr::from_str($author),
                    description: $crate::RawStr::from_str($desc),
                    version: $version,
                };

            #[no_mangle]
            pub extern "C" fn modmeta_describe() -> *const $crate::RawDescriptor<'static> {
                &modmeta_descriptor
            }
        };
    };
}
