//! C boundary for hosts that are not Rust.
//!
//! Mirrors the minimal surface of the descriptor protocol: one entry point
//! taking a UTF-16 path with an explicit element count, read accessors over
//! an opaque handle, and one free. A null return is the sole failure
//! channel; the specific cause is logged, not returned.

use std::path::PathBuf;
use std::ptr;
use std::slice;

use modmeta_sdk::{RawStr, Version};

use crate::guard::DescriptorGuard;
use crate::locator::PluginLocator;

/// Opaque handle over a located descriptor.
///
/// Created by [`modmeta_get_plugin_data`], reclaimed by
/// [`modmeta_free_plugin`]. String views returned by the accessors borrow
/// the handle and are invalid after the free call; callers needing
/// longer-lived strings must copy them out first.
pub struct PluginData {
    guard: DescriptorGuard,
}

/// Locate a plugin's metadata.
///
/// `path` is UTF-16 with `len` elements (elements, not bytes; no terminator
/// is required or consumed). Returns null if the path is not valid UTF-16,
/// the module cannot be loaded, it exports no recognized descriptor, or the
/// descriptor fails validation.
///
/// # Safety
/// `path` must point to `len` readable u16 elements.
#[no_mangle]
pub unsafe extern "C" fn modmeta_get_plugin_data(path: *const u16, len: usize) -> *mut PluginData {
    if path.is_null() {
        return ptr::null_mut();
    }

    let units = unsafe { slice::from_raw_parts(path, len) };
    let Ok(path) = String::from_utf16(units) else {
        return ptr::null_mut();
    };

    match PluginLocator::new().locate(PathBuf::from(path)) {
        Ok(guard) => Box::into_raw(Box::new(PluginData { guard })),
        Err(e) => {
            tracing::debug!(error = %e, "locate failed at the C boundary");
            ptr::null_mut()
        }
    }
}

/// Plugin name as a length-prefixed view borrowing the handle.
///
/// # Safety
/// `data` must be a live handle from [`modmeta_get_plugin_data`].
#[no_mangle]
pub unsafe extern "C" fn modmeta_plugin_name(data: *const PluginData) -> RawStr<'static> {
    let name = unsafe { (*data).guard.name() };
    unsafe { RawStr::from_raw_parts(name.as_ptr(), name.len()) }
}

/// Author as a length-prefixed view borrowing the handle.
///
/// # Safety
/// `data` must be a live handle from [`modmeta_get_plugin_data`].
#[no_mangle]
pub unsafe extern "C" fn modmeta_plugin_author(data: *const PluginData) -> RawStr<'static> {
    let author = unsafe { (*data).guard.author() };
    unsafe { RawStr::from_raw_parts(author.as_ptr(), author.len()) }
}

/// Description as a length-prefixed view borrowing the handle.
///
/// # Safety
/// `data` must be a live handle from [`modmeta_get_plugin_data`].
#[no_mangle]
pub unsafe extern "C" fn modmeta_plugin_description(data: *const PluginData) -> RawStr<'static> {
    let description = unsafe { (*data).guard.description() };
    unsafe { RawStr::from_raw_parts(description.as_ptr(), description.len()) }
}

/// Plugin version, copied by value.
///
/// # Safety
/// `data` must be a live handle from [`modmeta_get_plugin_data`].
#[no_mangle]
pub unsafe extern "C" fn modmeta_plugin_version(data: *const PluginData) -> Version {
    unsafe { (*data).guard.version() }
}

/// Reclaim a handle.
///
/// Must be called exactly once per non-null handle; every view returned by
/// the accessors is invalid afterwards. Passing null is a no-op.
///
/// # Safety
/// `data` must be null or a handle from [`modmeta_get_plugin_data`] that
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn modmeta_free_plugin(data: *mut PluginData) {
    if !data.is_null() {
        drop(unsafe { Box::from_raw(data) });
    }
}
