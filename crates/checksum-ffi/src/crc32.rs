//! CRC-32/ISO-HDLC family (`crc32iso_hdlc.h`).

use core::ffi::c_char;

use checksum::{Checksum, Crc32};

/// Opaque CRC-32/ISO-HDLC accumulator.
#[derive(Debug, Default)]
pub struct HasherHandle(Crc32);

/// Allocate a hasher in the initial state. Never returns null.
#[unsafe(no_mangle)]
pub extern "C" fn hasher_new() -> *mut HasherHandle {
  let handle = Box::into_raw(Box::new(HasherHandle::default()));
  log::trace!("hasher_new: {handle:p}");
  handle
}

/// Feed `len` bytes at `data` into the hasher.
///
/// # Safety
///
/// `handle` must come from [`hasher_new`] and not yet be freed, with no other
/// thread using it concurrently. `data` must be valid for reads of `len`
/// bytes; it may be null only when `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasher_write(handle: *mut HasherHandle, data: *const c_char, len: usize) {
  // SAFETY: live, exclusively accessed handle per this function's contract.
  let HasherHandle(hasher) = unsafe { &mut *handle };
  // SAFETY: `data`/`len` validity is forwarded from the caller.
  hasher.update(unsafe { crate::bytes(data, len) });
}

/// Checksum of everything written so far. The accumulator is not modified.
///
/// # Safety
///
/// `handle` must come from [`hasher_new`] and not yet be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasher_finalize(handle: *mut HasherHandle) -> u32 {
  // SAFETY: live handle per this function's contract; only read.
  let HasherHandle(hasher) = unsafe { &*handle };
  hasher.finalize()
}

/// Release a hasher. `NULL` is ignored.
///
/// # Safety
///
/// `handle` must be null or come from [`hasher_new`] and not yet be freed.
/// It must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasher_free(handle: *mut HasherHandle) {
  if handle.is_null() {
    return;
  }
  log::trace!("hasher_free: {handle:p}");
  // SAFETY: produced by `Box::into_raw` in `hasher_new` and freed only once.
  drop(unsafe { Box::from_raw(handle) });
}

/// One-shot CRC-32/ISO-HDLC of `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be valid for reads of `len` bytes; it may be null only when
/// `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn crc32_hash(data: *const c_char, len: usize) -> u32 {
  // SAFETY: forwarded from the caller.
  checksum::crc32::checksum(unsafe { crate::bytes(data, len) })
}
