//! CRC-64/NVME family (`crc64nvme.h`).

use core::ffi::c_char;

use checksum::{Checksum, Crc64Nvme};

/// Opaque CRC-64/NVME accumulator.
#[derive(Debug, Default)]
pub struct DigestHandle(Crc64Nvme);

/// Allocate a digest in the initial state. Never returns null.
#[unsafe(no_mangle)]
pub extern "C" fn digest_new() -> *mut DigestHandle {
  let handle = Box::into_raw(Box::new(DigestHandle::default()));
  log::trace!("digest_new: {handle:p}");
  handle
}

/// Feed `len` bytes at `data` into the digest.
///
/// # Safety
///
/// `handle` must come from [`digest_new`] and not yet be freed, with no other
/// thread using it concurrently. `data` must be valid for reads of `len`
/// bytes; it may be null only when `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digest_write(handle: *mut DigestHandle, data: *const c_char, len: usize) {
  // SAFETY: live, exclusively accessed handle per this function's contract.
  let DigestHandle(digest) = unsafe { &mut *handle };
  // SAFETY: `data`/`len` validity is forwarded from the caller.
  digest.update(unsafe { crate::bytes(data, len) });
}

/// Checksum of everything written so far. The accumulator is not modified.
///
/// # Safety
///
/// `handle` must come from [`digest_new`] and not yet be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digest_sum64(handle: *const DigestHandle) -> u64 {
  // SAFETY: live handle per this function's contract; only read.
  let DigestHandle(digest) = unsafe { &*handle };
  digest.finalize()
}

/// Release a digest. `NULL` is ignored.
///
/// # Safety
///
/// `handle` must be null or come from [`digest_new`] and not yet be freed.
/// It must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digest_free(handle: *mut DigestHandle) {
  if handle.is_null() {
    return;
  }
  log::trace!("digest_free: {handle:p}");
  // SAFETY: produced by `Box::into_raw` in `digest_new` and freed only once.
  drop(unsafe { Box::from_raw(handle) });
}

/// One-shot CRC-64/NVME of `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be valid for reads of `len` bytes; it may be null only when
/// `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn crc64_nvme_hash(data: *const c_char, len: usize) -> u64 {
  // SAFETY: forwarded from the caller.
  checksum::crc64::checksum(unsafe { crate::bytes(data, len) })
}
