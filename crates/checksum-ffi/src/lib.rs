//! C ABI for the CRC-32/ISO-HDLC and CRC-64/NVME engines.
//!
//! Two families, each with an opaque streaming handle and a one-shot entry
//! point. Headers live in `include/` at the repository root.
//!
//! | Family | Handle | new | write | read | free | one-shot |
//! |--------|--------|-----|-------|------|------|----------|
//! | CRC-32/ISO-HDLC | [`HasherHandle`] | [`hasher_new`] | [`hasher_write`] | [`hasher_finalize`] | [`hasher_free`] | [`crc32_hash`] |
//! | CRC-64/NVME | [`DigestHandle`] | [`digest_new`] | [`digest_write`] | [`digest_sum64`] | [`digest_free`] | [`crc64_nvme_hash`] |
//!
//! # Handle contract
//!
//! - A handle is a heap-allocated accumulator owned by the caller from `*_new`
//!   until the matching `*_free`. Passing `NULL` to `*_free` is a no-op.
//! - Reading the checksum never resets the accumulator; it may be interleaved
//!   with writes any number of times.
//! - Handles are not internally synchronized. Concurrent writes to one handle
//!   need external mutual exclusion; distinct handles are independent.
//! - Any use of a freed, null or foreign handle is undefined behavior. It is
//!   not detected.
//!
//! Data is always `(pointer, length)`; embedded NUL bytes are hashed like any
//! other byte. A null data pointer is allowed only with a zero length.

use core::ffi::c_char;

mod crc32;
mod crc64;

pub use crc32::{HasherHandle, crc32_hash, hasher_finalize, hasher_free, hasher_new, hasher_write};
pub use crc64::{DigestHandle, crc64_nvme_hash, digest_free, digest_new, digest_sum64, digest_write};

/// View a C buffer as a byte slice.
///
/// # Safety
///
/// If `len > 0`, `data` must be non-null and valid for reads of `len` bytes
/// for the lifetime `'a`, and the bytes must not be mutated during it.
/// A null `data` yields the empty slice.
#[inline]
unsafe fn bytes<'a>(data: *const c_char, len: usize) -> &'a [u8] {
  if len == 0 || data.is_null() {
    return &[];
  }
  // SAFETY: non-null and valid for `len` bytes per this function's contract.
  unsafe { core::slice::from_raw_parts(data.cast::<u8>(), len) }
}
