//! Bitwise reference implementations.
//!
//! One bit per step, no tables: the direct transcription of reflected CRC
//! polynomial division. Every table-driven kernel must agree with these
//! functions on every input; they double as the `reference` kernel that can
//! be forced through configuration.
//!
//! Both functions operate on the raw register. Callers start from the
//! algorithm's initial value and apply the final XOR themselves.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::tables::{CRC32_ISO_HDLC_POLY, CRC64_NVME_POLY};

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// Branchless: the low register bit is widened into an all-ones or all-zeros
/// mask that selects whether the polynomial is folded in.
#[must_use]
pub const fn crc32_bitwise(poly: u32, state: u32, data: &[u8]) -> u32 {
  let mut crc = state;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly & mask);
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-64 computation (reflected, LSB-first).
#[must_use]
pub const fn crc64_bitwise(poly: u64, state: u64, data: &[u8]) -> u64 {
  let mut crc = state;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit = 0;
    while bit < 8 {
      let mask = 0u64.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly & mask);
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard catalogue input for CRC check values.
pub(crate) const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/ISO-HDLC check value: 0xCBF43926
const _: () = {
  let raw = crc32_bitwise(CRC32_ISO_HDLC_POLY, !0u32, CHECK_INPUT);
  assert!(raw ^ !0u32 == 0xCBF4_3926);
};

// CRC-64/NVME check value: 0xAE8B14860A799888
const _: () = {
  let raw = crc64_bitwise(CRC64_NVME_POLY, !0u64, CHECK_INPUT);
  assert!(raw ^ !0u64 == 0xAE8B_1486_0A79_9888);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn crc32_empty_leaves_register_untouched() {
    assert_eq!(crc32_bitwise(CRC32_ISO_HDLC_POLY, !0u32, &[]), !0u32);
    assert_eq!(crc32_bitwise(CRC32_ISO_HDLC_POLY, 0x1234_5678, &[]), 0x1234_5678);
  }

  #[test]
  fn crc64_empty_leaves_register_untouched() {
    assert_eq!(crc64_bitwise(CRC64_NVME_POLY, !0u64, &[]), !0u64);
  }

  #[test]
  fn crc32_incremental() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc32_bitwise(CRC32_ISO_HDLC_POLY, !0u32, data);
    assert_eq!(oneshot ^ !0u32, 0x414F_A339);

    for split in 1..data.len() {
      let first = crc32_bitwise(CRC32_ISO_HDLC_POLY, !0u32, &data[..split]);
      let second = crc32_bitwise(CRC32_ISO_HDLC_POLY, first, &data[split..]);
      assert_eq!(second, oneshot, "Incremental mismatch at split {split}");
    }
  }

  #[test]
  fn crc64_incremental() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc64_bitwise(CRC64_NVME_POLY, !0u64, data);
    assert_eq!(oneshot ^ !0u64, 0xD76C_5405_4954_C143);

    for split in 1..data.len() {
      let first = crc64_bitwise(CRC64_NVME_POLY, !0u64, &data[..split]);
      let second = crc64_bitwise(CRC64_NVME_POLY, first, &data[split..]);
      assert_eq!(second, oneshot, "Incremental mismatch at split {split}");
    }
  }
}
