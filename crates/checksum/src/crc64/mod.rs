//! CRC-64/NVME.
//!
//! Parameters:
//! - width: 64
//! - poly: 0xAD93D23594C93659 (reflected: 0x9A6C9329AC4BC9B5)
//! - init: 0xFFFF_FFFF_FFFF_FFFF
//! - refin/refout: true
//! - xorout: 0xFFFF_FFFF_FFFF_FFFF
//! - check: 0xAE8B14860A799888
//!
//! Used by NVMe end-to-end data protection and object-store integrity checks.

use crate::{
  common::{
    portable,
    reference::crc64_bitwise,
    tables::{Aligned64, CRC64_NVME_POLY, SLICES, generate_crc64_tables_8},
  },
  config::{self, Force},
  dispatch::{Crc64Fn, Dispatcher, Selected},
  params::CrcParams,
};

// ─────────────────────────────────────────────────────────────────────────────
// Tables & Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// Slicing-by-8 tables; table 0 is the classic 256-entry byte table.
pub(crate) static TABLES: Aligned64<[[u64; 256]; SLICES]> = Aligned64(generate_crc64_tables_8(CRC64_NVME_POLY));

pub(crate) const REFERENCE: &str = "reference/bitwise";
pub(crate) const BYTEWISE: &str = "portable/bytewise";
pub(crate) const SLICE8: &str = "portable/slice8";

fn reference(crc: u64, data: &[u8]) -> u64 {
  crc64_bitwise(CRC64_NVME_POLY, crc, data)
}

fn bytewise(crc: u64, data: &[u8]) -> u64 {
  let [table, ..] = &TABLES.0;
  portable::bytewise_64(crc, data, table)
}

fn slice8(crc: u64, data: &[u8]) -> u64 {
  portable::slice8_64(crc, data, &TABLES.0)
}

/// Kernel implementing `force`.
#[must_use]
pub(crate) fn kernel_for(force: Force) -> Selected<Crc64Fn> {
  match force.resolve() {
    Force::Reference => Selected::new(REFERENCE, reference),
    Force::Bytewise => Selected::new(BYTEWISE, bytewise),
    Force::Auto | Force::Slice8 => Selected::new(SLICE8, slice8),
  }
}

fn select() -> Selected<Crc64Fn> {
  kernel_for(config::crc64().force)
}

pub(crate) static DISPATCHER: Dispatcher<Crc64Fn> = Dispatcher::new("crc64/nvme", select);

// ─────────────────────────────────────────────────────────────────────────────
// Engine Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Initial register value.
#[inline]
#[must_use]
pub const fn init() -> u64 {
  CrcParams::CRC64_NVME.initial
}

/// Feed `data` through the register. A zero-length update is a no-op.
#[inline]
#[must_use]
pub fn update(state: u64, data: &[u8]) -> u64 {
  if data.is_empty() { state } else { DISPATCHER.call(state, data) }
}

/// Apply the output transform. Does not consume the register.
#[inline]
#[must_use]
pub const fn finalize(state: u64) -> u64 {
  state ^ CrcParams::CRC64_NVME.xor_out
}

/// One-shot CRC-64/NVME of `data`.
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u64 {
  finalize(update(init(), data))
}

// ─────────────────────────────────────────────────────────────────────────────
// Hasher
// ─────────────────────────────────────────────────────────────────────────────

define_crc_type! {
  /// CRC-64/NVME hasher.
  ///
  /// # Example
  ///
  /// ```rust
  /// use checksum::{Checksum, Crc64Nvme};
  ///
  /// let mut hasher = Crc64Nvme::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xAE8B_1486_0A79_9888);
  /// assert_eq!(hasher.hex(), "ae8b14860a799888");
  /// ```
  pub struct Crc64Nvme(u64) {
    params: CrcParams::CRC64_NVME,
    dispatcher: DISPATCHER,
  }
}

/// Short name for [`Crc64Nvme`], the only CRC-64 in this crate.
pub type Crc64 = Crc64Nvme;

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;
  use crate::{Checksum, common::reference::CHECK_INPUT};

  const KERNELS: [Force; 3] = [Force::Reference, Force::Bytewise, Force::Slice8];

  fn test_data(len: usize) -> Vec<u8> {
    (0..len)
      .map(|i| {
        let i = i as u64;
        ((i.wrapping_mul(2_654_435_761) ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15)) & 0xFF) as u8
      })
      .collect()
  }

  #[test]
  fn test_check_value() {
    assert_eq!(checksum(CHECK_INPUT), 0xAE8B_1486_0A79_9888);
    assert_eq!(Crc64Nvme::checksum(CHECK_INPUT), CrcParams::CRC64_NVME.check);
  }

  #[test]
  fn test_known_answers() {
    assert_eq!(Crc64Nvme::checksum(b"a"), 0x8C2F_8445_B4CB_FC3C);
    assert_eq!(Crc64Nvme::checksum(b"hello, world!"), 0xF804_6E40_C403_F1D0);
    assert_eq!(
      Crc64Nvme::checksum(b"The quick brown fox jumps over the lazy dog"),
      0xD76C_5405_4954_C143
    );
    assert_eq!(Crc64Nvme::checksum(&[0u8; 32]), 0xCF34_7343_4D4E_CF3B);
  }

  #[test]
  fn test_empty() {
    assert_eq!(checksum(&[]), 0);
    assert_eq!(finalize(init()), 0);
    assert_eq!(update(init(), &[]), init());
    assert_eq!(Crc64::new().finalize(), CrcParams::CRC64_NVME.empty_digest());
  }

  #[test]
  fn test_free_functions_match_hasher() {
    let data = test_data(1000);
    let (a, b) = data.split_at(333);
    let state = update(update(init(), a), b);
    assert_eq!(finalize(state), Crc64Nvme::checksum(&data));
  }

  #[test]
  fn test_finalize_is_idempotent() {
    let mut hasher = Crc64Nvme::new();
    hasher.update(b"hello, ");
    let first = hasher.finalize();
    assert_eq!(hasher.finalize(), first);
    assert_eq!(hasher.finalize(), first);
  }

  #[test]
  fn test_write_after_read() {
    let mut hasher = Crc64Nvme::new();
    hasher.update(b"hello, ");
    let _ = hasher.finalize();
    hasher.update(b"world!");
    assert_eq!(hasher.finalize(), 0xF804_6E40_C403_F1D0);
  }

  #[test]
  fn test_chunking_invariance() {
    let data = test_data(4096 + 7);
    let expected = Crc64Nvme::checksum(&data);
    for chunk in [1, 3, 8, 255, 256, 257, 1024] {
      let mut hasher = Crc64Nvme::new();
      for part in data.chunks(chunk) {
        hasher.update(part);
      }
      assert_eq!(hasher.finalize(), expected, "chunk={chunk}");
    }
  }

  #[test]
  fn test_uneven_chunks() {
    let data = test_data(1000);
    let expected = Crc64Nvme::checksum(&data);
    let mut hasher = Crc64Nvme::new();
    let mut rest = data.as_slice();
    let mut step = 1;
    while !rest.is_empty() {
      let (head, tail) = rest.split_at(step.min(rest.len()));
      hasher.update(head);
      rest = tail;
      step = step * 3 % 97 + 1;
    }
    assert_eq!(hasher.finalize(), expected);
  }

  #[test]
  fn test_independent_hashers() {
    let mut a = Crc64Nvme::new();
    let mut b = Crc64Nvme::new();
    a.update(b"hello, ");
    b.update(b"123");
    a.update(b"world!");
    b.update(b"456789");
    assert_eq!(a.finalize(), 0xF804_6E40_C403_F1D0);
    assert_eq!(b.finalize(), 0xAE8B_1486_0A79_9888);
  }

  #[test]
  fn test_nul_bytes_are_data() {
    assert_ne!(Crc64Nvme::checksum(b"ab\0cd"), Crc64Nvme::checksum(b"ab"));
    assert_ne!(Crc64Nvme::checksum(&[0]), Crc64Nvme::checksum(&[]));
  }

  #[test]
  fn test_resume_and_reset() {
    let (a, b) = CHECK_INPUT.split_at(4);
    let mut resumed = Crc64Nvme::resume(Crc64Nvme::checksum(a));
    resumed.update(b);
    assert_eq!(resumed.finalize(), 0xAE8B_1486_0A79_9888);

    resumed.reset();
    assert_eq!(resumed, Crc64Nvme::new());
  }

  #[test]
  fn test_all_kernels_agree() {
    for len in [0, 1, 7, 8, 9, 15, 16, 17, 63, 64, 65, 1000] {
      let data = test_data(len);
      let expected = crc64_bitwise(CRC64_NVME_POLY, !0, &data) ^ !0;
      for force in KERNELS {
        let kernel = kernel_for(force);
        assert_eq!((kernel.func)(!0, &data) ^ !0, expected, "{} len={len}", kernel.name);
      }
    }
  }

  #[test]
  fn test_kernel_names() {
    assert_eq!(kernel_for(Force::Auto).name, SLICE8);
    assert!([REFERENCE, BYTEWISE, SLICE8].contains(&Crc64Nvme::kernel_name()));
  }

  #[test]
  fn test_hex_is_zero_padded() {
    assert_eq!(Crc64Nvme::new().hex(), "0000000000000000");
    let mut hasher = Crc64Nvme::new();
    hasher.update(b"a");
    assert_eq!(hasher.hex(), "8c2f8445b4cbfc3c");
  }

  #[test]
  fn test_checksum_hex_one_shot() {
    assert_eq!(Crc64Nvme::checksum_hex(CHECK_INPUT), "ae8b14860a799888");
    assert_eq!(Crc64Nvme::checksum_hex(b""), "0000000000000000");
    assert_eq!(Crc64Nvme::checksum_hex(b"hello, world!"), "f8046e40c403f1d0");
  }

  #[test]
  fn test_vectored() {
    let bufs: [&[u8]; 3] = [b"hello", b", ", b"world!"];
    assert_eq!(Crc64Nvme::checksum_vectored(&bufs), 0xF804_6E40_C403_F1D0);
  }
}
