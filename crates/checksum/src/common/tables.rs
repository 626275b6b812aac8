//! Const-fn CRC lookup table generation.
//!
//! Tables are computed at compile time and embedded in the binary, so they
//! are initialized exactly once and never mutated afterwards.
//!
//! # Table Structure
//!
//! Each width uses 8 tables of 256 entries for slicing-by-8:
//! - Table 0: remainder contribution of each byte value (the classic table)
//! - Tables 1-7: contribution of a byte 1-7 positions earlier in the stream
//!
//! | Width | Size |
//! |-------|------|
//! | 32-bit | 8×256×u32 = 8 KiB |
//! | 64-bit | 8×256×u64 = 16 KiB |

// SAFETY: All array indexing in this module uses indices below 256 (byte values,
// single bits and their ORs) and slice indices below SLICES.
#![allow(clippy::indexing_slicing)]

/// Number of tables used by the slicing-by-8 kernels.
pub const SLICES: usize = 8;

/// Wrapper type to force 64-byte (cache line) alignment.
#[derive(Debug)]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);

// ─────────────────────────────────────────────────────────────────────────────
// Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a `const fn` building the slicing-by-8 tables for one register width.
///
/// Table 0 is built from its eight single-bit entries: `0x80` maps to the
/// polynomial and each lower bit is one reduction step further along. Every
/// other index is the XOR of entries for its bits, since the reduction is
/// linear over GF(2). Table `k` extends table `k - 1` by one zero byte.
macro_rules! reflected_tables {
  ($(#[$doc:meta])* $vis:vis fn $name:ident -> $int:ty;) => {
    $(#[$doc])*
    #[must_use]
    $vis const fn $name(poly: $int) -> [[$int; 256]; SLICES] {
      let mut tables = [[0 as $int; 256]; SLICES];

      let mut bit = 0x80usize;
      let mut crc = poly;
      while bit != 0 {
        tables[0][bit] = crc;
        crc = (crc >> 1) ^ (poly & (0 as $int).wrapping_sub(crc & 1));
        bit >>= 1;
      }

      let mut n = 2usize;
      while n < 256 {
        let mut j = 1usize;
        while j < n {
          tables[0][n | j] = tables[0][n] ^ tables[0][j];
          j += 1;
        }
        n <<= 1;
      }

      let mut k = 1usize;
      while k < SLICES {
        let mut i = 0usize;
        while i < 256 {
          let prev = tables[k - 1][i];
          tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
          i += 1;
        }
        k += 1;
      }

      tables
    }
  };
}

reflected_tables! {
  /// Slicing-by-8 tables for a reflected 32-bit polynomial.
  pub fn generate_crc32_tables_8 -> u32;
}

reflected_tables! {
  /// Slicing-by-8 tables for a reflected 64-bit polynomial.
  pub fn generate_crc64_tables_8 -> u64;
}

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial Constants (Reflected Form)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ISO-HDLC polynomial (0x04C11DB7) in reflected form.
/// Used by HDLC, Ethernet, gzip, zip, PNG.
pub const CRC32_ISO_HDLC_POLY: u32 = 0xEDB8_8320;

/// CRC-64/NVME polynomial (0xAD93D23594C93659) in reflected form.
/// Used by NVMe end-to-end data protection.
pub const CRC64_NVME_POLY: u64 = 0x9A6C_9329_AC4B_C9B5;
