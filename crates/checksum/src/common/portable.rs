//! Portable table-driven CRC kernels.
//!
//! All kernels take and return the raw (pre-inverted) register and are
//! bit-identical to [`super::reference`] on every input.
//!
//! - **bytewise**: one table lookup per byte,
//!   `crc' = table[(crc ^ byte) & 0xFF] ^ (crc >> 8)`
//! - **slicing-by-8**: eight bytes per iteration using eight tables, with a
//!   bytewise tail for the remainder
//!
//! | Width | Algorithm | Bytes/iter | Tables |
//! |-------|-----------|------------|--------|
//! | 32-bit | bytewise | 1 | 1×256×u32 |
//! | 32-bit | slice-by-8 | 8 | 8×256×u32 |
//! | 64-bit | bytewise | 1 | 1×256×u64 |
//! | 64-bit | slice-by-8 | 8 | 8×256×u64 |

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - Table indices are masked with `& 0xFF` or are the top byte of the word
#![allow(clippy::indexing_slicing)]

use super::tables::SLICES;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// Update CRC-32 state one byte at a time.
#[inline]
pub fn bytewise_32(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &b in data {
    crc = table[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-32 state using slicing-by-8.
///
/// The first four bytes of each chunk absorb the register; the last four
/// enter as plain data.
#[inline]
pub fn slice8_32(mut crc: u32, data: &[u8], tables: &[[u32; 256]; SLICES]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a & 0xFF) as usize]
      ^ tables[6][((a >> 8) & 0xFF) as usize]
      ^ tables[5][((a >> 16) & 0xFF) as usize]
      ^ tables[4][(a >> 24) as usize]
      ^ tables[3][(b & 0xFF) as usize]
      ^ tables[2][((b >> 8) & 0xFF) as usize]
      ^ tables[1][((b >> 16) & 0xFF) as usize]
      ^ tables[0][(b >> 24) as usize];
  }

  bytewise_32(crc, remainder, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// Update CRC-64 state one byte at a time.
#[inline]
pub fn bytewise_64(mut crc: u64, data: &[u8], table: &[u64; 256]) -> u64 {
  for &b in data {
    crc = table[((crc ^ b as u64) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-64 state using slicing-by-8.
///
/// Each chunk is exactly the register width, so the whole word absorbs the
/// register.
#[inline]
pub fn slice8_64(mut crc: u64, data: &[u8], tables: &[[u64; 256]; SLICES]) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_le_bytes(*chunk) ^ crc;

    crc = tables[7][(val & 0xFF) as usize]
      ^ tables[6][((val >> 8) & 0xFF) as usize]
      ^ tables[5][((val >> 16) & 0xFF) as usize]
      ^ tables[4][((val >> 24) & 0xFF) as usize]
      ^ tables[3][((val >> 32) & 0xFF) as usize]
      ^ tables[2][((val >> 40) & 0xFF) as usize]
      ^ tables[1][((val >> 48) & 0xFF) as usize]
      ^ tables[0][(val >> 56) as usize];
  }

  bytewise_64(crc, remainder, &tables[0])
}
