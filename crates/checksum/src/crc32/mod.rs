//! CRC-32/ISO-HDLC.
//!
//! Parameters:
//! - width: 32
//! - poly: 0x04C11DB7 (reflected: 0xEDB88320)
//! - init: 0xFFFF_FFFF
//! - refin/refout: true
//! - xorout: 0xFFFF_FFFF
//! - check: 0xCBF43926
//!
//! The CRC used by HDLC, Ethernet, gzip, zip and PNG.

use crate::{
  common::{
    portable,
    reference::crc32_bitwise,
    tables::{Aligned64, CRC32_ISO_HDLC_POLY, SLICES, generate_crc32_tables_8},
  },
  config::{self, Force},
  dispatch::{Crc32Fn, Dispatcher, Selected},
  params::CrcParams,
};

// ─────────────────────────────────────────────────────────────────────────────
// Tables & Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// Slicing-by-8 tables; table 0 is the classic 256-entry byte table.
pub(crate) static TABLES: Aligned64<[[u32; 256]; SLICES]> = Aligned64(generate_crc32_tables_8(CRC32_ISO_HDLC_POLY));

pub(crate) const REFERENCE: &str = "reference/bitwise";
pub(crate) const BYTEWISE: &str = "portable/bytewise";
pub(crate) const SLICE8: &str = "portable/slice8";

fn reference(crc: u32, data: &[u8]) -> u32 {
  crc32_bitwise(CRC32_ISO_HDLC_POLY, crc, data)
}

fn bytewise(crc: u32, data: &[u8]) -> u32 {
  let [table, ..] = &TABLES.0;
  portable::bytewise_32(crc, data, table)
}

fn slice8(crc: u32, data: &[u8]) -> u32 {
  portable::slice8_32(crc, data, &TABLES.0)
}

/// Kernel implementing `force`.
#[must_use]
pub(crate) fn kernel_for(force: Force) -> Selected<Crc32Fn> {
  match force.resolve() {
    Force::Reference => Selected::new(REFERENCE, reference),
    Force::Bytewise => Selected::new(BYTEWISE, bytewise),
    Force::Auto | Force::Slice8 => Selected::new(SLICE8, slice8),
  }
}

fn select() -> Selected<Crc32Fn> {
  kernel_for(config::crc32().force)
}

pub(crate) static DISPATCHER: Dispatcher<Crc32Fn> = Dispatcher::new("crc32/iso-hdlc", select);

// ─────────────────────────────────────────────────────────────────────────────
// Engine Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Initial register value.
#[inline]
#[must_use]
pub const fn init() -> u32 {
  CrcParams::CRC32_ISO_HDLC.initial as u32
}

/// Feed `data` through the register. A zero-length update is a no-op.
#[inline]
#[must_use]
pub fn update(state: u32, data: &[u8]) -> u32 {
  if data.is_empty() { state } else { DISPATCHER.call(state, data) }
}

/// Apply the output transform. Does not consume the register.
#[inline]
#[must_use]
pub const fn finalize(state: u32) -> u32 {
  state ^ CrcParams::CRC32_ISO_HDLC.xor_out as u32
}

/// One-shot CRC-32/ISO-HDLC of `data`.
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
  finalize(update(init(), data))
}

// ─────────────────────────────────────────────────────────────────────────────
// Hasher
// ─────────────────────────────────────────────────────────────────────────────

define_crc_type! {
  /// CRC-32/ISO-HDLC hasher.
  ///
  /// # Example
  ///
  /// ```rust
  /// use checksum::{Checksum, Crc32};
  ///
  /// let mut hasher = Crc32::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xCBF4_3926);
  /// ```
  pub struct Crc32(u32) {
    params: CrcParams::CRC32_ISO_HDLC,
    dispatcher: DISPATCHER,
  }
}

/// Catalogue name for [`Crc32`].
pub type Crc32IsoHdlc = Crc32;
