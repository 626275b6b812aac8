//! CRC algorithm parameters.
//!
//! Parameters follow the Rocksoft model used by the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Both
//! algorithms in this crate reflect input and output, so a single
//! `reflected` flag stands for `refin == refout == true`.

use crate::common::tables::{CRC32_ISO_HDLC_POLY, CRC64_NVME_POLY};

/// CRC algorithm parameters.
///
/// Values narrower than 64 bits live in the low `width` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Catalogue name, e.g. `"CRC-64/NVME"`.
  pub name: &'static str,
  /// Width in bits.
  pub width: u8,
  /// Generator polynomial, bit-reversed (LSB-first form).
  pub polynomial: u64,
  /// Generator polynomial without the implicit high bit (MSB-first form).
  pub polynomial_normal: u64,
  /// Initial register value.
  pub initial: u64,
  /// Input and output are both reflected.
  pub reflected: bool,
  /// Final XOR mask.
  pub xor_out: u64,
  /// Checksum of the ASCII string `"123456789"`.
  pub check: u64,
}

impl CrcParams {
  /// CRC-32/ISO-HDLC: HDLC, Ethernet, gzip, zip, PNG.
  pub const CRC32_ISO_HDLC: Self = Self {
    name: "CRC-32/ISO-HDLC",
    width: 32,
    polynomial: CRC32_ISO_HDLC_POLY as u64,
    polynomial_normal: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflected: true,
    xor_out: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
  };

  /// CRC-64/NVME: NVMe end-to-end data protection, AWS S3.
  pub const CRC64_NVME: Self = Self {
    name: "CRC-64/NVME",
    width: 64,
    polynomial: CRC64_NVME_POLY,
    polynomial_normal: 0xAD93_D235_94C9_3659,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflected: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
    check: 0xAE8B_1486_0A79_9888,
  };

  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    if self.width >= 64 {
      u64::MAX
    } else {
      (1u64 << self.width) - 1
    }
  }

  /// Checksum of the empty input: the initial register through the final XOR.
  #[inline]
  #[must_use]
  pub const fn empty_digest(&self) -> u64 {
    (self.initial ^ self.xor_out) & self.mask()
  }

  /// Output size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    (self.width as usize).div_ceil(8)
  }
}
