//! CRC-32/ISO-HDLC and CRC-64/NVME checksums.
//!
//! # Supported Algorithms
//!
//! | Type | Polynomial | Output | Use Cases |
//! |------|------------|--------|-----------|
//! | [`Crc32`] | 0x04C11DB7 | `u32` | HDLC, Ethernet, gzip, zip, PNG |
//! | [`Crc64Nvme`] | 0xAD93D23594C93659 | `u64` | NVMe, object-store integrity |
//!
//! Both are reflected with all-ones init and xorout, so the checksum of the
//! empty input is zero.
//!
//! # Kernels
//!
//! | Kernel | Name | Notes |
//! |--------|------|-------|
//! | bitwise reference | `reference/bitwise` | table-less, auditable |
//! | single table | `portable/bytewise` | one byte per step |
//! | slicing-by-8 | `portable/slice8` | default |
//!
//! All kernels are bit-identical. The kernel is chosen once per process (see
//! [`config`]) and cached by a [`dispatch::Dispatcher`].
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32, Crc64Nvme};
//!
//! // One-shot computation
//! let data = b"123456789";
//! assert_eq!(Crc32::checksum(data), 0xCBF4_3926);
//! assert_eq!(Crc64Nvme::checksum(data), 0xAE8B_1486_0A79_9888);
//!
//! // Streaming computation; finalize never resets the hasher
//! let mut hasher = Crc64Nvme::new();
//! hasher.update(b"1234");
//! let partial = hasher.finalize();
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), Crc64Nvme::checksum(data));
//! assert_eq!(partial, Crc64Nvme::checksum(b"1234"));
//!
//! // Raw engine operations
//! let state = checksum::crc32::update(checksum::crc32::init(), data);
//! assert_eq!(checksum::crc32::finalize(state), 0xCBF4_3926);
//! ```
//!
//! Hashers are deliberately not `Copy`; forking a running checksum takes an
//! explicit `clone()`:
//!
//! ```compile_fail
//! fn assert_copy<T: Copy>() {}
//! assert_copy::<checksum::Crc64Nvme>();
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod config;
pub mod crc32;
pub mod crc64;
pub mod dispatch;
#[cfg(feature = "std")]
mod io;
mod params;

pub use crc32::{Crc32, Crc32IsoHdlc};
pub use crc64::{Crc64, Crc64Nvme};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter, checksum_reader};
pub use params::CrcParams;
pub use traits::Checksum;

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::reference::{crc32_bitwise, crc64_bitwise};
}
