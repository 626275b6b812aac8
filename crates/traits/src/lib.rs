//! Checksum traits shared by the CRC engines.
//!
//! This crate defines the streaming contract every checksum engine conforms
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming accumulator + one-shot computation |
//! | [`io::ChecksumReader`] | Hash bytes as they are read (`std`) |
//! | [`io::ChecksumWriter`] | Hash bytes as they are written (`std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::Checksum;
