//! Width-generic CRC building blocks.
//!
//! - Const-fn lookup table generation
//! - Bitwise reference implementations (test oracle + `reference` kernel)
//! - Portable table-driven kernels (bytewise, slicing-by-8)

pub mod portable;
pub mod reference;
pub mod tables;
