//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and hash exactly the bytes transferred,
//! so short reads and short writes never skew the result.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use checksum::{Checksum, ChecksumReader, Crc64Nvme};
//!
//! let mut reader = Crc64Nvme::reader(Cursor::new(b"hello, world!".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello, world!");
//! assert_eq!(reader.crc(), 0xF804_6E40_C403_F1D0);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Read};

pub use traits::io::{ChecksumReader, ChecksumWriter};

use crate::Checksum;

const BUF_SIZE: usize = 64 * 1024;

/// Drain `reader` to EOF and return the checksum of everything read.
///
/// Interrupted reads are retried; any other error is returned as is and the
/// partial checksum is discarded.
///
/// ```rust
/// use checksum::{Crc32, checksum_reader};
///
/// let crc = checksum_reader::<Crc32, _>(&b"123456789"[..])?;
/// assert_eq!(crc, 0xCBF4_3926);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn checksum_reader<C: Checksum, R: Read>(mut reader: R) -> io::Result<C::Output> {
  let mut hasher = C::new();
  let mut buf = std::vec![0u8; BUF_SIZE];
  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => {
        let Some(chunk) = buf.get(..n) else {
          return Err(io::Error::other("reader reported more bytes than the buffer holds"));
        };
        hasher.update(chunk);
      }
      Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
      Err(e) => return Err(e),
    }
  }
  log::trace!("checksum_reader: drained reader");
  Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
  use std::{
    io::{Cursor, Write},
    string::ToString,
  };

  use super::*;
  use crate::{Crc32, Crc64Nvme};

  /// Returns one byte per read and an `Interrupted` error between reads.
  struct Stutter<'a> {
    data: &'a [u8],
    interrupt: bool,
  }

  impl Read for Stutter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      self.interrupt = !self.interrupt;
      if self.interrupt {
        return Err(io::ErrorKind::Interrupted.into());
      }
      match (self.data.split_first(), buf.first_mut()) {
        (Some((&b, rest)), Some(slot)) => {
          *slot = b;
          self.data = rest;
          Ok(1)
        }
        _ => Ok(0),
      }
    }
  }

  struct Broken;

  impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::other("boom"))
    }
  }

  #[test]
  fn checksum_reader_matches_oneshot() {
    let data: std::vec::Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    let crc = checksum_reader::<Crc64Nvme, _>(Cursor::new(&data)).unwrap();
    assert_eq!(crc, Crc64Nvme::checksum(&data));
  }

  #[test]
  fn checksum_reader_retries_interrupted() {
    let reader = Stutter {
      data: b"hello, world!",
      interrupt: false,
    };
    assert_eq!(checksum_reader::<Crc32, _>(reader).unwrap(), 0x5898_8D13);
  }

  #[test]
  fn checksum_reader_propagates_errors() {
    let err = checksum_reader::<Crc32, _>(Broken).unwrap_err();
    assert_eq!(err.to_string(), "boom");
  }

  #[test]
  fn checksum_reader_empty() {
    assert_eq!(checksum_reader::<Crc32, _>(io::empty()).unwrap(), 0);
  }

  #[test]
  fn writer_adapter_hashes_written_bytes() {
    let mut writer = Crc32::writer(std::vec::Vec::new());
    writer.write_all(b"123456789").unwrap();
    assert_eq!(writer.crc(), 0xCBF4_3926);
    let (inner, crc) = writer.into_parts();
    assert_eq!(inner, b"123456789");
    assert_eq!(crc, 0xCBF4_3926);
  }
}
