//! Non-cryptographic checksum trait.
//!
//! - **Streaming**: incremental updates, chunking-invariant results
//! - **Non-destructive reads**: `finalize` borrows, so accumulation can continue
//! - **Unkeyed**: error detection only, never integrity against an adversary

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// A value of an implementing type *is* the accumulator: it is created in the
/// algorithm's initial state, mutated by [`update`](Self::update), and read
/// through [`finalize`](Self::finalize), which applies the output transform to
/// a copy of the register without touching it.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not reset the accumulator
/// - for any split of the input into chunks, feeding the chunks in order and
///   finalizing must equal `checksum()` over the concatenation
/// - `reset()` must restore the hasher to its initial state
///
/// # Concurrency
///
/// Hashers are plain values and are not internally synchronized. Sharing one
/// accumulator between threads requires external mutual exclusion; distinct
/// hashers are fully independent.
pub trait Checksum: Clone + Default {
  /// Output size in bytes (4 for CRC-32, 8 for CRC-64).
  const OUTPUT_SIZE: usize;

  /// The checksum output type, returned in native integer representation.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher in the algorithm's initial state.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher whose accumulator corresponds to the finalized
  /// checksum `initial`.
  ///
  /// Useful for resuming a computation from a previously published value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// A zero-length update is a no-op.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything written so far.
  ///
  /// This method does not consume or reset the hasher; further updates keep
  /// accumulating and a later `finalize` reflects all of them.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::{Checksum, Crc64Nvme};
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc64Nvme::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:016x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}
