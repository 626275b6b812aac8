//! Internal macros for CRC type generation.
//!
//! CRC-32/ISO-HDLC and CRC-64/NVME share identical structure (reflected,
//! all-ones init and xorout) and differ only in register width, parameters
//! and dispatcher.

/// Generate a reflected CRC type with all trait implementations.
///
/// This macro creates:
/// - The struct definition with a single `state` register
/// - `resume()`, `crc()`, `params()`, `kernel_name()` and (with `alloc`) `hex()`, `checksum_hex()`
/// - `Checksum` trait implementation
/// - `std::io::Write` implementation (with `std`)
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc64Nvme`)
/// - `$int`: The register type (`u32` or `u64`)
/// - `$params`: The [`CrcParams`](crate::CrcParams) constant
/// - `$dispatcher`: The dispatcher static
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($int:ty) {
      params: $params:expr,
      dispatcher: $dispatcher:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, PartialEq, Eq)]
    $vis struct $name {
      /// Raw register; the output transform is applied on finalize.
      state: $int,
    }

    impl $name {
      const INIT: $int = $params.initial as $int;
      const XOR_OUT: $int = $params.xor_out as $int;

      /// Create a hasher to resume from a previously finalized CRC value.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $int) -> Self {
        Self { state: crc ^ Self::XOR_OUT }
      }

      /// The checksum of everything written so far (same as `finalize`).
      #[inline]
      #[must_use]
      pub const fn crc(&self) -> $int {
        self.state ^ Self::XOR_OUT
      }

      /// Algorithm parameters.
      #[inline]
      #[must_use]
      pub const fn params() -> $crate::CrcParams {
        $params
      }

      /// Name of the kernel serving this algorithm in this process.
      #[must_use]
      pub fn kernel_name() -> &'static str {
        $dispatcher.kernel_name()
      }

      /// Lowercase hexadecimal rendering of the current checksum,
      /// zero-padded to the full output width.
      #[cfg(feature = "alloc")]
      #[must_use]
      pub fn hex(&self) -> alloc::string::String {
        alloc::format!("{:0width$x}", self.crc(), width = <Self as $crate::Checksum>::OUTPUT_SIZE * 2)
      }

      /// One-shot checksum of `data` rendered like [`hex`](Self::hex).
      #[cfg(feature = "alloc")]
      #[must_use]
      pub fn checksum_hex(data: &[u8]) -> alloc::string::String {
        let mut hasher = <Self as $crate::Checksum>::new();
        $crate::Checksum::update(&mut hasher, data);
        hasher.hex()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self { state: Self::INIT }
      }
    }

    impl core::fmt::Debug for $name {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(stringify!($name))
          .field("crc", &format_args!("{:#x}", self.crc()))
          .finish()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$int>();
      type Output = $int;

      #[inline]
      fn new() -> Self {
        Self { state: Self::INIT }
      }

      #[inline]
      fn with_initial(initial: $int) -> Self {
        Self::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        if !data.is_empty() {
          self.state = $dispatcher.call(self.state, data);
        }
      }

      #[inline]
      fn finalize(&self) -> $int {
        self.state ^ Self::XOR_OUT
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::INIT;
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        $crate::Checksum::update(self, buf);
        Ok(buf.len())
      }

      #[inline]
      fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
        let mut n = 0;
        for buf in bufs {
          $crate::Checksum::update(self, buf);
          n += buf.len();
        }
        Ok(n)
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}
