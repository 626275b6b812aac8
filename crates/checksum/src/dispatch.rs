//! Kernel dispatch: selection and caching.
//!
//! Each CRC family registers a selector that maps its [`Config`](crate::config::Config)
//! to a kernel. The dispatcher runs the selector once and caches the result;
//! every later call is a single indirect call through the cached pointer.
//!
//! ```ignore
//! static DISPATCHER: Dispatcher<Crc32Fn> = Dispatcher::new("crc32", select_crc32);
//!
//! fn update(crc: u32, data: &[u8]) -> u32 {
//!   DISPATCHER.call(crc, data)
//! }
//! ```
//!
//! Without `std` there is no `OnceLock`; the selector is pure and cheap, so it
//! runs on every call instead.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Signatures
// ─────────────────────────────────────────────────────────────────────────────

/// Signature for CRC-32 kernels: `fn(state, data) -> state`.
///
/// The state is the raw (pre-xorout) register.
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

/// Signature for CRC-64 kernels: `fn(state, data) -> state`.
pub type Crc64Fn = fn(u64, &[u8]) -> u64;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel (e.g. `"portable/slice8"`).
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Caches one kernel selection per process.
pub struct Dispatcher<F: Copy + 'static> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected<F>>,
  family: &'static str,
  selector: fn() -> Selected<F>,
}

impl<F: Copy + 'static> Dispatcher<F> {
  /// Create a dispatcher. The selector runs lazily on first use.
  #[must_use]
  pub const fn new(family: &'static str, selector: fn() -> Selected<F>) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      family,
      selector,
    }
  }

  /// Get the selected kernel, initializing on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<F> {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| {
        let selected = (self.selector)();
        log::debug!("{}: selected kernel {}", self.family, selected.name);
        selected
      })
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// CRC family this dispatcher serves.
  #[inline]
  #[must_use]
  pub const fn family(&self) -> &'static str {
    self.family
  }

  /// Name of the selected kernel.
  #[inline]
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.get().name
  }
}

impl Dispatcher<Crc32Fn> {
  /// Run the selected kernel.
  #[inline]
  #[must_use]
  pub fn call(&self, state: u32, data: &[u8]) -> u32 {
    (self.get().func)(state, data)
  }
}

impl Dispatcher<Crc64Fn> {
  /// Run the selected kernel.
  #[inline]
  #[must_use]
  pub fn call(&self, state: u64, data: &[u8]) -> u64 {
    (self.get().func)(state, data)
  }
}

impl<F: Copy + 'static> fmt::Debug for Dispatcher<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("Dispatcher");
    s.field("family", &self.family);
    #[cfg(feature = "std")]
    s.field("selected", &self.inner.get().map(|sel| sel.name));
    s.finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn zero(_: u32, _: &[u8]) -> u32 {
    0
  }

  fn count(state: u32, data: &[u8]) -> u32 {
    state.wrapping_add(data.len() as u32)
  }

  fn select_count() -> Selected<Crc32Fn> {
    Selected::new("test/count", count)
  }

  fn select_zero() -> Selected<Crc32Fn> {
    Selected::new("test/zero", zero)
  }

  #[test]
  fn dispatcher_calls_selected_kernel() {
    static D: Dispatcher<Crc32Fn> = Dispatcher::new("test", select_count);
    assert_eq!(D.kernel_name(), "test/count");
    assert_eq!(D.call(1, b"abc"), 4);
    assert_eq!(D.call(0, &[]), 0);
  }

  #[test]
  fn selection_is_stable() {
    static D: Dispatcher<Crc32Fn> = Dispatcher::new("test", select_zero);
    let a = D.get();
    let b = D.get();
    assert_eq!(a.name, b.name);
    assert_eq!((a.func)(7, b"x"), (b.func)(7, b"x"));
  }
}
