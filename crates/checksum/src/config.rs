//! Runtime kernel configuration.
//!
//! Every kernel is bit-identical, so configuration only ever trades speed for
//! auditability: benchmarks and tests can pin the bitwise reference or the
//! single-table kernel, production keeps `auto`.
//!
//! Overrides are read from the environment once per process (`std` only):
//!
//! | Variable | Family |
//! |----------|--------|
//! | `CHECKSUM_CRC32_FORCE` | CRC-32/ISO-HDLC |
//! | `CHECKSUM_CRC64_FORCE` | CRC-64/NVME |
//!
//! Accepted values are listed on [`Force`]. Unrecognized values are logged and
//! ignored.

use core::{fmt, str::FromStr};

/// Environment variable overriding the CRC-32 kernel.
pub const CRC32_FORCE_ENV: &str = "CHECKSUM_CRC32_FORCE";

/// Environment variable overriding the CRC-64 kernel.
pub const CRC64_FORCE_ENV: &str = "CHECKSUM_CRC64_FORCE";

/// Requested kernel for a CRC family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Force {
  /// Let the crate choose (currently slicing-by-8).
  #[default]
  Auto,
  /// Table-less bitwise reference (`reference`, `bitwise`).
  Reference,
  /// Single 256-entry table, one byte per step (`bytewise`, `table`).
  Bytewise,
  /// Eight tables, eight bytes per step (`slice8`, `slice-by-8`, `portable`).
  Slice8,
}

impl Force {
  /// Canonical lowercase name, accepted back by [`FromStr`].
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
    }
  }

  /// Resolve `Auto` to the concrete kernel it stands for.
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto => Self::Slice8,
      other => other,
    }
  }
}

impl fmt::Display for Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Force {
  type Err = ParseForceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    let is = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));

    if is(&["auto", "default"]) {
      Ok(Self::Auto)
    } else if is(&["reference", "bitwise"]) {
      Ok(Self::Reference)
    } else if is(&["bytewise", "table"]) {
      Ok(Self::Bytewise)
    } else if is(&["slice8", "slice-by-8", "slicing-by-8", "portable"]) {
      Ok(Self::Slice8)
    } else {
      Err(ParseForceError::new())
    }
  }
}

/// The kernel name was not recognized.
///
/// Intentionally opaque; the caller already holds the rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub struct ParseForceError;

impl ParseForceError {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl fmt::Display for ParseForceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown CRC kernel")
  }
}

impl core::error::Error for ParseForceError {}

/// Effective configuration for one CRC family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// What the environment asked for.
  pub requested: Force,
  /// What dispatch will run (`requested` with `Auto` resolved).
  pub force: Force,
}

impl Config {
  #[must_use]
  pub const fn from_request(requested: Force) -> Self {
    Self {
      requested,
      force: requested.resolve(),
    }
  }
}

/// Interpret the raw value of override variable `name`.
///
/// Unset, empty and whitespace-only values mean `Auto`. Unrecognized values
/// are logged and also mean `Auto`.
#[cfg(any(feature = "std", test))]
fn parse_override(name: &str, value: Option<&str>) -> Force {
  let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
    return Force::Auto;
  };
  match value.parse::<Force>() {
    Ok(force) => force,
    Err(err) => {
      log::warn!("{name}={value:?}: {err}; falling back to auto");
      Force::Auto
    }
  }
}

#[cfg(feature = "std")]
fn read_force(name: &str) -> Force {
  let value = std::env::var(name).ok();
  parse_override(name, value.as_deref())
}

/// Effective CRC-32/ISO-HDLC configuration.
#[cfg(feature = "std")]
#[must_use]
pub fn crc32() -> Config {
  use std::sync::OnceLock;
  static CONFIG: OnceLock<Config> = OnceLock::new();
  *CONFIG.get_or_init(|| Config::from_request(read_force(CRC32_FORCE_ENV)))
}

/// Effective CRC-64/NVME configuration.
#[cfg(feature = "std")]
#[must_use]
pub fn crc64() -> Config {
  use std::sync::OnceLock;
  static CONFIG: OnceLock<Config> = OnceLock::new();
  *CONFIG.get_or_init(|| Config::from_request(read_force(CRC64_FORCE_ENV)))
}

/// Effective CRC-32/ISO-HDLC configuration.
#[cfg(not(feature = "std"))]
#[must_use]
pub fn crc32() -> Config {
  Config::from_request(Force::Auto)
}

/// Effective CRC-64/NVME configuration.
#[cfg(not(feature = "std"))]
#[must_use]
pub fn crc64() -> Config {
  Config::from_request(Force::Auto)
}
