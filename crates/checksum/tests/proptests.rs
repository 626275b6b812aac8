//! Property-based tests for the CRC engines.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors, and cross-check every result against `crc-fast`.

use checksum::{Checksum, Crc32, Crc64Nvme, crc32, crc64};
use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate sorted split points ending at `len`.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort_unstable();
    splits.push(len);
    splits.dedup();
    splits
  })
}

// Generic Property Tests

/// Incremental updates produce the same result as one-shot.
fn prop_incremental_equals_oneshot<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut incremental = C::new();
  incremental.update(a);
  incremental.update(b);

  incremental.finalize() == C::checksum(data)
}

/// Many uneven updates produce the same result as one-shot.
fn prop_multi_incremental<C: Checksum>(data: &[u8], splits: &[usize]) -> bool {
  let mut hasher = C::new();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  hasher.update(&data[prev..]);

  hasher.finalize() == C::checksum(data)
}

/// Reset returns the hasher to its initial state.
fn prop_reset_works<C: Checksum>(data: &[u8]) -> bool {
  let mut hasher = C::new();
  hasher.update(data);
  hasher.reset();
  hasher.update(data);

  hasher.finalize() == C::checksum(data)
}

/// Reading the digest mid-stream does not disturb accumulation.
fn prop_read_then_write<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut hasher = C::new();
  hasher.update(a);
  let mid = hasher.finalize();
  let again = hasher.finalize();
  hasher.update(b);

  mid == again && mid == C::checksum(a) && hasher.finalize() == C::checksum(data)
}

// CRC-32/ISO-HDLC Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn crc32_matches_crc_fast(data in arb_data()) {
    let expected = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(Crc32::checksum(&data), expected);
    prop_assert_eq!(crc32::checksum(&data), expected);
  }

  #[test]
  fn crc32_incremental_equals_oneshot(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_incremental_equals_oneshot::<Crc32>(&data, split));
  }

  #[test]
  fn crc32_multi_incremental(data in arb_data(), splits in arb_splits(8192, 5)) {
    prop_assert!(prop_multi_incremental::<Crc32>(&data, &splits));
  }

  #[test]
  fn crc32_reset(data in arb_data()) {
    prop_assert!(prop_reset_works::<Crc32>(&data));
  }

  #[test]
  fn crc32_read_then_write(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_read_then_write::<Crc32>(&data, split));
  }

  #[test]
  fn crc32_resume_correctness(data in arb_data(), split in 0..8192usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let mut resumed = Crc32::resume(Crc32::checksum(a));
    resumed.update(b);

    prop_assert_eq!(resumed.finalize(), Crc32::checksum(&data));
  }
}

// CRC-64/NVME Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn crc64_nvme_matches_crc_fast(data in arb_data()) {
    let expected = crc_fast::checksum(CrcAlgorithm::Crc64Nvme, &data);
    prop_assert_eq!(Crc64Nvme::checksum(&data), expected);
    prop_assert_eq!(crc64::checksum(&data), expected);
  }

  #[test]
  fn crc64_nvme_streaming_matches_crc_fast_digest(data in arb_data(), splits in arb_splits(8192, 5)) {
    let mut ours = Crc64Nvme::new();
    let mut theirs = crc_fast::Digest::new(CrcAlgorithm::Crc64Nvme);
    let mut prev = 0;
    for &split in &splits {
      let split = split.min(data.len()).max(prev);
      ours.update(&data[prev..split]);
      theirs.update(&data[prev..split]);
      prev = split;
    }
    prop_assert_eq!(ours.finalize(), theirs.finalize());
  }

  #[test]
  fn crc64_nvme_incremental_equals_oneshot(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_incremental_equals_oneshot::<Crc64Nvme>(&data, split));
  }

  #[test]
  fn crc64_nvme_multi_incremental(data in arb_data(), splits in arb_splits(8192, 5)) {
    prop_assert!(prop_multi_incremental::<Crc64Nvme>(&data, &splits));
  }

  #[test]
  fn crc64_nvme_reset(data in arb_data()) {
    prop_assert!(prop_reset_works::<Crc64Nvme>(&data));
  }

  #[test]
  fn crc64_nvme_read_then_write(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_read_then_write::<Crc64Nvme>(&data, split));
  }

  #[test]
  fn crc64_nvme_raw_engine_matches_hasher(data in arb_data(), split in 0..8192usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);
    let state = crc64::update(crc64::update(crc64::init(), a), b);
    prop_assert_eq!(crc64::finalize(state), Crc64Nvme::checksum(&data));
  }
}
