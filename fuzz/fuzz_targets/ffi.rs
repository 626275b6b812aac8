//! Fuzz the C ABI with arbitrary write / read sequences on live handles.

#![no_main]

use arbitrary::Arbitrary;
use checksum_ffi::*;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
  Write(Vec<u8>),
  Read,
}

fuzz_target!(|ops: Vec<Op>| {
  let h = hasher_new();
  let d = digest_new();
  let mut written = Vec::new();

  for op in &ops {
    // SAFETY: `h` and `d` are live until freed below; buffers are live slices.
    unsafe {
      match op {
        Op::Write(bytes) => {
          hasher_write(h, bytes.as_ptr().cast(), bytes.len());
          digest_write(d, bytes.as_ptr().cast(), bytes.len());
          written.extend_from_slice(bytes);
        }
        Op::Read => {
          assert_eq!(hasher_finalize(h), crc32_hash(written.as_ptr().cast(), written.len()));
          assert_eq!(digest_sum64(d), crc64_nvme_hash(written.as_ptr().cast(), written.len()));
        }
      }
    }
  }

  // SAFETY: each handle is freed exactly once.
  unsafe {
    hasher_free(h);
    digest_free(d);
  }
});
