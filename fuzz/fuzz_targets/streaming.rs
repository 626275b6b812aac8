//! Fuzz target for the streaming API.
//!
//! Arbitrary chunkings, interleaved digest reads and resumes must all agree
//! with the one-shot checksum.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc32, Crc64Nvme};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
  /// Read the digest after every chunk
  peek: bool,
}

fuzz_target!(|input: Input| {
  check_streaming::<Crc32>(&input);
  check_streaming::<Crc64Nvme>(&input);
});

fn check_streaming<C: Checksum>(input: &Input) {
  let data = input.data.as_slice();
  let expected = C::checksum(data);

  let mut hasher = C::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = match input.chunk_sizes.get(chunk_idx % input.chunk_sizes.len().max(1)) {
      Some(&n) => usize::from(n).max(1),
      None => 1,
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;

    if input.peek {
      let partial = hasher.finalize();
      assert_eq!(partial, C::checksum(&data[..end]), "partial digest mismatch at {end}");
      let mut resumed = C::with_initial(partial);
      resumed.update(&data[end..]);
      assert_eq!(resumed.finalize(), expected, "resume mismatch at {end}");
    }
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
}
