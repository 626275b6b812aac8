//! Differential fuzzing against `crc-fast` and the bitwise reference.

#![no_main]

use checksum::{Checksum, Crc32, Crc64Nvme, __internal};
use crc_fast::CrcAlgorithm;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = Crc32::checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, data) as u32;
  assert_eq!(
    ours,
    reference,
    "CRC-32/ISO-HDLC mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );
  assert_eq!(__internal::crc32_bitwise(0xEDB8_8320, !0, data) ^ !0, ours);

  let ours = Crc64Nvme::checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc64Nvme, data);
  assert_eq!(
    ours,
    reference,
    "CRC-64/NVME mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}",
    data.len()
  );
  assert_eq!(__internal::crc64_bitwise(0x9A6C_9329_AC4B_C9B5, !0, data) ^ !0, ours);
});
