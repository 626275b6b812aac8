//! Basic checksum usage: one-shot, streaming and reader APIs.
//!
//! Run with: `cargo run --example basic -p checksum [FILE]`
//!
//! With a file argument, prints both checksums of the file.

use std::{fs::File, io::BufReader};

use checksum::{Checksum, Crc32, Crc64Nvme, checksum_reader};

fn main() -> std::io::Result<()> {
  if let Some(path) = std::env::args_os().nth(1) {
    let crc32 = checksum_reader::<Crc32, _>(BufReader::new(File::open(&path)?))?;
    let crc64 = checksum_reader::<Crc64Nvme, _>(BufReader::new(File::open(&path)?))?;
    println!("{crc32:08x}  {crc64:016x}  {}", path.to_string_lossy());
    return Ok(());
  }

  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
  Ok(())
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-32/ISO-HDLC - HDLC, Ethernet, gzip, zip, PNG
  let crc32 = Crc32::checksum(data);
  println!("CRC-32/ISO-HDLC: 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-64/NVME - NVMe end-to-end protection
  let crc64 = Crc64Nvme::checksum(data);
  println!("CRC-64/NVME:     0x{crc64:016X}");
  assert_eq!(crc64, 0xAE8B_1486_0A79_9888);

  println!("kernels: crc32={} crc64={}\n", Crc32::kernel_name(), Crc64Nvme::kernel_name());
}

/// Streaming: feed data as it arrives; reading the digest does not reset it.
fn streaming_examples() {
  println!("--- Streaming ---\n");

  let mut hasher = Crc64Nvme::new();
  for part in [&b"hello"[..], b", ", b"world!"] {
    hasher.update(part);
    println!("after {:?}: {}", String::from_utf8_lossy(part), hasher.hex());
  }
  assert_eq!(hasher.finalize(), 0xF804_6E40_C403_F1D0);
  println!();
}

/// Resume from a previously published checksum.
fn resume_example() {
  println!("--- Resume ---\n");

  let first = Crc32::checksum(b"1234");
  let mut hasher = Crc32::resume(first);
  hasher.update(b"56789");
  println!("resumed from 0x{first:08X}: 0x{:08X}", hasher.finalize());
  assert_eq!(hasher.finalize(), 0xCBF4_3926);
}
