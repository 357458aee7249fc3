//! Bitwise reference CRC-32 (non-reflected, MSB-first).
//!
//! Canonical source of truth for the table generator's register
//! convention: zero initial state, no input/output reflection, no final
//! XOR. Intentionally slow (one bit at a time) and used only as a test
//! oracle — the crate's product is tables, not checksums.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-32 computation over `data` with the given normal-form
/// polynomial.
///
/// Returns the raw register state. For a single input byte this is, by
/// construction, the corresponding base-table entry.
#[must_use]
pub const fn crc32_bitwise(poly: u32, data: &[u8]) -> u32 {
  let mut crc = 0u32;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tables::CRC32_MPEG2_POLY;

  #[test]
  fn test_bitwise_zero_message() {
    // Zero bytes XOR nothing into a zero register.
    assert_eq!(crc32_bitwise(CRC32_MPEG2_POLY, &[]), 0);
    assert_eq!(crc32_bitwise(CRC32_MPEG2_POLY, &[0x00]), 0);
  }

  #[test]
  fn test_bitwise_single_set_bit() {
    assert_eq!(crc32_bitwise(CRC32_MPEG2_POLY, &[0x01]), CRC32_MPEG2_POLY);
  }
}
