//! Const-fn lookup table generation for slicing-by-4 CRC-32.
//!
//! All generation here is MSB-first with a zero initial register, matching
//! the hardware shift-register convention: the dividend byte sits in the
//! top byte of a 32-bit register, and bits shifted past bit 31 are
//! discarded. `u32` shift semantics provide exactly that wraparound, so no
//! explicit masking is needed.
//!
//! # Table Layout
//!
//! | Table | Entry `[i]` |
//! |-------|-------------|
//! | 0 | remainder of byte `i` (single-byte CRC, zero init) |
//! | 1 | remainder of byte `i` one position earlier in a 4-byte group |
//! | 2 | remainder of byte `i` two positions earlier |
//! | 3 | remainder of byte `i` three positions earlier |
//!
//! Tables 1..3 follow from table 0 by the byte-advance recurrence
//! ([`advance_byte`]); each advance indexes table 0 with the top byte of
//! the *current* intermediate remainder, not the original table index.

// SAFETY: All array indexing in this module uses bounded loop indices
// (0..256) or a masked top byte (& 0xFF). Clippy cannot prove this in
// const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// CRC-32 generator polynomial (0x04C11DB7) in normal (non-reflected) form.
///
/// Used MSB-first by Ethernet FCS, MPEG-2 TS, and POSIX cksum. Note this is
/// the same polynomial as CRC-32 IEEE, which processes it in reflected form.
pub const CRC32_MPEG2_POLY: u32 = 0x04C1_1DB7;

// ─────────────────────────────────────────────────────────────────────────────
// Base Table (single-byte remainders)
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single base-table entry.
///
/// Simulates polynomial long division of `index`, placed in the top byte of
/// a 32-bit register, by `poly`: one shift per input bit, XORing in the
/// polynomial whenever a set bit leaves the register.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = (index as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
    bit += 1;
  }
  crc
}

/// Generate the 256-entry single-byte remainder table.
///
/// Pure and total: fully determined by `poly`, no failure modes.
#[must_use]
pub const fn generate_base_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = crc32_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte-Advance Recurrence (tables 1..3)
// ─────────────────────────────────────────────────────────────────────────────

/// Advance a 32-bit remainder by one (virtual) zero input byte.
///
/// Given a current remainder `c`, the remainder after appending one more
/// zero byte to the dividend is `(c << 8) ^ table0[top_byte(c)]`. The
/// table-0 lookup is indexed by the top byte of `c` itself, so chained
/// advances walk through intermediate remainders rather than re-reading
/// the original table index.
#[must_use]
pub const fn advance_byte(table0: &[u32; 256], c: u32) -> u32 {
  (c << 8) ^ table0[((c >> 24) & 0xFF) as usize]
}

/// Generate the 4 lookup tables for slice-by-4 computation.
///
/// Table 0 is built first by bitwise division; tables 1..3 are then each
/// derived from the previous table by one application of [`advance_byte`]
/// per entry.
#[must_use]
pub const fn generate_crc32_tables_4(poly: u32) -> [[u32; 256]; 4] {
  let table0 = generate_base_table(poly);
  let mut tables = [table0, [0u32; 256], [0u32; 256], [0u32; 256]];

  let mut k = 1usize;
  while k < 4 {
    let mut i = 0usize;
    while i < 256 {
      tables[k][i] = advance_byte(&table0, tables[k - 1][i]);
      i += 1;
    }
    k += 1;
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────


// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;
