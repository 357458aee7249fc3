//! Slicing-by-4 lookup table generation for CRC-32 (polynomial 0x04C11DB7).
//!
//! Slicing-by-4 consumes four input bytes per CRC iteration by combining
//! four independent table lookups with XOR, instead of one byte per step
//! with a single table. This crate builds those four tables for the
//! normal-form (non-reflected, MSB-first) 0x04C11DB7 polynomial — the
//! register convention of a hardware CRC shift register, as used by
//! Ethernet FCS and MPEG-2 transport streams.
//!
//! # Pipeline
//!
//! Two stages, in strict dependency order:
//!
//! 1. [`generate_base_table`] — single-byte remainders, computed by bitwise
//!    polynomial long division.
//! 2. [`advance_byte`] applied per entry — tables 1..3 derived from the base
//!    table by the byte-advance recurrence.
//!
//! [`generate_crc32_tables_4`] runs both stages and returns all four tables.
//!
//! This crate emits tables; it does not compute checksums over data.
//!
//! # Example
//!
//! ```rust
//! use crc32_tablegen::{CRC32_MPEG2_POLY, generate_crc32_tables_4};
//!
//! let tables = generate_crc32_tables_4(CRC32_MPEG2_POLY);
//! assert_eq!(tables[0][0], 0x0000_0000);
//! assert_eq!(tables[0][1], CRC32_MPEG2_POLY);
//! ```
//!
//! # no_std Support
//!
//! The table core is `no_std`. Disable the `std` feature to drop the text
//! emission layer:
//!
//! ```toml
//! [dependencies]
//! crc32-tablegen = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod tables;

#[cfg(feature = "std")]
pub mod emit;

// Bitwise oracle for tests; not part of the public surface (the crate emits
// tables, it does not checksum data).
#[cfg(test)]
pub(crate) mod reference;

#[cfg(feature = "std")]
pub use emit::{TABLE_FILE_NAMES, format_table, write_table, write_tables};
pub use tables::{
  CRC32_MPEG2_POLY, advance_byte, crc32_table_entry, generate_base_table, generate_crc32_tables_4,
};
