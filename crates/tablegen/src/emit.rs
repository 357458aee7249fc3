//! Text emission for generated tables.
//!
//! Output contract, one file per table: exactly 256 lines, each the
//! 8-digit uppercase zero-padded hex of one entry (no `0x` prefix),
//! newline-terminated, in table index order. This is the `%08X` convention
//! consumed by downstream HDL tooling.
//!
//! Each table's write is independent; callers that emit all four tables
//! should treat a failed destination as skip-and-continue, not as an
//! overall failure ([`write_tables`] implements exactly that policy).

use std::{
  fs, io,
  path::{Path, PathBuf},
};

/// File names for tables 0..3, in table order.
pub const TABLE_FILE_NAMES: [&str; 4] = ["table0.txt", "table1.txt", "table2.txt", "table3.txt"];

/// Render a table as text, one 8-digit uppercase hex line per entry.
#[must_use]
pub fn format_table(table: &[u32; 256]) -> String {
  let mut out = String::with_capacity(256 * 9);
  for entry in table {
    out.push_str(&format!("{entry:08X}\n"));
  }
  out
}

/// Write one table to `path`.
///
/// # Errors
///
/// Propagates the underlying open or write failure.
pub fn write_table(path: &Path, table: &[u32; 256]) -> io::Result<()> {
  fs::write(path, format_table(table))
}

/// Write all four tables into `dir` under [`TABLE_FILE_NAMES`].
///
/// A failed destination is skipped and the remaining tables are still
/// attempted. Returns the failures (empty when every table was written);
/// reporting is left to the caller.
pub fn write_tables(dir: &Path, tables: &[[u32; 256]; 4]) -> Vec<(PathBuf, io::Error)> {
  let mut failures = Vec::new();
  for (name, table) in TABLE_FILE_NAMES.iter().zip(tables) {
    let path = dir.join(name);
    if let Err(err) = write_table(&path, table) {
      failures.push((path, err));
    }
  }
  failures
}
