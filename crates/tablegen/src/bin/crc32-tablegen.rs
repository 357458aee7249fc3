//! Slicing-by-4 CRC-32 table generator.
//!
//! Usage:
//!   cargo run --release -p crc32-tablegen
//!   cargo run --release -p crc32-tablegen -- --out-dir tables/

use std::{env, fs, path::PathBuf, process::ExitCode};

use crc32_tablegen::{CRC32_MPEG2_POLY, emit, generate_crc32_tables_4};

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  /// Output directory for table0.txt..table3.txt.
  out_dir: Option<PathBuf>,

  /// Show help.
  help: bool,
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = env::args().skip(1);

  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => continue,
      "--help" | "-h" => args.help = true,
      "--out-dir" | "-o" => {
        let Some(value) = iter.next() else {
          return Err("--out-dir requires a value".to_string());
        };
        args.out_dir = Some(PathBuf::from(value));
      }
      other => {
        return Err(format!("Unknown argument: {other}"));
      }
    }
  }

  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
crc32-tablegen: emit slicing-by-4 CRC-32 lookup tables

Writes table0.txt..table3.txt for the 0x04C11DB7 polynomial, each 256
lines of 8-digit uppercase hex, one entry per line in index order.

USAGE:
  crc32-tablegen [OPTIONS]

OPTIONS:
  -o, --out-dir <DIR>   Output directory (default: current directory)
  -h, --help            Show this help
"
  );
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(err) => {
      eprintln!("error: {err}");
      print_help();
      return ExitCode::FAILURE;
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from("."));
  if let Err(err) = fs::create_dir_all(&out_dir) {
    eprintln!("error creating {}: {err}", out_dir.display());
  }

  let tables = generate_crc32_tables_4(CRC32_MPEG2_POLY);

  // A failed destination is reported and skipped; the remaining tables are
  // still attempted and partial output is not an overall failure.
  for (path, err) in emit::write_tables(&out_dir, &tables) {
    eprintln!("error opening {}: {err}", path.display());
  }

  ExitCode::SUCCESS
}
