use proptest::prelude::*;

use super::*;

proptest! {
  // The base table is GF(2)-linear in its index: table0 maps i to the
  // remainder of i·x^32, and remainders of sums are sums of remainders.
  #[test]
  fn base_table_is_linear(a in any::<u8>(), b in any::<u8>()) {
    let table0 = generate_base_table(CRC32_MPEG2_POLY);
    prop_assert_eq!(
      table0[(a ^ b) as usize],
      table0[a as usize] ^ table0[b as usize]
    );
  }

  // advance_byte inherits linearity from the base table: top bytes and
  // shifts both distribute over XOR.
  #[test]
  fn advance_is_linear(x in any::<u32>(), y in any::<u32>()) {
    let table0 = generate_base_table(CRC32_MPEG2_POLY);
    prop_assert_eq!(
      advance_byte(&table0, x ^ y),
      advance_byte(&table0, x) ^ advance_byte(&table0, y)
    );
  }

  // Chaining three advances from a base entry lands on table 3, reading
  // the top byte of each intermediate remainder along the way.
  #[test]
  fn chained_advances_reach_table3(i in any::<u8>()) {
    let tables = generate_crc32_tables_4(CRC32_MPEG2_POLY);
    let mut c = tables[0][i as usize];
    c = advance_byte(&tables[0], c);
    prop_assert_eq!(c, tables[1][i as usize]);
    c = advance_byte(&tables[0], c);
    prop_assert_eq!(c, tables[2][i as usize]);
    c = advance_byte(&tables[0], c);
    prop_assert_eq!(c, tables[3][i as usize]);
  }
}
