// Marks an exponent that overflows for any base with a magnitude greater than one.
pub const OVERFLOW_ROUNDS: u8 = u8::MAX;

// Number of square-and-multiply rounds needed for each exponent. 2^63 is the first power of two
// that does not fit in an i64 so everything from 63 on is the overflow marker.
pub const HIGHEST_BIT_SET: [u8; 256] = highest_bit_set();

// Fast access for 10^n where n is 0-19
pub const POWERS_10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

const fn highest_bit_set() -> [u8; 256] {
    let mut table = [OVERFLOW_ROUNDS; 256];
    let mut exp = 0;
    while exp < 63 {
        table[exp] = (usize::BITS - exp.leading_zeros()) as u8;
        exp += 1;
    }
    table
}
