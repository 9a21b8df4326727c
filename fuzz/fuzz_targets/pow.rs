#![no_main]

use numkit::maths::checked_pow;

libfuzzer_sys::fuzz_target!(|data: (i64, u8)| {
    let (base, exp) = data;
    let exp = u32::from(exp);
    let expected = if exp >= 63 && !matches!(base, -1..=1) {
        None
    } else {
        base.checked_pow(exp)
    };
    assert_eq!(checked_pow(base, exp).ok(), expected);
});
