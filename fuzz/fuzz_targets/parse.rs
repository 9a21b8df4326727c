#![no_main]

use numkit::{parse_integer, parse_mixed, OnFailure, Radix};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    text: &'a str,
    radix: u32,
    from: usize,
    to: usize,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    let radix = match Radix::new(data.radix % 40) {
        Ok(radix) => radix,
        Err(_) => return,
    };

    // The whole text must agree with the standard library
    let parsed = parse_integer::<i64, _, _>(Some(data.text), .., radix, OnFailure::Absent);
    assert_eq!(parsed, Ok(i64::from_str_radix(data.text, radix.get()).ok()));

    let parsed = parse_integer::<i16, _, _>(Some(data.text), .., radix, OnFailure::Absent);
    assert_eq!(parsed, Ok(i16::from_str_radix(data.text, radix.get()).ok()));

    // Sub-ranges either parse, fall back to the default or report the range
    let result = parse_integer::<i32, _, _>(Some(data.text.as_bytes()), data.from..data.to, radix, OnFailure::Default(0));
    let in_range = data.from <= data.to && data.to <= data.text.len();
    assert_eq!(result.is_ok(), in_range);

    let _ = parse_mixed(data.text);
});
