use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use numkit::compound::{decode, encode_i16};
use numkit::maths::checked_pow;
use numkit::{compare, parse_integer, Number, OnFailure, Radix};
use rust_decimal::Decimal;

const SAMPLES: &[&str] = &["0", "-128", "2147483647", "-9223372036854775808", "12x45", "99999999999999999999"];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_i64");
    for &text in SAMPLES {
        group.bench_with_input(BenchmarkId::new("numkit", text), text, |b, text| {
            b.iter(|| parse_integer::<i64, _, _>(Some(black_box(text)), .., Radix::DECIMAL, OnFailure::Default(0)))
        });
        group.bench_with_input(BenchmarkId::new("std", text), text, |b, text| {
            b.iter(|| black_box(text).parse::<i64>().unwrap_or(0))
        });
    }
    group.finish();

    c.bench_function("parse_i32_hex_range", |b| {
        let text = "color=#7fff00;";
        b.iter(|| parse_integer::<i32, _, _>(Some(black_box(text)), 7..13, Radix::HEXADECIMAL, OnFailure::Absent))
    });
}

fn bench_pow(c: &mut Criterion) {
    c.bench_function("checked_pow", |b| {
        b.iter(|| {
            for exp in 0..64 {
                let _ = black_box(checked_pow(black_box(3), exp));
            }
        })
    });
}

fn bench_compound(c: &mut Criterion) {
    c.bench_function("encode_decode_i16", |b| {
        b.iter(|| {
            let packed = encode_i16(black_box(1), black_box(-2), black_box(3), black_box(-4));
            (0..4).map(|i| decode::<i16, _>(packed, i) as i32).sum::<i32>()
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs = [
        ("i64_f64", Number::I64(1 << 53), Number::F64(9_007_199_254_740_993.0)),
        ("decimal_f64", Number::Decimal(Decimal::new(1, 1)), Number::F64(0.1)),
        (
            "bigint_decimal",
            Number::BigInt(BigInt::from(u64::MAX) * 3u32),
            Number::Decimal(Decimal::MAX),
        ),
    ];
    let mut group = c.benchmark_group("compare");
    for (name, a, b) in &pairs {
        group.bench_function(*name, |bench| bench.iter(|| compare(Some(black_box(a)), Some(black_box(b)))));
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_pow, bench_compound, bench_compare);
criterion_main!(benches);
