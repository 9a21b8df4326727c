use arrayvec::ArrayVec;
use tracing::trace;

/// Parses a decimal number, a simple fraction or a mixed number such as `"23 3/4"`.
///
/// Leading and trailing whitespace is ignored. A leading sign applies to the whole value, so
/// `"-1 1/2"` is `-1.5`. Decimals may carry an exponent (`"3.2E-5"`). Fractions with a zero
/// denominator are rejected.
///
/// ```
/// use numkit::parse_mixed;
///
/// assert_eq!(parse_mixed("23 3/4"), Some(23.75));
/// assert_eq!(parse_mixed("-1 1/2"), Some(-1.5));
/// assert_eq!(parse_mixed("3/4"), Some(0.75));
/// assert_eq!(parse_mixed("-1.5E3"), Some(-1500.0));
/// assert_eq!(parse_mixed("1/0"), None);
/// assert_eq!(parse_mixed("1 2 3/4"), None);
/// ```
pub fn parse_mixed(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut parts = ArrayVec::<&str, 2>::new();
    for part in unsigned.split(' ') {
        if parts.try_push(part).is_err() {
            trace!(text, "too many parts in mixed number");
            return None;
        }
    }

    let magnitude = match parts.as_slice() {
        [single] if single.contains('/') => fraction(single),
        [single] => decimal(single),
        [whole, part] => Some(decimal(whole)? + fraction(part)?),
        _ => None,
    };
    match magnitude {
        Some(value) if negative => Some(-value),
        Some(value) => Some(value),
        None => {
            trace!(text, "rejected mixed number");
            None
        }
    }
}

/// Determines if `text` is accepted by [`parse_mixed`].
#[inline]
pub fn is_number(text: &str) -> bool {
    parse_mixed(text).is_some()
}

// digits '/' digits
fn fraction(text: &str) -> Option<f64> {
    let (numerator, denominator) = text.split_once('/')?;
    if !all_digits(numerator) || !all_digits(denominator) {
        return None;
    }
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator.parse::<f64>().ok()? / denominator)
}

// digits ('.' digits?)? (('e' | 'E') sign? digits)?
fn decimal(text: &str) -> Option<f64> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };
    let (whole, fractional) = match mantissa.split_once('.') {
        Some((whole, fractional)) => (whole, fractional),
        None => (mantissa, ""),
    };
    if !all_digits(whole) || !(fractional.is_empty() || all_digits(fractional)) {
        return None;
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if !all_digits(digits) {
            return None;
        }
    }
    text.parse().ok()
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_mixed_numbers() {
        let tests = &[
            ("0", 0.0),
            ("42", 42.0),
            ("+42", 42.0),
            ("-0.25", -0.25),
            ("1.", 1.0),
            ("3.2E-5", 3.2e-5),
            ("1e3", 1000.0),
            ("1/4", 0.25),
            ("-3/4", -0.75),
            ("23 3/4", 23.75),
            ("-23 3/4", -23.75),
            ("1.5 1/2", 2.0),
            ("  7 1/2  ", 7.5),
            ("0 0/5", 0.0),
        ];
        for &(text, expected) in tests {
            assert_eq!(parse_mixed(text), Some(expected), "{text:?}");
        }
    }

    #[test]
    fn it_rejects_malformed_text() {
        let tests = &[
            "",
            "   ",
            "-",
            ".5",
            "1..2",
            "1.2.3",
            "1e",
            "1e+",
            "e5",
            "--1",
            "1-",
            "1,000",
            "1/0",
            "1/",
            "/2",
            "1/2/3",
            "1.5/2",
            "3/4 1",
            "23 3",
            "23 -3/4",
            "23  3/4",
            "1 2 3/4",
            "0x10",
            "inf",
            "NaN",
        ];
        for &text in tests {
            assert_eq!(parse_mixed(text), None, "{text:?}");
            assert!(!is_number(text), "{text:?}");
        }
    }
}
