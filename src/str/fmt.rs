/// Removes insignificant zeros after a decimal point, along with the point itself if nothing is left
/// after it. Text without a decimal point, or with an exponent, is returned unchanged.
///
/// ```
/// use numkit::strip_trailing_zeros;
///
/// assert_eq!(strip_trailing_zeros("1.2500"), "1.25");
/// assert_eq!(strip_trailing_zeros("100.000"), "100");
/// assert_eq!(strip_trailing_zeros("100"), "100");
/// ```
pub fn strip_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') || text.contains(['e', 'E']) {
        return text;
    }
    let trimmed = text.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_strips_trailing_zeros() {
        let tests = &[
            ("0", "0"),
            ("10", "10"),
            ("0.0", "0"),
            ("-0.500", "-0.5"),
            ("1.", "1"),
            ("1.01", "1.01"),
            ("10.10", "10.1"),
            ("1.0E10", "1.0E10"),
            ("", ""),
        ];
        for &(text, expected) in tests {
            assert_eq!(strip_trailing_zeros(text), expected, "{text:?}");
        }
    }
}
