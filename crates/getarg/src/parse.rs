/// Parse a leading decimal integer, yielding `0` when there is none.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then digits are
/// consumed until the first non-digit. Trailing garbage is ignored (`"12abc"`
/// is `12`). Out-of-range values saturate.
pub fn parse_int_or_zero(text: &str) -> i64 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        // accumulate toward the sign so i64::MIN is reachable
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        };
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::parse_int_or_zero;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_int_or_zero("11"), 11);
        assert_eq!(parse_int_or_zero("0"), 0);
        assert_eq!(parse_int_or_zero("-7"), -7);
        assert_eq!(parse_int_or_zero("+7"), 7);
        assert_eq!(parse_int_or_zero("  42"), 42);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("NaN"), 0);
        assert_eq!(parse_int_or_zero("NotANumber"), 0);
        assert_eq!(parse_int_or_zero("-"), 0);
        assert_eq!(parse_int_or_zero("+-3"), 0);
        // only ASCII whitespace is skipped
        assert_eq!(parse_int_or_zero("\u{a0}5"), 0);
        assert_eq!(parse_int_or_zero("\t\n 5"), 5);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_int_or_zero("12abc"), 12);
        assert_eq!(parse_int_or_zero("3.9"), 3);
        assert_eq!(parse_int_or_zero("-4 5"), -4);
    }

    #[test]
    fn saturates() {
        assert_eq!(parse_int_or_zero("99999999999999999999"), i64::MAX);
        assert_eq!(parse_int_or_zero("-99999999999999999999"), i64::MIN);
        assert_eq!(parse_int_or_zero("-9223372036854775808"), i64::MIN);
    }
}
