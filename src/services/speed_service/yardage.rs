/// Reads the leading integer out of free-form yardage text.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then the run of
/// ASCII digits that follows. Anything after the digits is ignored, so
/// `"150 yds"` and `"150.9"` both read as 150. Returns `None` when no digit
/// follows the optional sign. Runs too long for `i64` saturate.
pub fn parse_yardage(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits {
        seen_digit = true;
        let digit = i64::from(digit - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }

    seen_digit.then_some(value)
}
