/// Parse the leading integer of a `width`/`height` attribute.
///
/// Leading whitespace and a sign are accepted and everything after the
/// digits is ignored (`"300px"` is 300, `"12.5"` is 12). Missing digits,
/// negative values, and values too large for `u32` give 0.
pub(super) fn parse_dimension(value: &str) -> u32 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(0)
}
