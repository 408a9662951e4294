//! Primitive converters from ASCII term text.
//!
//! Every converter is lenient: text that does not parse yields zero. A bad
//! field only corrupts the shadow copy of its own sentence, which is dropped
//! again unless the checksum passes.

/// Parse a decimal number, such as `545.4`.
pub fn parse_decimal(s: &[u8]) -> f64 {
    core::str::from_utf8(s)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

/// Parse an integer, such as a fix quality code or a `ddmmyy` date.
pub fn parse_integer(s: &[u8]) -> i32 {
    core::str::from_utf8(s)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Parse a `dddmm.mmmm` coordinate into decimal degrees.
///
/// The integer part of `value / 100` holds whole degrees, the remainder holds
/// minutes.
pub fn parse_degrees(s: &[u8]) -> f64 {
    let value = parse_decimal(s);

    let degrees = libm::trunc(value / 100.0);
    let minutes = value - degrees * 100.0;

    degrees + minutes / 60.0
}

/// Convert an ASCII hex digit to its value, accepting either case.
pub fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}
