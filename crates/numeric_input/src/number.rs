//! Number parsing and fixed-point formatting with browser semantics.
//!
//! Field text is parsed two ways, as script engines do: [`parse_float`] takes
//! the longest numeric prefix and is used while typing and pasting, while
//! [`to_number`] requires the whole string to be numeric and is used when a
//! field is normalized. [`to_fixed`] renders a value with a fixed number of
//! fraction digits, rounding half away from zero on the exact binary value.

/// Largest fraction-digit count [`to_fixed`] accepts; larger requests clamp.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Magnitudes at or above this render in exponent form.
const EXPONENT_FORM_THRESHOLD: f64 = 1e21;

/// Whitespace and line terminators as script engines define them.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Byte length of the longest `[+-]? digits [. digits] [(e|E) [+-] digits]`
/// prefix of `s` containing at least one mantissa digit, or 0.
fn decimal_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // An exponent only counts when it has digits of its own.
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

fn signed_infinity(s: &str) -> Option<(f64, usize)> {
    let (sign, rest, sign_len) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..], 1),
        Some(b'+') => (1.0, &s[1..], 1),
        _ => (1.0, s, 0),
    };
    rest.starts_with("Infinity")
        .then(|| (sign * f64::INFINITY, sign_len + "Infinity".len()))
}

/// Parse the longest numeric prefix of `s`, after leading whitespace.
///
/// Returns NaN when `s` does not start with a number.
///
/// ```
/// use numeric_input::number::parse_float;
///
/// assert_eq!(parse_float("  12.5kg"), 12.5);
/// assert_eq!(parse_float(".5"), 0.5);
/// assert_eq!(parse_float("1e3x"), 1000.0);
/// assert!(parse_float("-").is_nan());
/// assert!(parse_float("").is_nan());
/// ```
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(is_js_whitespace);

    let end = decimal_prefix_len(s);
    if end == 0 {
        return signed_infinity(s).map_or(f64::NAN, |(v, _)| v);
    }
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Convert the whole of `s` to a number.
///
/// Surrounding whitespace is ignored and an empty string is zero. Anything
/// that is not entirely a decimal literal, `Infinity`, or an unsigned
/// `0x`/`0o`/`0b` integer is NaN.
///
/// ```
/// use numeric_input::number::to_number;
///
/// assert_eq!(to_number(" 42 "), 42.0);
/// assert_eq!(to_number(""), 0.0);
/// assert_eq!(to_number("0x1F"), 31.0);
/// assert!(to_number("12.5kg").is_nan());
/// ```
pub fn to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    if let Some((v, len)) = signed_infinity(s) {
        return if len == s.len() { v } else { f64::NAN };
    }

    if let Some(v) = radix_integer(s) {
        return v;
    }

    if decimal_prefix_len(s) == s.len() {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn radix_integer(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0f64;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(radix) else {
            return Some(f64::NAN);
        };
        value = value * f64::from(radix) + f64::from(d);
    }
    Some(value)
}

/// Render `value` with exactly `digits` fraction digits.
///
/// Ties round away from zero, judged on the exact binary value, so `0.125`
/// becomes `"0.13"` while `1.005` (stored just below) becomes `"1.00"`.
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`; magnitudes
/// of `1e21` and above fall back to exponent form.
///
/// ```
/// use numeric_input::number::to_fixed;
///
/// assert_eq!(to_fixed(12.3456, 2), "12.35");
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(f64::NAN, 2), "NaN");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let marker = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return marker.to_string();
    }
    if value.abs() >= EXPONENT_FORM_THRESHOLD {
        return exponent_form(value);
    }

    let digits = digits.min(MAX_FRACTION_DIGITS);
    // `-0.0 < 0.0` is false, so negative zero prints unsigned.
    let negative = value < 0.0;
    let magnitude = value.abs();

    let body = if is_tie(magnitude, digits) {
        round_tie_up(magnitude, digits)
    } else {
        format!("{magnitude:.digits$}")
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Whether `magnitude` lies exactly halfway between two `digits`-place values.
///
/// A finite binary fraction with `k` fractional bits has exactly `k` decimal
/// fraction digits, the last being 5. So a tie at `digits` places means
/// exactly `digits + 1` fractional bits. Scaling by powers of two is exact.
fn is_tie(magnitude: f64, digits: usize) -> bool {
    let Ok(exp) = i32::try_from(digits) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exp);
    scaled.fract() != 0.0 && (scaled * 2.0).fract() == 0.0
}

/// Round an exact tie upward in magnitude.
fn round_tie_up(magnitude: f64, digits: usize) -> String {
    // The tie terminates at `digits + 1` places, so this rendering is exact
    // and ends in '5'.
    let mut text = format!("{magnitude:.prec$}", prec = digits + 1);
    text.pop();
    if text.ends_with('.') {
        text.pop();
    }
    increment_last_digit(&mut text);
    text
}

fn increment_last_digit(text: &mut String) {
    let mut bytes = std::mem::take(text).into_bytes();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    // Only ASCII digits and '.' were touched.
    *text = String::from_utf8(bytes).unwrap_or_default();
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}
