//! Cleaning and formatting of pasted clipboard text.

use crate::number::{MAX_FRACTION_DIGITS, parse_float};

/// Reduce pasted text to an unsigned or leading-minus decimal.
///
/// Keeps ASCII digits and `.` everywhere, plus a `-` only as the very first
/// character. Only the first decimal point is kept; later ones are removed
/// and the digits around them close up.
///
/// ```
/// use numeric_input::paste::clean_pasted;
///
/// assert_eq!(clean_pasted("$1,234.50"), "1234.50");
/// assert_eq!(clean_pasted("-12.5 kg"), "-12.5");
/// assert_eq!(clean_pasted("12.345.6"), "12.3456");
/// assert_eq!(clean_pasted("abc"), "");
/// ```
pub fn clean_pasted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;

    for (i, ch) in raw.char_indices() {
        match ch {
            '0'..='9' => out.push(ch),
            '-' if i == 0 => out.push(ch),
            '.' if seen_point => {}
            '.' => {
                seen_point = true;
                out.push(ch);
            }
            _ => {}
        }
    }
    out
}

/// Format cleaned paste text to `scale` fraction digits.
///
/// Digits beyond `scale` are cut, never rounded, and the kept digits are
/// taken from the text itself rather than from a binary approximation, so a
/// paste never shows digits the clipboard did not contain. Text without any
/// digit yields `"NaN"`.
///
/// ```
/// use numeric_input::paste::format_pasted;
///
/// assert_eq!(format_pasted("12.3456", 2), "12.34");
/// assert_eq!(format_pasted("007", 2), "7.00");
/// assert_eq!(format_pasted("-.5", 1), "-0.5");
/// assert_eq!(format_pasted("", 2), "NaN");
/// ```
pub fn format_pasted(cleaned: &str, scale: usize) -> String {
    let value = parse_float(cleaned);
    if value.is_nan() {
        return "NaN".to_string();
    }

    let unsigned = cleaned.strip_prefix('-').unwrap_or(cleaned);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    let scale = scale.min(MAX_FRACTION_DIGITS);
    let mut out = String::with_capacity(int_part.len() + scale + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(int_part);
    if scale > 0 {
        out.push('.');
        out.extend(frac_part.chars().chain(std::iter::repeat('0')).take(scale));
    }
    out
}

/// Clean and format pasted text in one step.
pub fn paste_text(raw: &str, scale: usize) -> String {
    format_pasted(&clean_pasted(raw), scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_survives_only_at_the_start_of_the_payload() {
        assert_eq!(clean_pasted("-5-3"), "-53");
        assert_eq!(clean_pasted(" -5"), "5");
        assert_eq!(clean_pasted("5e-3"), "53");
    }

    #[test]
    fn only_the_first_decimal_point_is_kept() {
        assert_eq!(clean_pasted("1.2.3.4"), "1.234");
        assert_eq!(clean_pasted("..5"), ".5");
        assert_eq!(paste_text("..5", 2), "0.50");
        assert_eq!(paste_text("12.345.6", 2), "12.34");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(clean_pasted("١٢3"), "3");
        assert_eq!(clean_pasted("１２.５"), ".");
    }

    #[test]
    fn format_pasted_cuts_without_rounding() {
        assert_eq!(format_pasted("0.29", 2), "0.29");
        assert_eq!(format_pasted("0.999", 2), "0.99");
        assert_eq!(format_pasted("19.9", 0), "19");
        assert_eq!(format_pasted("5.", 3), "5.000");
    }

    #[test]
    fn format_pasted_sign_follows_the_value() {
        assert_eq!(format_pasted("-0", 2), "0.00");
        assert_eq!(format_pasted("-0.001", 2), "-0.00");
        assert_eq!(format_pasted("-", 2), "NaN");
        assert_eq!(format_pasted("-00012.5", 1), "-12.5");
    }

    #[test]
    fn large_integers_keep_their_digits() {
        assert_eq!(
            paste_text("123456789012345678901234", 1),
            "123456789012345678901234.0"
        );
    }
}
