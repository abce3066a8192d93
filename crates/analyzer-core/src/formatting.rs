/// Format a load or other measured number in its shortest round-trip form.
///
/// Whole numbers print without a fractional part, matching how the tracking
/// app writes integer kilograms into its exports.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::format_number;
///
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(102.5), "102.5");
/// assert_eq!(format_number(0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Format an optional number, rendering `None` as an empty string.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::format_optional;
///
/// assert_eq!(format_optional(Some(8.5)), "8.5");
/// assert_eq!(format_optional(None), "");
/// ```
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// Capitalise the first letter of every alphabetic run and lowercase the rest.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::title_case;
///
/// assert_eq!(title_case("bench"), "Bench");
/// assert_eq!(title_case("front_squat"), "Front_Squat");
/// assert_eq!(title_case("DEADLIFT"), "Deadlift");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// The date portion of an ISO-8601 timestamp: its first 10 characters.
///
/// Shorter strings are returned unchanged.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::date_portion;
///
/// assert_eq!(date_portion("2024-03-01T09:30:00Z"), "2024-03-01");
/// assert_eq!(date_portion("2024-03"), "2024-03");
/// ```
pub fn date_portion(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(10) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::percentage;
///
/// assert!((percentage(50.0, 200.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(120.0), "120");
    }

    #[test]
    fn test_format_number_fraction() {
        assert_eq!(format_number(142.5), "142.5");
        assert_eq!(format_number(2.25), "2.25");
    }

    #[test]
    fn test_format_optional_none_is_empty() {
        assert_eq!(format_optional(None), "");
        assert_eq!(format_optional(Some(7.0)), "7");
    }

    // ── title_case ───────────────────────────────────────────────────────────

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("squat"), "Squat");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("close grip bench"), "Close Grip Bench");
    }

    #[test]
    fn test_title_case_digits_break_words() {
        assert_eq!(title_case("2board press"), "2Board Press");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    // ── date_portion ─────────────────────────────────────────────────────────

    #[test]
    fn test_date_portion_plain_date() {
        assert_eq!(date_portion("2024-01-01"), "2024-01-01");
    }

    #[test]
    fn test_date_portion_empty() {
        assert_eq!(date_portion(""), "");
    }

    #[test]
    fn test_date_portion_multibyte_safe() {
        assert_eq!(date_portion("ñññññññññññ"), "ññññññññññ");
    }

    // ── percentage ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentage_rounds_to_integer() {
        assert_eq!(percentage(2.0, 3.0, 0), 67.0);
    }

    #[test]
    fn test_percentage_over_hundred() {
        assert_eq!(percentage(15.0, 10.0, 0), 150.0);
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(10.0, 0.0, 2), 0.0);
    }
}
