//! Display formatting for prices and percentages.
//!
//! Missing or non-numeric values render as `--` everywhere so a gap in the
//! backend data never shows up as a zero.

/// Placeholder for absent values.
pub const MISSING: &str = "--";

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Format a price as `$x.xx`.
///
/// # Examples
/// ```
/// use screener_core::format::format_currency;
///
/// assert_eq!(format_currency(Some(105.0)), "$105.00");
/// assert_eq!(format_currency(None), "--");
/// ```
pub fn format_currency(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format!("${:.2}", v),
        None => MISSING.to_string(),
    }
}

/// Format a premium change, prefixing `+` for zero and above.
///
/// # Examples
/// ```
/// use screener_core::format::format_signed_percent;
///
/// assert_eq!(format_signed_percent(Some(50.0)), "+50.0%");
/// assert_eq!(format_signed_percent(Some(-70.0)), "-70.0%");
/// assert_eq!(format_signed_percent(Some(0.0)), "+0.0%");
/// ```
pub fn format_signed_percent(value: Option<f64>) -> String {
    match present(value) {
        Some(v) if v >= 0.0 => format!("+{:.1}%", v),
        Some(v) => format!("{:.1}%", v),
        None => MISSING.to_string(),
    }
}

/// Format an EPS slope, prefixing `+` only for strictly positive values.
pub fn format_slope(value: Option<f64>) -> String {
    match present(value) {
        Some(v) if v > 0.0 => format!("+{:.1}%", v),
        // Negative zero prints unsigned.
        Some(v) if v == 0.0 => "0.0%".to_string(),
        Some(v) => format!("{:.1}%", v),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_rounds_to_cents() {
        assert_eq!(format_currency(Some(1.234)), "$1.23");
        assert_eq!(format_currency(Some(0.05)), "$0.05");
    }

    #[test]
    fn test_currency_nan_is_missing() {
        assert_eq!(format_currency(Some(f64::NAN)), MISSING);
    }

    #[test]
    fn test_currency_negative_keeps_sign_after_symbol() {
        assert_eq!(format_currency(Some(-1.5)), "$-1.50");
    }

    #[test]
    fn test_slope_zero_has_no_plus() {
        assert_eq!(format_slope(Some(0.0)), "0.0%");
        assert_eq!(format_slope(Some(-0.0)), "0.0%");
        assert_eq!(format_slope(Some(12.345)), "+12.3%");
        assert_eq!(format_slope(Some(-3.0)), "-3.0%");
        assert_eq!(format_slope(None), MISSING);
    }

    #[test]
    fn test_signed_percent_missing() {
        assert_eq!(format_signed_percent(None), MISSING);
        assert_eq!(format_signed_percent(Some(f64::NAN)), MISSING);
    }
}
