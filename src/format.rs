use crate::error::Error;

/// Render `value` with at most two decimals, without trailing zeros.
///
/// This is the form every value takes when it enters a trace or replaces a
/// bracketed group, so rounding accumulates across nested groups.
///
/// # Examples
///
/// ```
/// # use bracketcalc::format_number;
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(4.5), "4.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.33");
/// assert_eq!(format_number(-0.001), "0");
/// ```
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    // NaN and infinities have no decimal point to trim
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a number previously produced by [`format_number`].
pub fn parse_number(text: &str) -> Result<f64, Error> {
    text.trim().parse().map_err(|_| Error::InvalidFormat)
}
