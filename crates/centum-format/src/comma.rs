//! Comma-grouped number rendering.

/// Render a float with comma thousands separators and natural decimals.
///
/// The number is first printed the shortest way that round-trips (so
/// `102340.0` becomes `"102340"`, not `"102340.0"`), then commas are
/// inserted into the integer digits only: `184237.5` → `"184,237.5"`,
/// `-1220.79` → `"-1,220.79"`. Non-finite values pass through
/// untouched.
pub fn group_thousands(value: f64) -> String {
    let text = value.to_string();
    if !value.is_finite() {
        return text;
    }

    let (mantissa, fraction) = match text.split_once('.') {
        Some((m, f)) => (m, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
