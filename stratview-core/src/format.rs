//! Display formatters. Applied at render time only; nothing stores their output.
//!
//! Currency follows the `en-US` / USD convention: `$` prefix, comma thousands
//! separators, two decimals, and a leading `-` for negative amounts.

/// `1234.5` → `"$1,234.50"`, `-42.0` → `"-$42.00"`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞".to_string() } else { "-$∞".to_string() };
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = whole.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Fraction as a percentage with two decimals: `0.1523` → `"15.23%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Plain fixed-point number, used for Sharpe ratios.
pub fn format_ratio(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
