//! Human-readable rendering of minimal-unit amounts.

use crate::domain::Amount;

/// Whole units, a `.`, then exactly `frac_digits` fractional digits, truncated.
///
/// With `frac_digits == decimals` nothing is lost.
pub fn format_amount(amount: Amount, decimals: u32, frac_digits: u32) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    let frac_digits = frac_digits as usize;

    let (whole, fraction) = if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        (whole.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    if frac_digits == 0 {
        return whole;
    }

    let mut fraction: String = fraction.chars().take(frac_digits).collect();
    while fraction.len() < frac_digits {
        fraction.push('0');
    }
    format!("{whole}.{fraction}")
}

/// Compact balance: `"0"`, a `"<0.00001"` style floor for dust, or trimmed digits.
pub fn format_token(amount: Amount, decimals: u32, frac_digits: u32) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let formatted = format_amount(amount, decimals, frac_digits);
    if formatted.bytes().all(|b| b == b'0' || b == b'.') {
        return format!("<{}", smallest_displayable(frac_digits));
    }
    remove_trailing_zeros(&formatted).to_string()
}

/// Exact amount with its symbol, for tooltips. Empty for zero.
pub fn show_full_amount(amount: Amount, decimals: u32, symbol: &str) -> String {
    if amount.is_zero() {
        return String::new();
    }
    format!("{} {}", format_amount(amount, decimals, decimals), symbol)
}

fn smallest_displayable(frac_digits: u32) -> String {
    match frac_digits {
        0 => "1".to_string(),
        n => format!("0.{}1", "0".repeat(n as usize - 1)),
    }
}

fn remove_trailing_zeros(formatted: &str) -> &str {
    match formatted.contains('.') {
        true => formatted.trim_end_matches('0').trim_end_matches('.'),
        false => formatted,
    }
}
