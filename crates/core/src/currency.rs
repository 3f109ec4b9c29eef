//! Fixed-rate currency conversion and `vi-VN` amount formatting.
//!
//! Marketplace prices are quoted in CNY; requesters budget in VND. There is no
//! live exchange-rate lookup.

/// VND per 1 CNY.
pub const CNY_TO_VND_RATE: f64 = 3500.0;

/// Fraction digits kept when formatting an amount.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Convert a CNY amount to VND at the fixed rate.
pub fn cny_to_vnd(amount: f64) -> f64 {
    amount * CNY_TO_VND_RATE
}

/// Format an amount the `vi-VN` way: `.` groups thousands, `,` separates
/// decimals, at most three fraction digits and no trailing zeros.
///
/// ```
/// use cosplay_core::currency::format_vnd;
///
/// assert_eq!(format_vnd(1_500_000.0), "1.500.000");
/// assert_eq!(format_vnd(1234.5), "1.234,5");
/// ```
pub fn format_vnd(amount: f64) -> String {
    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if amount < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction > 0 {
        let frac = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_at_fixed_rate() {
        assert_eq!(cny_to_vnd(10.0), 35_000.0);
        assert_eq!(cny_to_vnd(0.0), 0.0);
    }

    #[test]
    fn formats_small_amounts_without_grouping() {
        assert_eq!(format_vnd(0.0), "0");
        assert_eq!(format_vnd(999.0), "999");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_vnd(1000.0), "1.000");
        assert_eq!(format_vnd(1_000_000.0), "1.000.000");
        assert_eq!(format_vnd(25_000_000.0), "25.000.000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_vnd(1234.5), "1.234,5");
        assert_eq!(format_vnd(0.125), "0,125");
        assert_eq!(format_vnd(1.23456), "1,235");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_vnd(-1500.0), "-1.500");
    }
}
