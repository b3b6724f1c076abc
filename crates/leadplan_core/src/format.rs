//! en-US display formatting shared by every front end

use crate::ratio::{Ratio, UNDEFINED_LABEL, round_half_up};

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Whole number with thousands separators (`1,234`)
pub fn format_count(value: f64) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(rounded.abs() as u64))
}

/// Whole-dollar currency (`$12,400`, `-$350`)
pub fn format_currency(value: f64) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

pub fn format_ratio_currency(value: Ratio) -> String {
    match value {
        Ratio::Defined(v) => format_currency(v),
        Ratio::Undefined => UNDEFINED_LABEL.to_string(),
    }
}

pub fn format_ratio_count(value: Ratio) -> String {
    match value {
        Ratio::Defined(v) => format_count(v),
        Ratio::Undefined => UNDEFINED_LABEL.to_string(),
    }
}

/// Share of a total (`35%`)
pub fn format_percent(value: f64) -> String {
    format!("{}%", round_half_up(value))
}

/// Signed whole-percent change (`+25%`, `-40%`, `0%`)
pub fn format_percent_change(change: Ratio) -> String {
    match change {
        Ratio::Defined(v) => {
            let rounded = round_half_up(v) as i64;
            if rounded > 0 {
                format!("+{rounded}%")
            } else {
                format!("{rounded}%")
            }
        }
        Ratio::Undefined => UNDEFINED_LABEL.to_string(),
    }
}

/// Revenue multiple with one decimal (`1.9x`)
pub fn format_multiple(value: Ratio) -> String {
    match value {
        Ratio::Defined(v) => format!("{:.1}x", round_half_up(v * 10.0) / 10.0),
        Ratio::Undefined => UNDEFINED_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(12_400.0), "$12,400");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(-350.0), "-$350");
    }

    #[test]
    fn test_format_percent_change() {
        assert_eq!(format_percent_change(Ratio::Defined(25.0)), "+25%");
        assert_eq!(format_percent_change(Ratio::Defined(-39.6)), "-40%");
        assert_eq!(format_percent_change(Ratio::Defined(0.2)), "0%");
        assert_eq!(format_percent_change(Ratio::Undefined), "N/A");
    }

    #[test]
    fn test_format_multiple() {
        assert_eq!(format_multiple(Ratio::Defined(1.94)), "1.9x");
        assert_eq!(format_multiple(Ratio::Defined(2.0)), "2.0x");
        assert_eq!(format_multiple(Ratio::Undefined), "N/A");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(1_000.0), "1,000");
    }
}
