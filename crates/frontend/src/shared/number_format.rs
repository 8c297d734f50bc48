//! Number formatting for dashboard figures

/// Formats a number with a thousands separator (comma) and the given number
/// of decimals.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number;
/// assert_eq!(format_number(1234.567, 2), "1,234.57");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(d) = decimal_part {
        result.push('.');
        result.push_str(d);
    }

    let is_zero = result.chars().all(|c| c == '0' || c == '.' || c == ',');
    if value.is_sign_negative() && !is_zero {
        result.insert(0, '-');
    }
    result
}

/// Currency amount as shown on the dashboard: `$12,345`, cents only when
/// present.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(12345.0), "$12,345");
/// assert_eq!(format_currency(9.5), "$9.50");
/// ```
pub fn format_currency(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    let number = format_number(value, decimals);
    match number.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", number),
    }
}

/// Integer count with thousands separator
pub fn format_count(value: u32) -> String {
    format_number(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(354.0), "$354");
        assert_eq!(format_currency(12345.0), "$12,345");
        assert_eq!(format_currency(72840.0), "$72,840");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-20.0), "-$20");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(8), "8");
        assert_eq!(format_count(21000), "21,000");
    }
}
