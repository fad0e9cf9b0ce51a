//! Number formatting for prices, percentages and counters

/// Currency the tracked shops quote prices in
pub const CURRENCY_PREFIX: &str = "£";

/// Inserts `separator` every three digits of an unsigned integer string
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Price with currency prefix, thousands separator and two decimals
///
/// ```
/// use price_tracker_frontend::shared::number_format::format_price;
/// assert_eq!(format_price(19.99), "£19.99");
/// ```
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_PREFIX,
        group_thousands(integer, ','),
        fraction
    )
}

/// Signed percentage with two decimals, e.g. `-3.46%`
pub fn format_change_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Non-negative counter with thousands separator
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string(), ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.99), "£19.99");
        assert_eq!(format_price(25.0), "£25.00");
        assert_eq!(format_price(0.0), "£0.00");
        assert_eq!(format_price(1234567.891), "£1,234,567.89");
        assert_eq!(format_price(-2.5), "-£2.50");
        assert_eq!(format_price(-0.001), "£0.00");
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change_percent(-3.456), "-3.46%");
        assert_eq!(format_change_percent(2.1), "2.10%");
        assert_eq!(format_change_percent(0.0), "0.00%");
        assert_eq!(format_change_percent(150.0), "150.00%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
