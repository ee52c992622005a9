// Helpers for monetary values. Amounts are stored as u64 cents; the pricing
// formulas operate on decimal dollars and round with `round2`.

/// Rounds a dollar amount to whole cents, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a dollar amount (already cent-aligned) to integer cents.
pub fn dollars_to_cents(amount: f64) -> u64 {
    (amount * 100.0).round().max(0.0) as u64
}

pub fn cents_to_dollars(cents: u64) -> f64 {
    cents as f64 / 100.0
}

pub fn format_currency(cents: u64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

pub fn parse_currency(currency_str: &str) -> Result<u64, std::num::ParseFloatError> {
    let cleaned = currency_str.replace('$', "").replace(',', "");
    let float_value: f64 = cleaned.parse()?;
    Ok((float_value * 100.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.444), 0.44);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(5.0 * 0.029 + 0.30), 0.45); // half rounds away from zero
    }

    #[test]
    fn test_dollars_to_cents() {
        assert_eq!(dollars_to_cents(10.59), 1059);
        assert_eq!(dollars_to_cents(0.30), 30);
        assert_eq!(dollars_to_cents(-1.0), 0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1000), "$10.00");
        assert_eq!(format_currency(2550), "$25.50");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$10.00").unwrap(), 1000);
        assert_eq!(parse_currency("1,250.50").unwrap(), 125050);
        assert!(parse_currency("ten dollars").is_err());
    }
}
