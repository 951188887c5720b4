//! pt-BR number formatting for tables and summaries.

/// Formats a number with thousands separator `.` and decimal comma.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("");
    let decimal_part = parts.next();

    // Thousands separator every 3 digits from the end of the integer part
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{},{}", grouped, d),
        None => grouped,
    }
}

/// Money with 2 decimals: `1234567.89` → `"1.234.567,89"`.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money with the currency prefix: `"R$ 1.234,56"`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_money(value))
}

/// Stock quantities use 3 decimals.
pub fn format_quantity(value: f64) -> String {
    format_number_with_decimals(value, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1.234,56");
        assert_eq!(format_money(1234567.89), "1.234.567,89");
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(-1234.56), "-1.234,56");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(99.9), "R$ 99,90");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(12.5), "12,500");
        assert_eq!(format_quantity(1000.0), "1.000,000");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
    }
}
