/// Utilities for date and time formatting
///
/// Server timestamps arrive as ISO strings; display format is pt-BR.

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2026-08-15T14:02:26.123Z" -> "15/08/2026 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let hhmm: String = time_part.chars().take(5).collect();
                return format!("{}/{}/{} {}", day, month, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2026-08-15" or "2026-08-15T14:02:26Z" -> "15/08/2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-08-15T14:02:26.123Z"),
            "15/08/2026 14:02"
        );
        assert_eq!(format_datetime("2026-12-31T23:59:59Z"), "31/12/2026 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-15"), "15/08/2026");
        assert_eq!(format_date("2026-08-15T14:02:26.123Z"), "15/08/2026");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
