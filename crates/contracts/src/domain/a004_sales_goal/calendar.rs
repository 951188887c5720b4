use chrono::{Datelike, NaiveDate, Weekday};

/// Days in a calendar month, leap-year aware.
fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(first_of_next) => first_of_next.pred_opt().map(|d| d.day()).unwrap_or(0),
        None => 0,
    }
}

/// Weekday index used by the goal form: Mon=0 .. Sun=6.
fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// Cleans the free-typed holiday list: keeps digits, commas and spaces, and
/// clamps day numbers above 31 down to 31 (typing-friendly, the cursor is not
/// disturbed for already-clean input).
pub fn sanitize_holidays(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == ' ')
        .collect();

    kept.split(',')
        .map(|part| {
            let trimmed = part.trim();
            match trimmed.parse::<u32>() {
                Ok(n) if n > 31 => part.replacen(trimmed, "31", 1),
                _ => part.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses the holiday list into valid day-of-month numbers (1..=31).
pub fn parse_holidays(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<u32>().ok())
        .filter(|n| (1..=31).contains(n))
        .collect()
}

/// True when a listed holiday does not exist in the month (e.g. Feb 31);
/// surfaced as a warning in the summary text.
pub fn has_invalid_holiday(year: i32, month: u32, holidays: &[u32]) -> bool {
    let last = days_in_month(year, month);
    holidays.iter().any(|d| *d > last)
}

/// Counts the working days of a month: days whose weekday is active
/// (Mon=0 .. Sun=6) and whose day number is not an extra holiday.
pub fn working_day_count(year: i32, month: u32, active_weekdays: &[u8], holidays: &[u32]) -> u32 {
    let mut count = 0;
    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        if active_weekdays.contains(&weekday_index(date.weekday())) && !holidays.contains(&day) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const MON_TO_FRI: [u8; 5] = [0, 1, 2, 3, 4];

    #[test]
    fn test_working_days_august_2026() {
        // August 2026 has 31 days and starts on a Saturday: 21 weekdays.
        assert_eq!(working_day_count(2026, 8, &MON_TO_FRI, &[]), 21);
    }

    #[test]
    fn test_holidays_only_discount_active_days() {
        // 2026-08-07 is a Friday, 2026-08-08 a Saturday.
        assert_eq!(working_day_count(2026, 8, &MON_TO_FRI, &[7]), 20);
        assert_eq!(working_day_count(2026, 8, &MON_TO_FRI, &[8]), 21);
    }

    #[test]
    fn test_no_active_weekdays_means_zero() {
        assert_eq!(working_day_count(2026, 8, &[], &[]), 0);
    }

    #[test]
    fn test_leap_february() {
        // Feb 2024 (leap): 29 days, starts on a Thursday.
        assert_eq!(working_day_count(2024, 2, &MON_TO_FRI, &[]), 21);
        assert_eq!(working_day_count(2025, 2, &MON_TO_FRI, &[]), 20);
    }

    #[test]
    fn test_sanitize_strips_and_clamps() {
        assert_eq!(sanitize_holidays("7, 15a, 99"), "7, 15, 31");
        assert_eq!(sanitize_holidays("1,2,3"), "1,2,3");
        assert_eq!(sanitize_holidays(""), "");
    }

    #[test]
    fn test_parse_holidays_ignores_garbage() {
        assert_eq!(parse_holidays("7, 15, , 0, 32"), vec![7, 15]);
    }

    #[test]
    fn test_invalid_holiday_detection() {
        assert!(has_invalid_holiday(2025, 2, &[30]));
        assert!(!has_invalid_holiday(2024, 2, &[29]));
        assert!(!has_invalid_holiday(2026, 8, &[31]));
    }
}
