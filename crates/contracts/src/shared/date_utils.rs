/// Utilities for date formatting
///
/// Даты из CMS приходят как `YYYY-MM-DD` или как полная метка RFC 3339;
/// на сайте они показываются в русском формате `DD.MM.YYYY`.
use chrono::{DateTime, FixedOffset, NaiveDate};

/// Московское время, UTC+3 без перехода на летнее
const MOSCOW_OFFSET_SECS: i32 = 3 * 3600;

/// Format CMS date to DD.MM.YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26.123Z" -> "15.03.2024"
///
/// Метка времени переводится в московское время, поэтому `...T22:00:00Z`
/// даёт уже следующий день. Нераспознанная строка возвращается как есть,
/// пустая даёт `None`.
pub fn format_date(date_str: &str) -> Option<String> {
    let s = date_str.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        let local = match FixedOffset::east_opt(MOSCOW_OFFSET_SECS) {
            Some(msk) => dt.with_timezone(&msk),
            None => dt,
        };
        return Some(local.format("%d.%m.%Y").to_string());
    }
    let date_part = s.split('T').next().unwrap_or(s);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => Some(d.format("%d.%m.%Y").to_string()),
        Err(_) => Some(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15").as_deref(), Some("15.03.2024"));
        assert_eq!(
            format_date("2024-03-15T14:02:26.123Z").as_deref(),
            Some("15.03.2024")
        );
    }

    #[test]
    fn test_timestamp_uses_moscow_day() {
        assert_eq!(
            format_date("2024-03-14T22:00:00Z").as_deref(),
            Some("15.03.2024")
        );
        assert_eq!(
            format_date("2024-03-14T20:59:59Z").as_deref(),
            Some("14.03.2024")
        );
        assert_eq!(
            format_date("2024-03-15T00:30:00+03:00").as_deref(),
            Some("15.03.2024")
        );
        // дата без времени не сдвигается
        assert_eq!(format_date("2024-03-14").as_deref(), Some("14.03.2024"));
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(format_date("  "), None);
        assert_eq!(format_date("скоро").as_deref(), Some("скоро"));
    }
}
