//! Fechas en formato largo para las tarjetas de reserva.

use chrono::{DateTime, NaiveDate, Utc};

/// Se muestra para fechas que no se pueden parsear
pub const INVALID_DATE: &str = "Invalid Date";

/// Formatea una fecha como día de la semana, mes y día en inglés, sin año
///
/// `"2024-05-06"` pasa a `"Monday, May 6"`. Los timestamps RFC 3339 usan su
/// fecha en UTC.
pub fn format_display_date(input: &str) -> String {
    match parse_calendar_date(input) {
        Some(date) => date.format("%A, %B %-d").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date() {
        assert_eq!(format_display_date("2024-05-06"), "Monday, May 6");
        assert_eq!(format_display_date("2025-12-25"), "Thursday, December 25");
    }

    #[test]
    fn formats_timestamps_by_utc_date() {
        assert_eq!(format_display_date("2024-05-06T00:00:00.000Z"), "Monday, May 6");
        assert_eq!(format_display_date("2024-05-06T23:30:00-02:00"), "Tuesday, May 7");
    }

    #[test]
    fn malformed_dates_fall_back() {
        assert_eq!(format_display_date(""), INVALID_DATE);
        assert_eq!(format_display_date("tomorrow"), INVALID_DATE);
        assert_eq!(format_display_date("2024-02-30"), INVALID_DATE);
    }
}
