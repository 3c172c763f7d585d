//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, Timelike};

/// Fixed pt-BR month abbreviations, as the display locale demands
const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Format an ISO-8601 timestamp as "D MMM YYYY" in pt-BR, e.g. "19 mai 2021".
///
/// Empty or absent input maps to an empty string, never an error. The
/// calendar date is taken from the timestamp's own offset, not
/// reinterpreted in local time.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match calendar_date(raw) {
        Some(d) => format!("{} {} {}", d.day(), month_abbr(d.month()), d.year()),
        None => {
            tracing::warn!("Unparseable publication date: {:?}", raw);
            String::new()
        }
    }
}

/// Format an ISO-8601 timestamp as "D MMM YYYY, às HH:MM" in pt-BR,
/// e.g. "20 mai 2021, às 15:49". Used for the edited-at note.
pub fn format_date_time(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let Ok(dt) = DateTime::parse_from_rfc3339(&normalize_offset(raw)) else {
        tracing::warn!("Unparseable publication timestamp: {:?}", raw);
        return String::new();
    };

    format!(
        "{} {} {}, às {:02}:{:02}",
        dt.day(),
        month_abbr(dt.month()),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Extract the calendar date carried by the timestamp itself
fn calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalize_offset(raw)) {
        return Some(dt.date_naive());
    }
    // plain "YYYY-MM-DD" dates
    raw.get(..10)?.parse::<NaiveDate>().ok()
}

/// The API emits "+0000" offsets, which RFC 3339 parsing rejects
fn normalize_offset(raw: &str) -> String {
    if raw.is_ascii()
        && raw.len() >= 5
        && (raw.as_bytes()[raw.len() - 5] == b'+' || raw.as_bytes()[raw.len() - 5] == b'-')
    {
        let (head, offset) = raw.split_at(raw.len() - 2);
        return format!("{}:{}", head, offset);
    }
    raw.to_string()
}

fn month_abbr(month: u32) -> &'static str {
    MONTHS_PT_BR[(month as usize).saturating_sub(1) % 12]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_none_is_empty() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("")), "");
    }

    #[test]
    fn test_format_date_pt_br() {
        assert_eq!(format_date(Some("2021-05-19T00:00:00Z")), "19 mai 2021");
        assert_eq!(format_date(Some("2022-01-03T18:30:00+0000")), "3 jan 2022");
        assert_eq!(format_date(Some("2020-12-25T10:00:00+00:00")), "25 dez 2020");
    }

    #[test]
    fn test_format_date_keeps_own_calendar_date() {
        // 23:30 at -03:00 stays on the 19th, whatever the host timezone
        assert_eq!(format_date(Some("2021-05-19T23:30:00-0300")), "19 mai 2021");
    }

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_date(Some("2021-05-19")), "19 mai 2021");
    }

    #[test]
    fn test_format_date_garbage_is_empty() {
        assert_eq!(format_date(Some("not a date")), "");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time(Some("2021-05-20T15:49:00+0000")),
            "20 mai 2021, às 15:49"
        );
        assert_eq!(format_date_time(None), "");
    }
}
