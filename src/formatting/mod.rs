use crate::error::{DashError, Result};
use crate::types::Locale;
use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime};

// Format currency from integer cents (e.g., 123456789 -> "$1,234,567.89")
pub fn format_currency(amount_in_cents: i64) -> String {
    let sign = if amount_in_cents < 0 { "-" } else { "" };
    // unsigned_abs keeps i64::MIN representable
    let cents = amount_in_cents.unsigned_abs();
    format!(
        "{}${}.{:02}",
        sign,
        format_number_with_commas(cents / 100),
        cents % 100
    )
}

// Format number with thousands separator
pub fn format_number_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Format the date part of `date_str` as a short localized date.
///
/// `locale` defaults to en-US ("Jan 15, 2024"); day-first locales such as
/// en-GB give "15 Jan 2024". The time of day is ignored, so the calendar date
/// written in the input is the one rendered.
pub fn format_date_to_local(date_str: &str, locale: Option<&str>) -> Result<String> {
    let locale = Locale::resolve(locale)?;
    let date = parse_calendar_date(date_str)?;
    format_naive_date(date, locale)
}

/// Render an already parsed date in the given locale
pub fn format_naive_date(date: NaiveDate, locale: Locale) -> Result<String> {
    let month = locale.month_abbrev(Month::try_from(date.month() as u8)?);
    Ok(match locale {
        Locale::EnUs => format!("{} {}, {}", month, date.day(), date.year()),
        Locale::EnGb => format!("{} {} {}", date.day(), month, date.year()),
    })
}

/// Extract the calendar date from an RFC 3339 timestamp, a naive
/// date-time (minute or second precision) or a bare `YYYY-MM-DD` date
pub fn parse_calendar_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(dt.date());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|source| DashError::DateParse {
        input: date_str.to_string(),
        source,
    })
}
