//! Date fields of the content forms

use chrono::{DateTime, NaiveDate, Utc};
use portal_core::DomainError;

/// `YYYY-MM-DD`
pub(crate) fn parse_day(value: &str) -> Result<NaiveDate, DomainError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

/// Publication time of a news or gallery item: a day (midnight UTC), an
/// RFC 3339 timestamp, or now when absent
pub(crate) fn parse_published_at(value: Option<&str>) -> Result<DateTime<Utc>, DomainError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(Utc::now());
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    parse_day(value).map(|day| day.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// `[first day of month, first day of next month)`
pub(crate) fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let invalid = || DomainError::InvalidDate(format!("{year}-{month:02}"));

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((start, end))
}
