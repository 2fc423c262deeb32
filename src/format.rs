//! Date formatting for cards and detail headers.

use chrono::{DateTime, Local, TimeZone, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Age of `then` relative to `now`, as shown on question cards.
///
/// Days are rounded up, so anything within the last 24 hours is "1 day
/// ago"; an identical instant is "today".
pub fn relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().abs();
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;

    match days {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => plural(ceil_div(d, 7), "week"),
        d if d < 365 => plural(ceil_div(d, 30), "month"),
        d => plural(ceil_div(d, 365), "year"),
    }
}

/// Full creation time in the local timezone, e.g. "March 1, 2024 at 14:05".
pub fn absolute_date(dt: DateTime<Utc>) -> String {
    absolute_date_in(dt, &Local)
}

/// [`absolute_date`] for an explicit timezone.
pub fn absolute_date_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz)
        .format("%B %-d, %Y at %H:%M")
        .to_string()
}

fn ceil_div(n: i64, d: i64) -> i64 {
    (n + d - 1) / d
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
