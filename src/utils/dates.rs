use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// UTC midnight of the given instant's calendar day.
pub fn start_of_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_hms_opt(0, 0, 0).expect("midnight is always valid").and_utc()
}

/// UTC midnight of the first day of the given instant's month.
pub fn start_of_month(ts: DateTime<Utc>) -> DateTime<Utc> {
    month_start(ts.year(), ts.month0())
}

/// Last millisecond of the given instant's month.
pub fn end_of_month(ts: DateTime<Utc>) -> DateTime<Utc> {
    shift_month_start(ts, 1) - Duration::milliseconds(1)
}

/// Last millisecond of the day before the given instant's day.
pub fn end_of_yesterday(now: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(now) - Duration::milliseconds(1)
}

/// Start of the month `months` months before the given instant's month,
/// crossing year boundaries as needed.
pub fn months_before(ts: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    shift_month_start(ts, -(months as i32))
}

fn shift_month_start(ts: DateTime<Utc>, delta: i32) -> DateTime<Utc> {
    let total = ts.year() * 12 + ts.month0() as i32 + delta;
    month_start(total.div_euclid(12), total.rem_euclid(12) as u32)
}

fn month_start(year: i32, month0: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("first of month is always valid")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
}
