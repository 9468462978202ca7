//! Time-until-next-occurrence computation.
//!
//! Provides pure functions that answer "how long from now until X" under
//! three recurrence rules: a time of day (today or tomorrow), the next
//! occurrence of a weekday, and a day of the next calendar month. All
//! functions take an explicit `now` anchor (no system clock access) — the
//! caller provides the current local date-time, keeping every path
//! deterministic and testable. The [`Clock`] trait supplies that anchor at
//! the dispatch layer.
//!
//! # Units
//!
//! Results are reported in a caller-chosen [`Unit`]. `MONTH` and `YEAR` are
//! fixed 30- and 365-day buckets, not calendar months and years — the
//! conversion is plain integer division over milliseconds and is part of the
//! output contract, so it must not be "fixed" to be calendar-aware.
//!
//! Calendar-aware arithmetic does exist here, but only for elapsed-time
//! queries ([`elapsed_since`]), where `MONTH`/`YEAR` count true calendar
//! months and whole years.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::EngineError;

// ── Clock ───────────────────────────────────────────────────────────────────

/// Source of the current local date-time.
///
/// Injected rather than read from ambient state so that every
/// time-difference path can be exercised against a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The process-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

// ── Units ───────────────────────────────────────────────────────────────────

/// A reporting unit for time differences.
///
/// Parsing is case-insensitive. `Month` and `Year` are approximate
/// fixed-length buckets (30 and 365 days) when converting a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Milli,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    /// Length of one unit in milliseconds.
    pub fn millis(self) -> i64 {
        match self {
            Unit::Milli => 1,
            Unit::Second => 1_000,
            Unit::Minute => 60_000,
            Unit::Hour => 3_600_000,
            Unit::Day => 86_400_000,
            Unit::Month => 86_400_000 * 30,
            Unit::Year => 86_400_000 * 365,
        }
    }
}

impl FromStr for Unit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MILLI" => Ok(Unit::Milli),
            "SECOND" => Ok(Unit::Second),
            "MINUTE" => Ok(Unit::Minute),
            "HOUR" => Ok(Unit::Hour),
            "DAY" => Ok(Unit::Day),
            "MONTH" => Ok(Unit::Month),
            "YEAR" => Ok(Unit::Year),
            _ => Err(EngineError::InvalidUnit(s.to_string())),
        }
    }
}

/// Convert a millisecond count into `unit` by integer division.
///
/// Unknown unit tokens yield the sentinel `-1` instead of an error — the
/// request surface never propagates failures.
///
/// # Examples
///
/// ```
/// use placeholder_engine::temporal::convert_millis;
///
/// assert_eq!(convert_millis(7_200_000, "hour"), 2);
/// assert_eq!(convert_millis(7_200_000, "fortnight"), -1);
/// ```
pub fn convert_millis(millis: i64, unit: &str) -> i64 {
    match unit.parse::<Unit>() {
        Ok(u) => millis / u.millis(),
        Err(_) => -1,
    }
}

/// Inverse of [`convert_millis`] for exact-division pairs: a whole count of
/// `unit` expressed in milliseconds, saturating at the i64 bounds. Unknown
/// unit → `-1`.
pub fn convert_to_millis(count: i64, unit: &str) -> i64 {
    match unit.parse::<Unit>() {
        Ok(u) => count.saturating_mul(u.millis()),
        Err(_) => -1,
    }
}

// ── Time-of-day parsing ─────────────────────────────────────────────────────

/// Parse a `HH:MM:SS` (or `HH:MM`) wall-clock time.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, EngineError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| EngineError::InvalidTime(s.to_string()))
}

/// A malformed time string silently degrades to the end of the day.
fn parse_time_or_end_of_day(s: &str) -> NaiveTime {
    parse_time_of_day(s).unwrap_or_else(|_| end_of_day())
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid wall-clock time")
}

// ── Recurrence-rule differences ─────────────────────────────────────────────

/// Milliseconds-equivalent difference from `now` to `time_str` today (or
/// tomorrow when `roll_to_tomorrow` is set), reported in `unit`.
///
/// When not rolling to tomorrow and the target time has already passed, the
/// target is forced to today at 23:59:59, so the result is non-negative by
/// construction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use placeholder_engine::temporal::diff_to_time_of_day;
///
/// let now = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
///     .and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(diff_to_time_of_day(now, "18:00:00", "HOUR", false), 6);
/// ```
pub fn diff_to_time_of_day(
    now: NaiveDateTime,
    time_str: &str,
    unit: &str,
    roll_to_tomorrow: bool,
) -> i64 {
    let target_time = parse_time_or_end_of_day(time_str);
    let target_date = if roll_to_tomorrow {
        now.date().succ_opt().unwrap_or_else(|| now.date())
    } else {
        now.date()
    };

    let mut target = target_date.and_time(target_time);
    if !roll_to_tomorrow && target < now {
        target = now.date().and_time(end_of_day());
    }

    convert_millis((target - now).num_milliseconds(), unit)
}

/// Difference from `now` to `time_str` on the next occurrence of a weekday.
///
/// `week_number` maps 1..=7 to Monday..Sunday; anything out of range falls
/// back to Monday. "Next" is strictly after today — even when today already
/// is the requested weekday, the target lies a full week ahead.
pub fn diff_to_next_weekday(
    now: NaiveDateTime,
    time_str: &str,
    week_number: i32,
    unit: &str,
) -> i64 {
    let target_day = weekday_from_number(week_number);

    let days_ahead = (target_day.num_days_from_monday() as i64
        - now.weekday().num_days_from_monday() as i64
        + 7)
        % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };

    let target =
        (now.date() + chrono::Duration::days(days_ahead)).and_time(parse_time_or_end_of_day(time_str));

    convert_millis((target - now).num_milliseconds(), unit)
}

/// Difference from `now` to `time_str` on a day of the *next* calendar month.
///
/// `day_of_month` is clamped to that month's length (asking for day 31 of a
/// 30-day month targets day 30) and to a minimum of 1.
pub fn diff_to_next_month_day(
    now: NaiveDateTime,
    time_str: &str,
    day_of_month: i32,
    unit: &str,
) -> i64 {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };

    let day = day_of_month.clamp(1, last_day_of_month(year, month)) as u32;
    let target = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| now.date())
        .and_time(parse_time_or_end_of_day(time_str));

    convert_millis((target - now).num_milliseconds(), unit)
}

/// English name of `date`'s weekday.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Calendar-aware elapsed time ─────────────────────────────────────────────

/// Elapsed time from `start` to `now` in `unit`, calendar-aware.
///
/// Unlike [`convert_millis`], `MONTH` and `YEAR` here count whole calendar
/// months (years are months divided by twelve), matching how an account's
/// age is usually reported. `DAY` counts whole 24-hour periods. Unknown
/// unit → `-1`.
pub fn elapsed_since(start: NaiveDateTime, now: NaiveDateTime, unit: &str) -> i64 {
    let elapsed = now - start;
    match unit.parse::<Unit>() {
        Ok(Unit::Milli) => elapsed.num_milliseconds(),
        Ok(Unit::Second) => elapsed.num_seconds(),
        Ok(Unit::Minute) => elapsed.num_minutes(),
        Ok(Unit::Hour) => elapsed.num_hours(),
        Ok(Unit::Day) => elapsed.num_days(),
        Ok(Unit::Month) => calendar_months_between(start, now),
        Ok(Unit::Year) => calendar_months_between(start, now) / 12,
        Err(_) => -1,
    }
}

/// Whole calendar months from `start` to `end` (negative when `end` is
/// earlier). A partial month does not count.
fn calendar_months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if end < start {
        return -calendar_months_between(end, start);
    }

    let mut months = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);

    if months > 0 {
        let anchored = start
            .checked_add_months(Months::new(months as u32))
            .unwrap_or(end);
        if anchored > end {
            months -= 1;
        }
    }
    months
}

/// Format an instant with a chrono strftime pattern.
///
/// chrono reports pattern errors only at render time, so formatting is done
/// into a buffer and a failed render maps to [`EngineError::InvalidFormat`].
pub fn format_instant(instant: NaiveDateTime, pattern: &str) -> Result<String, EngineError> {
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern))
        .map_err(|_| EngineError::InvalidFormat(pattern.to_string()))?;
    Ok(out)
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn weekday_from_number(week_number: i32) -> Weekday {
    match week_number {
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => Weekday::Mon,
    }
}

fn last_day_of_month(year: i32, month: u32) -> i32 {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(28)
}
