// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Calendar and duration helpers over the chrono types backing the temporal
//! values.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// The default date time with offset: the default naive date time at UTC.
pub fn default_offset_datetime() -> DateTime<FixedOffset> {
	NaiveDateTime::default().and_utc().fixed_offset()
}

/// Builds midnight of the given calendar day.
pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
	NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Builds an interval from day, hour, minute and second components.
pub fn interval(days: i64, hours: i64, minutes: i64, seconds: i64) -> Option<TimeDelta> {
	TimeDelta::try_days(days)?
		.checked_add(&TimeDelta::try_hours(hours)?)?
		.checked_add(&TimeDelta::try_minutes(minutes)?)?
		.checked_add(&TimeDelta::try_seconds(seconds)?)
}

/// Truncates a date time to midnight of its day.
pub fn truncate_to_date(value: &NaiveDateTime) -> NaiveDateTime {
	value.date().and_time(chrono::NaiveTime::MIN)
}

pub fn millisecond(value: &NaiveDateTime) -> i32 {
	(value.nanosecond() % 1_000_000_000 / 1_000_000) as i32
}

/// Day of the week, Sunday being zero.
pub fn day_of_week(value: &NaiveDateTime) -> i32 {
	value.weekday().num_days_from_sunday() as i32
}

pub fn day_of_year(value: &NaiveDateTime) -> i32 {
	value.ordinal() as i32
}

/// Whole-unit components of an interval. Every component carries the sign of
/// the interval.
pub mod component {
	use super::*;

	fn total_millis(value: &TimeDelta) -> i64 {
		value.num_milliseconds()
	}

	pub fn days(value: &TimeDelta) -> i32 {
		(total_millis(value) / MILLIS_PER_DAY) as i32
	}

	pub fn hours(value: &TimeDelta) -> i32 {
		(total_millis(value) % MILLIS_PER_DAY / MILLIS_PER_HOUR) as i32
	}

	pub fn minutes(value: &TimeDelta) -> i32 {
		(total_millis(value) % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as i32
	}

	pub fn seconds(value: &TimeDelta) -> i32 {
		(total_millis(value) % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as i32
	}

	pub fn milliseconds(value: &TimeDelta) -> i32 {
		(total_millis(value) % MILLIS_PER_SECOND) as i32
	}
}

/// Fractional totals of an interval.
pub mod total {
	use super::*;

	fn millis(value: &TimeDelta) -> f64 {
		value.num_microseconds().map(|us| us as f64 / 1_000.0).unwrap_or(value.num_milliseconds() as f64)
	}

	pub fn days(value: &TimeDelta) -> f64 {
		millis(value) / MILLIS_PER_DAY as f64
	}

	pub fn hours(value: &TimeDelta) -> f64 {
		millis(value) / MILLIS_PER_HOUR as f64
	}

	pub fn minutes(value: &TimeDelta) -> f64 {
		millis(value) / MILLIS_PER_MINUTE as f64
	}

	pub fn seconds(value: &TimeDelta) -> f64 {
		millis(value) / MILLIS_PER_SECOND as f64
	}

	pub fn milliseconds(value: &TimeDelta) -> f64 {
		millis(value)
	}
}
