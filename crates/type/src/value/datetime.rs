// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::error::TypeError;

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const SECS_PER_DAY: i64 = 86_400;
const NANOS_PER_DAY: i64 = SECS_PER_DAY * NANOS_PER_SEC;

/// A date and time value with nanosecond precision, always interpreted in
/// UTC.
///
/// Internally stored as nanoseconds since the Unix epoch
/// (1970-01-01T00:00:00Z). Negative values represent instants before 1970.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	nanos_since_epoch: i64,
}

// Calendar utilities
impl DateTime {
	/// Check if a year is a leap year
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	/// Get the number of days in a month
	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Convert year/month/day to days since Unix epoch
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		// Validate input
		if month < 1 || month > 12 || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		// Algorithm based on Howard Hinnant's date algorithms
		// Convert month from [1,12] to [0,11] where Mar=0
		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9) // Jan->10, Feb->11
		} else {
			(year, month as i32 - 3) // Mar->0, Apr->1, ..., Dec->9
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i32 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
		let days = era * 146097 + doe - 719468;

		Some(days)
	}

	/// Convert days since Unix epoch to year/month/day
	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		// Adjust to the algorithm's epoch
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097; // [0, 146096]
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
		let mp = (5 * doy + 2) / 153; // [0, 11]
		let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		}; // [1, 12]
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}
}

impl DateTime {
	/// Build from calendar parts. Returns `None` if any part is out of
	/// range or the instant does not fit the nanosecond representation.
	pub fn new(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32, nano: u32) -> Option<Self> {
		if hour > 23 || min > 59 || sec > 59 || nano >= NANOS_PER_SEC as u32 {
			return None;
		}
		let days = Self::ymd_to_days_since_epoch(year, month, day)? as i64;
		let secs_of_day = (hour as i64) * 3600 + (min as i64) * 60 + sec as i64;
		let nanos = days
			.checked_mul(NANOS_PER_DAY)?
			.checked_add(secs_of_day * NANOS_PER_SEC)?
			.checked_add(nano as i64)?;
		Some(Self {
			nanos_since_epoch: nanos,
		})
	}

	pub fn from_timestamp_nanos(nanos: i64) -> Self {
		Self {
			nanos_since_epoch: nanos,
		}
	}

	pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
		millis.checked_mul(NANOS_PER_MILLI).map(Self::from_timestamp_nanos)
	}

	pub fn timestamp_nanos(&self) -> i64 {
		self.nanos_since_epoch
	}

	pub fn timestamp_millis(&self) -> i64 {
		self.nanos_since_epoch.div_euclid(NANOS_PER_MILLI)
	}

	/// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS[.frac]`, with an optional
	/// trailing `Z` and a space accepted in place of the `T` separator.
	pub fn parse(literal: &str) -> Result<Self, TypeError> {
		let invalid = |reason: &'static str| TypeError::InvalidDateTime {
			literal: literal.to_string(),
			reason,
		};

		let trimmed = literal.trim();
		let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

		let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
			Some((date, time)) => (date, Some(time)),
			None => (trimmed, None),
		};

		let mut date_it = date_part.splitn(3, '-');
		let year: i32 = date_it
			.next()
			.and_then(|p| p.parse().ok())
			.ok_or_else(|| invalid("invalid year"))?;
		let month: u32 = date_it
			.next()
			.and_then(|p| p.parse().ok())
			.ok_or_else(|| invalid("invalid month"))?;
		let day: u32 = date_it
			.next()
			.and_then(|p| p.parse().ok())
			.ok_or_else(|| invalid("invalid day"))?;

		let (hour, min, sec, nano) = match time_part {
			None => (0, 0, 0, 0),
			Some(time) => {
				let (clock, frac) = match time.split_once('.') {
					Some((clock, frac)) => (clock, Some(frac)),
					None => (time, None),
				};
				let mut clock_it = clock.splitn(3, ':');
				let hour: u32 = clock_it
					.next()
					.and_then(|p| p.parse().ok())
					.ok_or_else(|| invalid("invalid hour"))?;
				let min: u32 = clock_it
					.next()
					.and_then(|p| p.parse().ok())
					.ok_or_else(|| invalid("invalid minute"))?;
				let sec: u32 = clock_it
					.next()
					.and_then(|p| p.parse().ok())
					.ok_or_else(|| invalid("invalid second"))?;
				let nano = match frac {
					None => 0,
					Some(frac) => {
						if frac.is_empty()
							|| frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit())
						{
							return Err(invalid("invalid fractional seconds"));
						}
						let digits: u32 = frac.parse().map_err(|_| {
							invalid("invalid fractional seconds")
						})?;
						digits * 10u32.pow(9 - frac.len() as u32)
					}
				};
				(hour, min, sec, nano)
			}
		};

		Self::new(year, month, day, hour, min, sec, nano).ok_or_else(|| invalid("component out of range"))
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let days = self.nanos_since_epoch.div_euclid(NANOS_PER_DAY);
		let nanos_of_day = self.nanos_since_epoch.rem_euclid(NANOS_PER_DAY);

		let (year, month, day) = Self::days_since_epoch_to_ymd(days as i32);
		let secs_of_day = nanos_of_day / NANOS_PER_SEC;
		let nano = nanos_of_day % NANOS_PER_SEC;
		let (hour, min, sec) = (secs_of_day / 3600, secs_of_day / 60 % 60, secs_of_day % 60);

		write!(f, "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}", year, month, day, hour, min, sec)?;
		if nano != 0 {
			let frac = format!("{:09}", nano);
			write!(f, ".{}", frac.trim_end_matches('0'))?;
		}
		f.write_str("Z")
	}
}

impl FromStr for DateTime {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Serialize for DateTime {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct DateTimeVisitor;

		impl Visitor<'_> for DateTimeVisitor {
			type Value = DateTime;

			fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
				f.write_str("an RFC 3339 datetime string or epoch milliseconds")
			}

			fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
				DateTime::parse(v).map_err(de::Error::custom)
			}

			fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
				DateTime::from_timestamp_millis(v)
					.ok_or_else(|| de::Error::custom("epoch milliseconds out of range"))
			}

			fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
				i64::try_from(v)
					.ok()
					.and_then(DateTime::from_timestamp_millis)
					.ok_or_else(|| de::Error::custom("epoch milliseconds out of range"))
			}
		}

		deserializer.deserialize_any(DateTimeVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_epoch() {
		assert_eq!(DateTime::from_timestamp_nanos(0).to_string(), "1970-01-01T00:00:00Z");
	}

	#[test]
	fn test_display_fraction_trimmed() {
		let dt = DateTime::new(2024, 3, 15, 9, 30, 12, 250_000_000).unwrap();
		assert_eq!(dt.to_string(), "2024-03-15T09:30:12.25Z");
	}

	#[test]
	fn test_display_before_epoch() {
		let dt = DateTime::from_timestamp_nanos(-NANOS_PER_SEC);
		assert_eq!(dt.to_string(), "1969-12-31T23:59:59Z");
	}

	#[test]
	fn test_parse_date_only() {
		let dt = DateTime::parse("2024-02-29").unwrap();
		assert_eq!(dt, DateTime::new(2024, 2, 29, 0, 0, 0, 0).unwrap());
	}

	#[test]
	fn test_parse_full() {
		let dt = DateTime::parse("2024-03-15T09:30:12.25Z").unwrap();
		assert_eq!(dt, DateTime::new(2024, 3, 15, 9, 30, 12, 250_000_000).unwrap());
		// Space separator, no zone suffix
		assert_eq!(DateTime::parse("2024-03-15 09:30:12.25").unwrap(), dt);
	}

	#[test]
	fn test_parse_display_round_trip() {
		for literal in ["1970-01-01T00:00:00Z", "1999-12-31T23:59:59.999999999Z", "2262-04-11T00:00:00Z"] {
			assert_eq!(DateTime::parse(literal).unwrap().to_string(), literal);
		}
	}

	#[test]
	fn test_parse_rejects_garbage() {
		for literal in ["", "not-a-date", "2024-13-01", "2023-02-29", "2024-03-15T25:00:00", "2024-03-15T09:30:12.1234567890"] {
			assert!(DateTime::parse(literal).is_err(), "accepted {:?}", literal);
		}
	}

	#[test]
	fn test_timestamp_millis_round_trip() {
		let dt = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
		assert_eq!(dt.timestamp_millis(), 1_700_000_000_123);
	}

	#[test]
	fn test_ordering() {
		let earlier = DateTime::parse("2024-01-01").unwrap();
		let later = DateTime::parse("2024-01-02").unwrap();
		assert!(earlier < later);
	}

	#[test]
	fn test_serde_string_and_millis() {
		let dt = DateTime::parse("2024-03-15T09:30:12Z").unwrap();
		let encoded = serde_json::to_string(&dt).unwrap();
		assert_eq!(encoded, "\"2024-03-15T09:30:12Z\"");
		assert_eq!(serde_json::from_str::<DateTime>(&encoded).unwrap(), dt);

		let from_millis: DateTime = serde_json::from_str("1700000000123").unwrap();
		assert_eq!(from_millis.timestamp_millis(), 1_700_000_000_123);
	}
}
