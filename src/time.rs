//! UTC calendar decomposition and Julian Day calculation.
//!
//! Every calculation in this crate works on explicit UTC civil fields
//! ([`UtcFields`]). Anything that can produce those fields implements
//! [`UtcInstant`], so the core never consults a process-wide clock or a
//! non-reentrant `gmtime`-style primitive.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
use core::fmt;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// UTC civil date and time with whole-second granularity.
///
/// Fields are stored exactly as given. [`UtcFields::new`] validates them;
/// [`UtcFields::new_unchecked`] does not, and out-of-range values simply flow
/// through the arithmetic.
///
/// # Example
/// ```
/// # use solar_azel::time::UtcFields;
/// let fields = UtcFields::new(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(fields.julian_day(), 2_451_545.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl UtcFields {
    /// Creates UTC fields from year, month, day, hour, minute, and second.
    ///
    /// # Arguments
    /// * `year` - Year (proleptic Gregorian, can be negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1 to the length of the month)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if second > 59 {
            return Err(Error::invalid_datetime("second must be between 0 and 59"));
        }

        Ok(Self::new_unchecked(year, month, day, hour, minute, second))
    }

    /// Creates UTC fields without any range checks.
    ///
    /// Malformed fields (month 13, day 32) are accepted and produce
    /// arithmetically defined but physically meaningless results.
    #[must_use]
    pub const fn new_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Decomposes a timezone-aware chrono `DateTime` into UTC fields.
    ///
    /// The datetime is converted to UTC first; sub-second precision is dropped.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self::new_unchecked(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second(),
        )
    }

    /// Decomposes a naive chrono `NaiveDateTime`, taking it to be UTC.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_naive(datetime: &chrono::NaiveDateTime) -> Self {
        Self::new_unchecked(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            datetime.second(),
        )
    }

    /// Decomposes seconds since the Unix epoch (1970-01-01T00:00:00Z).
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the timestamp is outside chrono's range.
    ///
    /// # Example
    /// ```
    /// # use solar_azel::time::UtcFields;
    /// let fields = UtcFields::from_unix_timestamp(0).unwrap();
    /// assert_eq!(fields, UtcFields::new(1970, 1, 1, 0, 0, 0).unwrap());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self> {
        chrono::DateTime::<chrono::Utc>::from_timestamp(seconds, 0)
            .map(|datetime| Self::from_datetime(&datetime))
            .ok_or(Error::invalid_datetime("unix timestamp out of range"))
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Decimal hours since midnight UTC: `hour + minute/60 + second/3600`.
    #[must_use]
    pub fn hour_of_day(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0 + f64::from(self.second) / 3600.0
    }

    /// Calculates the Julian Day for these fields.
    ///
    /// January and February count as months 13 and 14 of the previous year.
    /// The Gregorian century correction is always applied, so dates before
    /// 1582-10-15 are treated as proleptic Gregorian.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        let mut year = f64::from(self.year);
        let mut month = f64::from(self.month);

        if month <= 2.0 {
            year -= 1.0;
            month += 12.0;
        }

        let day = f64::from(self.day);
        let hour = f64::from(self.hour);
        let minute = f64::from(self.minute);
        let second = f64::from(self.second);

        floor(365.25 * (year + 4716.0)) + floor(30.6001 * (month + 1.0)) + 2.0
            - floor(year / 100.0)
            + floor(floor(year / 100.0) / 4.0)
            + day
            - 1524.5
            + (hour + minute / 60.0 + second / 3600.0) / 24.0
    }
}

impl fmt::Display for UtcFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses `yyyy/mm/dd HH:MM:SS` (taken as UTC) or an RFC 3339 timestamp.
///
/// # Example
/// ```
/// # use solar_azel::time::UtcFields;
/// let a: UtcFields = "2009/02/17 19:00:00".parse().unwrap();
/// let b: UtcFields = "2009-02-17T20:00:00+01:00".parse().unwrap();
/// assert_eq!(a, b);
/// ```
#[cfg(feature = "chrono")]
impl core::str::FromStr for UtcFields {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y/%m/%d %H:%M:%S") {
            return Ok(Self::from_naive(&naive));
        }
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|datetime| Self::from_datetime(&datetime))
            .map_err(|_| {
                Error::invalid_datetime("expected `yyyy/mm/dd HH:MM:SS` or an RFC 3339 timestamp")
            })
    }
}

/// A point in time that can be decomposed into UTC civil fields.
///
/// Implementations must be pure: the same value always yields the same
/// fields, independent of the host time zone or any global state.
pub trait UtcInstant {
    /// Decomposes this instant into UTC calendar fields.
    fn utc_fields(&self) -> UtcFields;
}

impl UtcInstant for UtcFields {
    fn utc_fields(&self) -> UtcFields {
        *self
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> UtcInstant for chrono::DateTime<Tz> {
    fn utc_fields(&self) -> UtcFields {
        UtcFields::from_datetime(self)
    }
}

#[cfg(feature = "chrono")]
impl UtcInstant for chrono::NaiveDateTime {
    fn utc_fields(&self) -> UtcFields {
        UtcFields::from_naive(self)
    }
}

/// Calculates the Julian Day of a UTC instant.
///
/// # Example
/// ```
/// # use solar_azel::time::{julian_day, UtcFields};
/// let jd = julian_day(&UtcFields::new(1970, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(jd, 2_440_587.5);
/// ```
#[must_use]
pub fn julian_day<T: UtcInstant + ?Sized>(instant: &T) -> f64 {
    instant.utc_fields().julian_day()
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
