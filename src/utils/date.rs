//! Civil calendar dates without timezone complexity.
//!
//! Posts carry a calendar date only; the catalog sort and the sitemap both
//! work in `YYYY-MM-DD` resolution, so no time-of-day state is kept.

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A civil calendar date.
///
/// Field order gives derived `Ord` chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format.
    ///
    /// A trailing RFC3339 time component is validated and discarded.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Optional time part (RFC3339), validated then dropped
        if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z' {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            let hour = parse_u8(&bytes[11..13])?;
            let minute = parse_u8(&bytes[14..16])?;
            let second = parse_u8(&bytes[17..19])?;
            if hour > 23 || minute > 59 || second > 59 {
                return None;
            }
        } else if bytes.len() != 10 {
            return None;
        }

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    /// Current date derived from the system clock (UTC).
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        #[allow(clippy::cast_possible_wrap)] // Safe: seconds/86400 fits in i64
        Self::from_days(secs as i64 / 86400)
    }

    /// Build a date from days since the Unix epoch.
    ///
    /// Uses Howard Hinnant's date algorithms for efficient calendar calculations.
    /// See: <http://howardhinnant.github.io/date_algorithms.html>
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_days(days: i64) -> Self {
        // Shift epoch from 1970-01-01 to 0000-03-01
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        // Day of era [0, 146096]
        let doe = (z - era * 146_097) as u32;
        // Year of era [0, 399]
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let y = yoe as i64 + era * 400;
        // Day of year [0, 365]
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        // Month [0, 11] -> [3, 14]
        let mp = (5 * doy + 2) / 153;
        // Day [1, 31]
        let d = doy - (153 * mp + 2) / 5 + 1;
        // Month [1, 12]
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = if m <= 2 { y + 1 } else { y };

        Self {
            year: y as u16,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    let mut i = 0;
    while i < 4 {
        let d = bytes[i].wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
        i += 1;
    }
    Some(result)
}
