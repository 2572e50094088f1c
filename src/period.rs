// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-cycle periods.
//!
//! This module provides:
//! - [`align_to_period`]: the floor of an instant onto a periodic grid
//! - [`SolarDay`]: one synodic day aligned on a planet's reference midnight
//! - [`SunTimes`]: the sunrise/sunset pair found inside a [`SolarDay`]

use crate::error::{AstroError, Result};
use crate::units::seconds_of;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Snap `instant` down onto the grid `origin + n · period`.
///
/// Computes `origin + floor((instant − origin) / period) · period` in whole
/// nanoseconds, so days that are not 24 h long stay exactly aligned. Instants
/// before `origin` floor towards the past like any other.
///
/// # Examples
///
/// ```
/// use astronomical::align_to_period;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let origin = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let instant = Utc.with_ymd_and_hms(2024, 1, 2, 7, 0, 0).unwrap();
/// let start = align_to_period(origin, Duration::hours(30), instant).unwrap();
///
/// assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap());
/// ```
pub fn align_to_period(
    origin: DateTime<Utc>,
    period: Duration,
    instant: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let period_ns = period.num_nanoseconds().ok_or(AstroError::OutOfRange)?;
    if period_ns <= 0 {
        return Err(AstroError::DivisionByZero("period alignment"));
    }
    let elapsed_ns = (instant - origin)
        .num_nanoseconds()
        .ok_or(AstroError::OutOfRange)?;
    let offset = elapsed_ns
        .div_euclid(period_ns)
        .checked_mul(period_ns)
        .ok_or(AstroError::OutOfRange)?;
    origin
        .checked_add_signed(Duration::nanoseconds(offset))
        .ok_or(AstroError::OutOfRange)
}

// ═══════════════════════════════════════════════════════════════════════════
// SolarDay
// ═══════════════════════════════════════════════════════════════════════════

/// One synodic day, `[start, start + length)`.
///
/// `start` is a midnight of the planet's day cycle: a whole number of
/// synodic days away from the planet's reference midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDay {
    start: DateTime<Utc>,
    length: Duration,
}

impl SolarDay {
    /// The synodic day containing `instant`.
    pub fn containing(
        ref_midnight: DateTime<Utc>,
        synodic_day: Duration,
        instant: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            start: align_to_period(ref_midnight, synodic_day, instant)?,
            length: synodic_day,
        })
    }

    /// Midnight opening this day.
    #[inline]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub const fn length(&self) -> Duration {
        self.length
    }

    /// Midnight closing this day, which is also the next day's start.
    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.length
    }

    /// Whether `instant` falls in `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end()
    }

    /// Elapsed time since this day's midnight.
    #[inline]
    pub fn since_midnight(&self, instant: DateTime<Utc>) -> Duration {
        instant - self.start
    }

    /// Number of whole minutes in the day, `floor(length / 60 s)`.
    pub fn whole_minutes(&self) -> i64 {
        (seconds_of(self.length).value() / 60.0).floor() as i64
    }
}

impl fmt::Display for SolarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SunTimes
// ═══════════════════════════════════════════════════════════════════════════

/// Sunrise and sunset inside one synodic day; `sunrise` comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        SunTimes { sunrise, sunset }
    }

    /// Time between sunrise and sunset.
    #[inline]
    pub fn daylight(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// Whether `instant` falls in `[sunrise, sunset)`.
    pub fn is_daytime(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise <= instant && instant < self.sunset
    }
}

impl fmt::Display for SunTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.sunrise.format("%I:%M%p"),
            self.sunset.format("%I:%M%p")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn align_floors_onto_the_grid() {
        let origin = utc(2024, 1, 1, 0, 0);
        let aligned = align_to_period(origin, Duration::hours(24), utc(2024, 1, 5, 13, 45)).unwrap();
        assert_eq!(aligned, utc(2024, 1, 5, 0, 0));
    }

    #[test]
    fn align_exact_boundary_is_its_own_start() {
        let origin = utc(2024, 1, 1, 0, 0);
        let boundary = origin + Duration::hours(30) * 3;
        assert_eq!(
            align_to_period(origin, Duration::hours(30), boundary).unwrap(),
            boundary
        );
    }

    #[test]
    fn align_before_origin_floors_towards_the_past() {
        let origin = utc(2024, 1, 1, 0, 0);
        let aligned = align_to_period(origin, Duration::hours(24), utc(2023, 12, 31, 6, 0)).unwrap();
        assert_eq!(aligned, utc(2023, 12, 31, 0, 0));
    }

    #[test]
    fn align_rejects_empty_period() {
        let origin = utc(2024, 1, 1, 0, 0);
        assert_eq!(
            align_to_period(origin, Duration::zero(), origin),
            Err(AstroError::DivisionByZero("period alignment"))
        );
    }

    #[test]
    fn align_rejects_spans_beyond_nanosecond_range() {
        let origin = utc(1000, 1, 1, 0, 0);
        assert_eq!(
            align_to_period(origin, Duration::hours(24), utc(2024, 1, 1, 0, 0)),
            Err(AstroError::OutOfRange)
        );
    }

    #[test]
    fn solar_day_contains_its_instant() {
        let ref_midnight = utc(1970, 1, 1, 0, 0);
        let instant = utc(2021, 6, 21, 12, 0);
        let day = SolarDay::containing(ref_midnight, Duration::hours(24), instant).unwrap();

        assert!(day.contains(instant));
        assert!(day.contains(day.start()));
        assert!(!day.contains(day.end()));
        assert_eq!(day.start(), utc(2021, 6, 21, 0, 0));
        assert_eq!(day.since_midnight(instant), Duration::hours(12));
        assert_eq!(day.whole_minutes(), 1440);
    }

    #[test]
    fn whole_minutes_floors_partial_minutes() {
        let day = SolarDay::containing(
            utc(1970, 1, 1, 0, 0),
            Duration::seconds(86_399),
            utc(1970, 1, 1, 0, 0),
        )
        .unwrap();
        assert_eq!(day.whole_minutes(), 1439);
    }

    #[test]
    fn sun_times_daylight() {
        let times = SunTimes::new(utc(2021, 6, 21, 3, 46), utc(2021, 6, 21, 20, 11));
        assert_eq!(times.daylight(), Duration::hours(16) + Duration::minutes(25));
        assert!(times.is_daytime(utc(2021, 6, 21, 12, 0)));
        assert!(!times.is_daytime(utc(2021, 6, 21, 20, 11)));
    }

    #[test]
    fn sun_times_display() {
        let times = SunTimes::new(utc(2021, 6, 21, 3, 46), utc(2021, 6, 21, 20, 11));
        assert_eq!(times.to_string(), "03:46AM -> 08:11PM");
    }
}
