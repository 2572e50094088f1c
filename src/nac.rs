// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! NAC time.
//!
//! An alternative clock in which daylight and darkness each last exactly
//! 12 hours. Sunrise always reads 06:00 and sunset 18:00; the hours in
//! between stretch or shrink with the season.
//!
//! | Span | Anchor | Scale |
//! |------|--------|-------|
//! | midnight → sunrise | 00:00 | 43 200 s / night |
//! | sunrise → sunset | 06:00 | 43 200 s / day |
//! | sunset → next midnight | 18:00 | 43 200 s / night |

use crate::error::{AstroError, Result};
use crate::period::{SolarDay, SunTimes};
use crate::units::seconds_of;
use chrono::{DateTime, NaiveTime, Utc};
use std::fmt;

const HALF_DAY: f64 = 43_200.0;
const SIX_HOURS: f64 = 21_600.0;
const EIGHTEEN_HOURS: f64 = 64_800.0;
const FULL_DAY: f64 = 86_400.0;

/// A reading of the NAC clock: seconds since NAC midnight, in `[0, 86 400)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NacTime(f64);

impl NacTime {
    /// Wraps any second count into `[0, 86 400)`.
    pub fn from_seconds(seconds: f64) -> Self {
        let wrapped = seconds.rem_euclid(FULL_DAY);
        // rem_euclid can round up to the modulus itself
        Self(if wrapped >= FULL_DAY { 0.0 } else { wrapped })
    }

    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.0
    }

    /// The reading as a wall-clock time of day, truncated to the nanosecond.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let whole = self.0.trunc();
        let nanos = ((self.0 - whole) * 1e9) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(whole as u32, nanos.min(999_999_999))
    }
}

impl fmt::Display for NacTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.floor() as u32;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / 3_600,
            (total / 60) % 60,
            total % 60
        )
    }
}

/// NAC time of `now` within `day`, given the day's sunrise and sunset.
///
/// Fails with [`AstroError::InstantOutsideDay`] when `now` is not in `day`,
/// and with [`AstroError::DivisionByZero`] when either daylight or darkness
/// has no length.
pub fn nac_time(day: &SolarDay, sun: &SunTimes, now: DateTime<Utc>) -> Result<NacTime> {
    if !day.contains(now) {
        return Err(AstroError::InstantOutsideDay);
    }

    let daylight = seconds_of(sun.daylight()).value();
    let darkness = seconds_of(day.length()).value() - daylight;
    if daylight <= 0.0 {
        return Err(AstroError::DivisionByZero("NAC daylight"));
    }
    if darkness <= 0.0 {
        return Err(AstroError::DivisionByZero("NAC darkness"));
    }

    let seconds = if now < sun.sunrise {
        seconds_of(day.since_midnight(now)).value() * HALF_DAY / darkness
    } else if now < sun.sunset {
        SIX_HOURS + seconds_of(now - sun.sunrise).value() * HALF_DAY / daylight
    } else {
        EIGHTEEN_HOURS + seconds_of(now - sun.sunset).value() * HALF_DAY / darkness
    };
    Ok(NacTime::from_seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn utc(h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, 21, h, mi, 0).unwrap()
    }

    fn day() -> SolarDay {
        SolarDay::containing(utc(0, 0), Duration::hours(24), utc(12, 0)).unwrap()
    }

    #[test]
    fn equinox_like_day_is_the_identity() {
        let sun = SunTimes::new(utc(6, 0), utc(18, 0));
        for h in [0, 3, 6, 9, 12, 15, 18, 21, 23] {
            let nac = nac_time(&day(), &sun, utc(h, 0)).unwrap();
            assert_relative_eq!(nac.seconds(), f64::from(h) * 3_600.0);
        }
    }

    #[test]
    fn anchors_hold_on_a_long_day() {
        let sun = SunTimes::new(utc(4, 0), utc(20, 0));
        assert_eq!(nac_time(&day(), &sun, utc(0, 0)).unwrap().seconds(), 0.0);
        assert_relative_eq!(nac_time(&day(), &sun, utc(4, 0)).unwrap().seconds(), 21_600.0);
        assert_relative_eq!(nac_time(&day(), &sun, utc(20, 0)).unwrap().seconds(), 64_800.0);
        // solar noon is NAC noon
        assert_relative_eq!(nac_time(&day(), &sun, utc(12, 0)).unwrap().seconds(), 43_200.0);
        // 2 h of an 8 h night
        assert_relative_eq!(nac_time(&day(), &sun, utc(2, 0)).unwrap().seconds(), 10_800.0);
    }

    #[test]
    fn reading_stays_below_a_full_day() {
        let sun = SunTimes::new(utc(4, 0), utc(20, 0));
        let late = day().end() - Duration::nanoseconds(1);
        let nac = nac_time(&day(), &sun, late).unwrap();
        assert!(nac.seconds() < 86_400.0);
    }

    #[test]
    fn instant_outside_the_day_is_rejected() {
        let sun = SunTimes::new(utc(6, 0), utc(18, 0));
        assert_eq!(
            nac_time(&day(), &sun, day().end()),
            Err(AstroError::InstantOutsideDay)
        );
    }

    #[test]
    fn degenerate_days_are_rejected() {
        let no_daylight = SunTimes::new(utc(6, 0), utc(6, 0));
        assert_eq!(
            nac_time(&day(), &no_daylight, utc(12, 0)),
            Err(AstroError::DivisionByZero("NAC daylight"))
        );
        let no_darkness = SunTimes::new(utc(0, 0), day().end());
        assert_eq!(
            nac_time(&day(), &no_darkness, utc(12, 0)),
            Err(AstroError::DivisionByZero("NAC darkness"))
        );
    }

    #[test]
    fn display_and_wall_clock() {
        let nac = NacTime::from_seconds(6.0 * 3_600.0 + 62.5);
        assert_eq!(nac.to_string(), "06:01:02");
        assert_eq!(
            nac.to_naive_time(),
            NaiveTime::from_hms_milli_opt(6, 1, 2, 500)
        );
        assert_eq!(NacTime::from_seconds(-60.0).to_string(), "23:59:00");
    }
}
