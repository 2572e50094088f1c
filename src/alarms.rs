// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Seasonal alarms.
//!
//! The wake-up time drifts with the planet's year between the earliest and
//! latest acceptable times: a sinusoid of the fraction of the year elapsed
//! since the latest March equinox, evaluated at the observer's coming local
//! midnight. The wake-up time is counted from that same midnight. Bedtime
//! and the start of work follow from the wake-up time.

use crate::error::{AstroError, Result};
use crate::location::PlanetaryLocation;
use crate::mechanics;
use crate::period::align_to_period;
use crate::units::{seconds_of, RealTime};
use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use log::debug;
use std::f64::consts::TAU;
use std::fmt;

/// What a sleeper needs from a night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepRequirements {
    sleep: RealTime,
    earliest_wake_up: NaiveTime,
    latest_wake_up: NaiveTime,
    ablutions: Duration,
}

impl SleepRequirements {
    /// Fails unless `earliest_wake_up ≤ latest_wake_up` and `ablutions ≥ 0`.
    pub fn new(
        sleep: RealTime,
        earliest_wake_up: NaiveTime,
        latest_wake_up: NaiveTime,
        ablutions: Duration,
    ) -> Result<Self> {
        if earliest_wake_up > latest_wake_up {
            return Err(AstroError::InvalidSleepRequirements(format!(
                "earliest wake-up {earliest_wake_up} is after latest wake-up {latest_wake_up}"
            )));
        }
        if ablutions < Duration::zero() {
            return Err(AstroError::InvalidSleepRequirements(format!(
                "ablutions must not be negative, got {ablutions}"
            )));
        }
        Ok(Self {
            sleep,
            earliest_wake_up,
            latest_wake_up,
            ablutions,
        })
    }

    #[inline]
    pub const fn sleep(&self) -> RealTime {
        self.sleep
    }

    #[inline]
    pub const fn earliest_wake_up(&self) -> NaiveTime {
        self.earliest_wake_up
    }

    #[inline]
    pub const fn latest_wake_up(&self) -> NaiveTime {
        self.latest_wake_up
    }

    #[inline]
    pub const fn ablutions(&self) -> Duration {
        self.ablutions
    }

    /// Width of the wake-up window.
    #[inline]
    pub fn margin(&self) -> Duration {
        self.latest_wake_up - self.earliest_wake_up
    }
}

impl Default for SleepRequirements {
    /// 7 h 10 min of sleep, up between 06:00 and 07:00, 1 h to get ready.
    fn default() -> Self {
        Self {
            sleep: RealTime::from_positive(Duration::hours(7) + Duration::minutes(10)),
            earliest_wake_up: NaiveTime::MIN + Duration::hours(6),
            latest_wake_up: NaiveTime::MIN + Duration::hours(7),
            ablutions: Duration::hours(1),
        }
    }
}

fn since_midnight(time: NaiveTime) -> Duration {
    Duration::seconds(i64::from(time.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(time.nanosecond()))
}

/// Bedtime, wake-up and start of work for the coming night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alarms {
    pub sleep: DateTime<Utc>,
    pub wake: DateTime<Utc>,
    pub work: DateTime<Utc>,
}

impl Alarms {
    /// Alarms for the night ending the observer's local synodic day containing `now`.
    pub fn calculate(
        requirements: &SleepRequirements,
        location: &PlanetaryLocation,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let planet = location.planet();
        let year = mechanics::orbital_period(planet)?;
        let latest_equinox = align_to_period(planet.ref_march_equinox(), year, now)?;
        let next_midnight = location.solar_day(now)?.end();

        let year_seconds = seconds_of(year).value();
        if year_seconds <= 0.0 {
            return Err(AstroError::DivisionByZero("annual progress"));
        }
        let progress = TAU * seconds_of(next_midnight - latest_equinox).value() / year_seconds;

        let margin_ns = requirements
            .margin()
            .num_nanoseconds()
            .ok_or(AstroError::OutOfRange)?;
        let fraction = progress.sin() / 2.0 + 0.5;
        let offset_ns = ((margin_ns as f64) * fraction).round() as i64;
        let offset = Duration::nanoseconds(offset_ns.clamp(0, margin_ns));
        debug!("wake-up offset {offset} of {}", requirements.margin());

        let wake = next_midnight + (since_midnight(requirements.latest_wake_up) - offset);
        Ok(Self {
            sleep: wake - requirements.sleep.duration(),
            wake,
            work: wake + requirements.ablutions,
        })
    }
}

impl fmt::Display for Alarms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alarms:")?;
        writeln!(f, "- Bedtime:\t{}", self.sleep.format("%I:%M%p"))?;
        writeln!(f, "- Get up:\t{}", self.wake.format("%I:%M%p"))?;
        write!(f, "- Start work:\t{}", self.work.format("%I:%M%p"))
    }
}
