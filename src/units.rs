// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Physical constants and validated scalar quantities.
//!
//! Each wrapper enforces its physical domain at construction time and hands
//! back an [`AstroError`] instead of clamping:
//!
//! | Type | Unit | Domain |
//! |------|------|--------|
//! | [`Mass`] | kg | `> 0` |
//! | [`Radius`] | m | `≥ 0` |
//! | [`Eccentricity`] | — | `0 < e < 1` |
//! | [`RealTime`] | duration | `> 0` |
//!
//! Durations are carried as `chrono::Duration`; whenever a formula needs a
//! scalar they are converted to [`Seconds`] with nanosecond precision through
//! [`seconds_of`] and back through [`duration_from_seconds`].

use crate::error::{AstroError, Result};
use chrono::Duration;
use qtty::Seconds;
use std::fmt;

/// Universal gravitational constant, in N·m²/kg².
pub const G: f64 = 6.674_08e-11;

const NANOS_PER_SECOND: f64 = 1e9;

/// Length of `duration` as a [`Seconds`] quantity.
pub fn seconds_of(duration: Duration) -> Seconds {
    match duration.num_nanoseconds() {
        Some(ns) => Seconds::new(ns as f64 / NANOS_PER_SECOND),
        // Fallback for durations that do not fit in i64 nanoseconds.
        None => Seconds::new(duration.num_milliseconds() as f64 / 1e3),
    }
}

/// Build a `chrono::Duration` from fractional seconds, rounded to the nanosecond.
///
/// Fails with [`AstroError::OutOfRange`] for non-finite values or spans that
/// overflow an `i64` nanosecond count (≈ 292 years).
pub fn duration_from_seconds(seconds: Seconds) -> Result<Duration> {
    let nanos = (seconds.value() * NANOS_PER_SECOND).round();
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(AstroError::OutOfRange);
    }
    Ok(Duration::nanoseconds(nanos as i64))
}

// ═══════════════════════════════════════════════════════════════════════════
// Validated quantities
// ═══════════════════════════════════════════════════════════════════════════

/// Mass of a body in kilograms, strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Mass(f64);

impl Mass {
    pub fn new(kilograms: f64) -> Result<Self> {
        if kilograms.is_finite() && kilograms > 0.0 {
            Ok(Self(kilograms))
        } else {
            Err(AstroError::InvalidMass(kilograms))
        }
    }

    #[inline]
    pub const fn kilograms(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4e}kg", self.0)
    }
}

impl TryFrom<f64> for Mass {
    type Error = AstroError;

    fn try_from(kilograms: f64) -> Result<Self> {
        Self::new(kilograms)
    }
}

/// A distance in metres, non-negative.
///
/// Used both for body radii and for orbital semimajor axes.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Radius(f64);

impl Radius {
    pub fn new(meters: f64) -> Result<Self> {
        if meters.is_finite() && meters >= 0.0 {
            Ok(Self(meters))
        } else {
            Err(AstroError::InvalidRadius(meters))
        }
    }

    #[inline]
    pub const fn meters(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl TryFrom<f64> for Radius {
    type Error = AstroError;

    fn try_from(meters: f64) -> Result<Self> {
        Self::new(meters)
    }
}

/// Eccentricity of an elliptic orbit, in the open interval `(0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Eccentricity(f64);

impl Eccentricity {
    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(AstroError::InvalidEccentricity(value))
        }
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Eccentricity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Eccentricity {
    type Error = AstroError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// A strictly positive span of time, used for rotation and orbital periods.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RealTime(Duration);

impl RealTime {
    pub fn new(duration: Duration) -> Result<Self> {
        if duration > Duration::zero() {
            Ok(Self(duration))
        } else {
            Err(AstroError::InvalidDuration(seconds_of(duration).value()))
        }
    }

    /// Wrap a duration already known to be positive.
    pub(crate) const fn from_positive(duration: Duration) -> Self {
        Self(duration)
    }

    /// Build from fractional seconds.
    pub fn from_seconds(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(AstroError::InvalidDuration(seconds));
        }
        Self::new(duration_from_seconds(Seconds::new(seconds))?)
    }

    #[inline]
    pub const fn duration(&self) -> Duration {
        self.0
    }

    #[inline]
    pub fn seconds(&self) -> Seconds {
        seconds_of(self.0)
    }
}

impl fmt::Display for RealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds().value())
    }
}

impl TryFrom<Duration> for RealTime {
    type Error = AstroError;

    fn try_from(duration: Duration) -> Result<Self> {
        Self::new(duration)
    }
}

impl From<RealTime> for Duration {
    #[inline]
    fn from(time: RealTime) -> Self {
        time.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_rejects_zero_and_negative() {
        assert_eq!(Mass::new(0.0), Err(AstroError::InvalidMass(0.0)));
        assert_eq!(Mass::new(-1.0), Err(AstroError::InvalidMass(-1.0)));
        assert!(Mass::new(f64::NAN).is_err());
        assert_eq!(Mass::new(5.9722e24).unwrap().kilograms(), 5.9722e24);
    }

    #[test]
    fn radius_accepts_zero() {
        assert_eq!(Radius::new(0.0).unwrap().meters(), 0.0);
        assert_eq!(Radius::new(-3.0), Err(AstroError::InvalidRadius(-3.0)));
        assert!(Radius::new(f64::INFINITY).is_err());
    }

    #[test]
    fn eccentricity_is_an_open_interval() {
        assert!(Eccentricity::new(0.0).is_err());
        assert!(Eccentricity::new(1.0).is_err());
        assert!(Eccentricity::new(f64::NAN).is_err());
        assert_eq!(Eccentricity::new(0.5).unwrap().value(), 0.5);
    }

    #[test]
    fn real_time_must_be_positive() {
        assert!(RealTime::new(Duration::zero()).is_err());
        assert!(RealTime::new(Duration::seconds(-5)).is_err());
        assert!(RealTime::from_seconds(0.0).is_err());

        let day = RealTime::from_seconds(86_164.090_053).unwrap();
        assert_eq!(day.duration(), Duration::nanoseconds(86_164_090_053_000));
        assert!((day.seconds() - Seconds::new(86_164.090_053)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn try_from_goes_through_validation() {
        assert!(Mass::try_from(2.0).is_ok());
        assert!(Radius::try_from(-2.0).is_err());
        assert!(Eccentricity::try_from(0.1).is_ok());
        assert!(RealTime::try_from(Duration::minutes(30)).is_ok());
    }

    #[test]
    fn seconds_roundtrip_through_duration() {
        let d = Duration::hours(30) + Duration::nanoseconds(250);
        let back = duration_from_seconds(seconds_of(d)).unwrap();
        assert!((back - d).num_nanoseconds().unwrap().abs() < 100);
    }

    #[test]
    fn duration_from_seconds_rejects_non_finite() {
        assert_eq!(
            duration_from_seconds(Seconds::new(f64::INFINITY)),
            Err(AstroError::OutOfRange)
        );
        assert_eq!(
            duration_from_seconds(Seconds::new(1e300)),
            Err(AstroError::OutOfRange)
        );
    }

    #[test]
    fn display_carries_units() {
        assert_eq!(Radius::new(3.0).unwrap().to_string(), "3m");
        assert_eq!(RealTime::from_seconds(1.5).unwrap().to_string(), "1.5s");
    }
}
