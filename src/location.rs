// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer locations.
//!
//! [`PlanetaryLocation`] binds a geographic [`Location`] to a [`Planet`] and
//! is the entry point for everything that depends on where and when the
//! observer stands:
//!
//! - [`sun_times`](PlanetaryLocation::sun_times) — sunrise and sunset
//! - [`equatorial_coordinates`](PlanetaryLocation::equatorial_coordinates) — right ascension, declination
//! - [`elevation`](PlanetaryLocation::elevation) — azimuth, altitude
//! - [`nac_time`](PlanetaryLocation::nac_time) — the alternate clock
//! - [`snapshot`](PlanetaryLocation::snapshot) — all of the above at once
//!
//! Nothing is cached: every call recomputes from the planet's parameters, so
//! identical inputs always produce identical outputs.
//!
//! Longitudes are east-positive. Days are counted from the observer's own
//! mean midnight: the planet's reference midnight shifted by
//! `−longitude / 360°` of a synodic day. The hour angle is then measured from
//! that local midnight.

use crate::body::{Orbiting, Planet};
use crate::error::{AstroError, Result};
use crate::mechanics;
use crate::nac::{self, NacTime};
use crate::period::{SolarDay, SunTimes};
use crate::physics;
use crate::sun_times;
use crate::units::{duration_from_seconds, seconds_of};
use chrono::{DateTime, Duration, Utc};
use qtty::{Degrees, Seconds};
use std::fmt;

/// A named point on a body's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    longitude: Degrees,
    latitude: Degrees,
}

impl Location {
    /// * `longitude` — degrees, east-positive
    /// * `latitude` — degrees within `[−90, 90]`
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Result<Self> {
        if !longitude.is_finite() {
            return Err(AstroError::InvalidLongitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AstroError::InvalidLatitude(latitude));
        }
        Ok(Self {
            name: name.into(),
            longitude: Degrees::new(longitude),
            latitude: Degrees::new(latitude),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location \"{}\": ({}, {})",
            self.name,
            self.longitude.value(),
            self.latitude.value()
        )
    }
}

/// Right ascension and declination, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

/// Azimuth (from north through east) and altitude, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    pub azimuth: Degrees,
    pub altitude: Degrees,
}

/// Wrap an angle into `[−180°, 180°)`.
fn wrap_signed(angle: Degrees) -> Degrees {
    Degrees::new((angle.value() + 180.0).rem_euclid(360.0) - 180.0)
}

/// A [`Location`] on a specific [`Planet`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetaryLocation {
    location: Location,
    planet: Planet,
}

impl PlanetaryLocation {
    pub fn new(location: Location, planet: Planet) -> Self {
        Self { location, planet }
    }

    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.location.name()
    }

    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.location.longitude
    }

    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.location.latitude
    }

    /// A midnight on the observer's meridian.
    ///
    /// The planet's reference midnight moved west by the observer's longitude,
    /// so every local day starts a whole number of synodic days away from it.
    pub fn local_midnight(&self) -> Result<DateTime<Utc>> {
        let synodic_day = mechanics::synodic_day(&self.planet)?;
        self.local_midnight_for(synodic_day)
    }

    fn local_midnight_for(&self, synodic_day: Duration) -> Result<DateTime<Utc>> {
        let shift = duration_from_seconds(Seconds::new(
            -self.longitude().value() / 360.0 * seconds_of(synodic_day).value(),
        ))?;
        self.planet
            .ref_midnight()
            .checked_add_signed(shift)
            .ok_or(AstroError::OutOfRange)
    }

    /// The observer's local synodic day containing `instant`.
    pub fn solar_day(&self, instant: DateTime<Utc>) -> Result<SolarDay> {
        let synodic_day = mechanics::synodic_day(&self.planet)?;
        SolarDay::containing(self.local_midnight_for(synodic_day)?, synodic_day, instant)
    }

    /// Sunrise and sunset for the local synodic day containing `instant`.
    ///
    /// Fails with [`AstroError::NoRiseOrSet`] during polar day or night.
    pub fn sun_times(&self, instant: DateTime<Utc>) -> Result<SunTimes> {
        sun_times::search(self, instant)
    }

    /// Right ascension and declination of the star at `instant`.
    ///
    /// The right ascension comes out of the planet's day cycle as a span of
    /// time and is rescaled with 24 h ↦ 360°.
    pub fn equatorial_coordinates(&self, instant: DateTime<Utc>) -> Result<EquatorialCoordinates> {
        let since_equinox = instant - self.planet.ref_march_equinox();
        let (ra, declination) = physics::equatorial_coordinates(
            since_equinox,
            mechanics::synodic_day(&self.planet)?,
            self.planet.orbit().orbital_obliquity,
            mechanics::orbital_period(&self.planet)?,
            since_equinox,
        )?;
        let hours = seconds_of(ra).value() / 3_600.0;
        Ok(EquatorialCoordinates {
            right_ascension: Degrees::new(360.0 * hours / 24.0),
            declination,
        })
    }

    /// Azimuth and altitude of the star at `instant`.
    pub fn elevation(&self, instant: DateTime<Utc>) -> Result<HorizontalCoordinates> {
        let day = self.solar_day(instant)?;
        let declination = physics::declination(
            self.planet.orbit().orbital_obliquity,
            mechanics::orbital_period(&self.planet)?,
            instant - self.planet.ref_march_equinox(),
        )?;
        let hour_angle = wrap_signed(physics::solar_hour_angle(
            day.length(),
            day.since_midnight(instant),
        )?);
        let (azimuth, altitude) = physics::elevation(self.latitude(), declination, hour_angle)?;
        Ok(HorizontalCoordinates { azimuth, altitude })
    }

    /// NAC time at `instant`.
    pub fn nac_time(&self, instant: DateTime<Utc>) -> Result<NacTime> {
        let day = self.solar_day(instant)?;
        let sun = self.sun_times(instant)?;
        nac::nac_time(&day, &sun, instant)
    }

    /// Everything known about the star at `instant`.
    ///
    /// A polar day or night is not an error here: `sun_times` is `None`.
    pub fn snapshot(&self, instant: DateTime<Utc>) -> Result<SolarState> {
        let sun_times = match self.sun_times(instant) {
            Ok(times) => Some(times),
            Err(AstroError::NoRiseOrSet { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(SolarState {
            instant,
            sun_times,
            equatorial: self.equatorial_coordinates(instant)?,
            horizontal: self.elevation(instant)?,
        })
    }
}

impl fmt::Display for PlanetaryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.location, self.planet.name())
    }
}

/// The star as seen from a [`PlanetaryLocation`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarState {
    pub instant: DateTime<Utc>,
    /// `None` during polar day or night.
    pub sun_times: Option<SunTimes>,
    pub equatorial: EquatorialCoordinates,
    pub horizontal: HorizontalCoordinates,
}

impl fmt::Display for SolarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sun data:")?;
        match &self.sun_times {
            Some(times) => writeln!(f, "- Rise -> set:\t\t\t{times}")?,
            None => writeln!(f, "- Rise -> set:\t\t\tnone today")?,
        }
        writeln!(
            f,
            "- Right Ascension, Declination:\t({:.2}°, {:.2}°)",
            self.equatorial.right_ascension.value(),
            self.equatorial.declination.value()
        )?;
        write!(
            f,
            "- Azimuth, Altitude:\t\t({:.2}°, {:.2}°)",
            self.horizontal.azimuth.value(),
            self.horizontal.altitude.value()
        )
    }
}
