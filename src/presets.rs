// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Built-in bodies and places.
//!
//! Every preset is a fresh value; nothing here is global state.

use crate::body::{Body, Moon, OrbitalElements, Planet, Star};
use crate::error::{AstroError, Result};
use crate::location::{Location, PlanetaryLocation};
use crate::units::{Eccentricity, Mass, Radius, RealTime};
use chrono::{DateTime, Duration, TimeZone, Utc};
use qtty::Degrees;

pub const LONDON_NAME: &str = "London";
/// Degrees east; London lies just west of Greenwich.
pub const LONDON_LONGITUDE: f64 = -0.1276;
pub const LONDON_LATITUDE: f64 = 51.5072;

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or(AstroError::OutOfRange)
}

/// The Sun.
pub fn sun() -> Result<Star> {
    Ok(Star::new(Body::new(
        "The Sun",
        Mass::new(1.9885e30)?,
        Radius::new(696_340_000.0)?,
    )))
}

/// The Earth, orbiting `star`.
///
/// Sidereal day 23 h 56 min 4.090053 s; reference March equinox
/// 2021-03-20 09:37 UTC; reference midnight at the Unix epoch.
pub fn earth(star: &Star) -> Result<Planet> {
    let sidereal_day = Duration::hours(23)
        + Duration::minutes(56)
        + Duration::seconds(4)
        + Duration::microseconds(90_053);
    Ok(Planet::new(
        Body::new("Earth", Mass::new(5.9722e24)?, Radius::new(6_371_000.0)?),
        OrbitalElements {
            semimajor_axis: Radius::new(149.598e9)?,
            eccentricity: Eccentricity::new(0.014_710_219)?,
            orbital_obliquity: Degrees::new(23.44),
        },
        RealTime::new(sidereal_day)?,
        star,
        utc(2021, 3, 20, 9, 37)?,
        utc(1970, 1, 1, 0, 0)?,
    ))
}

/// The Moon, orbiting `planet`. Tidally locked: one turn per sidereal month.
pub fn moon(planet: &Planet) -> Result<Moon> {
    Ok(Moon::new(
        Body::new("Moon", Mass::new(7.342e22)?, Radius::new(1_737_400.0)?),
        OrbitalElements {
            semimajor_axis: Radius::new(384_399e3)?,
            eccentricity: Eccentricity::new(0.0549)?,
            orbital_obliquity: Degrees::new(6.68),
        },
        RealTime::from_seconds(2_360_591.5)?,
        planet,
    ))
}

pub fn london_location() -> Result<Location> {
    Location::new(LONDON_NAME, LONDON_LONGITUDE, LONDON_LATITUDE)
}

/// London on `planet`.
pub fn london(planet: Planet) -> Result<PlanetaryLocation> {
    Ok(PlanetaryLocation::new(london_location()?, planet))
}

/// London on the Earth, orbiting the Sun.
pub fn london_on_earth() -> Result<PlanetaryLocation> {
    london(earth(&sun()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Orbiting, Spinning};
    use crate::mechanics;
    use approx::assert_relative_eq;

    #[test]
    fn earth_orbits_the_sun() {
        let sun = sun().unwrap();
        let earth = earth(&sun).unwrap();
        assert_eq!(earth.orbit().parent.name(), "The Sun");
        assert_relative_eq!(
            earth.rotation().sidereal_day.seconds().value(),
            86_164.090_053,
            epsilon = 1e-6
        );
        assert_eq!(earth.ref_midnight().timestamp(), 0);
    }

    #[test]
    fn earth_year_and_day() {
        let earth = earth(&sun().unwrap()).unwrap();
        let year = mechanics::orbital_period(&earth).unwrap();
        assert_eq!(year.num_days(), 365);
        let day = crate::units::seconds_of(mechanics::synodic_day(&earth).unwrap());
        assert!((day.value() - 86_400.0).abs() < 1.0);
    }

    #[test]
    fn moon_orbits_the_earth() {
        let earth = earth(&sun().unwrap()).unwrap();
        let moon = moon(&earth).unwrap();
        assert_eq!(moon.orbit().parent.name(), "Earth");
    }

    #[test]
    fn london_coordinates() {
        let london = london_on_earth().unwrap();
        assert_eq!(london.name(), "London");
        assert_eq!(london.longitude().value(), -0.1276);
        assert_eq!(london.latitude().value(), 51.5072);
        assert_eq!(london.planet().name(), "Earth");
    }
}
