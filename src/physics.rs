// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Physics primitives.
//!
//! Pure functions with no knowledge of bodies or locations. Angles are
//! [`Degrees`] at every interface and converted to radians internally;
//! spans of time are `chrono::Duration`.
//!
//! Every vanishing denominator is reported as
//! [`AstroError::DivisionByZero`] rather than a silent zero or infinity.

use crate::error::{AstroError, Result};
use crate::units::{duration_from_seconds, seconds_of, G};
use chrono::Duration;
use qtty::{Degrees, Radian, Seconds};
use std::f64::consts::{PI, TAU};

#[inline]
fn sin_deg(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().sin()
}

#[inline]
fn cos_deg(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().cos()
}

// ── Conversions ───────────────────────────────────────────────────────────

/// Angular velocity, in degrees per second, of something turning once per `period`.
pub fn angular_velocity(period: Duration) -> Result<f64> {
    let seconds = seconds_of(period).value();
    if seconds == 0.0 {
        return Err(AstroError::DivisionByZero("angular velocity"));
    }
    Ok(360.0 / seconds)
}

/// `amplitude · sin(2π · fractional_revolution)`.
#[inline]
pub fn a_sin_theta(amplitude: f64, fractional_revolution: f64) -> f64 {
    amplitude * (fractional_revolution * TAU).sin()
}

// ── Laws ──────────────────────────────────────────────────────────────────

/// Newton's law of universal gravitation, in newtons.
///
/// * `major_mass`, `minor_mass` — kilograms
/// * `separation` — metres
pub fn gravitational_force(major_mass: f64, minor_mass: f64, separation: f64) -> Result<f64> {
    if separation == 0.0 {
        return Err(AstroError::DivisionByZero("gravitational force"));
    }
    Ok(G * major_mass * minor_mass / separation.powi(2))
}

/// Kepler's law of periods: `T² = 4π²a³ / (G(M + m))`.
pub fn law_of_periods(major_mass: f64, minor_mass: f64, semimajor_axis: f64) -> Result<Duration> {
    let total_mass = major_mass + minor_mass;
    if total_mass == 0.0 {
        return Err(AstroError::DivisionByZero("orbital period"));
    }
    let period_squared = (4.0 * PI.powi(2) / (G * total_mass)) * semimajor_axis.powi(3);
    if period_squared < 0.0 {
        return Err(AstroError::NegativePeriodSquared(period_squared));
    }
    duration_from_seconds(Seconds::new(period_squared.sqrt()))
}

/// Farthest distance from the major body: `a(1 + e)`.
#[inline]
pub fn law_of_orbits_aphelion(semimajor_axis: f64, eccentricity: f64) -> f64 {
    semimajor_axis * (1.0 + eccentricity)
}

/// Closest distance to the major body: `a(1 − e)`.
#[inline]
pub fn law_of_orbits_perihelion(semimajor_axis: f64, eccentricity: f64) -> f64 {
    semimajor_axis * (1.0 - eccentricity)
}

/// Kepler's law of orbits as an `(aphelion, perihelion)` pair.
pub fn law_of_orbits(semimajor_axis: f64, eccentricity: f64) -> (f64, f64) {
    (
        law_of_orbits_aphelion(semimajor_axis, eccentricity),
        law_of_orbits_perihelion(semimajor_axis, eccentricity),
    )
}

/// Length of the solar day seen from a body that orbits and spins:
/// `year · day / (year − day)`.
pub fn synodic_day(sidereal_year: Duration, sidereal_day: Duration) -> Result<Duration> {
    let year = seconds_of(sidereal_year).value();
    let day = seconds_of(sidereal_day).value();
    if year == day {
        return Err(AstroError::DivisionByZero("synodic day"));
    }
    duration_from_seconds(Seconds::new(year * day / (year - day)))
}

// ── Equatorial coordinates ────────────────────────────────────────────────

/// Right ascension as a span of time: the elapsed time since the vernal
/// equinox folded into one synodic day (24 h of it map onto 360°).
///
/// The fold is a floored modulo, so the result lies in `[0, synodic_day)`
/// even for instants before the equinox.
pub fn right_ascension(time_since_vernal_equinox: Duration, synodic_day: Duration) -> Result<Duration> {
    match (
        time_since_vernal_equinox.num_nanoseconds(),
        synodic_day.num_nanoseconds(),
    ) {
        (_, Some(0)) => Err(AstroError::DivisionByZero("right ascension")),
        (Some(elapsed), Some(day)) => Ok(Duration::nanoseconds(elapsed.rem_euclid(day))),
        _ => {
            let day = seconds_of(synodic_day).value();
            if day == 0.0 {
                return Err(AstroError::DivisionByZero("right ascension"));
            }
            let elapsed = seconds_of(time_since_vernal_equinox).value();
            duration_from_seconds(Seconds::new(elapsed.rem_euclid(day)))
        }
    }
}

/// Declination of the parent body: `obliquity · sin(2π · elapsed / period)`.
pub fn declination(
    orbital_obliquity: Degrees,
    sidereal_period: Duration,
    time_since_march_equinox: Duration,
) -> Result<Degrees> {
    let period = seconds_of(sidereal_period).value();
    if period == 0.0 {
        return Err(AstroError::DivisionByZero("declination"));
    }
    let fraction_of_orbit = seconds_of(time_since_march_equinox).value() / period;
    Ok(Degrees::new(a_sin_theta(
        orbital_obliquity.value(),
        fraction_of_orbit,
    )))
}

/// Right ascension (as a span of time) and declination in one call.
pub fn equatorial_coordinates(
    time_since_vernal_equinox: Duration,
    synodic_day: Duration,
    orbital_obliquity: Degrees,
    sidereal_period: Duration,
    time_since_march_equinox: Duration,
) -> Result<(Duration, Degrees)> {
    Ok((
        right_ascension(time_since_vernal_equinox, synodic_day)?,
        declination(orbital_obliquity, sidereal_period, time_since_march_equinox)?,
    ))
}

// ── Horizontal coordinates ────────────────────────────────────────────────

/// Hour angle of the local meridian: `(elapsed / synodic_day) · 360 − 180`.
///
/// Zero at solar noon, −180° at the midnight the day is measured from.
pub fn solar_hour_angle(synodic_day: Duration, time_since_midnight: Duration) -> Result<Degrees> {
    let day = seconds_of(synodic_day).value();
    if day == 0.0 {
        return Err(AstroError::DivisionByZero("solar hour angle"));
    }
    let elapsed = seconds_of(time_since_midnight).value();
    Ok(Degrees::new(elapsed / day * 360.0 - 180.0))
}

/// Altitude above the horizon.
///
/// `sin(alt) = sin(lat)·sin(dec) + cos(lat)·cos(dec)·cos(ha)`
pub fn altitude(latitude: Degrees, declination: Degrees, hour_angle: Degrees) -> Degrees {
    let sin_alt = sin_deg(latitude) * sin_deg(declination)
        + cos_deg(latitude) * cos_deg(declination) * cos_deg(hour_angle);
    Degrees::new(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
}

/// Azimuth measured from north through east.
///
/// `cos(az) = (cos(lat)·sin(dec) − sin(lat)·cos(dec)·cos(ha)) / cos(alt)`,
/// clamped to `[−1, 1]`. The arccosine only covers half the circle, so a
/// negative hour angle (morning) keeps it and a non-negative one mirrors it
/// to `360° − acos`.
pub fn azimuth(
    latitude: Degrees,
    declination: Degrees,
    hour_angle: Degrees,
    altitude: Degrees,
) -> Result<Degrees> {
    let cos_alt = cos_deg(altitude);
    if cos_alt.abs() < f64::EPSILON {
        return Err(AstroError::DivisionByZero("azimuth"));
    }
    let cos_az = (cos_deg(latitude) * sin_deg(declination)
        - sin_deg(latitude) * cos_deg(declination) * cos_deg(hour_angle))
        / cos_alt;
    let acos = cos_az.clamp(-1.0, 1.0).acos().to_degrees();
    if hour_angle.value() < 0.0 {
        Ok(Degrees::new(acos))
    } else {
        Ok(Degrees::new(360.0 - acos))
    }
}

/// `(azimuth, altitude)` for the given observer latitude, declination and hour angle.
pub fn elevation(
    latitude: Degrees,
    declination: Degrees,
    hour_angle: Degrees,
) -> Result<(Degrees, Degrees)> {
    let alt = altitude(latitude, declination, hour_angle);
    let az = azimuth(latitude, declination, hour_angle, alt)?;
    Ok((az, alt))
}
