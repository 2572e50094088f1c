// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mechanics services: a body's own attributes fed into the
//! [`physics`](crate::physics) primitives.
//!
//! The functions are generic over the [`Orbiting`] / [`Spinning`] roles so
//! they serve planets and moons alike. Failures are passed through unchanged.

use crate::body::{Orbiting, Spinning};
use crate::error::Result;
use crate::physics;
use chrono::Duration;
use log::debug;

/// Axial angular velocity, in degrees per second.
pub fn axial_velocity<B: Spinning + ?Sized>(body: &B) -> Result<f64> {
    let velocity = physics::angular_velocity(body.rotation().sidereal_day.duration())?;
    debug!("axial velocity = {velocity} deg/s");
    Ok(velocity)
}

/// Gravitational pull between a body and its parent, in newtons.
pub fn gravitational_force<B: Orbiting + ?Sized>(body: &B) -> Result<f64> {
    let orbit = body.orbit();
    let force = physics::gravitational_force(
        body.body().mass().kilograms(),
        orbit.parent.mass().kilograms(),
        orbit.semimajor_axis.meters(),
    )?;
    debug!("gravitational force on {} = {force} N", body.body().name());
    Ok(force)
}

/// Sidereal orbital period from Kepler's law of periods.
pub fn orbital_period<B: Orbiting + ?Sized>(body: &B) -> Result<Duration> {
    let orbit = body.orbit();
    let period = physics::law_of_periods(
        body.body().mass().kilograms(),
        orbit.parent.mass().kilograms(),
        orbit.semimajor_axis.meters(),
    )?;
    debug!("orbital period of {} = {period}", body.body().name());
    Ok(period)
}

/// `(aphelion, perihelion)` distances in metres.
pub fn apsides<B: Orbiting + ?Sized>(body: &B) -> (f64, f64) {
    let orbit = body.orbit();
    physics::law_of_orbits(orbit.semimajor_axis.meters(), orbit.eccentricity.value())
}

/// Solar day length from the orbital period and the sidereal day.
pub fn synodic_day<B: Orbiting + Spinning + ?Sized>(body: &B) -> Result<Duration> {
    let year = orbital_period(body)?;
    let day = physics::synodic_day(year, body.rotation().sidereal_day.duration())?;
    debug!("synodic day of {} = {day}", body.body().name());
    Ok(day)
}
