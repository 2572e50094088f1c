// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise/sunset search.
//!
//! The observer's local synodic day containing the query instant, from one
//! local midnight to the next, is walked minute by minute.
//! At every step the parent star's `|altitude|` is evaluated; while the body
//! approaches the horizon from either side that value shrinks, and the minute
//! where the shrinking stops marks a horizon crossing. A regular day has two
//! of them: sunrise first, then sunset.
//!
//! Near the poles the star may stay above (polar day) or below (polar night)
//! the horizon for the whole day. Fewer than two crossings are then reported
//! as [`AstroError::NoRiseOrSet`].
//!
//! Resolution is one minute; the crossing is reported at the first minute
//! after the minimum of `|altitude|`.

use crate::body::Orbiting;
use crate::error::{AstroError, Result};
use crate::location::PlanetaryLocation;
use crate::mechanics;
use crate::period::SunTimes;
use crate::physics;
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};

/// Detects the local minima of a sampled `|altitude|` curve.
#[derive(Debug, Default, Clone, Copy)]
struct HorizonTracker {
    current_min: f64,
    improving: bool,
}

impl HorizonTracker {
    /// Feed the next sample; `true` when the previous sample was a local minimum.
    fn observe(&mut self, abs_altitude: f64) -> bool {
        let was_improving = self.improving;
        self.improving = abs_altitude < self.current_min;
        if self.improving || !was_improving {
            self.current_min = abs_altitude;
        }
        was_improving && !self.improving
    }
}

/// Sunrise and sunset for the observer's local synodic day containing `instant`.
pub fn search(location: &PlanetaryLocation, instant: DateTime<Utc>) -> Result<SunTimes> {
    let planet = location.planet();
    let year = mechanics::orbital_period(planet)?;
    let day = location.solar_day(instant)?;
    let obliquity = planet.orbit().orbital_obliquity;
    debug!("searching sun times for {} over {day}", location.name());

    let mut tracker = HorizonTracker::default();
    let mut crossings: Vec<DateTime<Utc>> = Vec::with_capacity(2);

    for minute in 0..day.whole_minutes() {
        let offset = Duration::minutes(minute);
        let calc_time = day.start() + offset;

        let hour_angle = physics::solar_hour_angle(day.length(), offset)?;
        let declination =
            physics::declination(obliquity, year, calc_time - planet.ref_march_equinox())?;
        let abs_altitude = physics::altitude(location.latitude(), declination, hour_angle)
            .value()
            .abs();

        if tracker.observe(abs_altitude) {
            crossings.push(calc_time);
            if crossings.len() == 2 {
                break;
            }
        }
    }

    match crossings[..] {
        [sunrise, sunset] => {
            debug!("sunrise {sunrise}, sunset {sunset}");
            Ok(SunTimes::new(sunrise, sunset))
        }
        _ => {
            warn!(
                "no sunrise/sunset at {} over {day}: {} crossing(s)",
                location.name(),
                crossings.len()
            );
            Err(AstroError::NoRiseOrSet {
                crossings: crossings.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_reports_the_step_after_a_minimum() {
        let mut tracker = HorizonTracker::default();
        let samples = [5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 1.5, 2.5, 3.5];
        let hits: Vec<usize> = samples
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| tracker.observe(s).then_some(i))
            .collect();
        assert_eq!(hits, vec![6]);
    }

    #[test]
    fn tracker_finds_two_minima() {
        let mut tracker = HorizonTracker::default();
        let samples = [3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 0.1, 1.0];
        let hits = samples.iter().filter(|&&s| tracker.observe(s)).count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn tracker_ignores_a_monotonic_rise() {
        let mut tracker = HorizonTracker::default();
        assert!(!(0..10).any(|i| tracker.observe(i as f64)));
    }
}
