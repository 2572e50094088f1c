// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical calculations for an observer on a planet.
//!
//! Given a star–planet(–moon) hierarchy and a place on the planet, this crate
//! computes sunrise and sunset, equatorial and horizontal coordinates of the
//! star, seasonal wake-up alarms, and NAC time (a clock in which daylight and
//! darkness each last 12 hours).
//!
//! # Layers
//!
//! | Module | Role |
//! |--------|------|
//! | [`physics`] | Pure formulas: Kepler's laws, gravitation, hour angle, altitude, azimuth |
//! | [`body`] | [`Star`], [`Planet`], [`Moon`] and the [`Orbiting`] / [`Spinning`] roles |
//! | [`mechanics`] | A body's attributes fed into the physics formulas |
//! | [`location`] | [`PlanetaryLocation`] and its coordinate entry points |
//! | [`sun_times`] | Minute-stepped sunrise/sunset search |
//! | [`alarms`], [`nac`] | Derived human conveniences |
//! | [`presets`], [`config`] | Built-in bodies and the user configuration file |
//!
//! # Example
//!
//! ```
//! use astronomical::presets;
//! use chrono::{TimeZone, Utc};
//!
//! let london = presets::london_on_earth().unwrap();
//! let midsummer = Utc.with_ymd_and_hms(2021, 6, 21, 12, 0, 0).unwrap();
//! let sun = london.sun_times(midsummer).unwrap();
//!
//! assert!(sun.daylight().num_hours() >= 16);
//! ```
//!
//! # Conventions
//!
//! - Angles are [`qtty::Degrees`]; longitudes are east-positive.
//! - Instants are `chrono::DateTime<Utc>`, spans `chrono::Duration`.
//! - Failures are [`AstroError`] values; nothing silently returns zero.
//! - Diagnostics go through the `log` facade; no logger is installed.

pub mod alarms;
pub mod body;
pub mod config;
pub mod error;
pub mod location;
pub mod mechanics;
pub mod nac;
mod period;
pub mod physics;
pub mod presets;
pub mod sun_times;
pub mod units;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use alarms::{Alarms, SleepRequirements};
pub use body::{Body, Moon, Orbit, OrbitalElements, Orbiting, Planet, Rotation, Spinning, Star};
pub use config::{ConfigError, Settings, UserConfig};
pub use error::{AstroError, Result};
pub use location::{
    EquatorialCoordinates, HorizontalCoordinates, Location, PlanetaryLocation, SolarState,
};
pub use nac::NacTime;
pub use period::{align_to_period, SolarDay, SunTimes};
pub use units::{Eccentricity, Mass, Radius, RealTime};
