// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! User configuration.
//!
//! The optional file `$HOME/.astronomical.json` is a JSON document with up to four
//! sections, each of which may be left out:
//!
//! ```json
//! {
//!   "location": { "name": "Ivybridge", "longitude": -3.94, "latitude": 50.39 },
//!   "star":     { "name": "The Sun", "mass": 1.9885e30, "radius": 696340000 },
//!   "planet":   {
//!     "name": "Earth", "mass": 5.9722e24, "radius": 6371000,
//!     "semimajor_axis": 149.598e9, "eccentricity": 0.014710219,
//!     "orbital_obliquity": 23.44, "sidereal_day": 86164.090053,
//!     "ref_march_equinox": "2021-03-20 09:37:00",
//!     "ref_midnight": "1970-01-01 00:00:00"
//!   },
//!   "sleep": {
//!     "sleep": 25800, "earliest_wake_up": "06:00:00",
//!     "latest_wake_up": "07:00:00", "ablutions": 3600
//!   }
//! }
//! ```
//!
//! Masses are kilograms, lengths metres, angles degrees and spans seconds.
//! Datetimes are UTC. [`Settings::resolve`] fills every gap from
//! [`presets`](crate::presets).

use crate::alarms::SleepRequirements;
use crate::body::{Body, OrbitalElements, Planet, Star};
use crate::error::AstroError;
use crate::location::{Location, PlanetaryLocation};
use crate::presets;
use crate::units::{duration_from_seconds, Eccentricity, Mass, Radius, RealTime};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use log::{debug, info};
use qtty::{Degrees, Seconds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".astronomical.json";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unparsable date or time {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid configuration value: {0}")]
    Astro(#[from] AstroError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSection {
    pub name: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSection {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSection {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub semimajor_axis: f64,
    pub eccentricity: f64,
    pub orbital_obliquity: f64,
    /// Seconds.
    pub sidereal_day: f64,
    pub ref_march_equinox: String,
    pub ref_midnight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSection {
    /// Seconds.
    pub sleep: f64,
    pub earliest_wake_up: String,
    pub latest_wake_up: String,
    /// Seconds.
    pub ablutions: f64,
}

/// The configuration file as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub location: Option<LocationSection>,
    pub star: Option<StarSection>,
    pub planet: Option<PlanetSection>,
    pub sleep: Option<SleepSection>,
}

impl UserConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `$HOME/.astronomical.json`, or `None` when `HOME` is unset.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
    }

    /// Read the file at `path`; `Ok(None)` when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no configuration at {}", path.display());
            return Ok(None);
        }
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!("loaded configuration from {}", path.display());
        Ok(Some(config))
    }
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, ConfigError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ConfigError::Parse {
            value: value.to_owned(),
            source,
        })
}

fn parse_time(value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|source| ConfigError::Parse {
        value: value.to_owned(),
        source,
    })
}

impl StarSection {
    fn build(&self) -> Result<Star, ConfigError> {
        Ok(Star::new(Body::new(
            self.name.as_str(),
            Mass::new(self.mass)?,
            Radius::new(self.radius)?,
        )))
    }
}

impl PlanetSection {
    fn build(&self, star: &Star) -> Result<Planet, ConfigError> {
        Ok(Planet::new(
            Body::new(self.name.as_str(), Mass::new(self.mass)?, Radius::new(self.radius)?),
            OrbitalElements {
                semimajor_axis: Radius::new(self.semimajor_axis)?,
                eccentricity: Eccentricity::new(self.eccentricity)?,
                orbital_obliquity: Degrees::new(self.orbital_obliquity),
            },
            RealTime::from_seconds(self.sidereal_day)?,
            star,
            parse_datetime(&self.ref_march_equinox)?,
            parse_datetime(&self.ref_midnight)?,
        ))
    }
}

impl SleepSection {
    fn build(&self) -> Result<SleepRequirements, ConfigError> {
        Ok(SleepRequirements::new(
            RealTime::from_seconds(self.sleep)?,
            parse_time(&self.earliest_wake_up)?,
            parse_time(&self.latest_wake_up)?,
            duration_from_seconds(Seconds::new(self.ablutions))?,
        )?)
    }
}

impl LocationSection {
    fn build(&self) -> Result<Location, ConfigError> {
        Ok(Location::new(
            self.name.as_deref().unwrap_or(presets::LONDON_NAME),
            self.longitude.unwrap_or(presets::LONDON_LONGITUDE),
            self.latitude.unwrap_or(presets::LONDON_LATITUDE),
        )?)
    }
}

/// Everything the calculations need, after merging user values with presets.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub location: PlanetaryLocation,
    pub sleep: SleepRequirements,
}

impl Settings {
    /// London on the Earth with default sleep requirements.
    pub fn presets() -> Result<Self, ConfigError> {
        Self::resolve(None)
    }

    /// Merge `user` over the presets, section by section.
    pub fn resolve(user: Option<UserConfig>) -> Result<Self, ConfigError> {
        let user = user.unwrap_or_default();

        let star = match &user.star {
            Some(section) => {
                debug!("star from configuration: {}", section.name);
                section.build()?
            }
            None => presets::sun()?,
        };
        let planet = match &user.planet {
            Some(section) => {
                debug!("planet from configuration: {}", section.name);
                section.build(&star)?
            }
            None => presets::earth(&star)?,
        };
        let location = user.location.unwrap_or_default().build()?;
        let sleep = match &user.sleep {
            Some(section) => section.build()?,
            None => SleepRequirements::default(),
        };
        debug!("resolved {location} on {}", planet.name());

        Ok(Self {
            location: PlanetaryLocation::new(location, planet),
            sleep,
        })
    }

    /// Load `$HOME/.astronomical.json` if present and resolve it.
    pub fn load_default() -> Result<Self, ConfigError> {
        let user = match UserConfig::default_path() {
            Some(path) => UserConfig::load(path)?,
            None => None,
        };
        Self::resolve(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Orbiting, Spinning};
    use chrono::{Duration, TimeZone};

    const FULL: &str = r#"{
        "location": { "name": "Ivybridge", "longitude": -3.941355, "latitude": 50.392189 },
        "star": { "name": "Sol", "mass": 2.0e30, "radius": 7.0e8 },
        "planet": {
            "name": "Terra", "mass": 6.0e24, "radius": 6.4e6,
            "semimajor_axis": 1.5e11, "eccentricity": 0.0167,
            "orbital_obliquity": 23.5, "sidereal_day": 86164.0,
            "ref_march_equinox": "2022-03-20 15:33:00",
            "ref_midnight": "2000-01-01 00:00:00"
        },
        "sleep": {
            "sleep": 28800, "earliest_wake_up": "05:30:00",
            "latest_wake_up": "06:45:00", "ablutions": 1800
        }
    }"#;

    #[test]
    fn empty_document_resolves_to_presets() {
        let settings = Settings::resolve(Some(UserConfig::from_json_str("{}").unwrap())).unwrap();
        assert_eq!(settings, Settings::presets().unwrap());
        assert_eq!(settings.location.name(), "London");
        assert_eq!(settings.location.planet().name(), "Earth");
        assert_eq!(settings.sleep, SleepRequirements::default());
    }

    #[test]
    fn full_document_overrides_everything() {
        let settings = Settings::resolve(Some(UserConfig::from_json_str(FULL).unwrap())).unwrap();
        let planet = settings.location.planet();

        assert_eq!(settings.location.name(), "Ivybridge");
        assert_eq!(settings.location.longitude().value(), -3.941355);
        assert_eq!(planet.name(), "Terra");
        assert_eq!(planet.orbit().parent.name(), "Sol");
        assert_eq!(planet.rotation().sidereal_day.seconds().value(), 86_164.0);
        assert_eq!(
            planet.ref_march_equinox(),
            Utc.with_ymd_and_hms(2022, 3, 20, 15, 33, 0).unwrap()
        );
        assert_eq!(settings.sleep.sleep().duration(), Duration::hours(8));
        assert_eq!(
            settings.sleep.earliest_wake_up(),
            NaiveTime::from_hms_opt(5, 30, 0).unwrap()
        );
        assert_eq!(settings.sleep.ablutions(), Duration::minutes(30));
    }

    #[test]
    fn partial_location_falls_back_per_field() {
        let user = UserConfig::from_json_str(r#"{ "location": { "latitude": 10.0 } }"#).unwrap();
        let settings = Settings::resolve(Some(user)).unwrap();
        assert_eq!(settings.location.name(), "London");
        assert_eq!(settings.location.longitude().value(), presets::LONDON_LONGITUDE);
        assert_eq!(settings.location.latitude().value(), 10.0);
    }

    #[test]
    fn planet_without_star_orbits_the_sun() {
        let mut user = UserConfig::from_json_str(FULL).unwrap();
        user.star = None;
        let settings = Settings::resolve(Some(user)).unwrap();
        assert_eq!(settings.location.planet().orbit().parent.name(), "The Sun");
    }

    #[test]
    fn star_without_planet_hosts_the_earth() {
        let mut user = UserConfig::from_json_str(FULL).unwrap();
        user.planet = None;
        let settings = Settings::resolve(Some(user)).unwrap();
        let planet = settings.location.planet();
        assert_eq!(planet.name(), "Earth");
        assert_eq!(planet.orbit().parent.name(), "Sol");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            UserConfig::from_json_str("{ location: "),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn bad_datetime_is_an_error() {
        let mut user = UserConfig::from_json_str(FULL).unwrap();
        if let Some(planet) = user.planet.as_mut() {
            planet.ref_midnight = "1 Jan 2000".into();
        }
        assert!(matches!(
            Settings::resolve(Some(user)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_quantities_are_errors() {
        let mut user = UserConfig::from_json_str(FULL).unwrap();
        if let Some(planet) = user.planet.as_mut() {
            planet.eccentricity = 1.5;
        }
        assert!(matches!(
            Settings::resolve(Some(user)),
            Err(ConfigError::Astro(AstroError::InvalidEccentricity(_)))
        ));

        let user = UserConfig::from_json_str(r#"{ "location": { "latitude": 95.0 } }"#).unwrap();
        assert!(matches!(
            Settings::resolve(Some(user)),
            Err(ConfigError::Astro(AstroError::InvalidLatitude(_)))
        ));

        let mut user = UserConfig::from_json_str(FULL).unwrap();
        if let Some(sleep) = user.sleep.as_mut() {
            sleep.earliest_wake_up = "08:00:00".into();
        }
        assert!(matches!(
            Settings::resolve(Some(user)),
            Err(ConfigError::Astro(AstroError::InvalidSleepRequirements(_)))
        ));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("astronomical-config-that-does-not-exist.json");
        assert!(UserConfig::load(path).unwrap().is_none());
    }

    #[test]
    fn default_path_is_in_home() {
        if let Some(path) = UserConfig::default_path() {
            assert!(path.ends_with(".astronomical.json"));
        }
    }
}
