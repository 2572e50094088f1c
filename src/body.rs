// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Celestial bodies.
//!
//! A [`Body`] only carries what every body has (name, mass, radius). The
//! orbital and rotational roles are separate values, [`Orbit`] and
//! [`Rotation`], composed into the concrete kinds:
//!
//! | Kind | Body | Orbit | Rotation | Epochs |
//! |------|------|-------|----------|--------|
//! | [`Star`] | ✓ | | | |
//! | [`Planet`] | ✓ | parent = star | ✓ | March equinox, midnight |
//! | [`Moon`] | ✓ | parent = planet | ✓ | |
//!
//! An orbit stores a copy of its parent's [`Body`], which has no parent of
//! its own, so a Moon → Planet → Star chain cannot form a cycle.
//!
//! The [`Orbiting`] and [`Spinning`] traits expose the roles to the
//! [`mechanics`](crate::mechanics) functions, which work for planets and moons
//! alike.

use crate::units::{Eccentricity, Mass, Radius, RealTime};
use chrono::{DateTime, Utc};
use qtty::Degrees;
use std::fmt;

/// Attributes shared by every celestial body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: Mass,
    radius: Radius,
}

impl Body {
    pub fn new(name: impl Into<String>, mass: Mass, radius: Radius) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn mass(&self) -> Mass {
        self.mass
    }

    #[inline]
    pub const fn radius(&self) -> Radius {
        self.radius
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.mass, self.radius)
    }
}

/// Orbital role: how a body travels around its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    pub semimajor_axis: Radius,
    pub eccentricity: Eccentricity,
    /// Axial tilt relative to the orbital plane.
    pub orbital_obliquity: Degrees,
    pub parent: Body,
}

/// Rotational role: one full turn relative to the fixed stars.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub sidereal_day: RealTime,
}

/// A body in orbit around a parent.
pub trait Orbiting {
    fn body(&self) -> &Body;
    fn orbit(&self) -> &Orbit;
}

/// A body that turns about its own axis.
pub trait Spinning {
    fn rotation(&self) -> &Rotation;
}

// ═══════════════════════════════════════════════════════════════════════════
// Concrete kinds
// ═══════════════════════════════════════════════════════════════════════════

/// Root of a gravitational hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    body: Body,
}

impl Star {
    pub fn new(body: Body) -> Self {
        Self { body }
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// A spinning body orbiting a star.
///
/// Besides its physical parameters a planet carries two reference instants:
/// a known March (vernal) equinox, origin of the seasonal cycle, and a known
/// midnight, origin of the day cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    body: Body,
    orbit: Orbit,
    rotation: Rotation,
    ref_march_equinox: DateTime<Utc>,
    ref_midnight: DateTime<Utc>,
}

/// Orbital parameters of a [`Planet`] or [`Moon`], minus the parent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitalElements {
    pub semimajor_axis: Radius,
    pub eccentricity: Eccentricity,
    pub orbital_obliquity: Degrees,
}

impl OrbitalElements {
    fn around(self, parent: &Body) -> Orbit {
        Orbit {
            semimajor_axis: self.semimajor_axis,
            eccentricity: self.eccentricity,
            orbital_obliquity: self.orbital_obliquity,
            parent: parent.clone(),
        }
    }
}

impl Planet {
    pub fn new(
        body: Body,
        elements: OrbitalElements,
        sidereal_day: RealTime,
        star: &Star,
        ref_march_equinox: DateTime<Utc>,
        ref_midnight: DateTime<Utc>,
    ) -> Self {
        Self {
            orbit: elements.around(star.body()),
            body,
            rotation: Rotation { sidereal_day },
            ref_march_equinox,
            ref_midnight,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    #[inline]
    pub const fn ref_march_equinox(&self) -> DateTime<Utc> {
        self.ref_march_equinox
    }

    #[inline]
    pub const fn ref_midnight(&self) -> DateTime<Utc> {
        self.ref_midnight
    }
}

impl Orbiting for Planet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn orbit(&self) -> &Orbit {
        &self.orbit
    }
}

impl Spinning for Planet {
    fn rotation(&self) -> &Rotation {
        &self.rotation
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} orbiting {}", self.body, self.orbit.parent.name())
    }
}

/// A spinning body orbiting a planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    body: Body,
    orbit: Orbit,
    rotation: Rotation,
}

impl Moon {
    pub fn new(
        body: Body,
        elements: OrbitalElements,
        sidereal_day: RealTime,
        planet: &Planet,
    ) -> Self {
        Self {
            orbit: elements.around(Orbiting::body(planet)),
            body,
            rotation: Rotation { sidereal_day },
        }
    }
}

impl Orbiting for Moon {
    fn body(&self) -> &Body {
        &self.body
    }

    fn orbit(&self) -> &Orbit {
        &self.orbit
    }
}

impl Spinning for Moon {
    fn rotation(&self) -> &Rotation {
        &self.rotation
    }
}
