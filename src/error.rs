// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the calculation core.
//!
//! Every failure is classified, never formatted for a particular front end:
//!
//! - **domain validation** — a physical quantity outside its domain
//!   ([`AstroError::InvalidMass`], [`AstroError::InvalidEccentricity`], …);
//! - **numerical singularities** — a vanishing denominator
//!   ([`AstroError::DivisionByZero`], [`AstroError::NegativePeriodSquared`]);
//! - **search non-convergence** — no sunrise/sunset inside the searched
//!   synodic day ([`AstroError::NoRiseOrSet`]).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("mass must be positive and finite, got {0} kg")]
    InvalidMass(f64),

    #[error("radius must be non-negative and finite, got {0} m")]
    InvalidRadius(f64),

    #[error("elliptic eccentricity must lie strictly between 0 and 1, got {0}")]
    InvalidEccentricity(f64),

    #[error("duration must be positive, got {0} s")]
    InvalidDuration(f64),

    #[error("latitude must lie within [-90, 90] degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("longitude must be finite, got {0}")]
    InvalidLongitude(f64),

    #[error("invalid sleep requirements: {0}")]
    InvalidSleepRequirements(String),

    #[error("division by zero while computing {0}")]
    DivisionByZero(&'static str),

    #[error("squared orbital period is negative ({0} s²)")]
    NegativePeriodSquared(f64),

    #[error("no sunrise or sunset in this synodic day ({crossings} horizon crossing(s) found)")]
    NoRiseOrSet { crossings: usize },

    #[error("instant lies outside the synodic day it was evaluated against")]
    InstantOutsideDay,

    #[error("date arithmetic out of representable range")]
    OutOfRange,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, AstroError>;
