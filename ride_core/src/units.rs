//! # Unit Types
//!
//! Type-safe wrappers for the SI units the formulas convert between. They
//! are plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Units
//!
//! - Speed: meters per second (m/s), kilometers per hour (km/h)
//! - Rotation: revolutions per minute (rpm), radians per second (rad/s)
//! - Pressure on an area: pascals (Pa) times square meters (m²)
//! - Force: newtons (N), kilonewtons (kN)
//! - Power: watts (W), kilowatts (kW)
//!
//! Conversions go through `From`, so `vb0 = MetersPerSecond::from(KilometersPerHour(100.0))`
//! is exactly `100.0 / 3.6`.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::units::{Kilonewtons, Pascals, SquareMeters};
//!
//! let force = Kilonewtons::from(Pascals(500.0) * SquareMeters(2.0));
//! assert_eq!(force, Kilonewtons(1.0));
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::Mul;

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

/// Speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilometersPerHour(pub f64);

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(kmh: KilometersPerHour) -> Self {
        MetersPerSecond(kmh.0 / 3.6)
    }
}

// ============================================================================
// Rotation Units
// ============================================================================

/// Rotational speed in revolutions per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f64);

/// Angular velocity in radians per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiansPerSecond(pub f64);

impl From<Rpm> for RadiansPerSecond {
    fn from(rpm: Rpm) -> Self {
        // Evaluated left to right as rpm * 2 * pi / 60
        RadiansPerSecond(rpm.0 * 2.0 * PI / 60.0)
    }
}

// ============================================================================
// Pressure, Area and Force
// ============================================================================

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Scaling a pressure by a dimensionless coefficient (c_f, c_s·c_d, ...)
impl Mul<f64> for Pascals {
    type Output = Pascals;
    fn mul(self, rhs: f64) -> Pascals {
        Pascals(self.0 * rhs)
    }
}

/// Pressure acting on an area gives a force: Pa · m² = N
impl Mul<SquareMeters> for Pascals {
    type Output = Newtons;
    fn mul(self, rhs: SquareMeters) -> Newtons {
        Newtons(self.0 * rhs.0)
    }
}

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1e3)
    }
}

// ============================================================================
// Power
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}
