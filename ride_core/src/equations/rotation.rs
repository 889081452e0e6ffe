//! # Rotation Formulas
//!
//! Wheel kinematics used to derive the angular velocity handed to the wind
//! calculator and the simplified drive power estimate.

use crate::units::{Kilowatts, RadiansPerSecond, Rpm, Watts};

/// Mass assumed per passenger for the drive estimate (kg)
pub const PASSENGER_MASS_KG: f64 = 80.0;

/// Angular velocity from rotational speed
///
/// # Formula
/// - ω = n · 2π / 60
#[inline]
pub fn angular_velocity_from_rpm(rpm: f64) -> f64 {
    RadiansPerSecond::from(Rpm(rpm)).0
}

/// Moment of inertia of the passenger mass lumped on the rim
///
/// # Formula
/// - I = m · (D / 2)²
#[inline]
pub fn rim_moment_of_inertia(mass_kg: f64, diameter_m: f64) -> f64 {
    mass_kg * (diameter_m / 2.0).powi(2)
}

/// Simplified drive power estimate in kW
///
/// # Formula
/// - P = I · ω² / 1000
///
/// This is the rotational energy scale `I·ω²`, not a torque-based sizing.
#[inline]
pub fn drive_power_kw(moment_of_inertia: f64, omega: f64) -> f64 {
    Kilowatts::from(Watts(moment_of_inertia * omega.powi(2))).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sixty_rpm_is_two_pi() {
        assert!((angular_velocity_from_rpm(60.0) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_rim_inertia() {
        // 5760 kg on a 60 m wheel: 5760 * 900
        assert!((rim_moment_of_inertia(5760.0, 60.0) - 5_184_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_drive_power() {
        assert!((drive_power_kw(1000.0, 2.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_drive_power_keeps_evaluation_order() {
        let (inertia, omega) = (5_184_000.0, angular_velocity_from_rpm(2.0));
        assert_eq!(drive_power_kw(inertia, omega), inertia * omega.powi(2) / 1000.0);
    }
}
