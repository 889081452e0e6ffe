//! # Drive Motor Estimate
//!
//! Order-of-magnitude drive power for a Ferris wheel, used on the design
//! summary. The passenger mass is lumped on the rim and the power is taken as
//! `I·ω²`, so the number is a sizing hint, not a drive design.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::calculations::motor::{calculate, MotorInput};
//!
//! let input = MotorInput {
//!     num_cabins: 12,
//!     cabin_capacity: 6,
//!     diameter_m: 60.0,
//!     rotation_speed_rpm: 2.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.power_kw - 227.4).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::rotation::{
    angular_velocity_from_rpm, drive_power_kw, rim_moment_of_inertia, PASSENGER_MASS_KG,
};
use crate::errors::{CalcError, CalcResult};

/// Input parameters for the drive estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorInput {
    /// Number of passenger cabins
    pub num_cabins: u32,
    /// Passengers per cabin
    pub cabin_capacity: u32,
    /// Wheel diameter (m)
    pub diameter_m: f64,
    /// Rotational speed (rpm)
    pub rotation_speed_rpm: f64,
}

impl MotorInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.num_cabins == 0 {
            return Err(CalcError::invalid_input(
                "num_cabins",
                self.num_cabins.to_string(),
                "Number of cabins must be greater than 0",
            ));
        }
        if self.cabin_capacity == 0 {
            return Err(CalcError::invalid_input(
                "cabin_capacity",
                self.cabin_capacity.to_string(),
                "Cabin capacity must be greater than 0",
            ));
        }
        if self.total_capacity().is_none() {
            return Err(CalcError::invalid_input(
                "cabin_capacity",
                format!("{} x {}", self.num_cabins, self.cabin_capacity),
                "Total passenger capacity is too large",
            ));
        }
        if !self.diameter_m.is_finite() || self.diameter_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_m",
                self.diameter_m.to_string(),
                "Diameter must be greater than 0",
            ));
        }
        if !self.rotation_speed_rpm.is_finite() || self.rotation_speed_rpm <= 0.0 {
            return Err(CalcError::invalid_input(
                "rotation_speed_rpm",
                self.rotation_speed_rpm.to_string(),
                "Rotation speed must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Total passenger count, `None` when it overflows `u32`
    pub fn total_capacity(&self) -> Option<u32> {
        self.num_cabins.checked_mul(self.cabin_capacity)
    }
}

/// Results of the drive estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorResult {
    /// Passenger mass at full load (kg)
    pub total_mass_kg: f64,
    /// Angular velocity (rad/s)
    pub angular_velocity_rad_s: f64,
    /// Rim moment of inertia of the passenger mass (kg·m²)
    pub moment_of_inertia_kg_m2: f64,
    /// Estimated drive power (kW)
    pub power_kw: f64,
}

/// Estimate the drive power.
pub fn calculate(input: &MotorInput) -> CalcResult<MotorResult> {
    input.validate()?;

    let total_capacity = input
        .total_capacity()
        .ok_or_else(|| CalcError::calculation_failed("Motor", "Total passenger capacity overflow"))?;
    let total_mass_kg = f64::from(total_capacity) * PASSENGER_MASS_KG;
    let angular_velocity_rad_s = angular_velocity_from_rpm(input.rotation_speed_rpm);
    let moment_of_inertia_kg_m2 = rim_moment_of_inertia(total_mass_kg, input.diameter_m);
    let power_kw = drive_power_kw(moment_of_inertia_kg_m2, angular_velocity_rad_s);

    Ok(MotorResult {
        total_mass_kg,
        angular_velocity_rad_s,
        moment_of_inertia_kg_m2,
        power_kw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wheel() -> MotorInput {
        MotorInput {
            num_cabins: 12,
            cabin_capacity: 6,
            diameter_m: 60.0,
            rotation_speed_rpm: 2.0,
        }
    }

    #[test]
    fn test_default_wheel() {
        let result = calculate(&test_wheel()).unwrap();
        // 12 * 6 * 80 = 5760 kg
        assert!((result.total_mass_kg - 5760.0).abs() < 1e-9);
        // 5760 * 30² = 5.184e6 kg·m²
        assert!((result.moment_of_inertia_kg_m2 - 5_184_000.0).abs() < 1e-6);
        assert!((result.angular_velocity_rad_s - 0.20944).abs() < 1e-5);
        assert!((result.power_kw - 227.396).abs() < 0.01);
    }

    #[test]
    fn test_power_scales_with_speed_squared() {
        let slow = calculate(&test_wheel()).unwrap();
        let mut fast_input = test_wheel();
        fast_input.rotation_speed_rpm = 4.0;
        let fast = calculate(&fast_input).unwrap();
        assert!((fast.power_kw / slow.power_kw - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_wheel();
        input.num_cabins = 0;
        assert!(calculate(&input).is_err());

        let mut input = test_wheel();
        input.diameter_m = -5.0;
        assert!(calculate(&input).is_err());

        let mut input = test_wheel();
        input.rotation_speed_rpm = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_total_capacity() {
        assert_eq!(test_wheel().total_capacity(), Some(72));
    }

    #[test]
    fn test_capacity_overflow_is_rejected() {
        let mut input = test_wheel();
        input.num_cabins = u32::MAX;
        assert_eq!(input.total_capacity(), None);

        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "cabin_capacity"));
    }
}
