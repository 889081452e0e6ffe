//! # Ride Parameters
//!
//! Parameter sets the design wizard collects for a Ferris wheel, with their
//! defaults and validation. Validation returns every problem at once as
//! human-readable messages so a front end can list them together.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::ride::{AdvancedParams, BasicParams};
//! use ride_core::calculations::WindCodeConstants;
//!
//! let basic = BasicParams::default();
//! let advanced = AdvancedParams::default();
//! assert!(basic.validate().is_empty());
//!
//! let input = advanced.wind_input(&basic, &WindCodeConstants::default());
//! assert_eq!(input.height_m, 66); // 66.7 m truncated to whole meters
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::motor::MotorInput;
use crate::calculations::wind::{WindCodeConstants, WindLoadInput};
use crate::equations::rotation::angular_velocity_from_rpm;
use crate::errors::CalcError;

/// Supported ride types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideType {
    FerrisWheel,
}

impl RideType {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            RideType::FerrisWheel => "Ferris Wheel",
        }
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for RideType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "ferriswheel" | "ferris" => Ok(RideType::FerrisWheel),
            _ => Err(CalcError::invalid_input(
                "ride_type",
                s.trim(),
                "Ride type not supported yet, only Ferris Wheel designs are available",
            )),
        }
    }
}

/// Truncate a structure height to the whole-meter count the wind profile samples.
pub fn whole_meters(height_m: f64) -> i64 {
    height_m.trunc() as i64
}

/// Basic geometry and operation of the wheel.
///
/// ## JSON Example
///
/// ```json
/// {
///   "num_cabins": 12,
///   "diameter_m": 60.0,
///   "cabin_capacity": 6,
///   "rotation_speed_rpm": 2.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicParams {
    /// Number of passenger cabins (ASTM F2291)
    pub num_cabins: u32,
    /// Wheel diameter in meters (EN 13814)
    pub diameter_m: f64,
    /// Passengers per cabin (ASTM F2291)
    pub cabin_capacity: u32,
    /// Rotational speed in rpm (EN 13814)
    pub rotation_speed_rpm: f64,
}

impl Default for BasicParams {
    fn default() -> Self {
        BasicParams {
            num_cabins: 12,
            diameter_m: 60.0,
            cabin_capacity: 6,
            rotation_speed_rpm: 2.0,
        }
    }
}

impl BasicParams {
    /// Validate, returning one message per problem (empty when valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.num_cabins == 0 {
            errors.push("Number of cabins must be greater than 0".to_string());
        }
        if !self.diameter_m.is_finite() || self.diameter_m <= 0.0 {
            errors.push("Diameter must be greater than 0".to_string());
        }
        if self.cabin_capacity == 0 {
            errors.push("Cabin capacity must be greater than 0".to_string());
        }
        if !self.rotation_speed_rpm.is_finite() || self.rotation_speed_rpm <= 0.0 {
            errors.push("Rotation speed must be greater than 0".to_string());
        }
        if self.total_capacity().is_none() {
            errors.push("Total capacity (cabins x cabin capacity) is too large".to_string());
        }
        errors
    }

    /// Wheel angular velocity in rad/s
    pub fn omega_rad_s(&self) -> f64 {
        angular_velocity_from_rpm(self.rotation_speed_rpm)
    }

    /// Total passenger capacity, `None` when it overflows `u32`
    pub fn total_capacity(&self) -> Option<u32> {
        self.num_cabins.checked_mul(self.cabin_capacity)
    }

    /// Input for the drive power estimate
    pub fn motor_input(&self) -> MotorInput {
        MotorInput {
            num_cabins: self.num_cabins,
            cabin_capacity: self.cabin_capacity,
            diameter_m: self.diameter_m,
            rotation_speed_rpm: self.rotation_speed_rpm,
        }
    }
}

/// Environmental analysis selection and mandatory structural parameters.
///
/// Only the wind analysis is implemented; earthquake and snow are recorded
/// as selections and reported as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedParams {
    /// Run the wind force analysis (BS EN 1991-1-4)
    pub wind_force: bool,
    /// Earthquake analysis requested (EN 1998-1)
    pub earthquake_force: bool,
    /// Snow load analysis requested (EN 1991-1-3)
    pub snow_force: bool,
    /// Total structure height in meters (EN 13814)
    pub height_m: f64,
    /// Gravitational acceleration in m/s²
    pub gravity_m_s2: f64,
    /// Air density in kg/m³ (ISO 2533)
    pub air_density_kg_m3: f64,
    /// Safety factor (EN 13814)
    pub safety_factor: f64,
}

impl Default for AdvancedParams {
    fn default() -> Self {
        AdvancedParams {
            wind_force: true,
            earthquake_force: false,
            snow_force: false,
            height_m: 66.7,
            gravity_m_s2: 9.81,
            air_density_kg_m3: 1.225,
            safety_factor: 1.5,
        }
    }
}

impl AdvancedParams {
    /// Validate, returning one message per problem (empty when valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.height_m.is_finite() || self.height_m < 1.0 {
            errors.push("Total structure height must be at least 1 m".to_string());
        }
        if !self.gravity_m_s2.is_finite() {
            errors.push("Gravitational acceleration must be a number".to_string());
        }
        if !self.air_density_kg_m3.is_finite() || self.air_density_kg_m3 <= 0.0 {
            errors.push("Air density must be greater than 0".to_string());
        }
        if !self.safety_factor.is_finite() || self.safety_factor < 1.0 {
            errors.push("Safety factor must be at least 1.0".to_string());
        }
        errors
    }

    /// Build the wind calculator input: height in whole meters, omega from rpm.
    pub fn wind_input(&self, basic: &BasicParams, constants: &WindCodeConstants) -> WindLoadInput {
        WindLoadInput::new(
            whole_meters(self.height_m),
            basic.omega_rad_s(),
            self.gravity_m_s2,
            self.air_density_kg_m3,
        )
        .with_constants(*constants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_type_parsing() {
        assert_eq!("Ferris Wheel".parse::<RideType>().unwrap(), RideType::FerrisWheel);
        assert_eq!("ferris_wheel".parse::<RideType>().unwrap(), RideType::FerrisWheel);
        let err = "Roller Coaster".parse::<RideType>().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_basic_defaults_valid() {
        assert!(BasicParams::default().validate().is_empty());
        assert_eq!(BasicParams::default().total_capacity(), Some(72));
    }

    #[test]
    fn test_capacity_overflow_reported() {
        let params = BasicParams {
            num_cabins: 100_000,
            cabin_capacity: 100_000,
            ..BasicParams::default()
        };
        assert_eq!(params.total_capacity(), None);
        assert_eq!(params.validate(), vec!["Total capacity (cabins x cabin capacity) is too large".to_string()]);
    }

    #[test]
    fn test_basic_reports_all_errors() {
        let params = BasicParams {
            num_cabins: 0,
            diameter_m: 0.0,
            cabin_capacity: 0,
            rotation_speed_rpm: 2.0,
        };
        let errors = params.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "Number of cabins must be greater than 0");
        assert_eq!(errors[1], "Diameter must be greater than 0");
        assert_eq!(errors[2], "Cabin capacity must be greater than 0");
    }

    #[test]
    fn test_nan_diameter_rejected() {
        let params = BasicParams {
            diameter_m: f64::NAN,
            ..BasicParams::default()
        };
        assert_eq!(params.validate().len(), 1);
    }

    #[test]
    fn test_advanced_validation() {
        assert!(AdvancedParams::default().validate().is_empty());

        let params = AdvancedParams {
            height_m: 0.5,
            air_density_kg_m3: 0.0,
            safety_factor: 0.9,
            ..AdvancedParams::default()
        };
        assert_eq!(params.validate().len(), 3);
    }

    #[test]
    fn test_wind_input_truncates_height() {
        let advanced = AdvancedParams::default();
        let input = advanced.wind_input(&BasicParams::default(), &WindCodeConstants::default());
        assert_eq!(input.height_m, 66);
        assert!((input.omega_rad_s - 2.0 * 2.0 * std::f64::consts::PI / 60.0).abs() < 1e-15);
        assert_eq!(input.gravity_m_s2, 9.81);
        assert_eq!(input.air_density_kg_m3, 1.225);
        assert_eq!(whole_meters(10.99), 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let basic: BasicParams = serde_json::from_str(r#"{"num_cabins": 24}"#).unwrap();
        assert_eq!(basic.num_cabins, 24);
        assert_eq!(basic.diameter_m, 60.0);

        let advanced: AdvancedParams = serde_json::from_str(r#"{"snow_force": true}"#).unwrap();
        assert!(advanced.snow_force);
        assert!(advanced.wind_force);
    }
}
