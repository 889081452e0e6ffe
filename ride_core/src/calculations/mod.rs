//! # Ride Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`wind`] - Wind load profile over the structure height (EN 1991-1-4)
//! - [`motor`] - Drive power estimate for a Ferris wheel

pub mod motor;
pub mod wind;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use motor::{MotorInput, MotorResult};
pub use wind::{WindCodeConstants, WindLoadCache, WindLoadInput, WindLoadResult};

/// Enum wrapper for all calculation inputs.
///
/// Lets a caller hand heterogeneous calculations to one entry point, e.g. a
/// JSON request carrying `{"type": "Wind", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Wind load profile
    Wind(WindLoadInput),
    /// Drive power estimate
    Motor(MotorInput),
}

/// Result of a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Wind(WindLoadResult),
    Motor(MotorResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Wind(_) => "Wind",
            CalculationItem::Motor(_) => "Motor",
        }
    }

    /// Run the calculation. Wind profiles go through the process-wide cache.
    pub fn run(&self) -> crate::errors::CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Wind(input) => {
                let result = wind::calculate_cached(input)?;
                Ok(CalculationOutput::Wind(WindLoadResult::clone(&result)))
            }
            CalculationItem::Motor(input) => motor::calculate(input).map(CalculationOutput::Motor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json_dispatch() {
        let json = r#"{"type": "Wind", "height_m": 4, "omega_rad_s": 0.2, "gravity_m_s2": 9.81, "air_density_kg_m3": 1.225}"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "Wind");

        match item.run().unwrap() {
            CalculationOutput::Wind(result) => assert_eq!(result.len(), 4),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_motor_dispatch() {
        let item = CalculationItem::Motor(MotorInput {
            num_cabins: 12,
            cabin_capacity: 6,
            diameter_m: 60.0,
            rotation_speed_rpm: 2.0,
        });
        let output = item.run().unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"type\":\"Motor\""));
    }
}
