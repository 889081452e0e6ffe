//! # Design Summary
//!
//! System specification and component list shown at the end of a design:
//! key dimensions, total capacity, the drive estimate and the structural and
//! mechanical components the wheel needs.

use serde::{Deserialize, Serialize};

use crate::calculations::motor::{self, MotorResult};
use crate::errors::{CalcError, CalcResult};
use crate::ride::{AdvancedParams, BasicParams};

/// Final system specification of a Ferris wheel design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Wheel diameter (m)
    pub diameter_m: f64,
    /// Total structure height (m)
    pub height_m: f64,
    /// Number of passenger cabins
    pub num_cabins: u32,
    /// Passengers across all cabins
    pub total_capacity: u32,
    /// Drive estimate
    pub motor: MotorResult,
    /// Structural components
    pub structural_components: Vec<String>,
    /// Mechanical and electrical components
    pub mechanical_components: Vec<String>,
}

impl DesignSummary {
    /// Build the summary from validated parameters.
    pub fn build(basic: &BasicParams, advanced: &AdvancedParams) -> CalcResult<Self> {
        let motor = motor::calculate(&basic.motor_input())?;
        let total_capacity = basic.total_capacity().ok_or_else(|| {
            CalcError::invalid_input(
                "cabin_capacity",
                format!("{} x {}", basic.num_cabins, basic.cabin_capacity),
                "Total passenger capacity is too large",
            )
        })?;

        let structural_components = vec![
            format!("Main wheel structure (Ø{}m)", basic.diameter_m),
            format!("Support tower ({}m)", advanced.height_m),
            format!("{} passenger cabins", basic.num_cabins),
            "Rotation axis and bearings".to_string(),
            "Foundation and anchor bolts".to_string(),
        ];

        let mechanical_components = vec![
            format!("Electric motor ({:.1} kW minimum)", motor.power_kw),
            "Gear reduction system".to_string(),
            "Emergency braking system".to_string(),
            "Safety restraints and sensors".to_string(),
            "Control system and PLC".to_string(),
        ];

        Ok(DesignSummary {
            diameter_m: basic.diameter_m,
            height_m: advanced.height_m,
            num_cabins: basic.num_cabins,
            total_capacity,
            motor,
            structural_components,
            mechanical_components,
        })
    }
}
