//! # Ride Engineering Equations
//!
//! Every formula used in calculations lives here, one function per equation,
//! so it can be checked against its code reference in isolation.
//!
//! ## Modules
//!
//! - [`wind`] - Wind profile and wind action formulas (EN 1991-1-4)
//! - [`rotation`] - Wheel kinematics and drive power estimate
//! - [`registry`] - Equation metadata and the Markdown reference generator
//!
//! ## Conventions
//!
//! - Elevations are measured upward from ground level
//! - Horizontal forces act in the wind direction (x or y axis of the wheel)
//! - SI units throughout; forces are returned in kN
//!
//! ## References
//!
//! - BS EN 1991-1-4: Actions on structures - Wind actions
//! - EN 13814: Fairground and amusement park machinery and structures

pub mod registry;
pub mod rotation;
pub mod wind;

pub use wind::{
    basic_wind_velocity,
    fundamental_basic_wind_velocity,
    mean_wind_velocity,
    peak_velocity_pressure,
    roughness_coefficient,
    terrain_factor,
    turbulence_intensity,
    wind_force_kn,
};

pub use rotation::{
    angular_velocity_from_rpm,
    drive_power_kw,
    rim_moment_of_inertia,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
    wind_calculation_equations,
};
