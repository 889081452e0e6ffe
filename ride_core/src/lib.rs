//! # ride_core - Amusement Ride Design Engine
//!
//! `ride_core` holds the engineering side of the ride designer: the wind load
//! profile after BS EN 1991-1-4, the drive power estimate, and the design
//! wizard that walks a Ferris wheel from ride selection to a component
//! summary. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure calculations**: input struct in, result struct out
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Immutable wizard**: every transition returns a new state
//!
//! ## Quick Start
//!
//! ```rust
//! use ride_core::calculations::wind::{calculate, WindLoadInput};
//!
//! let input = WindLoadInput::new(66, 0.2094, 9.81, 1.225);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.z_m.first(), Some(&1));
//! assert_eq!(result.z_m.last(), Some(&66));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Wind load profile and drive power estimate
//! - [`equations`] - Formula building blocks and the equation registry
//! - [`ride`] - Ride types and parameter sets
//! - [`analysis`] - Force analysis over the selected load types
//! - [`summary`] - Final component specification
//! - [`wizard`] - Five-step design state machine
//! - [`settings`] - Session defaults loaded from JSON
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod ride;
pub mod settings;
pub mod summary;
pub mod units;
pub mod wizard;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use ride::{AdvancedParams, BasicParams, RideType};
pub use settings::Settings;
pub use wizard::{WizardState, WizardStep};
