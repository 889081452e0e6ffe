//! # Design Wizard
//!
//! The five-step design flow as an immutable state machine. Every transition
//! takes a [`WizardState`] by value and returns the next one; the data each
//! step needs travels inside its [`WizardStep`] variant, so a step can never
//! be reached without the inputs of the steps before it.
//!
//! ```text
//! RideSelection ─select_ride─▶ BasicParameters ─next─▶ AdvancedParameters
//!       ▲                                                      │ next (runs wind analysis)
//!       │ reset                                                ▼
//! ComponentSummary ◀────────────next──────────────────── ForceAnalysis
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ride_core::ride::RideType;
//! use ride_core::wizard::{WizardState, WizardStep};
//!
//! let state = WizardState::new()
//!     .select_ride(RideType::FerrisWheel).unwrap()
//!     .next().unwrap()   // default basic parameters
//!     .next().unwrap();  // default advanced parameters, wind analysis runs
//!
//! match state.step() {
//!     WizardStep::ForceAnalysis { analysis, .. } => {
//!         let wind = analysis.wind.as_ref().unwrap();
//!         assert_eq!(wind.len(), 66);
//!     }
//!     other => panic!("unexpected step {:?}", other),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ForceAnalysis;
use crate::errors::{CalcError, CalcResult};
use crate::ride::{AdvancedParams, BasicParams, RideType};
use crate::settings::Settings;
use crate::summary::DesignSummary;

/// Number of wizard steps
pub const TOTAL_STEPS: u8 = 5;

/// Current wizard step with the data collected so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step")]
pub enum WizardStep {
    /// Step 1: choose the ride type
    RideSelection,
    /// Step 2: cabins, diameter, capacity, rotation speed
    BasicParameters { ride: RideType },
    /// Step 3: analysis selection and structural parameters
    AdvancedParameters { ride: RideType, basic: BasicParams },
    /// Step 4: force analysis results
    ForceAnalysis {
        ride: RideType,
        basic: BasicParams,
        advanced: AdvancedParams,
        analysis: ForceAnalysis,
    },
    /// Step 5: component specifications and system overview
    ComponentSummary {
        ride: RideType,
        basic: BasicParams,
        advanced: AdvancedParams,
        analysis: ForceAnalysis,
        summary: DesignSummary,
    },
}

impl WizardStep {
    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::RideSelection => 1,
            WizardStep::BasicParameters { .. } => 2,
            WizardStep::AdvancedParameters { .. } => 3,
            WizardStep::ForceAnalysis { .. } => 4,
            WizardStep::ComponentSummary { .. } => 5,
        }
    }

    /// Heading shown for the step
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::RideSelection => "Select Ride Type",
            WizardStep::BasicParameters { .. } => "Basic Parameters",
            WizardStep::AdvancedParameters { .. } => "Advanced Load Analysis Parameters",
            WizardStep::ForceAnalysis { .. } => "Force Analysis Results",
            WizardStep::ComponentSummary { .. } => "Component Specifications & System Overview",
        }
    }

    /// Selected ride, once past step 1
    pub fn ride(&self) -> Option<RideType> {
        match self {
            WizardStep::RideSelection => None,
            WizardStep::BasicParameters { ride }
            | WizardStep::AdvancedParameters { ride, .. }
            | WizardStep::ForceAnalysis { ride, .. }
            | WizardStep::ComponentSummary { ride, .. } => Some(*ride),
        }
    }
}

/// Wizard session: the current step, the form drafts and the last
/// validation messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    step: WizardStep,
    basic_draft: BasicParams,
    advanced_draft: AdvancedParams,
    validation_errors: Vec<String>,
    settings: Settings,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::new()
    }
}

impl WizardState {
    /// Start a design with the default settings.
    pub fn new() -> Self {
        WizardState::with_settings(Settings::default())
    }

    /// Start a design whose forms and wind constants come from `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        WizardState {
            step: WizardStep::RideSelection,
            basic_draft: settings.basic,
            advanced_draft: settings.advanced,
            validation_errors: Vec::new(),
            settings,
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// 1-based step number
    pub fn step_number(&self) -> u8 {
        self.step.number()
    }

    /// Completion fraction, 0.0 on the first step and 1.0 on the last
    pub fn progress(&self) -> f64 {
        f64::from(self.step_number() - 1) / f64::from(TOTAL_STEPS - 1)
    }

    /// Messages from the last rejected `next()`
    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }

    pub fn basic_draft(&self) -> &BasicParams {
        &self.basic_draft
    }

    pub fn advanced_draft(&self) -> &AdvancedParams {
        &self.advanced_draft
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Choose the ride type and move to the basic parameters.
    pub fn select_ride(self, ride: RideType) -> CalcResult<Self> {
        if !matches!(self.step, WizardStep::RideSelection) {
            return Err(CalcError::invalid_input(
                "step",
                self.step.title(),
                "Ride type can only be chosen on the first step",
            ));
        }
        Ok(self.transition(WizardStep::BasicParameters { ride }))
    }

    /// Replace the basic parameter draft.
    pub fn with_basic(mut self, basic: BasicParams) -> Self {
        self.basic_draft = basic;
        self
    }

    /// Replace the advanced parameter draft.
    pub fn with_advanced(mut self, advanced: AdvancedParams) -> Self {
        self.advanced_draft = advanced;
        self
    }

    /// Validate the current step and advance.
    ///
    /// Invalid drafts keep the wizard on the same step with
    /// [`validation_errors`](Self::validation_errors) filled in; that is not
    /// an `Err`. Errors are reserved for moves that make no sense (no ride
    /// chosen, already on the last step) and for calculation failures other
    /// than invalid input.
    pub fn next(self) -> CalcResult<Self> {
        match self.step.clone() {
            WizardStep::RideSelection => Err(CalcError::missing_field("ride_type")),

            WizardStep::BasicParameters { ride } => {
                let errors = self.basic_draft.validate();
                if !errors.is_empty() {
                    return Ok(self.reject(errors));
                }
                let basic = self.basic_draft;
                Ok(self.transition(WizardStep::AdvancedParameters { ride, basic }))
            }

            WizardStep::AdvancedParameters { ride, basic } => {
                let errors = self.advanced_draft.validate();
                if !errors.is_empty() {
                    return Ok(self.reject(errors));
                }
                let advanced = self.advanced_draft;
                match ForceAnalysis::run(&basic, &advanced, &self.settings.wind) {
                    Ok(analysis) => Ok(self.transition(WizardStep::ForceAnalysis {
                        ride,
                        basic,
                        advanced,
                        analysis,
                    })),
                    Err(e) if e.is_invalid_input() => Ok(self.reject(vec![e.to_string()])),
                    Err(e) => Err(e),
                }
            }

            WizardStep::ForceAnalysis {
                ride,
                basic,
                advanced,
                analysis,
            } => {
                let summary = DesignSummary::build(&basic, &advanced)?;
                Ok(self.transition(WizardStep::ComponentSummary {
                    ride,
                    basic,
                    advanced,
                    analysis,
                    summary,
                }))
            }

            WizardStep::ComponentSummary { .. } => Err(CalcError::invalid_input(
                "step",
                self.step.title(),
                "Design is complete, there is no next step",
            )),
        }
    }

    /// Go back one step, keeping the drafts. No-op on the first step.
    pub fn back(self) -> Self {
        let previous = match self.step.clone() {
            WizardStep::RideSelection => return self,
            WizardStep::BasicParameters { .. } => WizardStep::RideSelection,
            WizardStep::AdvancedParameters { ride, .. } => WizardStep::BasicParameters { ride },
            WizardStep::ForceAnalysis { ride, basic, .. } => WizardStep::AdvancedParameters { ride, basic },
            WizardStep::ComponentSummary {
                ride,
                basic,
                advanced,
                analysis,
                ..
            } => WizardStep::ForceAnalysis {
                ride,
                basic,
                advanced,
                analysis,
            },
        };
        self.transition(previous)
    }

    /// Start a new design with the same settings.
    pub fn reset(self) -> Self {
        debug!("wizard reset");
        WizardState::with_settings(self.settings)
    }

    fn transition(mut self, step: WizardStep) -> Self {
        debug!(from = self.step.number(), to = step.number(), "wizard step");
        self.step = step;
        self.validation_errors.clear();
        self
    }

    fn reject(mut self, errors: Vec<String>) -> Self {
        debug!(step = self.step.number(), errors = errors.len(), "wizard step rejected");
        self.validation_errors = errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisStatus;
    use crate::calculations::wind::compute;

    fn at_basic() -> WizardState {
        WizardState::new().select_ride(RideType::FerrisWheel).unwrap()
    }

    fn at_summary() -> WizardState {
        at_basic().next().unwrap().next().unwrap().next().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = WizardState::new();
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.progress(), 0.0);
        assert!(state.validation_errors().is_empty());
        assert_eq!(*state.basic_draft(), BasicParams::default());
        assert_eq!(state.step().ride(), None);
    }

    #[test]
    fn test_next_without_ride_is_missing_field() {
        let err = WizardState::new().next().unwrap_err();
        assert_eq!(err, CalcError::missing_field("ride_type"));
    }

    #[test]
    fn test_happy_path() {
        let state = at_basic();
        assert_eq!(state.step_number(), 2);
        assert_eq!(state.step().ride(), Some(RideType::FerrisWheel));

        let state = state.next().unwrap();
        assert_eq!(state.step_number(), 3);

        let state = state.next().unwrap();
        assert_eq!(state.step_number(), 4);
        match state.step() {
            WizardStep::ForceAnalysis { analysis, basic, .. } => {
                let wind = analysis.wind.as_ref().unwrap();
                let direct = compute(66, basic.omega_rad_s(), 9.81, 1.225).unwrap();
                assert_eq!(wind.vm_max_m_s, direct.vm_max_m_s);
                assert_eq!(analysis.earthquake, AnalysisStatus::NotSelected);
            }
            other => panic!("unexpected step {:?}", other),
        }

        let state = state.next().unwrap();
        assert_eq!(state.step_number(), 5);
        assert_eq!(state.progress(), 1.0);
        match state.step() {
            WizardStep::ComponentSummary { summary, .. } => assert_eq!(summary.total_capacity, 72),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_invalid_basic_stays_with_all_errors() {
        let bad = BasicParams {
            num_cabins: 0,
            diameter_m: 0.0,
            cabin_capacity: 0,
            rotation_speed_rpm: 2.0,
        };
        let state = at_basic().with_basic(bad).next().unwrap();
        assert_eq!(state.step_number(), 2);
        assert_eq!(state.validation_errors().len(), 3);

        // Fixing the draft clears the errors on the way forward
        let state = state.with_basic(BasicParams::default()).next().unwrap();
        assert_eq!(state.step_number(), 3);
        assert!(state.validation_errors().is_empty());
    }

    #[test]
    fn test_invalid_advanced_stays() {
        let state = at_basic().next().unwrap();
        let bad = AdvancedParams {
            air_density_kg_m3: 0.0,
            ..AdvancedParams::default()
        };
        let state = state.with_advanced(bad).next().unwrap();
        assert_eq!(state.step_number(), 3);
        assert_eq!(state.validation_errors(), ["Air density must be greater than 0".to_string()]);
    }

    #[test]
    fn test_calculator_rejection_becomes_validation_error() {
        // z0 = 1 m lies on the sampled grid, which only the calculator catches
        let mut settings = Settings::default();
        settings.wind.roughness_length_m = 1.0;
        let state = WizardState::with_settings(settings)
            .select_ride(RideType::FerrisWheel)
            .unwrap()
            .next()
            .unwrap()
            .next()
            .unwrap();
        assert_eq!(state.step_number(), 3);
        assert_eq!(state.validation_errors().len(), 1);
        assert!(state.validation_errors()[0].contains("roughness_length_m"));
    }

    #[test]
    fn test_wind_not_selected() {
        let advanced = AdvancedParams {
            wind_force: false,
            snow_force: true,
            ..AdvancedParams::default()
        };
        let state = at_basic().next().unwrap().with_advanced(advanced).next().unwrap();
        match state.step() {
            WizardStep::ForceAnalysis { analysis, .. } => {
                assert!(analysis.wind.is_none());
                assert_eq!(analysis.snow, AnalysisStatus::NotImplemented);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_back_keeps_drafts() {
        let custom = BasicParams {
            num_cabins: 24,
            ..BasicParams::default()
        };
        let state = at_basic().with_basic(custom).next().unwrap();
        let state = state.back();
        assert_eq!(state.step_number(), 2);
        assert_eq!(state.basic_draft().num_cabins, 24);

        let state = state.back().back();
        assert_eq!(state.step_number(), 1);
    }

    #[test]
    fn test_back_from_summary_keeps_analysis() {
        let state = at_summary().back();
        match state.step() {
            WizardStep::ForceAnalysis { analysis, .. } => assert!(analysis.wind.is_some()),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_no_next_after_summary() {
        assert!(at_summary().next().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_select_ride_only_on_first_step() {
        assert!(at_basic().select_ride(RideType::FerrisWheel).is_err());
    }

    #[test]
    fn test_reset() {
        let mut settings = Settings::default();
        settings.advanced.height_m = 120.0;
        let state = WizardState::with_settings(settings)
            .select_ride(RideType::FerrisWheel)
            .unwrap()
            .with_basic(BasicParams {
                num_cabins: 40,
                ..BasicParams::default()
            })
            .reset();
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.basic_draft().num_cabins, 12);
        assert_eq!(state.advanced_draft().height_m, 120.0);
    }

    #[test]
    fn test_state_serializes() {
        let json = serde_json::to_string(&at_basic()).unwrap();
        assert!(json.contains("\"step\":\"BasicParameters\""));
        let roundtrip: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, at_basic());
    }
}
