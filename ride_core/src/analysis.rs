//! # Force Analysis
//!
//! Runs the environmental analyses selected for a design. Wind is the only
//! implemented analysis; earthquake and snow selections are carried through
//! so a front end can report them.

use serde::{Deserialize, Serialize};

use crate::calculations::wind::{calculate_cached, WindCodeConstants, WindLoadResult};
use crate::errors::CalcResult;
use crate::ride::{AdvancedParams, BasicParams};

/// State of an analysis that has no calculation behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisStatus {
    /// The user did not request it
    NotSelected,
    /// Requested, but no calculation exists
    NotImplemented,
}

impl AnalysisStatus {
    fn from_selection(selected: bool) -> Self {
        if selected {
            AnalysisStatus::NotImplemented
        } else {
            AnalysisStatus::NotSelected
        }
    }
}

/// Outcome of the force analysis step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceAnalysis {
    /// Wind profile, present when wind analysis was selected
    pub wind: Option<WindLoadResult>,
    /// Earthquake analysis (EN 1998-1)
    pub earthquake: AnalysisStatus,
    /// Snow load analysis (EN 1991-1-3)
    pub snow: AnalysisStatus,
}

impl ForceAnalysis {
    /// Run every selected analysis.
    ///
    /// The wind profile is taken from the process-wide cache, so stepping
    /// back and forth through a design does not recompute it.
    pub fn run(basic: &BasicParams, advanced: &AdvancedParams, constants: &WindCodeConstants) -> CalcResult<Self> {
        let wind = if advanced.wind_force {
            let input = advanced.wind_input(basic, constants);
            let profile = calculate_cached(&input)?;
            Some(WindLoadResult::clone(&profile))
        } else {
            None
        };

        Ok(ForceAnalysis {
            wind,
            earthquake: AnalysisStatus::from_selection(advanced.earthquake_force),
            snow: AnalysisStatus::from_selection(advanced.snow_force),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::wind::compute;

    #[test]
    fn test_default_design_runs_wind_only() {
        let analysis = ForceAnalysis::run(
            &BasicParams::default(),
            &AdvancedParams::default(),
            &WindCodeConstants::default(),
        )
        .unwrap();

        let wind = analysis.wind.unwrap();
        assert_eq!(wind.len(), 66);
        let direct = compute(66, BasicParams::default().omega_rad_s(), 9.81, 1.225).unwrap();
        assert_eq!(wind.vm_max_m_s, direct.vm_max_m_s);
        assert_eq!(analysis.earthquake, AnalysisStatus::NotSelected);
        assert_eq!(analysis.snow, AnalysisStatus::NotSelected);
    }

    #[test]
    fn test_unselected_wind_and_placeholders() {
        let advanced = AdvancedParams {
            wind_force: false,
            earthquake_force: true,
            snow_force: true,
            ..AdvancedParams::default()
        };
        let analysis =
            ForceAnalysis::run(&BasicParams::default(), &advanced, &WindCodeConstants::default()).unwrap();
        assert!(analysis.wind.is_none());
        assert_eq!(analysis.earthquake, AnalysisStatus::NotImplemented);
        assert_eq!(analysis.snow, AnalysisStatus::NotImplemented);
    }

    #[test]
    fn test_invalid_wind_input_propagates() {
        let advanced = AdvancedParams {
            air_density_kg_m3: 0.0,
            ..AdvancedParams::default()
        };
        let err = ForceAnalysis::run(&BasicParams::default(), &advanced, &WindCodeConstants::default())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
