//! Plain-text reports for the terminal.

use std::fmt::Write;

use ride_core::analysis::{AnalysisStatus, ForceAnalysis};
use ride_core::calculations::WindLoadResult;
use ride_core::summary::DesignSummary;
use ride_core::wizard::{WizardState, TOTAL_STEPS};

const RULE: &str = "═══════════════════════════════════════";

/// Step heading with a text progress bar.
pub fn step_header(state: &WizardState) -> String {
    const WIDTH: usize = 20;
    let filled = (state.progress() * WIDTH as f64).round() as usize;
    format!(
        "{}\n  Step {} of {}: {}\n  [{}{}] {:.0}%\n{}\n",
        RULE,
        state.step_number(),
        TOTAL_STEPS,
        state.step().title(),
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        state.progress() * 100.0,
        RULE
    )
}

/// Key values and the per-elevation table of a wind profile.
pub fn wind_report(result: &WindLoadResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Wind Load Analysis (BS EN 1991-1-4)");
    let _ = writeln!(out, "  Max wind velocity v_m:  {:.2} m/s", result.vm_max_m_s);
    let _ = writeln!(out, "  Top load F_wx:          {:.2} kN", result.top_fwx_kn());
    let _ = writeln!(out, "  Top load F_wy:          {:.2} kN", result.top_fwy_kn());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>6} {:>10} {:>8} {:>10} {:>10} {:>10}",
        "z [m]", "vm [m/s]", "Iv", "qp [Pa]", "Fwx [kN]", "Fwy [kN]"
    );
    for row in result.samples() {
        let _ = writeln!(
            out,
            "{:>6} {:>10.2} {:>8.3} {:>10.1} {:>10.2} {:>10.2}",
            row.z_m, row.vm_m_s, row.iv, row.qp_pa, row.fwx_kn, row.fwy_kn
        );
    }
    out
}

fn status_line(name: &str, status: AnalysisStatus) -> String {
    match status {
        AnalysisStatus::NotSelected => format!("{}: not selected", name),
        AnalysisStatus::NotImplemented => format!("{}: selected, not available yet", name),
    }
}

/// Everything the force analysis step produced.
pub fn analysis_report(analysis: &ForceAnalysis) -> String {
    let mut out = match &analysis.wind {
        Some(wind) => wind_report(wind),
        None => "Wind Load Analysis: not selected\n".to_string(),
    };
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", status_line("Earthquake Analysis (EN 1998-1)", analysis.earthquake));
    let _ = writeln!(out, "{}", status_line("Snow Load Analysis (EN 1991-1-3)", analysis.snow));
    out
}

/// System specification and component lists.
pub fn summary_report(summary: &DesignSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "System Specification");
    let _ = writeln!(out, "  Diameter:        {} m", summary.diameter_m);
    let _ = writeln!(out, "  Height:          {} m", summary.height_m);
    let _ = writeln!(out, "  Cabins:          {}", summary.num_cabins);
    let _ = writeln!(out, "  Total capacity:  {} passengers", summary.total_capacity);
    let _ = writeln!(out, "  Motor power:     {:.1} kW", summary.motor.power_kw);
    let _ = writeln!(out);
    let _ = writeln!(out, "Structural Components");
    for item in &summary.structural_components {
        let _ = writeln!(out, "  - {}", item);
    }
    let _ = writeln!(out, "Mechanical & Electrical Components");
    for item in &summary.mechanical_components {
        let _ = writeln!(out, "  - {}", item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_core::calculations::wind::compute;
    use ride_core::ride::{AdvancedParams, BasicParams};

    #[test]
    fn test_wind_report_has_one_row_per_meter() {
        let result = compute(10, 0.2, 9.81, 1.225).unwrap();
        let report = wind_report(&result);
        assert!(report.contains("32.57 m/s"));
        // 4 header lines, blank line, column header, 10 rows
        assert_eq!(report.lines().count(), 16);
    }

    #[test]
    fn test_step_header_progress() {
        let header = step_header(&WizardState::new());
        assert!(header.contains("Step 1 of 5: Select Ride Type"));
        assert!(header.contains(" 0%"));
    }

    #[test]
    fn test_summary_report() {
        let summary = DesignSummary::build(&BasicParams::default(), &AdvancedParams::default()).unwrap();
        let report = summary_report(&summary);
        assert!(report.contains("Total capacity:  72 passengers"));
        assert!(report.contains("  - Electric motor (227.4 kW minimum)"));
    }

    #[test]
    fn test_analysis_report_placeholders() {
        let analysis = ForceAnalysis {
            wind: None,
            earthquake: AnalysisStatus::NotImplemented,
            snow: AnalysisStatus::NotSelected,
        };
        let report = analysis_report(&analysis);
        assert!(report.contains("Wind Load Analysis: not selected"));
        assert!(report.contains("Earthquake Analysis (EN 1998-1): selected, not available yet"));
    }
}
