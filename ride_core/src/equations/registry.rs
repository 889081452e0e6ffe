//! # Equation Registry
//!
//! Central registry of the equations used by ride calculations. Each equation
//! carries its formula, code reference and variable definitions so a reviewer
//! can audit the numbers without reading the implementation.
//!
//! ## Usage
//!
//! ```rust
//! use ride_core::equations::registry::Equation;
//!
//! let meta = Equation::PeakVelocityPressure.metadata();
//! assert!(meta.formula_plain.contains("q_p"));
//! println!("{}: {}", meta.name, meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a code or standard an equation is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// BS EN 1991-1-4 - Actions on structures, wind actions
    Eurocode1Wind {
        section: &'static str,
        equation: &'static str,
    },
    /// EN 13814 - Fairground and amusement park machinery and structures
    EN13814 { section: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Eurocode1Wind { section, equation } => {
                format!("BS EN 1991-1-4 Section {}, Eq. {}", section, equation)
            }
            CodeReference::EN13814 { section } => format!("EN 13814 Section {}", section),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Eurocode1Wind { .. } => "EN 1991-1-4",
            CodeReference::EN13814 { .. } => "EN 13814",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Basic and mean wind velocity
    WindVelocity,
    /// Terrain and turbulence parameters
    TerrainAndTurbulence,
    /// Pressures and forces on the structure
    WindActions,
    /// Rotation and drive estimates
    Kinematics,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::WindVelocity => "Wind Velocity",
            EquationCategory::TerrainAndTurbulence => "Terrain and Turbulence",
            EquationCategory::WindActions => "Wind Actions",
            EquationCategory::Kinematics => "Kinematics",
        }
    }

    /// Sort order in the reference (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::WindVelocity => 1,
            EquationCategory::TerrainAndTurbulence => 2,
            EquationCategory::WindActions => 3,
            EquationCategory::Kinematics => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "v_m", "z0")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m/s", "Pa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in ride calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// v_b = c_dir * c_season * v_b0
    BasicWindVelocity,
    /// k_r = 0.19 * (z0/0.05)^0.07
    TerrainFactor,
    /// c_r(z) = k_r * ln(z/z0)
    RoughnessCoefficient,
    /// v_m(z) = c_r(z) * c_0 * v_b
    MeanWindVelocity,
    /// I_v(z) = k_l / (c_0 * ln(z/z0))
    TurbulenceIntensity,
    /// q_p(z) = 0.5 * rho * v_m^2 * (1 + 7 I_v)
    PeakVelocityPressure,
    /// F_w = q_p * c_f * A / 1000
    WindForce,
    /// omega = n * 2 pi / 60
    AngularVelocity,
    /// P = m (D/2)^2 omega^2 / 1000
    DrivePowerEstimate,
}

/// Every registered equation, in reference order
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::BasicWindVelocity,
    Equation::TerrainFactor,
    Equation::RoughnessCoefficient,
    Equation::MeanWindVelocity,
    Equation::TurbulenceIntensity,
    Equation::PeakVelocityPressure,
    Equation::WindForce,
    Equation::AngularVelocity,
    Equation::DrivePowerEstimate,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::BasicWindVelocity => EquationMetadata {
                name: "Basic Wind Velocity",
                description: "Basic wind velocity from the 100 km/h fundamental value and directional/seasonal factors",
                formula_plain: "v_b = c_dir * c_season * v_b0, v_b0 = 100/3.6",
                reference: CodeReference::Eurocode1Wind { section: "4.2", equation: "4.1" },
                variables: vec![
                    Variable::new("v_b", "Basic wind velocity", "m/s"),
                    Variable::new("v_b0", "Fundamental value of basic wind velocity", "m/s"),
                    Variable::new("c_dir", "Directional factor", "-"),
                    Variable::new("c_season", "Seasonal factor", "-"),
                ],
                assumptions: vec!["Fixed reference wind of 100 km/h"],
                category: EquationCategory::WindVelocity,
                source_module: "equations/wind.rs",
                source_function: "basic_wind_velocity",
            },

            Equation::TerrainFactor => EquationMetadata {
                name: "Terrain Factor",
                description: "Terrain factor depending on the roughness length",
                formula_plain: "k_r = 0.19 * (z0 / 0.05)^0.07",
                reference: CodeReference::Eurocode1Wind { section: "4.3.2", equation: "4.5" },
                variables: vec![
                    Variable::new("k_r", "Terrain factor", "-"),
                    Variable::new("z0", "Roughness length", "m"),
                ],
                assumptions: vec!["Reference roughness length z0,II = 0.05 m"],
                category: EquationCategory::TerrainAndTurbulence,
                source_module: "equations/wind.rs",
                source_function: "terrain_factor",
            },

            Equation::RoughnessCoefficient => EquationMetadata {
                name: "Roughness Coefficient",
                description: "Logarithmic roughness profile at elevation z",
                formula_plain: "c_r(z) = k_r * ln(z / z0)",
                reference: CodeReference::Eurocode1Wind { section: "4.3.2", equation: "4.4" },
                variables: vec![
                    Variable::new("c_r", "Roughness coefficient", "-"),
                    Variable::new("z", "Elevation above ground", "m"),
                ],
                assumptions: vec!["No z_min floor, every whole-meter sample uses the log law"],
                category: EquationCategory::TerrainAndTurbulence,
                source_module: "equations/wind.rs",
                source_function: "roughness_coefficient",
            },

            Equation::MeanWindVelocity => EquationMetadata {
                name: "Mean Wind Velocity",
                description: "Mean wind velocity at elevation z",
                formula_plain: "v_m(z) = c_r(z) * c_0 * v_b",
                reference: CodeReference::Eurocode1Wind { section: "4.3.1", equation: "4.3" },
                variables: vec![
                    Variable::new("v_m", "Mean wind velocity", "m/s"),
                    Variable::new("c_0", "Orography factor", "-"),
                ],
                assumptions: vec!["Constant orography factor over the height"],
                category: EquationCategory::WindVelocity,
                source_module: "equations/wind.rs",
                source_function: "mean_wind_velocity",
            },

            Equation::TurbulenceIntensity => EquationMetadata {
                name: "Turbulence Intensity",
                description: "Standard deviation of turbulence over mean velocity",
                formula_plain: "I_v(z) = k_l / (c_0 * ln(z / z0))",
                reference: CodeReference::Eurocode1Wind { section: "4.4", equation: "4.7" },
                variables: vec![
                    Variable::new("I_v", "Turbulence intensity", "-"),
                    Variable::new("k_l", "Turbulence factor", "-"),
                ],
                assumptions: vec!["k_l = 1.0"],
                category: EquationCategory::TerrainAndTurbulence,
                source_module: "equations/wind.rs",
                source_function: "turbulence_intensity",
            },

            Equation::PeakVelocityPressure => EquationMetadata {
                name: "Peak Velocity Pressure",
                description: "Dynamic pressure including short-term velocity fluctuations",
                formula_plain: "q_p(z) = 0.5 * rho * v_m(z)^2 * (1 + 7 * I_v(z))",
                reference: CodeReference::Eurocode1Wind { section: "4.5", equation: "4.8" },
                variables: vec![
                    Variable::new("q_p", "Peak velocity pressure", "Pa"),
                    Variable::new("rho", "Air density", "kg/m^3"),
                ],
                assumptions: vec!["Peak factor 7"],
                category: EquationCategory::WindActions,
                source_module: "equations/wind.rs",
                source_function: "peak_velocity_pressure",
            },

            Equation::WindForce => EquationMetadata {
                name: "Horizontal Wind Force",
                description: "Wind force on the projected area in one horizontal axis",
                formula_plain: "F_w = q_p * c_f * A_ref / 1000",
                reference: CodeReference::Eurocode1Wind { section: "5.3", equation: "5.3" },
                variables: vec![
                    Variable::new("F_w", "Wind force", "kN"),
                    Variable::new("c_f", "Force coefficient", "-"),
                    Variable::new("A_ref", "Projected reference area (A_x or A_y)", "m^2"),
                ],
                assumptions: vec!["Structural factor c_s*c_d = 1", "Full projected area at every elevation"],
                category: EquationCategory::WindActions,
                source_module: "equations/wind.rs",
                source_function: "wind_force_kn",
            },

            Equation::AngularVelocity => EquationMetadata {
                name: "Angular Velocity",
                description: "Wheel angular velocity from rotational speed",
                formula_plain: "omega = n * 2 * pi / 60",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("omega", "Angular velocity", "rad/s"),
                    Variable::new("n", "Rotational speed", "rpm"),
                ],
                assumptions: vec![],
                category: EquationCategory::Kinematics,
                source_module: "equations/rotation.rs",
                source_function: "angular_velocity_from_rpm",
            },

            Equation::DrivePowerEstimate => EquationMetadata {
                name: "Drive Power Estimate",
                description: "Order-of-magnitude drive power from the passenger mass on the rim",
                formula_plain: "P = m * (D/2)^2 * omega^2 / 1000, m = cabins * capacity * 80",
                reference: CodeReference::EN13814 { section: "5.3" },
                variables: vec![
                    Variable::new("P", "Drive power", "kW"),
                    Variable::new("m", "Passenger mass", "kg"),
                    Variable::new("D", "Wheel diameter", "m"),
                ],
                assumptions: vec!["80 kg per passenger", "Mass lumped on the rim", "Structure mass ignored"],
                category: EquationCategory::Kinematics,
                source_module: "equations/rotation.rs",
                source_function: "drive_power_kw",
            },
        }
    }

    /// All categories that have at least one equation, in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = Vec::new();
        for eq in ALL_EQUATIONS {
            let category = eq.metadata().category;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories.sort_by_key(|c| c.sort_order());
        categories
    }

    /// Equations belonging to a category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }
}

/// Equations the wind load calculator applies, in evaluation order.
pub fn wind_calculation_equations() -> Vec<Equation> {
    vec![
        Equation::BasicWindVelocity,
        Equation::TerrainFactor,
        Equation::RoughnessCoefficient,
        Equation::MeanWindVelocity,
        Equation::TurbulenceIntensity,
        Equation::PeakVelocityPressure,
        Equation::WindForce,
    ]
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md reference.
///
/// # Example
///
/// ```rust
/// use ride_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Ride Designer Equations Reference"));
/// assert!(markdown.contains("Wind Actions"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Ride Designer Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run -p ride_cli -- equations --write`

This document lists all formulas used in Ride Designer calculations.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Elevation, roughness length | m |
| Velocity | m/s |
| Pressure | Pa |
| Force | kN |
| Power | kW |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 9);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let qp = Equation::PeakVelocityPressure.metadata();
        assert!(qp.formula_plain.contains("1 + 7 * I_v(z)"));
    }

    #[test]
    fn test_code_reference_citation() {
        let en = CodeReference::Eurocode1Wind { section: "4.5", equation: "4.8" };
        assert_eq!(en.citation(), "BS EN 1991-1-4 Section 4.5, Eq. 4.8");
        assert_eq!(CodeReference::Mechanics.short_form(), "Mechanics");
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        assert_eq!(cats.len(), 4);
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_wind_equations_are_wind_categories() {
        for eq in wind_calculation_equations() {
            assert_ne!(eq.metadata().category, EquationCategory::Kinematics);
        }
    }

    #[test]
    fn test_markdown_lists_every_equation() {
        let md = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name), "{:?} missing from markdown", eq);
        }
        assert!(md.contains("**Total Equations:** 9"));
    }
}
