//! # Wind Profile Formulas
//!
//! Closed-form wind action equations after BS EN 1991-1-4 (Section 4). Each
//! function is one step of the vertical profile; the wind load calculator
//! chains them in order for every elevation sample.
//!
//! ## Notation
//!
//! - `z` = Elevation above ground (m)
//! - `z0` = Terrain roughness length (m)
//! - `v_b0` = Fundamental value of the basic wind velocity (m/s)
//! - `v_b` = Basic wind velocity (m/s)
//! - `k_r` = Terrain factor
//! - `c_r(z)` = Roughness coefficient
//! - `c_0` = Orography factor
//! - `v_m(z)` = Mean wind velocity (m/s)
//! - `I_v(z)` = Turbulence intensity
//! - `q_p(z)` = Peak velocity pressure (Pa)
//! - `F_w` = Horizontal wind force (kN)
//!
//! ## Evaluation Order
//!
//! The products are written (and evaluated) left to right exactly as listed
//! in each formula. Reordering changes the last bits of the result.

use crate::units::{KilometersPerHour, Kilonewtons, MetersPerSecond, Pascals, SquareMeters};

/// Reference wind speed the fundamental basic velocity is derived from (km/h)
pub const REFERENCE_WIND_KMH: f64 = 100.0;

/// Roughness length of terrain category II (m), the reference for `k_r`
pub const Z0_CATEGORY_II: f64 = 0.05;

/// Coefficient of the terrain factor expression
pub const TERRAIN_FACTOR_COEFFICIENT: f64 = 0.19;

/// Exponent of the terrain factor expression
pub const TERRAIN_FACTOR_EXPONENT: f64 = 0.07;

/// Turbulence factor `k_l` (recommended value)
pub const TURBULENCE_FACTOR: f64 = 1.0;

/// Peak factor multiplying `I_v` in the peak velocity pressure
pub const PEAK_FACTOR: f64 = 7.0;

/// Fundamental value of the basic wind velocity, `v_b0 = 100 / 3.6` m/s
#[inline]
pub fn fundamental_basic_wind_velocity() -> f64 {
    MetersPerSecond::from(KilometersPerHour(REFERENCE_WIND_KMH)).0
}

/// Basic wind velocity
///
/// # Formula (EN 1991-1-4, Eq. 4.1)
/// - v_b = c_dir · c_season · v_b0
#[inline]
pub fn basic_wind_velocity(c_dir: f64, c_season: f64, v_b0: f64) -> f64 {
    c_dir * c_season * v_b0
}

/// Terrain factor depending on the roughness length
///
/// # Formula (EN 1991-1-4, Eq. 4.5)
/// - k_r = 0.19 · (z0 / z0,II)^0.07
#[inline]
pub fn terrain_factor(z0: f64) -> f64 {
    TERRAIN_FACTOR_COEFFICIENT * (z0 / Z0_CATEGORY_II).powf(TERRAIN_FACTOR_EXPONENT)
}

/// Roughness coefficient at elevation z
///
/// # Formula (EN 1991-1-4, Eq. 4.4)
/// - c_r(z) = k_r · ln(z / z0)
///
/// The `z_min` floor of the code is not applied: every whole-meter sample
/// uses the logarithmic law directly.
#[inline]
pub fn roughness_coefficient(k_r: f64, z: f64, z0: f64) -> f64 {
    k_r * (z / z0).ln()
}

/// Mean wind velocity at elevation z
///
/// # Formula (EN 1991-1-4, Eq. 4.3)
/// - v_m(z) = c_r(z) · c_0(z) · v_b
#[inline]
pub fn mean_wind_velocity(c_r: f64, c_0: f64, v_b: f64) -> f64 {
    c_r * c_0 * v_b
}

/// Turbulence intensity at elevation z
///
/// # Formula (EN 1991-1-4, Eq. 4.7)
/// - I_v(z) = k_l / (c_0(z) · ln(z / z0))
#[inline]
pub fn turbulence_intensity(k_l: f64, c_0: f64, z: f64, z0: f64) -> f64 {
    k_l / (c_0 * (z / z0).ln())
}

/// Peak velocity pressure at elevation z
///
/// # Formula (EN 1991-1-4, Eq. 4.8)
/// - q_p(z) = 0.5 · ρ · v_m(z)² · (1 + 7 · I_v(z))
///
/// # Arguments
/// * `rho` - Air density (kg/m³)
/// * `v_m` - Mean wind velocity (m/s)
/// * `i_v` - Turbulence intensity
///
/// # Returns
/// Peak velocity pressure in Pa
#[inline]
pub fn peak_velocity_pressure(rho: f64, v_m: f64, i_v: f64) -> f64 {
    0.5 * rho * (v_m * v_m) * (1.0 + PEAK_FACTOR * i_v)
}

/// Horizontal wind force on a projected area
///
/// # Formula (EN 1991-1-4, Eq. 5.3, c_s·c_d = 1)
/// - F_w = q_p · c_f · A_ref / 1000
///
/// # Arguments
/// * `q_p` - Peak velocity pressure (Pa)
/// * `c_f` - Force coefficient
/// * `area` - Projected reference area (m²)
///
/// # Returns
/// Force in kN
#[inline]
pub fn wind_force_kn(q_p: f64, c_f: f64, area: f64) -> f64 {
    Kilonewtons::from(Pascals(q_p) * c_f * SquareMeters(area)).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fundamental_velocity() {
        assert_eq!(fundamental_basic_wind_velocity(), 100.0 / 3.6);
        assert!((fundamental_basic_wind_velocity() - 27.7778).abs() < 1e-4);
    }

    #[test]
    fn test_terrain_factor_category_ii() {
        // z0 = z0,II gives exactly the coefficient
        assert!((terrain_factor(0.05) - 0.19).abs() < 1e-15);
        // z0 = 0.01: 0.19 * 0.2^0.07
        assert!((terrain_factor(0.01) - 0.169756).abs() < 1e-6);
    }

    #[test]
    fn test_roughness_coefficient_at_z0_is_zero() {
        assert_eq!(roughness_coefficient(0.19, 0.05, 0.05), 0.0);
    }

    #[test]
    fn test_turbulence_intensity() {
        // ln(1000) = 6.9078
        let iv = turbulence_intensity(1.0, 1.0, 10.0, 0.01);
        assert!((iv - 1.0 / 1000f64.ln()).abs() < 1e-15);
        assert!((iv - 0.14476).abs() < 1e-5);
    }

    #[test]
    fn test_peak_velocity_pressure() {
        // 0.5 * 1.25 * 20² * (1 + 7*0.2) = 250 * 2.4 = 600 Pa
        let qp = peak_velocity_pressure(1.25, 20.0, 0.2);
        assert!((qp - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_force_is_linear_in_area() {
        let f1 = wind_force_kn(600.0, 1.2, 100.0);
        let f2 = wind_force_kn(600.0, 1.2, 200.0);
        assert!((f1 - 72.0).abs() < 1e-9);
        assert!((f2 - 2.0 * f1).abs() < 1e-9);
    }

    #[test]
    fn test_wind_force_keeps_evaluation_order() {
        let (q_p, c_f, area) = (887.31, 1.2, 303.3);
        assert_eq!(wind_force_kn(q_p, c_f, area), q_p * c_f * area / 1e3);
    }
}
