//! # Wind Load Calculation
//!
//! Computes the vertical wind profile of a ride structure after BS EN 1991-1-4:
//! mean wind velocity, turbulence intensity, peak velocity pressure and the
//! resulting horizontal loads in both axes, sampled at every whole meter from
//! 1 m up to the structure height.
//!
//! ## Assumptions
//!
//! - Fixed reference wind of 100 km/h
//! - Logarithmic profile with no `z_min` floor
//! - Turbulence factor k_l = 1
//! - Full projected areas `A_x`, `A_y` act at every elevation
//!
//! Angular velocity and gravity are carried in the input for the wider
//! structural model but do not enter the wind formulas.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::calculations::wind::compute;
//!
//! let result = compute(10, 0.628, 9.81, 1.225).unwrap();
//! assert_eq!(result.len(), 10);
//! assert!((result.vm_max_m_s - 32.573).abs() < 0.01);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::wind::{
    basic_wind_velocity, fundamental_basic_wind_velocity, mean_wind_velocity,
    peak_velocity_pressure, roughness_coefficient, terrain_factor, turbulence_intensity,
    wind_force_kn, TURBULENCE_FACTOR,
};
use crate::errors::{CalcError, CalcResult};

/// Code constants of the wind profile.
///
/// Defaults are the reference profile: a 303.3 m² / 592.5 m² projected wheel
/// in open terrain (z0 = 0.01 m) with unit directional, seasonal and
/// orography factors and a force coefficient of 1.2.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_x_m2": 303.3,
///   "area_y_m2": 592.5,
///   "roughness_length_m": 0.01,
///   "c_dir": 1.0,
///   "c_season": 1.0,
///   "c_orography": 1.0,
///   "c_force": 1.2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindCodeConstants {
    /// Projected area facing wind along x (m²)
    pub area_x_m2: f64,
    /// Projected area facing wind along y (m²)
    pub area_y_m2: f64,
    /// Terrain roughness length z0 (m)
    pub roughness_length_m: f64,
    /// Directional factor
    pub c_dir: f64,
    /// Seasonal factor
    pub c_season: f64,
    /// Orography factor c_0
    pub c_orography: f64,
    /// Force coefficient c_f
    pub c_force: f64,
}

impl Default for WindCodeConstants {
    fn default() -> Self {
        WindCodeConstants {
            area_x_m2: 303.3,
            area_y_m2: 592.5,
            roughness_length_m: 0.01,
            c_dir: 1.0,
            c_season: 1.0,
            c_orography: 1.0,
            c_force: 1.2,
        }
    }
}

/// Input parameters for a wind load profile.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height_m": 66,
///   "omega_rad_s": 0.2094,
///   "gravity_m_s2": 9.81,
///   "air_density_kg_m3": 1.225,
///   "constants": { "roughness_length_m": 0.01 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindLoadInput {
    /// Structure height as a whole number of meters
    pub height_m: i64,

    /// Wheel angular velocity (rad/s), not used by the wind formulas
    pub omega_rad_s: f64,

    /// Gravitational acceleration (m/s²), not used by the wind formulas
    pub gravity_m_s2: f64,

    /// Air density (kg/m³)
    pub air_density_kg_m3: f64,

    /// Code constants, reference profile when omitted
    #[serde(default)]
    pub constants: WindCodeConstants,
}

impl WindLoadInput {
    /// Create an input with the reference code constants.
    pub fn new(height_m: i64, omega_rad_s: f64, gravity_m_s2: f64, air_density_kg_m3: f64) -> Self {
        WindLoadInput {
            height_m,
            omega_rad_s,
            gravity_m_s2,
            air_density_kg_m3,
            constants: WindCodeConstants::default(),
        }
    }

    /// Replace the code constants.
    pub fn with_constants(mut self, constants: WindCodeConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Validate input parameters.
    ///
    /// Rejects everything that would make the profile produce NaN or infinity.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height_m < 1 {
            return Err(CalcError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Height must be at least 1 m",
            ));
        }

        let c = &self.constants;
        let scalars = [
            ("omega_rad_s", self.omega_rad_s),
            ("gravity_m_s2", self.gravity_m_s2),
            ("air_density_kg_m3", self.air_density_kg_m3),
            ("area_x_m2", c.area_x_m2),
            ("area_y_m2", c.area_y_m2),
            ("roughness_length_m", c.roughness_length_m),
            ("c_dir", c.c_dir),
            ("c_season", c.c_season),
            ("c_orography", c.c_orography),
            ("c_force", c.c_force),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
        }

        if self.omega_rad_s < 0.0 {
            return Err(CalcError::invalid_input(
                "omega_rad_s",
                self.omega_rad_s.to_string(),
                "Angular velocity cannot be negative",
            ));
        }
        if self.air_density_kg_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "air_density_kg_m3",
                self.air_density_kg_m3.to_string(),
                "Air density must be positive",
            ));
        }
        if c.roughness_length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "roughness_length_m",
                c.roughness_length_m.to_string(),
                "Roughness length must be positive",
            ));
        }
        // ln(z/z0) = 0 at a sampled elevation makes the turbulence intensity infinite
        if c.roughness_length_m >= 1.0
            && c.roughness_length_m.fract() == 0.0
            && c.roughness_length_m <= self.height_m as f64
        {
            return Err(CalcError::invalid_input(
                "roughness_length_m",
                c.roughness_length_m.to_string(),
                "Roughness length coincides with a sampled elevation",
            ));
        }
        if c.c_orography <= 0.0 {
            return Err(CalcError::invalid_input(
                "c_orography",
                c.c_orography.to_string(),
                "Orography factor must be positive",
            ));
        }
        if c.area_x_m2 < 0.0 {
            return Err(CalcError::invalid_input(
                "area_x_m2",
                c.area_x_m2.to_string(),
                "Projected area cannot be negative",
            ));
        }
        if c.area_y_m2 < 0.0 {
            return Err(CalcError::invalid_input(
                "area_y_m2",
                c.area_y_m2.to_string(),
                "Projected area cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Wind profile over the structure height.
///
/// All sequences are parallel: index `i` holds the values at elevation
/// `z_m[i] = i + 1`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "z_m": [1, 2],
///   "vm_m_s": [21.72, 24.99],
///   "iv": [0.217, 0.189],
///   "qp_pa": [734.6, 888.4],
///   "fwx_kn": [267.4, 323.3],
///   "fwy_kn": [522.3, 631.6],
///   "vm_max_m_s": 24.99
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindLoadResult {
    /// Elevations 1..=height (m)
    pub z_m: Vec<u32>,

    /// Mean wind velocity v_m(z) (m/s)
    pub vm_m_s: Vec<f64>,

    /// Turbulence intensity I_v(z)
    pub iv: Vec<f64>,

    /// Peak velocity pressure q_p(z) (Pa)
    pub qp_pa: Vec<f64>,

    /// Horizontal load along x, F_wx(z) (kN)
    pub fwx_kn: Vec<f64>,

    /// Horizontal load along y, F_wy(z) (kN)
    pub fwy_kn: Vec<f64>,

    /// Mean wind velocity at the top elevation (m/s)
    pub vm_max_m_s: f64,
}

/// One elevation row of a [`WindLoadResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindSample {
    pub z_m: u32,
    pub vm_m_s: f64,
    pub iv: f64,
    pub qp_pa: f64,
    pub fwx_kn: f64,
    pub fwy_kn: f64,
}

impl WindLoadResult {
    /// Number of elevation samples (equals the height in meters)
    pub fn len(&self) -> usize {
        self.z_m.len()
    }

    /// Always false for a result produced by [`calculate`]
    pub fn is_empty(&self) -> bool {
        self.z_m.is_empty()
    }

    /// Load along x at the top elevation (kN)
    pub fn top_fwx_kn(&self) -> f64 {
        self.fwx_kn.last().copied().unwrap_or(0.0)
    }

    /// Load along y at the top elevation (kN)
    pub fn top_fwy_kn(&self) -> f64 {
        self.fwy_kn.last().copied().unwrap_or(0.0)
    }

    /// Iterate the profile row by row, bottom to top
    pub fn samples(&self) -> impl Iterator<Item = WindSample> + '_ {
        (0..self.len()).map(move |i| WindSample {
            z_m: self.z_m[i],
            vm_m_s: self.vm_m_s[i],
            iv: self.iv[i],
            qp_pa: self.qp_pa[i],
            fwx_kn: self.fwx_kn[i],
            fwy_kn: self.fwy_kn[i],
        })
    }

    fn all_finite(&self) -> bool {
        [&self.vm_m_s, &self.iv, &self.qp_pa, &self.fwx_kn, &self.fwy_kn]
            .iter()
            .all(|values| values.iter().all(|v| v.is_finite()))
            && self.vm_max_m_s.is_finite()
    }
}

/// Calculate the wind load profile.
///
/// # Arguments
///
/// * `input` - Height, air density and code constants
///
/// # Returns
///
/// * `Ok(WindLoadResult)` - Profile with one sample per meter
/// * `Err(CalcError::InvalidInput)` - Height < 1, z0 ≤ 0, ρ ≤ 0 or any other out-of-domain input
pub fn calculate(input: &WindLoadInput) -> CalcResult<WindLoadResult> {
    input.validate()?;

    let c = &input.constants;
    let z0 = c.roughness_length_m;
    let rho = input.air_density_kg_m3;

    // Elevations are stored as u32
    let height = u32::try_from(input.height_m)
        .map_err(|_| CalcError::invalid_input("height_m", input.height_m.to_string(), "Height out of range"))?;
    let samples = height as usize;

    let v_b0 = fundamental_basic_wind_velocity();
    let v_b = basic_wind_velocity(c.c_dir, c.c_season, v_b0);
    let k_r = terrain_factor(z0);

    let mut z_m = Vec::with_capacity(samples);
    let mut vm_m_s = Vec::with_capacity(samples);
    let mut iv = Vec::with_capacity(samples);
    let mut qp_pa = Vec::with_capacity(samples);
    let mut fwx_kn = Vec::with_capacity(samples);
    let mut fwy_kn = Vec::with_capacity(samples);

    for z in 1..=height {
        let zf = f64::from(z);
        let c_r = roughness_coefficient(k_r, zf, z0);
        let v_m = mean_wind_velocity(c_r, c.c_orography, v_b);
        let i_v = turbulence_intensity(TURBULENCE_FACTOR, c.c_orography, zf, z0);
        let q_p = peak_velocity_pressure(rho, v_m, i_v);

        z_m.push(z);
        vm_m_s.push(v_m);
        iv.push(i_v);
        qp_pa.push(q_p);
        fwy_kn.push(wind_force_kn(q_p, c.c_force, c.area_y_m2));
        fwx_kn.push(wind_force_kn(q_p, c.c_force, c.area_x_m2));
    }

    let vm_max_m_s = vm_m_s
        .last()
        .copied()
        .ok_or_else(|| CalcError::calculation_failed("Wind Load", "Profile has no samples"))?;

    let result = WindLoadResult {
        z_m,
        vm_m_s,
        iv,
        qp_pa,
        fwx_kn,
        fwy_kn,
        vm_max_m_s,
    };

    if !result.all_finite() {
        return Err(CalcError::calculation_failed(
            "Wind Load",
            "Profile contains non-finite values",
        ));
    }

    debug!(
        height_m = input.height_m,
        vm_max_m_s = result.vm_max_m_s,
        top_fwx_kn = result.top_fwx_kn(),
        top_fwy_kn = result.top_fwy_kn(),
        "wind load profile computed"
    );

    Ok(result)
}

/// Calculate the profile with the reference code constants.
///
/// `omega` and `gravity` are accepted for compatibility with the caller's
/// structural model and do not affect the result.
pub fn compute(height_m: i64, omega_rad_s: f64, gravity_m_s2: f64, air_density_kg_m3: f64) -> CalcResult<WindLoadResult> {
    calculate(&WindLoadInput::new(height_m, omega_rad_s, gravity_m_s2, air_density_kg_m3))
}

// ============================================================================
// Memoization
// ============================================================================

/// Cache key: the full argument tuple with floats compared by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    height_m: i64,
    bits: [u64; 10],
}

impl From<&WindLoadInput> for CacheKey {
    fn from(input: &WindLoadInput) -> Self {
        let c = &input.constants;
        CacheKey {
            height_m: input.height_m,
            bits: [
                input.omega_rad_s.to_bits(),
                input.gravity_m_s2.to_bits(),
                input.air_density_kg_m3.to_bits(),
                c.area_x_m2.to_bits(),
                c.area_y_m2.to_bits(),
                c.roughness_length_m.to_bits(),
                c.c_dir.to_bits(),
                c.c_season.to_bits(),
                c.c_orography.to_bits(),
                c.c_force.to_bits(),
            ],
        }
    }
}

/// Thread-safe memo of wind load profiles keyed on the full input tuple.
///
/// Lookup and insert happen under one lock, so each distinct input is computed
/// at most once. Failed calculations are not stored.
#[derive(Debug, Default)]
pub struct WindLoadCache {
    entries: Mutex<HashMap<CacheKey, Arc<WindLoadResult>>>,
}

impl WindLoadCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached profile for `input`, computing and storing it on a miss.
    pub fn get_or_compute(&self, input: &WindLoadInput) -> CalcResult<Arc<WindLoadResult>> {
        let key = CacheKey::from(input);
        let mut entries = self.lock();

        if let Some(hit) = entries.get(&key) {
            debug!(height_m = input.height_m, "wind load cache hit");
            return Ok(Arc::clone(hit));
        }

        debug!(height_m = input.height_m, "wind load cache miss");
        let result = Arc::new(calculate(input)?);
        entries.insert(key, Arc::clone(&result));
        Ok(result)
    }

    /// Number of cached profiles
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached profile
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are immutable finished results, so a poisoned map is still consistent
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<WindLoadResult>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static WIND_LOAD_CACHE: Lazy<WindLoadCache> = Lazy::new(WindLoadCache::new);

/// Process-wide wind load cache
pub fn global_cache() -> &'static WindLoadCache {
    &WIND_LOAD_CACHE
}

/// Calculate through the process-wide cache.
pub fn calculate_cached(input: &WindLoadInput) -> CalcResult<Arc<WindLoadResult>> {
    WIND_LOAD_CACHE.get_or_compute(input)
}
