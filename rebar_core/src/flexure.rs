//! # Singly-Reinforced Flexural Capacity
//!
//! Computes the required tension steel area for a rectangular section
//! under a factored bending moment, per the GB 50010 limit-state rules
//! with the equivalent rectangular stress block.
//!
//! ## Assumptions
//!
//! - Singly reinforced rectangular section
//! - Under-reinforced (ductile) failure enforced via the balanced relative
//!   depth xi_b; over-reinforced demand is rejected, not resolved with
//!   compression steel
//! - Minimum reinforcement ratio max(0.002, 0.45 ft/fy) applied to the
//!   gross section
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::flexure::required_steel_area;
//! use rebar_core::materials::MaterialTable;
//! use rebar_core::section::SectionGeometry;
//!
//! let table = MaterialTable::builtin();
//! let geometry = SectionGeometry::new(250.0, 500.0, 35.0);
//!
//! let requirement = required_steel_area(
//!     &geometry,
//!     table.concrete("C30").unwrap(),
//!     table.rebar("HRB400").unwrap(),
//!     150.0, // kN·m
//! )
//! .unwrap();
//!
//! assert!(requirement.required_area_mm2 > requirement.min_area_mm2);
//! assert!(requirement.xi < requirement.xi_b);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::{ConcreteProperties, RebarProperties};
use crate::section::SectionGeometry;
use crate::units::{KnM, NMm};

/// Required tension reinforcement for a section/moment pair.
///
/// Carries the relative compression-zone depth xi and the balanced limit
/// xi_b that validated it, plus the code minimum area so callers can see
/// when the minimum governed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementRequirement {
    /// Required tension steel area A_s (mm²), never below `min_area_mm2`
    pub required_area_mm2: f64,
    /// Minimum reinforcement area A_s,min (mm²)
    pub min_area_mm2: f64,
    /// Relative compression-zone depth xi
    pub xi: f64,
    /// Balanced relative depth xi_b
    pub xi_b: f64,
}

impl ReinforcementRequirement {
    /// True when the minimum-reinforcement clamp governed the result.
    pub fn minimum_governs(&self) -> bool {
        self.required_area_mm2 <= self.min_area_mm2
    }
}

/// Compute the required tension steel area.
///
/// Pure function of the inputs; no side effects. Returns
/// [`DesignError::SectionOverstressed`] when the moment cannot be carried
/// in the under-reinforced regime, covering both `xi > xi_b` and the
/// numerically prior case `alpha_s > 0.5` where the governing square root
/// is undefined. The radicand is tested explicitly before taking the root.
///
/// # Arguments
///
/// * `geometry` - Section dimensions (mm)
/// * `concrete` - Concrete grade design values
/// * `rebar` - Rebar grade design values
/// * `moment_kn_m` - Factored bending moment M (kN·m)
pub fn required_steel_area(
    geometry: &SectionGeometry,
    concrete: &ConcreteProperties,
    rebar: &RebarProperties,
    moment_kn_m: f64,
) -> DesignResult<ReinforcementRequirement> {
    geometry.validate()?;

    // Ultimate concrete compressive strain, with the linear softening
    // correction above C50
    let epsilon_cu = 0.0033 - (concrete.fcuk_mpa - 50.0) * 1.0e-5;

    // Balanced relative depth
    let xi_b = concrete.beta1 / (1.0 + rebar.fy_mpa / (epsilon_cu * rebar.es_mpa));

    // Minimum reinforcement on the gross section
    let rho_min = (0.45 * concrete.ft_mpa / rebar.fy_mpa).max(0.002);
    let min_area_mm2 = rho_min * geometry.gross_area_mm2();

    let h0 = geometry.effective_depth_mm();
    let b = geometry.width_mm;

    // Dimensionless moment coefficient; moment in N·mm
    let moment_n_mm = NMm::from(KnM(moment_kn_m)).value();
    let alpha_s = moment_n_mm / (concrete.alpha1 * concrete.fc_mpa * b * h0 * h0);

    // alpha_s > 0.5 makes the radicand negative: same failure mode as
    // xi > xi_b, guarded before the root
    let radicand = 1.0 - 2.0 * alpha_s;
    if radicand < 0.0 {
        return Err(DesignError::SectionOverstressed);
    }

    let xi = 1.0 - radicand.sqrt();
    if xi > xi_b {
        return Err(DesignError::SectionOverstressed);
    }

    let computed = concrete.alpha1 * concrete.fc_mpa * b * xi * h0 / rebar.fy_mpa;
    let required_area_mm2 = computed.max(min_area_mm2);

    Ok(ReinforcementRequirement {
        required_area_mm2,
        min_area_mm2,
        xi,
        xi_b,
    })
}
