//! # Section Design Entry Point
//!
//! One-call API for front ends (CLI, GUI, batch drivers): resolve grade
//! names, compute the required steel area, enumerate bar arrangements and
//! recommend the economic one. Success and every failure cause come back
//! as a single `Result` callers pattern-match on.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::design::{design_section, DesignRequest};
//! use rebar_core::materials::MaterialTable;
//!
//! let request = DesignRequest {
//!     concrete_grade: "C30".to_string(),
//!     rebar_grade: "HRB400".to_string(),
//!     width_mm: 250.0,
//!     height_mm: 500.0,
//!     cover_mm: 35.0,
//!     moment_kn_m: 150.0,
//! };
//!
//! let outcome = design_section(MaterialTable::builtin(), &request).unwrap();
//! println!(
//!     "A_s = {:.1} mm², recommend {} x d{}",
//!     outcome.required_area_mm2,
//!     outcome.economic.bar_count,
//!     outcome.economic.diameter_mm
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::arrangement::{search_arrangements, select_economic, ReinforcementOption};
use crate::errors::{DesignError, DesignResult};
use crate::flexure::required_steel_area;
use crate::materials::MaterialTable;
use crate::section::SectionGeometry;

/// Input for one design request.
///
/// Units: dimensions in mm, moment in kN·m.
///
/// ## JSON Example
///
/// ```json
/// {
///   "concrete_grade": "C30",
///   "rebar_grade": "HRB400",
///   "width_mm": 250.0,
///   "height_mm": 500.0,
///   "cover_mm": 35.0,
///   "moment_kn_m": 150.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Concrete grade name (e.g., "C30")
    pub concrete_grade: String,
    /// Rebar grade name (e.g., "HRB400")
    pub rebar_grade: String,
    /// Section width b (mm)
    pub width_mm: f64,
    /// Section height h (mm)
    pub height_mm: f64,
    /// Tension rebar centroid distance a_s (mm)
    pub cover_mm: f64,
    /// Factored bending moment M (kN·m)
    pub moment_kn_m: f64,
}

impl DesignRequest {
    /// Section geometry of this request
    pub fn geometry(&self) -> SectionGeometry {
        SectionGeometry::new(self.width_mm, self.height_mm, self.cover_mm)
    }
}

/// Successful design result: the requirement, every feasible arrangement,
/// and the recommended economic one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignOutcome {
    /// Required tension steel area A_s (mm²)
    pub required_area_mm2: f64,
    /// Minimum reinforcement area A_s,min (mm²)
    pub min_area_mm2: f64,
    /// Relative compression-zone depth xi
    pub xi: f64,
    /// Balanced relative depth xi_b
    pub xi_b: f64,
    /// All feasible arrangements, ascending diameter order
    pub options: Vec<ReinforcementOption>,
    /// The least-excess-area arrangement
    pub economic: ReinforcementOption,
}

/// Run a full design request against a material table.
///
/// Control flow per the failure taxonomy: unknown grades and invalid
/// geometry are rejected first, an oversized moment surfaces as
/// [`DesignError::SectionOverstressed`], and an empty arrangement search
/// as [`DesignError::NoArrangementFits`].
pub fn design_section(
    table: &MaterialTable,
    request: &DesignRequest,
) -> DesignResult<DesignOutcome> {
    let concrete = table.concrete(&request.concrete_grade)?;
    let rebar = table.rebar(&request.rebar_grade)?;
    let geometry = request.geometry();

    let requirement = required_steel_area(&geometry, concrete, rebar, request.moment_kn_m)?;

    let options = search_arrangements(requirement.required_area_mm2, &geometry);
    let economic = select_economic(&options, requirement.required_area_mm2)
        .copied()
        .ok_or(DesignError::NoArrangementFits)?;

    Ok(DesignOutcome {
        required_area_mm2: requirement.required_area_mm2,
        min_area_mm2: requirement.min_area_mm2,
        xi: requirement.xi,
        xi_b: requirement.xi_b,
        options,
        economic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::RowLayout;

    fn test_request() -> DesignRequest {
        DesignRequest {
            concrete_grade: "C30".to_string(),
            rebar_grade: "HRB400".to_string(),
            width_mm: 250.0,
            height_mm: 500.0,
            cover_mm: 35.0,
            moment_kn_m: 150.0,
        }
    }

    #[test]
    fn test_full_pipeline() {
        let outcome = design_section(MaterialTable::builtin(), &test_request()).unwrap();

        assert!((outcome.required_area_mm2 - 1006.0).abs() < 3.0);
        assert!(!outcome.options.is_empty());
        assert!(outcome.options.contains(&outcome.economic));

        for option in &outcome.options {
            assert!(option.provided_area_mm2 >= outcome.required_area_mm2);
        }
        for option in &outcome.options {
            assert!(
                outcome.economic.excess_area_mm2(outcome.required_area_mm2)
                    <= option.excess_area_mm2(outcome.required_area_mm2) + 1e-9
            );
        }
    }

    #[test]
    fn test_minimum_governed_small_moment() {
        let mut request = test_request();
        request.moment_kn_m = 20.0;
        let outcome = design_section(MaterialTable::builtin(), &request).unwrap();

        // Minimum ratio governs; generous section gives several single-row
        // options and a small-diameter economic pick
        assert_eq!(outcome.required_area_mm2, outcome.min_area_mm2);
        assert!(outcome.options.len() > 3);
        assert!(outcome
            .options
            .iter()
            .any(|o| o.rows == RowLayout::Single));
        // 5 x d8 in one row provides 251.3 mm² against the 250 mm² minimum
        assert_eq!(outcome.economic.rows, RowLayout::Single);
        assert_eq!(outcome.economic.diameter_mm, 8);
        assert_eq!(outcome.economic.bar_count, 5);
    }

    #[test]
    fn test_unknown_concrete_grade() {
        let mut request = test_request();
        request.concrete_grade = "C99".to_string();
        let err = design_section(MaterialTable::builtin(), &request).unwrap_err();
        assert_eq!(
            err,
            DesignError::unknown_grade("concrete", "C99")
        );
    }

    #[test]
    fn test_unknown_rebar_grade() {
        let mut request = test_request();
        request.rebar_grade = "HRB900".to_string();
        let err = design_section(MaterialTable::builtin(), &request).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_overstressed_section() {
        let mut request = test_request();
        request.moment_kn_m = 400.0;
        let err = design_section(MaterialTable::builtin(), &request).unwrap_err();
        assert_eq!(err, DesignError::SectionOverstressed);
    }

    #[test]
    fn test_no_arrangement_fits() {
        // Valid flexural result, but 2 * cover exceeds the width so no
        // catalog diameter can be placed
        let request = DesignRequest {
            concrete_grade: "C30".to_string(),
            rebar_grade: "HRB400".to_string(),
            width_mm: 75.0,
            height_mm: 300.0,
            cover_mm: 40.0,
            moment_kn_m: 10.0,
        };
        let err = design_section(MaterialTable::builtin(), &request).unwrap_err();
        assert_eq!(err, DesignError::NoArrangementFits);
    }

    #[test]
    fn test_invalid_geometry() {
        let mut request = test_request();
        request.cover_mm = 600.0;
        let err = design_section(MaterialTable::builtin(), &request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = design_section(MaterialTable::builtin(), &test_request()).unwrap();
        let json = serde_json::to_string_pretty(&outcome).unwrap();
        assert!(json.contains("required_area_mm2"));
        assert!(json.contains("economic"));

        let roundtrip: DesignOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, roundtrip);
    }

    #[test]
    fn test_request_serialization() {
        let request = test_request();
        let json = serde_json::to_string(&request).unwrap();
        let roundtrip: DesignRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, roundtrip);
    }
}
