//! # Materials Database
//!
//! Material property definitions and grade lookups for reinforced
//! concrete design per GB 50010.
//!
//! Grades are looked up by name (e.g., "C30", "HRB400") in a
//! [`MaterialTable`]. A table is either the compiled-in default
//! ([`MaterialTable::builtin`]) or loaded from a `materials.json` file via
//! [`crate::file_io::load_material_table`]. A missing grade is surfaced as
//! [`DesignError::UnknownGrade`], never silently defaulted.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::materials::MaterialTable;
//!
//! let table = MaterialTable::builtin();
//! let concrete = table.concrete("C30").unwrap();
//! let rebar = table.rebar("HRB400").unwrap();
//!
//! assert_eq!(concrete.fc_mpa, 14.3);
//! assert_eq!(rebar.fy_mpa, 360.0);
//! ```

pub mod builtin;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::units::Mpa;

/// Design properties of a concrete grade.
///
/// All strengths are design values in MPa. `alpha1` and `beta1` are the
/// equivalent rectangular stress-block coefficients, grade dependent above
/// C50.
///
/// Serde field names follow the `materials.json` schema (`fcuk`, `fc`,
/// `ft`, `alpha1`, `beta1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Characteristic cube compressive strength f_cu,k (MPa)
    #[serde(rename = "fcuk")]
    pub fcuk_mpa: f64,
    /// Design axial compressive strength f_c (MPa)
    #[serde(rename = "fc")]
    pub fc_mpa: f64,
    /// Design axial tensile strength f_t (MPa)
    #[serde(rename = "ft")]
    pub ft_mpa: f64,
    /// Stress-block intensity coefficient alpha_1
    pub alpha1: f64,
    /// Stress-block depth coefficient beta_1
    pub beta1: f64,
}

impl ConcreteProperties {
    /// Get f_c as a typed unit
    pub fn fc(&self) -> Mpa {
        Mpa(self.fc_mpa)
    }

    /// Get f_t as a typed unit
    pub fn ft(&self) -> Mpa {
        Mpa(self.ft_mpa)
    }
}

/// Design properties of a rebar grade.
///
/// Serde field names follow the `materials.json` schema (`Es`, `fy`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarProperties {
    /// Elastic modulus E_s (MPa)
    #[serde(rename = "Es")]
    pub es_mpa: f64,
    /// Design tensile yield strength f_y (MPa)
    #[serde(rename = "fy")]
    pub fy_mpa: f64,
}

impl RebarProperties {
    /// Get f_y as a typed unit
    pub fn fy(&self) -> Mpa {
        Mpa(self.fy_mpa)
    }

    /// Get E_s as a typed unit
    pub fn es(&self) -> Mpa {
        Mpa(self.es_mpa)
    }
}

/// Immutable grade-name keyed material table.
///
/// Built once (from the compiled-in defaults or a JSON file) and passed
/// by reference into the design functions. Read-only after construction,
/// so it is safe to share across concurrent callers without locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTable {
    pub concrete: HashMap<String, ConcreteProperties>,
    pub rebar: HashMap<String, RebarProperties>,
}

static BUILTIN_TABLE: Lazy<MaterialTable> = Lazy::new(|| MaterialTable {
    concrete: builtin::CONCRETE_GRADES
        .iter()
        .map(|(name, props)| (name.to_string(), *props))
        .collect(),
    rebar: builtin::REBAR_GRADES
        .iter()
        .map(|(name, props)| (name.to_string(), *props))
        .collect(),
});

impl MaterialTable {
    /// The compiled-in GB 50010 table (C20..C80, HPB300..HRBF500).
    pub fn builtin() -> &'static MaterialTable {
        &BUILTIN_TABLE
    }

    /// Look up a concrete grade by name.
    pub fn concrete(&self, grade: &str) -> DesignResult<&ConcreteProperties> {
        self.concrete
            .get(grade)
            .ok_or_else(|| DesignError::unknown_grade("concrete", grade))
    }

    /// Look up a rebar grade by name.
    pub fn rebar(&self, grade: &str) -> DesignResult<&RebarProperties> {
        self.rebar
            .get(grade)
            .ok_or_else(|| DesignError::unknown_grade("rebar", grade))
    }

    /// Concrete grade names, sorted for UI listing.
    pub fn concrete_grades(&self) -> Vec<&str> {
        let mut grades: Vec<&str> = self.concrete.keys().map(String::as_str).collect();
        grades.sort_unstable();
        grades
    }

    /// Rebar grade names, sorted for UI listing.
    pub fn rebar_grades(&self) -> Vec<&str> {
        let mut grades: Vec<&str> = self.rebar.keys().map(String::as_str).collect();
        grades.sort_unstable();
        grades
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_concrete_lookup() {
        let table = MaterialTable::builtin();
        let c30 = table.concrete("C30").unwrap();
        assert_eq!(c30.fcuk_mpa, 30.0);
        assert_eq!(c30.fc_mpa, 14.3);
        assert_eq!(c30.ft_mpa, 1.43);
        assert_eq!(c30.alpha1, 1.0);
        assert_eq!(c30.beta1, 0.8);
    }

    #[test]
    fn test_builtin_rebar_lookup() {
        let table = MaterialTable::builtin();
        let hrb400 = table.rebar("HRB400").unwrap();
        assert_eq!(hrb400.fy_mpa, 360.0);
        assert_eq!(hrb400.es_mpa, 200_000.0);

        let hpb300 = table.rebar("HPB300").unwrap();
        assert_eq!(hpb300.fy_mpa, 270.0);
        assert_eq!(hpb300.es_mpa, 210_000.0);
    }

    #[test]
    fn test_high_grade_stress_block_coefficients() {
        let table = MaterialTable::builtin();
        // Coefficients taper above C50
        let c50 = table.concrete("C50").unwrap();
        let c80 = table.concrete("C80").unwrap();
        assert_eq!(c50.alpha1, 1.0);
        assert_eq!(c50.beta1, 0.8);
        assert_eq!(c80.alpha1, 0.94);
        assert_eq!(c80.beta1, 0.74);
    }

    #[test]
    fn test_unknown_grade() {
        let table = MaterialTable::builtin();
        let err = table.concrete("C95").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
        assert!(table.rebar("HRB700").is_err());
    }

    #[test]
    fn test_grade_listing_sorted() {
        let table = MaterialTable::builtin();
        let grades = table.concrete_grades();
        assert!(grades.contains(&"C30"));
        let mut sorted = grades.clone();
        sorted.sort_unstable();
        assert_eq!(grades, sorted);
    }

    #[test]
    fn test_json_schema_field_names() {
        let table = MaterialTable::builtin();
        let c30 = table.concrete("C30").unwrap();
        let json = serde_json::to_string(c30).unwrap();
        assert!(json.contains("\"fcuk\":"));
        assert!(json.contains("\"alpha1\":"));

        let hrb400 = table.rebar("HRB400").unwrap();
        let json = serde_json::to_string(hrb400).unwrap();
        assert!(json.contains("\"Es\":"));
        assert!(json.contains("\"fy\":"));
    }

    #[test]
    fn test_table_roundtrip() {
        let table = MaterialTable::builtin();
        let json = serde_json::to_string(table).unwrap();
        let roundtrip: MaterialTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, &roundtrip);
    }
}
