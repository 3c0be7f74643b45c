//! # Material Table File Loading
//!
//! Loads a [`MaterialTable`] from a `materials.json` file. The schema is
//! two maps keyed by grade name:
//!
//! ```json
//! {
//!   "concrete": {
//!     "C30": { "fcuk": 30.0, "fc": 14.3, "ft": 1.43, "alpha1": 1.0, "beta1": 0.8 }
//!   },
//!   "rebar": {
//!     "HRB400": { "Es": 200000.0, "fy": 360.0 }
//!   }
//! }
//! ```
//!
//! File loading lives outside the calculation engine: the engine only ever
//! sees an already-built, immutable table passed by reference.

use std::fs;
use std::path::Path;

use crate::errors::{DesignError, DesignResult};
use crate::materials::MaterialTable;

/// Load a material table from a JSON file.
pub fn load_material_table(path: impl AsRef<Path>) -> DesignResult<MaterialTable> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        DesignError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    parse_material_table(&contents)
}

/// Parse a material table from a JSON string.
pub fn parse_material_table(json: &str) -> DesignResult<MaterialTable> {
    serde_json::from_str(json).map_err(|e| DesignError::malformed_table(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "concrete": {
            "C30": { "fcuk": 30.0, "fc": 14.3, "ft": 1.43, "alpha1": 1.0, "beta1": 0.8 }
        },
        "rebar": {
            "HRB400": { "Es": 200000.0, "fy": 360.0 }
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let table = parse_material_table(SAMPLE).unwrap();
        assert_eq!(table.concrete("C30").unwrap().fc_mpa, 14.3);
        assert_eq!(table.rebar("HRB400").unwrap().fy_mpa, 360.0);
        assert!(table.concrete("C40").is_err());
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_material_table("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_TABLE");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_material_table(r#"{ "concrete": { "C30": { "fcuk": 30.0 } }, "rebar": {} }"#)
            .unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_TABLE");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_material_table("/nonexistent/materials.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_builtin_table_parses_as_schema() {
        // The builtin table serializes to the same schema the loader reads
        let json = serde_json::to_string(MaterialTable::builtin()).unwrap();
        let table = parse_material_table(&json).unwrap();
        assert_eq!(&table, MaterialTable::builtin());
    }
}
