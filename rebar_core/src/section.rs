//! Rectangular section geometry.
//!
//! Dimensions are in millimeters. `cover_mm` is the distance from the
//! tension face to the centroid of the tension reinforcement (a_s), so the
//! effective depth is `h0 = height - cover`.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Rectangular beam cross-section.
///
/// ## JSON Example
///
/// ```json
/// { "width_mm": 250.0, "height_mm": 500.0, "cover_mm": 35.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Section width b (mm)
    pub width_mm: f64,
    /// Section height h (mm)
    pub height_mm: f64,
    /// Distance from tension face to rebar centroid a_s (mm)
    pub cover_mm: f64,
}

impl SectionGeometry {
    pub fn new(width_mm: f64, height_mm: f64, cover_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            cover_mm,
        }
    }

    /// Validate the geometry invariants: positive width and height,
    /// 0 < cover < height (so the effective depth is positive).
    pub fn validate(&self) -> DesignResult<()> {
        if self.width_mm <= 0.0 {
            return Err(DesignError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if self.height_mm <= 0.0 {
            return Err(DesignError::invalid_input(
                "height_mm",
                self.height_mm.to_string(),
                "Height must be positive",
            ));
        }
        if self.cover_mm <= 0.0 {
            return Err(DesignError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover must be positive",
            ));
        }
        if self.cover_mm >= self.height_mm {
            return Err(DesignError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover must be less than section height (effective depth <= 0)",
            ));
        }
        Ok(())
    }

    /// Effective depth h0 = h - a_s (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.height_mm - self.cover_mm
    }

    /// Gross section area b * h (mm²)
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_geometry() {
        let geometry = SectionGeometry::new(250.0, 500.0, 35.0);
        assert!(geometry.validate().is_ok());
        assert_eq!(geometry.effective_depth_mm(), 465.0);
        assert_eq!(geometry.gross_area_mm2(), 125_000.0);
    }

    #[test]
    fn test_nonpositive_dimensions() {
        assert!(SectionGeometry::new(0.0, 500.0, 35.0).validate().is_err());
        assert!(SectionGeometry::new(250.0, -500.0, 35.0).validate().is_err());
        assert!(SectionGeometry::new(250.0, 500.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_cover_exceeds_height() {
        let geometry = SectionGeometry::new(250.0, 500.0, 500.0);
        let err = geometry.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let geometry = SectionGeometry::new(250.0, 500.0, 35.0);
        let json = serde_json::to_string(&geometry).unwrap();
        let roundtrip: SectionGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geometry, roundtrip);
    }
}
