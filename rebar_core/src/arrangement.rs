//! # Bar Arrangement Search and Economic Selection
//!
//! Enumerates feasible single- and double-row layouts of standard bar
//! diameters for a required tension steel area, then picks the layout
//! with the least over-provision.
//!
//! ## Layout rules
//!
//! - Bar count is the smallest integer whose total area meets the
//!   requirement.
//! - Minimum clear spacing is `max(25, d)` mm.
//! - A single row needs width `2*a_s + (n-1)*(d+s) <= b`.
//! - When the single row does not fit, a double row is tried, permitted
//!   only when `(h - a_s) >= 2d + 10` (room for two layers with a 10 mm
//!   clear gap). The wider row holds `ceil(n/2)` bars.
//! - Each diameter contributes at most one option, single row preferred.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::arrangement::{search_arrangements, select_economic};
//! use rebar_core::section::SectionGeometry;
//!
//! let geometry = SectionGeometry::new(250.0, 500.0, 35.0);
//! let options = search_arrangements(1000.0, &geometry);
//! assert!(!options.is_empty());
//!
//! let economic = select_economic(&options, 1000.0).unwrap();
//! assert!(economic.provided_area_mm2 >= 1000.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::section::SectionGeometry;

/// Standard bar diameter catalog (mm), ascending. Process-wide constant.
pub const BAR_DIAMETERS_MM: [u32; 16] = [
    6, 8, 10, 12, 14, 16, 18, 20, 22, 25, 28, 30, 32, 36, 40, 50,
];

/// Clear gap between the two bar layers of a double row (mm)
const ROW_CLEAR_GAP_MM: f64 = 10.0;

/// Vertical layout of the bars in the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLayout {
    /// All bars in one row at the tension face
    Single,
    /// Bars split over two rows, the wider row at the tension face
    Double,
}

impl RowLayout {
    /// Number of rows as an integer
    pub fn row_count(&self) -> u32 {
        match self {
            RowLayout::Single => 1,
            RowLayout::Double => 2,
        }
    }
}

/// One feasible (diameter, layout) combination.
///
/// Immutable once created. For a double row the second row holds
/// `bar_count - bars_per_row` bars.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_mm": 16,
///   "bar_count": 6,
///   "provided_area_mm2": 1206.4,
///   "rows": "Double",
///   "bars_per_row": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementOption {
    /// Bar diameter (mm), from the fixed catalog
    pub diameter_mm: u32,
    /// Total number of bars
    pub bar_count: u32,
    /// Total provided steel area (mm²)
    pub provided_area_mm2: f64,
    /// Single or double row
    pub rows: RowLayout,
    /// Bars in the widest (tension-face) row
    pub bars_per_row: u32,
}

impl ReinforcementOption {
    /// Area over-provided relative to a required area (mm²)
    pub fn excess_area_mm2(&self, required_area_mm2: f64) -> f64 {
        self.provided_area_mm2 - required_area_mm2
    }

    /// Bars in the second row (0 for a single row)
    pub fn bars_in_second_row(&self) -> u32 {
        self.bar_count - self.bars_per_row
    }
}

/// Cross-section area of one bar (mm²)
pub fn bar_area_mm2(diameter_mm: u32) -> f64 {
    let d = f64::from(diameter_mm);
    PI * (d / 2.0) * (d / 2.0)
}

/// Width needed to place `bars` bars of diameter `d` in one row (mm)
fn row_width_mm(bars: u32, diameter_mm: u32, cover_mm: f64) -> f64 {
    let d = f64::from(diameter_mm);
    let spacing = d.max(25.0);
    2.0 * cover_mm + f64::from(bars - 1) * (d + spacing)
}

/// Enumerate feasible arrangements for a required area.
///
/// Iterates the diameter catalog in ascending order; the returned order
/// matters only for presentation. An empty result means no catalog
/// diameter fits the section, a caller-visible failure rather than a
/// fault.
pub fn search_arrangements(
    required_area_mm2: f64,
    geometry: &SectionGeometry,
) -> Vec<ReinforcementOption> {
    let mut options = Vec::new();

    for &diameter_mm in &BAR_DIAMETERS_MM {
        let area = bar_area_mm2(diameter_mm);
        let bar_count = (required_area_mm2 / area).ceil().max(1.0) as u32;
        let provided_area_mm2 = f64::from(bar_count) * area;
        if provided_area_mm2 < required_area_mm2 {
            continue;
        }

        if row_width_mm(bar_count, diameter_mm, geometry.cover_mm) <= geometry.width_mm {
            options.push(ReinforcementOption {
                diameter_mm,
                bar_count,
                provided_area_mm2,
                rows: RowLayout::Single,
                bars_per_row: bar_count,
            });
            continue;
        }

        // Double-row fallback needs vertical room for two layers
        let depth_available = geometry.height_mm - geometry.cover_mm;
        if depth_available < 2.0 * f64::from(diameter_mm) + ROW_CLEAR_GAP_MM {
            continue;
        }

        let bars_per_row = bar_count.div_ceil(2);
        if row_width_mm(bars_per_row, diameter_mm, geometry.cover_mm) <= geometry.width_mm {
            options.push(ReinforcementOption {
                diameter_mm,
                bar_count,
                provided_area_mm2,
                rows: RowLayout::Double,
                bars_per_row,
            });
        }
    }

    options
}

/// Pick the least-excess-area option.
///
/// Ties on excess area prefer a single-row layout, then the first option
/// encountered (smallest diameter, catalog order). Returns `None` only
/// for an empty slice.
pub fn select_economic(
    options: &[ReinforcementOption],
    required_area_mm2: f64,
) -> Option<&ReinforcementOption> {
    options.iter().reduce(|best, candidate| {
        let best_excess = best.excess_area_mm2(required_area_mm2);
        let candidate_excess = candidate.excess_area_mm2(required_area_mm2);
        if candidate_excess < best_excess
            || (candidate_excess == best_excess
                && candidate.rows == RowLayout::Single
                && best.rows == RowLayout::Double)
        {
            candidate
        } else {
            best
        }
    })
}
