//! # rebar_core - Reinforced Concrete Flexural Design Engine
//!
//! `rebar_core` sizes the tension reinforcement of singly-reinforced
//! rectangular beam sections under a factored bending moment (GB 50010
//! limit-state rules) and selects a practical bar arrangement from the
//! standard diameter catalog.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results;
//!   the only shared data are immutable material and diameter catalogs
//!   passed in explicitly
//! - **JSON-First**: All public types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
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
//! assert!(outcome.economic.provided_area_mm2 >= outcome.required_area_mm2);
//! ```
//!
//! ## Modules
//!
//! - [`design`] - One-call design entry point for front ends
//! - [`flexure`] - Required steel area from geometry, materials, moment
//! - [`arrangement`] - Bar layout search and economic selection
//! - [`materials`] - Grade tables (built-in GB 50010 values or JSON files)
//! - [`section`] - Section geometry and validation
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Material table file loading

pub mod arrangement;
pub mod design;
pub mod errors;
pub mod file_io;
pub mod flexure;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use arrangement::{ReinforcementOption, RowLayout, BAR_DIAMETERS_MM};
pub use design::{design_section, DesignOutcome, DesignRequest};
pub use errors::{DesignError, DesignResult};
pub use flexure::ReinforcementRequirement;
pub use materials::MaterialTable;
pub use section::SectionGeometry;
