//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used throughout the crate.
//! Simple newtype wrappers over `f64` rather than a full units library:
//! the design code uses one consistent metric set, JSON serialization stays
//! clean (just numbers), and there is no runtime overhead.
//!
//! ## Metric Units (Primary)
//!
//! Rebarcalc follows the GB 50010 unit conventions:
//! - Length: millimeters (mm)
//! - Area: square millimeters (mm²)
//! - Stress / elastic modulus: megapascals (MPa)
//! - Moment: kilonewton-meters (kN·m) at the API, newton-millimeters
//!   (N·mm) inside the stress-block equations
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::units::{KnM, NMm};
//!
//! let moment = KnM(150.0);
//! let moment_n_mm: NMm = moment.into();
//! assert_eq!(moment_n_mm.0, 150.0e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm2(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(m: KnM) -> Self {
        NMm(m.0 * 1.0e6)
    }
}

impl From<NMm> for KnM {
    fn from(m: NMm) -> Self {
        KnM(m.0 / 1.0e6)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Mm);
impl_arithmetic!(Mm2);
impl_arithmetic!(Mpa);
impl_arithmetic!(KnM);
impl_arithmetic!(NMm);
