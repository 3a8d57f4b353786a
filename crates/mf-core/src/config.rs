//! Model configuration.
//!
//! Every stage receives its configuration explicitly through its constructor;
//! there is no process-wide default object.  [`ModelConfig::default`]
//! reproduces the reference parameter set (AM peak, single increment,
//! shortest-path loading, standard BPR coefficients).
//!
//! Structurally invalid values are rejected by the `validate` methods, which
//! the builders and the assignment engine call before doing any work.

use crate::{CoreError, CoreResult};

// ── AnalysisPeriod ────────────────────────────────────────────────────────────

/// The single modelled time period.  Informational only: demand and
/// capacities are per period, whatever its length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisPeriod {
    pub key:    String,
    /// Wall-clock window in `HH:MM-HH:MM` form.
    pub window: String,
}

impl Default for AnalysisPeriod {
    fn default() -> Self {
        Self { key: "AM_PEAK".to_owned(), window: "07:00-09:00".to_owned() }
    }
}

// ── BPR & assignment ──────────────────────────────────────────────────────────

/// Coefficients of the BPR link-performance function
/// `t = t0 · (1 + alpha · (v / c)^beta)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BprParams {
    pub alpha: f64,
    pub beta:  f64,
}

impl Default for BprParams {
    fn default() -> Self {
        Self { alpha: 0.15, beta: 4.0 }
    }
}

impl BprParams {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(CoreError::config("bpr.alpha", format!("must be >= 0, got {}", self.alpha)));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(CoreError::config("bpr.beta", format!("must be >= 0, got {}", self.beta)));
        }
        Ok(())
    }
}

/// Parameters of one incremental assignment run.  Immutable for the run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentConfig {
    /// Fractions of total demand loaded per step, in order.  Intended to sum
    /// to 1.0; this is not enforced.
    pub increments: Vec<f64>,
    /// Logit dispersion parameter.  Larger values concentrate flow on the
    /// cheapest path.
    pub theta:      f64,
    /// Number of candidate paths per OD pair.  1 = all-or-nothing on the
    /// shortest path.
    pub k_paths:    usize,
    pub bpr:        BprParams,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            increments: vec![1.0],
            theta:      0.1,
            k_paths:    1,
            bpr:        BprParams::default(),
        }
    }
}

impl AssignmentConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.theta.is_finite() && self.theta > 0.0) {
            return Err(CoreError::config("theta", format!("must be > 0, got {}", self.theta)));
        }
        if self.k_paths == 0 {
            return Err(CoreError::config("k_paths", "must be >= 1"));
        }
        if let Some(f) = self.increments.iter().find(|f| !(f.is_finite() && **f >= 0.0)) {
            return Err(CoreError::config("increments", format!("fractions must be >= 0, got {f}")));
        }
        self.bpr.validate()
    }

    /// Sum of all increment fractions (1.0 for a complete loading).
    pub fn total_fraction(&self) -> f64 {
        self.increments.iter().sum()
    }
}

// ── Trip generation ───────────────────────────────────────────────────────────

/// Trip-generation unit rates: trips per resident and per employee.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRates {
    pub production_per_resident: f64,
    pub production_per_employee: f64,
    pub attraction_per_resident: f64,
    pub attraction_per_employee: f64,
}

impl Default for UnitRates {
    fn default() -> Self {
        Self {
            production_per_resident: 0.4,
            production_per_employee: 0.0,
            attraction_per_resident: 0.1,
            attraction_per_employee: 0.4,
        }
    }
}

impl UnitRates {
    pub fn validate(&self) -> CoreResult<()> {
        let rates = [
            ("units.production_per_resident", self.production_per_resident),
            ("units.production_per_employee", self.production_per_employee),
            ("units.attraction_per_resident", self.attraction_per_resident),
            ("units.attraction_per_employee", self.attraction_per_employee),
        ];
        for (field, rate) in rates {
            if !(rate.is_finite() && rate >= 0.0) {
                return Err(CoreError::config(field, format!("must be >= 0, got {rate}")));
            }
        }
        Ok(())
    }
}

// ── Link classes ──────────────────────────────────────────────────────────────

/// Physical attributes shared by every link of one kind.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkClass {
    pub length_km:      f64,
    /// Vehicles per period.  Zero makes the link impassable.
    pub capacity:       f64,
    pub free_speed_kmh: f64,
}

impl LinkClass {
    pub const fn new(length_km: f64, capacity: f64, free_speed_kmh: f64) -> Self {
        Self { length_km, capacity, free_speed_kmh }
    }

    /// Free-flow travel time in minutes.
    #[inline]
    pub fn free_time_min(&self) -> f64 {
        self.length_km / self.free_speed_kmh * 60.0
    }

    fn validate(&self, field: &'static str) -> CoreResult<()> {
        if !(self.length_km.is_finite() && self.length_km >= 0.0) {
            return Err(CoreError::config(field, format!("length_km must be >= 0, got {}", self.length_km)));
        }
        if self.capacity.is_nan() || self.capacity < 0.0 {
            return Err(CoreError::config(field, format!("capacity must be >= 0, got {}", self.capacity)));
        }
        if !(self.free_speed_kmh.is_finite() && self.free_speed_kmh > 0.0) {
            return Err(CoreError::config(
                field,
                format!("free_speed_kmh must be > 0, got {}", self.free_speed_kmh),
            ));
        }
        Ok(())
    }
}

/// Attributes for the three synthetic link kinds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkClasses {
    /// Centroid ↔ boundary, same zone.
    pub internal:  LinkClass,
    /// Boundary → boundary, same zone.
    pub passing:   LinkClass,
    /// Boundary ↔ boundary across a shared cell edge.  Effectively uncongested.
    pub connector: LinkClass,
}

impl Default for LinkClasses {
    fn default() -> Self {
        Self {
            internal:  LinkClass::new(0.25, 500.0, 30.0),
            passing:   LinkClass::new(0.5, 1_000.0, 40.0),
            connector: LinkClass::new(0.01, 9_999.0, 60.0),
        }
    }
}

impl LinkClasses {
    pub fn validate(&self) -> CoreResult<()> {
        self.internal.validate("links.internal")?;
        self.passing.validate("links.passing")?;
        self.connector.validate("links.connector")
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration of one model instance.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and split into its parts for each stage.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    pub period:     AnalysisPeriod,
    pub assignment: AssignmentConfig,
    pub units:      UnitRates,
    pub links:      LinkClasses,
}

impl ModelConfig {
    /// Validate every section.
    pub fn validate(&self) -> CoreResult<()> {
        self.assignment.validate()?;
        self.units.validate()?;
        self.links.validate()
    }
}
