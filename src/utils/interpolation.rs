use bevy::log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Piecewise-linear lookup table with clamped boundary values.
///
/// Points are kept stable-sorted by `x` and every key is finite; points
/// with a NaN or infinite key are dropped with a warning. Equal keys
/// (`-0.0` and `0.0` included) are legal and keep
/// their insertion order: an exact lookup returns the most recently
/// inserted value for that key, while queries just below the key
/// interpolate toward the earliest one, so a duplicated key describes a
/// step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableConfig", into = "TableConfig")]
pub struct InterpolationTable {
    points: Vec<(f64, f64)>,
    low: Option<f64>,
    high: Option<f64>,
}

/// Serialized form of a table: `{ points: [[x, y], ...], low, high }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableConfig {
    points: Vec<[f64; 2]>,
    #[serde(default)]
    low: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
}

impl From<TableConfig> for InterpolationTable {
    fn from(config: TableConfig) -> Self {
        Self::new(
            config.points.into_iter().map(|[x, y]| (x, y)).collect(),
            config.low,
            config.high,
        )
    }
}

impl From<InterpolationTable> for TableConfig {
    fn from(table: InterpolationTable) -> Self {
        Self {
            points: table.points.into_iter().map(|(x, y)| [x, y]).collect(),
            low: table.low,
            high: table.high,
        }
    }
}

impl InterpolationTable {
    /// Creates a table from unordered points.
    ///
    /// # Arguments
    /// * `points` - `(x, y)` pairs in any order. Non-finite keys are dropped.
    /// * `low` - Value returned below the smallest key, `None` for a domain error.
    /// * `high` - Value returned above the largest key, `None` for a domain error.
    pub fn new(points: Vec<(f64, f64)>, low: Option<f64>, high: Option<f64>) -> Self {
        let mut points: Vec<(f64, f64)> = points
            .into_iter()
            .filter(|&(x, y)| finite_key(x, y))
            .collect();
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        Self { points, low, high }
    }

    /// Creates a table that returns `low`/`high` outside its domain.
    pub fn clamped(points: Vec<(f64, f64)>, low: f64, high: f64) -> Self {
        Self::new(points, Some(low), Some(high))
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn low(&self) -> Option<f64> {
        self.low
    }

    pub fn high(&self) -> Option<f64> {
        self.high
    }

    pub fn set_low(&mut self, value: Option<f64>) {
        self.low = value;
    }

    pub fn set_high(&mut self, value: Option<f64>) {
        self.high = value;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when every finite query has an answer.
    pub fn is_total(&self) -> bool {
        !self.points.is_empty() && self.low.is_some() && self.high.is_some()
    }

    /// Inserts a point after any existing points with the same key.
    ///
    /// Returns false, leaving the table unchanged, for a non-finite key.
    pub fn insert(&mut self, x: f64, y: f64) -> bool {
        if !finite_key(x, y) {
            return false;
        }
        let index = self.points.partition_point(|p| p.0 <= x);
        self.points.insert(index, (x, y));
        true
    }

    /// Looks up `y` for `x`.
    ///
    /// Returns `None` for an empty table, a NaN query, or a query outside
    /// the domain when the matching default is unset.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        if x.is_nan() {
            return None;
        }
        let first = self.points.first()?;
        let last = self.points.last()?;
        if x < first.0 {
            return self.low;
        }
        if x > last.0 {
            return self.high;
        }

        let upper = self.points.partition_point(|p| p.0 < x);
        let (x1, y1) = self.points[upper];
        if x1 == x {
            let end = self.points.partition_point(|p| p.0 <= x);
            return Some(self.points[end - 1].1);
        }

        // x > first.0 here, so upper > 0
        let (x0, y0) = self.points[upper - 1];
        if x1 == x0 {
            return Some(y0);
        }
        Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }
}

fn finite_key(x: f64, y: f64) -> bool {
    if x.is_finite() {
        true
    } else {
        warn!("Dropping table point ({}, {}) with a non-finite key", x, y);
        false
    }
}
