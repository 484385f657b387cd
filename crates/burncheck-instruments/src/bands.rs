//! Threshold tables.
//!
//! Every cut point used by the scorers lives in one of these tables so that
//! scoring and any report renderer read the same boundaries.

use burncheck_core::models::Severity;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One tier of a [`BandTable`], starting at an inclusive lower bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T> {
    pub from: f64,
    pub value: T,
}

/// An ordered partition of the number line into tiers.
///
/// The lowest tier is unbounded below; each further tier starts at its
/// inclusive lower bound and runs up to the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable<T> {
    bands: Vec<Band<T>>,
}

impl<T> BandTable<T> {
    pub fn new(lowest: T) -> Self {
        Self {
            bands: vec![Band {
                from: f64::NEG_INFINITY,
                value: lowest,
            }],
        }
    }

    /// Add a tier starting at `from`. Tiers must be added in ascending order.
    pub fn band(mut self, from: f64, value: T) -> Self {
        debug_assert!(
            self.bands.last().is_none_or(|last| from > last.from),
            "band lower bounds must ascend"
        );
        self.bands.push(Band { from, value });
        self
    }

    pub fn classify(&self, score: f64) -> &T {
        self.bands
            .iter()
            .rev()
            .find(|band| score >= band.from)
            .map(|band| &band.value)
            .unwrap_or(&self.bands[0].value)
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }
}

/// The standard four-tier percentage partition (25 / 50 / 75).
pub fn quartile_severity() -> BandTable<Severity> {
    BandTable::new(Severity::Low)
        .band(25.0, Severity::Moderate)
        .band(50.0, Severity::High)
        .band(75.0, Severity::Critical)
}

/// An inclusive score range with the text describing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierRange {
    pub min: u32,
    pub max: u32,
    pub description: String,
}

impl TierRange {
    pub fn new(min: u32, max: u32, description: &str) -> Self {
        Self {
            min,
            max,
            description: description.to_string(),
        }
    }
}

/// Nested range table for one sub-scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierRanges {
    pub low: TierRange,
    pub moderate: TierRange,
    pub high: TierRange,
    pub severe: TierRange,
}

impl TierRanges {
    /// First tier (low, moderate, high) whose upper bound is at least
    /// `score`; anything above falls through to critical.
    pub fn classify(&self, score: u32) -> (Severity, &str) {
        let ordered = [
            (Severity::Low, &self.low),
            (Severity::Moderate, &self.moderate),
            (Severity::High, &self.high),
        ];
        ordered
            .into_iter()
            .find(|(_, range)| score <= range.max)
            .map(|(severity, range)| (severity, range.description.as_str()))
            .unwrap_or((Severity::Critical, self.severe.description.as_str()))
    }
}
