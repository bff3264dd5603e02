//! Analytics metric payloads.
//!
//! The original data model carried a free-form `metricValue` JSON blob whose
//! shape had to be guessed from `metricName`. Here each metric kind is a
//! variant of [`Metric`], serialised adjacently as `metricName`/`metricValue`
//! so the wire format is unchanged while consumers never inspect a string to
//! learn the payload shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Direction a metric moved since the previous observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Unit attached to a gauge-style measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    Percent,
    Score,
    Minutes,
}

/// A single gauge observation: value, unit, and trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub value: i64,
    pub unit: MetricUnit,
    pub trend: Trend,
}

impl Measurement {
    /// A percentage gauge.
    #[must_use]
    pub fn percent(value: i64, trend: Trend) -> Self {
        Self {
            value,
            unit: MetricUnit::Percent,
            trend,
        }
    }

    /// The zero percentage reported when no observation exists.
    #[must_use]
    pub fn absent() -> Self {
        Self::percent(0, Trend::Neutral)
    }
}

/// Per-feature interaction counts with a grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBreakdown {
    pub features: IndexMap<String, u64>,
    pub total: u64,
}

/// One named metric observation.
///
/// Serialises as `{"metricName": "adoption_rate", "metricValue": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "metricName", content = "metricValue", rename_all = "snake_case")]
pub enum Metric {
    AdoptionRate(Measurement),
    ProficiencyScore(Measurement),
    FeatureUsage(FeatureBreakdown),
    CompletionRate(Measurement),
    TimeSpent(Measurement),
}

impl Metric {
    /// The adoption-rate measurement, if this observation is one.
    #[must_use]
    pub fn as_adoption_rate(&self) -> Option<Measurement> {
        match self {
            Metric::AdoptionRate(measurement) => Some(*measurement),
            _ => None,
        }
    }
}
