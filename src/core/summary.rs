//! The Wrapped summary: the normalized output record consumed by
//! presentation layers. Immutable once constructed and schema-versioned so
//! downstream consumers can detect incompatible future shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Literal version tag carried in every summary.
pub const SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedSummary {
    pub schema_version: String,
    /// Aggregation wall-clock time; the only non-deterministic field.
    pub generated_at: String,
    pub profile: Profile,
    pub rounds: RoundTotals,
    pub strokes: ScoreStats,
    pub score: ScoreStats,
    pub stats_totals: StatsTotals,
    pub courses: Courses,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTotals {
    /// Round count as claimed by the archive itself, if present.
    pub total_from_archive: Option<u64>,
    /// Non-placeholder rounds that fed the aggregation.
    pub total_included: u64,
    /// Histogram keyed by UTC calendar month, e.g. `"2025-03"`.
    pub by_month_utc: BTreeMap<String, u64>,
    pub first_round_at: Option<String>,
    pub last_round_at: Option<String>,
}

/// Average plus best/worst round pointers for one metric (strokes or score).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStats {
    pub average: Option<f64>,
    pub best_round: Option<RoundRef>,
    pub worst_round: Option<RoundRef>,
}

/// Denormalized snapshot of one round. Built once during aggregation and
/// never mutated afterwards; best/worst pointers each own their copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRef {
    pub id: String,
    /// Epoch milliseconds, normalized.
    pub timestamp: i64,
    pub timestamp_iso: String,
    pub club_id: Option<String>,
    pub club_name: Option<String>,
    pub strokes: Option<i64>,
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTotals {
    pub birdies: u64,
    pub pars: u64,
    pub bogeys: u64,
    pub double_bogey_or_worse: u64,
    pub putts: u64,
    /// Denominator is the count of rounds that recorded putts, not the
    /// total included rounds.
    pub putts_avg_per_round_with_putts: Option<f64>,
    /// Pooled hit rate: fairway hits over fairway holes across all rounds.
    pub fairway_hit_rate: Option<f64>,
    /// Pooled greens-in-regulation rate.
    pub gir_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courses {
    pub most_played: Option<MostPlayed>,
    /// All played courses, sorted by rounds played descending. Ties keep
    /// first-seen archive order.
    pub items: Vec<CourseSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostPlayed {
    pub club_id: String,
    pub name: Option<String>,
    pub rounds_played: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub club_id: String,
    pub name: Option<String>,
    pub rounds_played: u64,
    pub avg_strokes: Option<f64>,
    pub avg_score: Option<f64>,
}

/// One time-ordered play event for the presentation layer's map animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    pub club_id: String,
    pub club_name: Option<String>,
    /// Epoch milliseconds, normalized.
    pub timestamp: i64,
    pub timestamp_iso: String,
}
