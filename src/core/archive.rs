//! Input document model for the 18Birdies archive export.
//!
//! The export is only partially trusted: nearly every field may be absent,
//! and `strokes`/`score` use non-positive values as a "not recorded"
//! sentinel. The model mirrors that looseness with optional fields and
//! defaults; unknown fields are ignored rather than rejected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub my_data: MyData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyData {
    #[serde(default)]
    pub account_data: Option<AccountData>,
    pub activity_data: ActivityData,
    #[serde(default)]
    pub club_data: Option<ClubData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    /// Round count as reported by the export itself; not recomputed here.
    #[serde(default)]
    pub round_count: Option<u64>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubData {
    #[serde(default)]
    pub played_clubs: Option<Vec<PlayedClub>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedClub {
    pub club_id: String,
    pub name: String,
}

/// One played (or merely created) round. A round with no strokes, no score
/// and no per-hole strokes is a placeholder and is excluded from all
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    /// Epoch timestamp; the export is ambiguous about seconds vs.
    /// milliseconds, see [`crate::analysis::normalize_epoch_ms`].
    pub timestamp: i64,
    #[serde(default)]
    pub club_id: Option<ClubRef>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub strokes: Option<i64>,
    #[serde(default)]
    pub hole_strokes: Option<Vec<i64>>,
    #[serde(default)]
    pub stats: Option<RoundStats>,
}

impl Round {
    /// Strokes with the sentinel applied: values `<= 0` are "not recorded".
    pub fn recorded_strokes(&self) -> Option<i64> {
        self.strokes.filter(|&s| s > 0)
    }

    /// Score with the sentinel applied: values `<= 0` are "not recorded".
    pub fn recorded_score(&self) -> Option<i64> {
        self.score.filter(|&s| s > 0)
    }

    /// Club id reference, flattened through the nested `{id}` wrapper.
    pub fn club_id(&self) -> Option<&str> {
        self.club_id.as_ref().and_then(|c| c.id.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Per-round stat counters from the export. All optional; the aggregation
/// treats missing counters as zero. Only a subset feeds the summary, the
/// rest is parsed and passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    #[serde(default)]
    pub aces: Option<u32>,
    #[serde(default)]
    pub double_eagle_or_better: Option<u32>,
    #[serde(default)]
    pub eagles: Option<u32>,
    #[serde(default)]
    pub birdies: Option<u32>,
    #[serde(default)]
    pub pars: Option<u32>,
    #[serde(default)]
    pub bogeys: Option<u32>,
    #[serde(default)]
    pub double_bogey_or_worse: Option<u32>,
    #[serde(default)]
    pub fairway_lefts: Option<u32>,
    #[serde(default)]
    pub fairway_middles: Option<u32>,
    #[serde(default)]
    pub fairway_rights: Option<u32>,
    #[serde(default)]
    pub fairway_shorts: Option<u32>,
    #[serde(default)]
    pub fairway_longs: Option<u32>,
    #[serde(default)]
    pub fairway_hole_count: Option<u32>,
    #[serde(default)]
    pub gir: Option<u32>,
    #[serde(default)]
    pub gir_lefts: Option<u32>,
    #[serde(default)]
    pub gir_rights: Option<u32>,
    #[serde(default)]
    pub gir_shorts: Option<u32>,
    #[serde(default)]
    pub gir_longs: Option<u32>,
    #[serde(default)]
    pub gir_no_chances: Option<u32>,
    #[serde(default)]
    pub gir_hole_count: Option<u32>,
    #[serde(default)]
    pub putts: Option<u32>,
}

impl Archive {
    pub fn rounds(&self) -> &[Round] {
        &self.my_data.activity_data.rounds
    }

    /// Profile fields passed through to the summary.
    pub fn profile(&self) -> (Option<&str>, Option<&str>) {
        match &self.my_data.account_data {
            Some(account) => (account.user_id.as_deref(), account.user_name.as_deref()),
            None => (None, None),
        }
    }

    /// Club id to display name lookup built from `playedClubs`.
    ///
    /// The export does not guarantee unique club ids; the first occurrence
    /// wins here.
    pub fn club_name_index(&self) -> HashMap<&str, &str> {
        let mut index = HashMap::new();
        let played = self
            .my_data
            .club_data
            .as_ref()
            .and_then(|c| c.played_clubs.as_deref())
            .unwrap_or_default();
        for club in played {
            index
                .entry(club.club_id.as_str())
                .or_insert(club.name.as_str());
        }
        index
    }
}
