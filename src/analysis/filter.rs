//! Date-range filter over the archive's round collection.
//!
//! The export stores epoch timestamps with an ambiguous unit; some archives
//! carry seconds, others milliseconds. The whole pipeline operates in
//! milliseconds, and [`normalize_epoch_ms`] is the single source of truth
//! for the conversion: any value below 10^12 is taken to be seconds and
//! scaled up. Both filter bounds and round timestamps are normalized, so
//! the comparison is always ms-to-ms.

use crate::core::{Archive, Round};
use chrono::{TimeZone, Utc};

/// Values below this are seconds-since-epoch, not milliseconds.
const MS_THRESHOLD: i64 = 1_000_000_000_000;

/// Default window start: 2025-01-01T00:00:00Z in epoch milliseconds.
pub const DEFAULT_START_2025_MS: i64 = 1_735_689_600_000;

/// Default window end: the last millisecond of 2025 UTC.
pub const DEFAULT_END_2025_MS: i64 = 1_767_225_599_999;

/// Normalize an epoch value to milliseconds.
pub fn normalize_epoch_ms(ts: i64) -> i64 {
    if ts < MS_THRESHOLD {
        ts * 1000
    } else {
        ts
    }
}

/// Inclusive millisecond bounds for one UTC calendar year.
pub fn year_window_utc(year: i32) -> Option<(i64, i64)> {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let end = Utc.with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0).single()?;
    Some((start.timestamp_millis(), end.timestamp_millis() - 1))
}

/// Restrict the archive's rounds to `start_epoch ..= end_epoch`.
///
/// Pure: returns a new archive and never mutates the input, so a caller
/// holding the original value does not observe it change underfoot. The
/// archive's own `roundCount` field is rewritten to the filtered length;
/// everything else passes through unchanged.
pub fn filter_rounds(archive: &Archive, start_epoch: i64, end_epoch: i64) -> Archive {
    let start_ms = normalize_epoch_ms(start_epoch);
    let end_ms = normalize_epoch_ms(end_epoch);

    let rounds = archive.rounds();
    let kept: Vec<Round> = rounds
        .iter()
        .filter(|r| {
            let ts = normalize_epoch_ms(r.timestamp);
            ts >= start_ms && ts <= end_ms
        })
        .cloned()
        .collect();

    log::debug!(
        "round filter: kept {} of {} rounds within [{start_ms}, {end_ms}]",
        kept.len(),
        rounds.len()
    );

    let mut filtered = archive.clone();
    filtered.my_data.activity_data.round_count = Some(kept.len() as u64);
    filtered.my_data.activity_data.rounds = kept;
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::archive::{ActivityData, MyData};
    use pretty_assertions::assert_eq;

    fn round_at(id: &str, timestamp: i64) -> Round {
        Round {
            id: id.into(),
            timestamp,
            club_id: None,
            score: None,
            strokes: Some(90),
            hole_strokes: None,
            stats: None,
        }
    }

    fn archive_with_rounds(rounds: Vec<Round>) -> Archive {
        Archive {
            my_data: MyData {
                account_data: None,
                activity_data: ActivityData {
                    round_count: Some(rounds.len() as u64),
                    rounds,
                },
                club_data: None,
            },
        }
    }

    #[test]
    fn default_window_constants_match_calendar_2025() {
        let start = Utc
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        let end = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis()
            - 1;
        assert_eq!(DEFAULT_START_2025_MS, start);
        assert_eq!(DEFAULT_END_2025_MS, end);
    }

    #[test]
    fn default_window_includes_and_excludes_boundary_rounds() {
        let mid_2025 = Utc
            .with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        let end_2024 = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .single()
            .unwrap()
            .timestamp_millis();
        let start_2026 = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis();

        let archive = archive_with_rounds(vec![
            round_at("in", mid_2025),
            round_at("before", end_2024),
            round_at("after", start_2026),
        ]);
        let filtered = filter_rounds(&archive, DEFAULT_START_2025_MS, DEFAULT_END_2025_MS);

        let ids: Vec<&str> = filtered.rounds().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["in"]);
        assert_eq!(filtered.my_data.activity_data.round_count, Some(1));
    }

    #[test]
    fn second_resolution_timestamps_and_bounds_are_normalized() {
        // 2025-06-15T12:00:00Z in seconds.
        let seconds = 1_749_988_800;
        let archive = archive_with_rounds(vec![round_at("r1", seconds)]);

        // Bounds in seconds as well; both sides scale to ms.
        let filtered = filter_rounds(&archive, 1_735_689_600, 1_767_225_599);
        assert_eq!(filtered.rounds().len(), 1);
    }

    #[test]
    fn input_archive_is_not_mutated() {
        let archive = archive_with_rounds(vec![round_at("r1", 0), round_at("r2", DEFAULT_START_2025_MS)]);
        let filtered = filter_rounds(&archive, DEFAULT_START_2025_MS, DEFAULT_END_2025_MS);

        assert_eq!(archive.rounds().len(), 2);
        assert_eq!(archive.my_data.activity_data.round_count, Some(2));
        assert_eq!(filtered.rounds().len(), 1);
    }

    #[test]
    fn year_window_covers_whole_year() {
        let (start, end) = year_window_utc(2025).unwrap();
        assert_eq!(start, DEFAULT_START_2025_MS);
        assert_eq!(end, DEFAULT_END_2025_MS);
    }

    #[test]
    fn normalize_leaves_millisecond_values_alone() {
        assert_eq!(normalize_epoch_ms(1_718_000_000_000), 1_718_000_000_000);
        assert_eq!(normalize_epoch_ms(1_718_000_000), 1_718_000_000_000);
    }
}
