//! The aggregation core: one forward pass over the archive's
//! non-placeholder rounds producing the full Wrapped summary.
//!
//! Rounds are visited in archive order, which is not guaranteed to be
//! chronological; first/last timestamps are tracked explicitly and the
//! best/worst pointers use strictly-better-replaces comparisons, so ties go
//! to the first-seen round without any sorting.

use crate::analysis::filter::normalize_epoch_ms;
use crate::analysis::placeholder::is_placeholder;
use crate::core::{
    Archive, CourseSummary, Courses, MostPlayed, PlayEvent, Profile, RoundRef, RoundTotals,
    ScoreStats, StatsTotals, WrappedSummary, SCHEMA_VERSION,
};
use chrono::{SecondsFormat, TimeZone, Utc};
use std::collections::{BTreeMap, HashMap};

/// `sum / count`, with zero count mapping to `None` rather than NaN or a
/// false zero.
fn average(sum: i64, count: u64) -> Option<f64> {
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Pooled rate with the same zero-denominator rule.
fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `2025-06-15T12:00:00.000Z`. `None` only for epoch values chrono cannot
/// represent.
pub fn iso_utc(ts_ms: i64) -> Option<String> {
    Utc.timestamp_millis_opt(ts_ms)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn month_key_utc(ts_ms: i64) -> Option<String> {
    Utc.timestamp_millis_opt(ts_ms)
        .single()
        .map(|dt| dt.format("%Y-%m").to_string())
}

/// Running sum/count plus best (lowest) and worst (highest) trackers for
/// one metric. Strictly-better replaces; first seen wins ties.
#[derive(Default)]
struct RunningStat {
    sum: i64,
    count: u64,
    best: Option<(i64, RoundRef)>,
    worst: Option<(i64, RoundRef)>,
}

impl RunningStat {
    fn record(&mut self, value: i64, round: &RoundRef) {
        self.sum += value;
        self.count += 1;
        if self.best.as_ref().map_or(true, |(b, _)| value < *b) {
            self.best = Some((value, round.clone()));
        }
        if self.worst.as_ref().map_or(true, |(w, _)| value > *w) {
            self.worst = Some((value, round.clone()));
        }
    }

    fn finalize(self) -> ScoreStats {
        ScoreStats {
            average: average(self.sum, self.count),
            best_round: self.best.map(|(_, r)| r),
            worst_round: self.worst.map(|(_, r)| r),
        }
    }
}

/// Per-course accumulator, alive only during the pass.
#[derive(Default)]
struct CourseAggregate {
    name: Option<String>,
    rounds_played: u64,
    strokes_sum: i64,
    strokes_count: u64,
    score_sum: i64,
    score_count: u64,
}

/// Compute the Wrapped summary for a (possibly pre-filtered) archive.
///
/// Pure apart from the `generatedAt` wall-clock stamp: identical input
/// yields identical output modulo that one field. Sparse data never errors;
/// an archive with zero non-placeholder rounds produces a complete summary
/// with zero totals and all-`None` statistics.
pub fn aggregate(archive: &Archive) -> WrappedSummary {
    let names = archive.club_name_index();

    let mut included: u64 = 0;
    let mut by_month: BTreeMap<String, u64> = BTreeMap::new();
    let mut first_ts: Option<i64> = None;
    let mut last_ts: Option<i64> = None;
    let mut strokes = RunningStat::default();
    let mut score = RunningStat::default();

    let mut birdies: u64 = 0;
    let mut pars: u64 = 0;
    let mut bogeys: u64 = 0;
    let mut double_or_worse: u64 = 0;
    let mut putts_sum: u64 = 0;
    let mut putts_rounds: u64 = 0;
    let mut fairway_hits: u64 = 0;
    let mut fairway_holes: u64 = 0;
    let mut gir_hits: u64 = 0;
    let mut gir_holes: u64 = 0;

    // Insertion order is kept alongside the map so the final stable sort
    // breaks rounds-played ties by first appearance in the archive.
    let mut course_order: Vec<String> = Vec::new();
    let mut courses: HashMap<String, CourseAggregate> = HashMap::new();

    for round in archive.rounds() {
        if is_placeholder(round) {
            continue;
        }
        included += 1;

        let ts_ms = normalize_epoch_ms(round.timestamp);
        let club_id = round.club_id().map(str::to_owned);
        let club_name = club_id
            .as_deref()
            .and_then(|id| names.get(id))
            .map(|name| (*name).to_owned());

        let round_ref = RoundRef {
            id: round.id.clone(),
            timestamp: ts_ms,
            timestamp_iso: iso_utc(ts_ms).unwrap_or_default(),
            club_id: club_id.clone(),
            club_name: club_name.clone(),
            strokes: round.recorded_strokes(),
            score: round.recorded_score(),
        };

        first_ts = Some(first_ts.map_or(ts_ms, |t| t.min(ts_ms)));
        last_ts = Some(last_ts.map_or(ts_ms, |t| t.max(ts_ms)));
        if let Some(month) = month_key_utc(ts_ms) {
            *by_month.entry(month).or_insert(0) += 1;
        }

        if let Some(value) = round_ref.strokes {
            strokes.record(value, &round_ref);
        }
        if let Some(value) = round_ref.score {
            score.record(value, &round_ref);
        }

        if let Some(stats) = &round.stats {
            birdies += u64::from(stats.birdies.unwrap_or(0));
            pars += u64::from(stats.pars.unwrap_or(0));
            bogeys += u64::from(stats.bogeys.unwrap_or(0));
            double_or_worse += u64::from(stats.double_bogey_or_worse.unwrap_or(0));

            if let Some(putts) = stats.putts.filter(|&p| p > 0) {
                putts_sum += u64::from(putts);
                putts_rounds += 1;
            }

            fairway_hits += u64::from(stats.fairway_middles.unwrap_or(0));
            fairway_holes += u64::from(stats.fairway_hole_count.unwrap_or(0));
            gir_hits += u64::from(stats.gir.unwrap_or(0));
            gir_holes += u64::from(stats.gir_hole_count.unwrap_or(0));
        }

        if let Some(id) = club_id {
            let entry = courses.entry(id.clone()).or_insert_with(|| {
                course_order.push(id.clone());
                CourseAggregate::default()
            });
            entry.rounds_played += 1;
            if entry.name.is_none() {
                entry.name = club_name;
            }
            if let Some(value) = round_ref.strokes {
                entry.strokes_sum += value;
                entry.strokes_count += 1;
            }
            if let Some(value) = round_ref.score {
                entry.score_sum += value;
                entry.score_count += 1;
            }
        }
    }

    let mut items: Vec<CourseSummary> = course_order
        .iter()
        .filter_map(|id| {
            let agg = courses.get(id)?;
            Some(CourseSummary {
                club_id: id.clone(),
                name: agg.name.clone(),
                rounds_played: agg.rounds_played,
                avg_strokes: average(agg.strokes_sum, agg.strokes_count),
                avg_score: average(agg.score_sum, agg.score_count),
            })
        })
        .collect();
    // Vec::sort_by is stable, so equal counts keep first-seen order.
    items.sort_by(|a, b| b.rounds_played.cmp(&a.rounds_played));

    let most_played = items.first().map(|c| MostPlayed {
        club_id: c.club_id.clone(),
        name: c.name.clone(),
        rounds_played: c.rounds_played,
    });

    let (user_id, user_name) = archive.profile();

    WrappedSummary {
        schema_version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        profile: Profile {
            user_id: user_id.map(str::to_owned),
            user_name: user_name.map(str::to_owned),
        },
        rounds: RoundTotals {
            total_from_archive: archive.my_data.activity_data.round_count,
            total_included: included,
            by_month_utc: by_month,
            first_round_at: first_ts.and_then(iso_utc),
            last_round_at: last_ts.and_then(iso_utc),
        },
        strokes: strokes.finalize(),
        score: score.finalize(),
        stats_totals: StatsTotals {
            birdies,
            pars,
            bogeys,
            double_bogey_or_worse: double_or_worse,
            putts: putts_sum,
            putts_avg_per_round_with_putts: average(putts_sum as i64, putts_rounds),
            fairway_hit_rate: ratio(fairway_hits, fairway_holes),
            gir_rate: ratio(gir_hits, gir_holes),
        },
        courses: Courses { most_played, items },
    }
}

/// Time-ordered play events (one per round with a club reference) for the
/// presentation layer. Sorted ascending by timestamp; the sort is stable,
/// so same-timestamp rounds keep archive order.
pub fn play_events(archive: &Archive) -> Vec<PlayEvent> {
    let names = archive.club_name_index();
    let mut events: Vec<PlayEvent> = archive
        .rounds()
        .iter()
        .filter_map(|round| {
            let club_id = round.club_id()?;
            let ts_ms = normalize_epoch_ms(round.timestamp);
            Some(PlayEvent {
                club_id: club_id.to_owned(),
                club_name: names.get(club_id).map(|name| (*name).to_owned()),
                timestamp: ts_ms,
                timestamp_iso: iso_utc(ts_ms).unwrap_or_default(),
            })
        })
        .collect();
    events.sort_by_key(|e| e.timestamp);
    events
}
