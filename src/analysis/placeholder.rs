//! Placeholder-round detection.

use crate::core::Round;

/// True when the round record represents no actual play: no recorded
/// strokes, no recorded score, and a hole-by-hole list that is absent,
/// empty, or all zeros. The export creates such entries for rounds that
/// were started but never played.
pub fn is_placeholder(round: &Round) -> bool {
    round.recorded_strokes().is_none()
        && round.recorded_score().is_none()
        && round
            .hole_strokes
            .as_deref()
            .map_or(true, |holes| holes.iter().all(|&s| s == 0))
}
