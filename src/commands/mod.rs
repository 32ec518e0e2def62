//! CLI command implementations.
//!
//! Each submodule handles one subcommand with a plain config struct and a
//! `handle_*` entry point:
//! - **wrapped**: filter the archive to a date window and aggregate it into
//!   the Wrapped summary
//! - **courses**: resolve map coordinates for the played courses through
//!   the tiered geocoding chain
//! - **timeline**: emit time-ordered play events for presentation layers

pub mod courses;
pub mod timeline;
pub mod wrapped;

pub use courses::{handle_courses, CoursesConfig};
pub use timeline::{handle_timeline, TimelineConfig};
pub use wrapped::{handle_wrapped, WrappedConfig};

use crate::analysis::{year_window_utc, DEFAULT_END_2025_MS, DEFAULT_START_2025_MS};
use anyhow::{anyhow, Context, Result};
use chrono::DateTime;

/// Turn the shared window flags into inclusive epoch bounds.
///
/// `None` means no filtering at all (`--all`). Bounds may be raw epoch
/// values (seconds or milliseconds, normalized later) or RFC 3339
/// timestamps; absent bounds fall back to the calendar-2025 defaults.
pub fn resolve_window(
    from: Option<String>,
    to: Option<String>,
    year: Option<i32>,
    all: bool,
) -> Result<Option<(i64, i64)>> {
    if all {
        return Ok(None);
    }
    if let Some(year) = year {
        let window = year_window_utc(year)
            .ok_or_else(|| anyhow!("year {year} is outside the representable range"))?;
        return Ok(Some(window));
    }

    let start = match from {
        Some(raw) => parse_epoch_or_rfc3339(&raw)?,
        None => DEFAULT_START_2025_MS,
    };
    let end = match to {
        Some(raw) => parse_epoch_or_rfc3339(&raw)?,
        None => DEFAULT_END_2025_MS,
    };
    Ok(Some((start, end)))
}

fn parse_epoch_or_rfc3339(raw: &str) -> Result<i64> {
    if let Ok(epoch) = raw.parse::<i64>() {
        return Ok(epoch);
    }
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid window bound {raw:?} (expected epoch or RFC 3339)"))?;
    Ok(parsed.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_disables_the_window() {
        assert_eq!(resolve_window(None, None, None, true).unwrap(), None);
    }

    #[test]
    fn defaults_to_calendar_2025() {
        assert_eq!(
            resolve_window(None, None, None, false).unwrap(),
            Some((DEFAULT_START_2025_MS, DEFAULT_END_2025_MS))
        );
    }

    #[test]
    fn year_flag_builds_that_years_window() {
        let (start, end) = resolve_window(None, None, Some(2025), false)
            .unwrap()
            .unwrap();
        assert_eq!((start, end), (DEFAULT_START_2025_MS, DEFAULT_END_2025_MS));
    }

    #[test]
    fn bounds_accept_epoch_and_rfc3339() {
        let window = resolve_window(
            Some("1718000000000".into()),
            Some("2025-01-01T00:00:00Z".into()),
            None,
            false,
        )
        .unwrap()
        .unwrap();
        assert_eq!(window, (1_718_000_000_000, DEFAULT_START_2025_MS));
    }

    #[test]
    fn garbage_bound_is_an_error() {
        assert!(resolve_window(Some("next tuesday".into()), None, None, false).is_err());
    }
}
