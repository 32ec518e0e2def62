//! Course-coordinate resolution.
//!
//! Coordinates come from an ordered chain of lookup tiers sharing one
//! interface: the bundled cache shipped with the tool, a session-local
//! cache, then the live geocoding API. The first tier with a definitive
//! answer (`Found` or `Missing`) wins, and that answer is written back into
//! the write-back tiers in front of it, so a course the API could not
//! resolve is cached as `Missing` and never queried twice. The locator is
//! an explicitly constructed value passed to whichever command needs it;
//! there is no module-global client.

pub mod bundled;
pub mod google;
pub mod session;

pub use bundled::BundledCache;
pub use google::GoogleGeocoder;
pub use session::SessionCache;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One course to resolve. Caches key by club id; the live tier geocodes by
/// display name.
#[derive(Debug, Clone, Copy)]
pub struct CourseQuery<'a> {
    pub club_id: &'a str,
    pub name: &'a str,
}

/// Answer from a single tier.
///
/// `Missing` is a definitive "this course has no coordinates" and stops the
/// chain; `Unknown` means the tier has no answer and the next one is tried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome {
    Found(Coordinates),
    Missing,
    Unknown,
}

pub trait CoordinateSource {
    /// Tier name for diagnostics.
    fn name(&self) -> &'static str;

    /// Look the course up. `Err` is reserved for hard failures (malformed
    /// upstream payloads); an unreachable upstream is `Ok(Unknown)`.
    fn lookup(&mut self, query: &CourseQuery) -> Result<LookupOutcome>;

    /// Write-back hook invoked when a later tier produced the answer.
    /// Read-only tiers keep the default no-op.
    fn remember(&mut self, _query: &CourseQuery, _outcome: &LookupOutcome) {}
}

/// Ordered tier chain with write-back.
pub struct CourseLocator {
    tiers: Vec<Box<dyn CoordinateSource>>,
}

impl CourseLocator {
    pub fn new(tiers: Vec<Box<dyn CoordinateSource>>) -> Self {
        Self { tiers }
    }

    /// Standard chain: bundled cache (when available), session cache, live
    /// geocoder (when configured).
    pub fn with_default_tiers(
        bundled: Option<BundledCache>,
        live: Option<GoogleGeocoder>,
    ) -> Self {
        let mut tiers: Vec<Box<dyn CoordinateSource>> = Vec::new();
        if let Some(cache) = bundled {
            tiers.push(Box::new(cache));
        }
        tiers.push(Box::new(SessionCache::new()));
        if let Some(geocoder) = live {
            tiers.push(Box::new(geocoder));
        }
        Self::new(tiers)
    }

    /// Try each tier in order; first non-`Unknown` outcome wins and is
    /// propagated back into the tiers before it.
    pub fn resolve(&mut self, query: &CourseQuery) -> Result<LookupOutcome> {
        let mut answer = None;
        for (idx, tier) in self.tiers.iter_mut().enumerate() {
            match tier.lookup(query)? {
                LookupOutcome::Unknown => continue,
                outcome => {
                    log::debug!(
                        "geocode: {} answered for club {} ({:?})",
                        tier.name(),
                        query.club_id,
                        outcome
                    );
                    answer = Some((idx, outcome));
                    break;
                }
            }
        }
        match answer {
            Some((idx, outcome)) => {
                for tier in &mut self.tiers[..idx] {
                    tier.remember(query, &outcome);
                }
                Ok(outcome)
            }
            None => Ok(LookupOutcome::Unknown),
        }
    }
}
