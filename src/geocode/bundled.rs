//! Bundled coordinates cache tier: a JSON file keyed by club id, shipped
//! alongside the tool. An explicit `null` entry records "known to have no
//! coordinates" and resolves as `Missing`. The tier is read-only.

use super::{CoordinateSource, Coordinates, CourseQuery, LookupOutcome};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BundledEntry {
    lat: f64,
    lng: f64,
    // Kept by the cache file for humans; not used for lookups.
    #[serde(default)]
    #[allow(dead_code)]
    name: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    source: Option<String>,
}

pub struct BundledCache {
    entries: HashMap<String, Option<Coordinates>>,
}

impl BundledCache {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read coordinates cache {}", path.display()))?;
        let parsed: HashMap<String, Option<BundledEntry>> = serde_json::from_str(&raw)
            .with_context(|| format!("malformed coordinates cache {}", path.display()))?;
        let entries = parsed
            .into_iter()
            .map(|(club_id, entry)| {
                let coords = entry.map(|e| Coordinates { lat: e.lat, lng: e.lng });
                (club_id, coords)
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CoordinateSource for BundledCache {
    fn name(&self) -> &'static str {
        "bundled-cache"
    }

    fn lookup(&mut self, query: &CourseQuery) -> Result<LookupOutcome> {
        Ok(match self.entries.get(query.club_id) {
            Some(Some(coords)) => LookupOutcome::Found(*coords),
            Some(None) => LookupOutcome::Missing,
            None => LookupOutcome::Unknown,
        })
    }
}
