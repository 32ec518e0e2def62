//! In-memory session cache tier. Receives write-backs of every definitive
//! downstream answer, including `Missing`, so no-result courses are not
//! re-queried within a run.

use super::{CoordinateSource, Coordinates, CourseQuery, LookupOutcome};
use anyhow::Result;
use std::collections::HashMap;

#[derive(Default)]
pub struct SessionCache {
    // None means a cached "no coordinates" answer.
    entries: HashMap<String, Option<Coordinates>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CoordinateSource for SessionCache {
    fn name(&self) -> &'static str {
        "session-cache"
    }

    fn lookup(&mut self, query: &CourseQuery) -> Result<LookupOutcome> {
        Ok(match self.entries.get(query.club_id) {
            Some(Some(coords)) => LookupOutcome::Found(*coords),
            Some(None) => LookupOutcome::Missing,
            None => LookupOutcome::Unknown,
        })
    }

    fn remember(&mut self, query: &CourseQuery, outcome: &LookupOutcome) {
        let entry = match outcome {
            LookupOutcome::Found(coords) => Some(*coords),
            LookupOutcome::Missing => None,
            LookupOutcome::Unknown => return,
        };
        self.entries.insert(query.club_id.to_owned(), entry);
    }
}
