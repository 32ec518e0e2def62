//! Live geocoding tier backed by the Google Geocoding API.
//!
//! Outcome mapping: an empty result set (`ZERO_RESULTS`) is a definitive
//! `Missing`; a transport failure or a non-OK API status is `Unknown` so a
//! later run can retry; a response whose shape is wrong (results without
//! lat/lng) is a hard error.

use super::{CoordinateSource, Coordinates, CourseQuery, LookupOutcome};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

const GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    location: Option<Coordinates>,
}

pub struct GoogleGeocoder {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, GEOCODE_BASE_URL.to_string())
    }

    /// Base-url override for tests against a local stub server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("could not build geocoding HTTP client")?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }
}

impl CoordinateSource for GoogleGeocoder {
    fn name(&self) -> &'static str {
        "google-geocoder"
    }

    fn lookup(&mut self, query: &CourseQuery) -> Result<LookupOutcome> {
        let response = match self
            .client
            .get(&self.base_url)
            .query(&[("address", query.name), ("key", self.api_key.as_str())])
            .send()
        {
            Ok(response) => response,
            Err(err) => {
                log::warn!("geocoding request for {:?} failed: {err}", query.name);
                return Ok(LookupOutcome::Unknown);
            }
        };

        let body: GeocodeResponse = response
            .json()
            .with_context(|| format!("malformed geocoding response for {:?}", query.name))?;

        let status = body.status.as_deref().unwrap_or(STATUS_OK);
        if status == STATUS_ZERO_RESULTS || (status == STATUS_OK && body.results.is_empty()) {
            log::debug!("geocoding found no results for {:?}", query.name);
            return Ok(LookupOutcome::Missing);
        }
        if status != STATUS_OK {
            log::warn!(
                "geocoding returned status {status} for {:?}: {}",
                query.name,
                body.error_message.as_deref().unwrap_or("no detail")
            );
            return Ok(LookupOutcome::Unknown);
        }

        let location = body
            .results
            .first()
            .and_then(|r| r.geometry.as_ref())
            .and_then(|g| g.location);
        match location {
            Some(coords) => Ok(LookupOutcome::Found(coords)),
            None => bail!("geocoding result for {:?} is missing lat/lng", query.name),
        }
    }
}
