//! Environment-based configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable holding the Google Geocoding API key.
pub const GEOCODING_API_KEY_ENV: &str = "GOLFWRAP_GEOCODING_API_KEY";

/// Environment variable overriding the bundled coordinates cache path.
pub const COORDINATES_FILE_ENV: &str = "GOLFWRAP_COORDINATES_FILE";

/// Default location of the bundled course-coordinates cache.
pub const DEFAULT_COORDINATES_FILE: &str = "data/courseCoordinates.json";

/// API key for the live geocoding tier, if configured.
///
/// Returns `None` when the variable is unset or empty; callers degrade to
/// cache-only lookups in that case.
pub fn geocoding_api_key() -> Option<String> {
    env::var(GEOCODING_API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Bundled coordinates path to use when none was given on the command line.
///
/// Only returns a path that actually exists, so a missing default file means
/// "no bundled tier" rather than an error.
pub fn default_coordinates_file() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_COORDINATES_FILE);
    path.is_file().then_some(path)
}
