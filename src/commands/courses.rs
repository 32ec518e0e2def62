//! Resolve map coordinates for the courses a summary covers.
//!
//! Missing and unreachable courses are skipped with a warning rather than
//! failing the run; the map is best-effort by design.

use crate::analysis::{aggregate, filter_rounds};
use crate::config;
use crate::geocode::{
    BundledCache, CourseLocator, CourseQuery, GoogleGeocoder, LookupOutcome,
};
use crate::io::{self, OutputFormat};
use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use std::path::PathBuf;

pub struct CoursesConfig {
    pub archive_path: PathBuf,
    pub coordinates: Option<PathBuf>,
    pub offline: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub window: Option<(i64, i64)>,
}

/// One course with resolved coordinates, ready for map rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLocation {
    pub club_id: String,
    pub name: Option<String>,
    pub rounds_played: u64,
    pub lat: f64,
    pub lng: f64,
}

pub fn handle_courses(config: CoursesConfig) -> Result<()> {
    let archive =
        io::load_archive(&config.archive_path).context("could not read that archive")?;

    let archive = match config.window {
        Some((start, end)) => filter_rounds(&archive, start, end),
        None => archive,
    };
    let summary = aggregate(&archive);

    let mut locator = build_locator(&config)?;
    let locations = resolve_courses(&summary, &mut locator)?;

    render(&locations, &config)
}

fn build_locator(config: &CoursesConfig) -> Result<CourseLocator> {
    let bundled_path = config
        .coordinates
        .clone()
        .or_else(config::default_coordinates_file);
    let bundled = match bundled_path {
        Some(path) => {
            let cache = BundledCache::from_path(&path)?;
            log::debug!("bundled cache: {} entries from {}", cache.len(), path.display());
            Some(cache)
        }
        None => None,
    };

    let live = if config.offline {
        None
    } else {
        match config::geocoding_api_key() {
            Some(key) => Some(GoogleGeocoder::new(key)?),
            None => {
                log::warn!(
                    "{} is not set; live geocoding disabled, using caches only",
                    config::GEOCODING_API_KEY_ENV
                );
                None
            }
        }
    };

    Ok(CourseLocator::with_default_tiers(bundled, live))
}

fn resolve_courses(
    summary: &crate::core::WrappedSummary,
    locator: &mut CourseLocator,
) -> Result<Vec<CourseLocation>> {
    let mut locations = Vec::new();
    for course in &summary.courses.items {
        let name = course.name.as_deref().unwrap_or("Unknown");
        let query = CourseQuery {
            club_id: &course.club_id,
            name,
        };
        match locator.resolve(&query)? {
            LookupOutcome::Found(coords) => locations.push(CourseLocation {
                club_id: course.club_id.clone(),
                name: course.name.clone(),
                rounds_played: course.rounds_played,
                lat: coords.lat,
                lng: coords.lng,
            }),
            LookupOutcome::Missing => {
                log::warn!("no coordinates for {name} ({}); skipping", course.club_id);
            }
            LookupOutcome::Unknown => {
                log::warn!(
                    "could not resolve coordinates for {name} ({}); skipping",
                    course.club_id
                );
            }
        }
    }
    Ok(locations)
}

fn render(locations: &[CourseLocation], config: &CoursesConfig) -> Result<()> {
    let rendered = match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(locations)?,
        OutputFormat::Markdown => markdown_table(locations),
        OutputFormat::Terminal => {
            println!("{}", terminal_table(locations));
            return Ok(());
        }
    };

    match &config.output {
        Some(path) => io::write_file(path, &rendered)
            .with_context(|| format!("could not write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn markdown_table(locations: &[CourseLocation]) -> String {
    let mut out = String::from("| Course | Rounds | Lat | Lng |\n|--------|--------|-----|-----|\n");
    for loc in locations {
        out.push_str(&format!(
            "| {} | {} | {:.5} | {:.5} |\n",
            loc.name.as_deref().unwrap_or("Unknown"),
            loc.rounds_played,
            loc.lat,
            loc.lng
        ));
    }
    out
}

fn terminal_table(locations: &[CourseLocation]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Course", "Rounds", "Lat", "Lng"]);
    for loc in locations {
        table.add_row(vec![
            loc.name.as_deref().unwrap_or("Unknown").to_string(),
            loc.rounds_played.to_string(),
            format!("{:.5}", loc.lat),
            format!("{:.5}", loc.lng),
        ]);
    }
    table
}
