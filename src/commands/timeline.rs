use crate::analysis::{filter_rounds, play_events};
use crate::io;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct TimelineConfig {
    pub archive_path: PathBuf,
    pub output: Option<PathBuf>,
    pub window: Option<(i64, i64)>,
}

/// Emit the time-ordered play events the presentation layer animates over.
pub fn handle_timeline(config: TimelineConfig) -> Result<()> {
    let archive =
        io::load_archive(&config.archive_path).context("could not read that archive")?;

    let archive = match config.window {
        Some((start, end)) => filter_rounds(&archive, start, end),
        None => archive,
    };

    let events = play_events(&archive);
    log::info!("timeline: {} play events", events.len());

    let json = serde_json::to_string_pretty(&events)?;
    match &config.output {
        Some(path) => io::write_file(path, &json)
            .with_context(|| format!("could not write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
