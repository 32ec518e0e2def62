use crate::analysis::{aggregate, filter_rounds};
use crate::io::{self, create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;

pub struct WrappedConfig {
    pub archive_path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    /// Inclusive epoch bounds; `None` aggregates the whole archive.
    pub window: Option<(i64, i64)>,
}

pub fn handle_wrapped(config: WrappedConfig) -> Result<()> {
    let archive =
        io::load_archive(&config.archive_path).context("could not read that archive")?;

    let archive = match config.window {
        Some((start, end)) => filter_rounds(&archive, start, end),
        None => archive,
    };

    let summary = aggregate(&archive);
    log::info!(
        "aggregated {} rounds across {} courses",
        summary.rounds.total_included,
        summary.courses.items.len()
    );

    let mut writer = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create output file {}", path.display()))?;
            create_writer(file, config.format)
        }
        None => create_writer(std::io::stdout(), config.format),
    };
    writer.write_summary(&summary)
}
