use anyhow::Result;
use clap::Parser;
use golfwrap::cli::{Cli, Commands};
use golfwrap::commands::{
    self, handle_courses, handle_timeline, handle_wrapped, CoursesConfig, TimelineConfig,
    WrappedConfig,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Wrapped {
            archive,
            format,
            output,
            from,
            to,
            year,
            all,
        } => {
            let window = commands::resolve_window(from, to, year, all)?;
            handle_wrapped(WrappedConfig {
                archive_path: archive,
                format: format.into(),
                output,
                window,
            })
        }
        Commands::Courses {
            archive,
            coordinates,
            offline,
            format,
            output,
            from,
            to,
            year,
            all,
        } => {
            let window = commands::resolve_window(from, to, year, all)?;
            handle_courses(CoursesConfig {
                archive_path: archive,
                coordinates,
                offline,
                format: format.into(),
                output,
                window,
            })
        }
        Commands::Timeline {
            archive,
            output,
            from,
            to,
            year,
            all,
        } => {
            let window = commands::resolve_window(from, to, year, all)?;
            handle_timeline(TimelineConfig {
                archive_path: archive,
                output,
                window,
            })
        }
    }
}
