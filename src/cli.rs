use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "golfwrap")]
#[command(about = "Golf season recap generator for 18Birdies archive exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the Wrapped summary from an archive export
    Wrapped {
        /// Path to the exported archive JSON
        archive: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Window start: epoch seconds/milliseconds or RFC 3339
        #[arg(long, conflicts_with_all = ["year", "all"])]
        from: Option<String>,

        /// Window end: epoch seconds/milliseconds or RFC 3339
        #[arg(long, conflicts_with_all = ["year", "all"])]
        to: Option<String>,

        /// Restrict to one UTC calendar year (default window: 2025)
        #[arg(long, conflicts_with = "all")]
        year: Option<i32>,

        /// Aggregate every round in the archive, no date window
        #[arg(long)]
        all: bool,
    },

    /// Resolve map coordinates for the courses played
    Courses {
        /// Path to the exported archive JSON
        archive: PathBuf,

        /// Bundled coordinates cache, JSON keyed by club id
        #[arg(long, env = "GOLFWRAP_COORDINATES_FILE")]
        coordinates: Option<PathBuf>,

        /// Skip the live geocoding tier, use caches only
        #[arg(long)]
        offline: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Window start: epoch seconds/milliseconds or RFC 3339
        #[arg(long, conflicts_with_all = ["year", "all"])]
        from: Option<String>,

        /// Window end: epoch seconds/milliseconds or RFC 3339
        #[arg(long, conflicts_with_all = ["year", "all"])]
        to: Option<String>,

        /// Restrict to one UTC calendar year (default window: 2025)
        #[arg(long, conflicts_with = "all")]
        year: Option<i32>,

        /// Include every round in the archive, no date window
        #[arg(long)]
        all: bool,
    },

    /// Emit time-ordered play events for presentation layers (JSON)
    Timeline {
        /// Path to the exported archive JSON
        archive: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Window start: epoch seconds/milliseconds or RFC 3339
        #[arg(long, conflicts_with_all = ["year", "all"])]
        from: Option<String>,

        /// Window end: epoch seconds/milliseconds or RFC 3339
        #[arg(long, conflicts_with_all = ["year", "all"])]
        to: Option<String>,

        /// Restrict to one UTC calendar year (default window: 2025)
        #[arg(long, conflicts_with = "all")]
        year: Option<i32>,

        /// Include every round in the archive, no date window
        #[arg(long)]
        all: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_command_with_window_flags() {
        let cli = Cli::parse_from([
            "golfwrap",
            "wrapped",
            "archive.json",
            "--format",
            "json",
            "--year",
            "2024",
        ]);

        match cli.command {
            Commands::Wrapped {
                archive,
                format,
                year,
                all,
                ..
            } => {
                assert_eq!(archive, PathBuf::from("archive.json"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(year, Some(2024));
                assert!(!all);
            }
            _ => panic!("expected wrapped command"),
        }
    }

    #[test]
    fn year_and_all_conflict() {
        let result = Cli::try_parse_from([
            "golfwrap",
            "wrapped",
            "archive.json",
            "--year",
            "2025",
            "--all",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_courses_command() {
        let cli = Cli::parse_from([
            "golfwrap",
            "courses",
            "archive.json",
            "--coordinates",
            "data/courseCoordinates.json",
            "--offline",
        ]);

        match cli.command {
            Commands::Courses {
                coordinates,
                offline,
                ..
            } => {
                assert_eq!(
                    coordinates,
                    Some(PathBuf::from("data/courseCoordinates.json"))
                );
                assert!(offline);
            }
            _ => panic!("expected courses command"),
        }
    }

    #[test]
    fn output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }
}
