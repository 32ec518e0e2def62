// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod geocode;
pub mod io;

// Re-export commonly used types
pub use crate::analysis::{
    aggregate, filter_rounds, is_placeholder, normalize_epoch_ms, play_events,
    DEFAULT_END_2025_MS, DEFAULT_START_2025_MS,
};
pub use crate::core::{
    Archive, CourseSummary, MostPlayed, PlayEvent, Round, RoundRef, WrappedSummary,
    SCHEMA_VERSION,
};
pub use crate::errors::ArchiveError;
pub use crate::geocode::{
    BundledCache, CoordinateSource, Coordinates, CourseLocator, CourseQuery, GoogleGeocoder,
    LookupOutcome, SessionCache,
};
pub use crate::io::{create_writer, load_archive, parse_archive, OutputFormat, OutputWriter};
