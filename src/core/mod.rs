pub mod archive;
pub mod summary;

pub use archive::{Archive, ClubRef, PlayedClub, Round, RoundStats};
pub use summary::{
    CourseSummary, Courses, MostPlayed, PlayEvent, Profile, RoundRef, RoundTotals, ScoreStats,
    StatsTotals, WrappedSummary, SCHEMA_VERSION,
};
