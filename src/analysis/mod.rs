//! The pure aggregation pipeline: date-range filtering, placeholder
//! detection and the single-pass summary computation. No I/O anywhere in
//! this module; every function is deterministic over its input (the one
//! exception is the summary's `generatedAt` wall-clock stamp).

pub mod aggregate;
pub mod filter;
pub mod placeholder;

pub use aggregate::{aggregate, play_events};
pub use filter::{
    filter_rounds, normalize_epoch_ms, year_window_utc, DEFAULT_END_2025_MS,
    DEFAULT_START_2025_MS,
};
pub use placeholder::is_placeholder;
