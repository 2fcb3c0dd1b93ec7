//! Error types raised by the record store and the persistence codec.

use thiserror::Error;

/// Errors surfaced by record validation and store operations.
///
/// None of these are fatal: the frontend reports them to the user and
/// returns to the menu loop with the store unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("director must not be empty")]
    EmptyDirector,

    #[error("creator must not be empty")]
    EmptyCreator,

    #[error("year {0} is not a valid release year (must be after 1800)")]
    YearOutOfRange(i32),

    #[error("a series needs at least one season (got {0})")]
    SeasonCount(u32),

    #[error("a series needs at least one episode (got {0})")]
    EpisodeCount(u32),

    #[error("rating {0:?} is not a digit between 1 and 5")]
    InvalidRating(char),

    #[error("rating {0} is outside the 0-5 scale")]
    RatingOutOfRange(f32),

    #[error("index {index} out of range for {count} records")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Errors surfaced by the persistence codec.
///
/// A missing catalog file is *not* an error (first-run state); only
/// genuine I/O failures while reading or writing end up here.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
