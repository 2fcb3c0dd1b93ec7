//! Catalog record types.

mod movie;
mod tv_series;

pub use movie::Movie;
pub use tv_series::TvSeries;

/// Earliest accepted release year (exclusive).
///
/// Applied uniformly to creation and update.
pub const MIN_YEAR: i32 = 1800;
