//! The TV-series record type.
//!
//! Series management is not wired into the frontend yet; the type and
//! its validation exist so the catalog model is complete.

use crate::error::StoreError;
use crate::record::MIN_YEAR;

/// A TV-series entry. No rating; season and episode counts instead.
#[derive(Clone, Debug, PartialEq)]
pub struct TvSeries {
    title: String,
    creator: String,
    first_aired: i32,
    seasons: u32,
    episodes: u32,
}

impl TvSeries {
    pub fn new(
        title: impl Into<String>,
        creator: impl Into<String>,
        first_aired: i32,
        seasons: u32,
        episodes: u32,
    ) -> Result<Self, StoreError> {
        let title = title.into();
        let creator = creator.into();
        validate(&title, &creator, first_aired, seasons, episodes)?;

        Ok(Self {
            title,
            creator,
            first_aired,
            seasons,
            episodes,
        })
    }

    pub fn update(
        &mut self,
        title: impl Into<String>,
        creator: impl Into<String>,
        first_aired: i32,
        seasons: u32,
        episodes: u32,
    ) -> Result<(), StoreError> {
        let title = title.into();
        let creator = creator.into();
        validate(&title, &creator, first_aired, seasons, episodes)?;

        self.title = title;
        self.creator = creator;
        self.first_aired = first_aired;
        self.seasons = seasons;
        self.episodes = episodes;
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn first_aired(&self) -> i32 {
        self.first_aired
    }

    pub fn seasons(&self) -> u32 {
        self.seasons
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }
}

fn validate(
    title: &str,
    creator: &str,
    first_aired: i32,
    seasons: u32,
    episodes: u32,
) -> Result<(), StoreError> {
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    if creator.is_empty() {
        return Err(StoreError::EmptyCreator);
    }
    if first_aired <= MIN_YEAR {
        return Err(StoreError::YearOutOfRange(first_aired));
    }
    if seasons < 1 {
        return Err(StoreError::SeasonCount(seasons));
    }
    if episodes < 1 {
        return Err(StoreError::EpisodeCount(episodes));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_counts() {
        assert!(TvSeries::new("The Wire", "Simon", 2002, 5, 60).is_ok());
        assert!(matches!(
            TvSeries::new("The Wire", "Simon", 2002, 0, 60),
            Err(StoreError::SeasonCount(0))
        ));
        assert!(matches!(
            TvSeries::new("The Wire", "Simon", 2002, 5, 0),
            Err(StoreError::EpisodeCount(0))
        ));
        assert!(matches!(
            TvSeries::new("The Wire", "", 2002, 5, 60),
            Err(StoreError::EmptyCreator)
        ));
    }
}
