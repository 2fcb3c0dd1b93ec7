//! The movie record type.

use crate::error::StoreError;
use crate::record::MIN_YEAR;

/// A single movie entry.
///
/// Fields are private so every `Movie` in existence satisfies the
/// validation rules: non-empty title and director, release year after
/// [`MIN_YEAR`], rating either unset (0) or between 1 and 5.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    title: String,
    director: String,
    year: i32,
    rating: f32,
}

impl Movie {
    /// Create a new movie record. The rating starts out unset.
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
    ) -> Result<Self, StoreError> {
        let title = title.into();
        let director = director.into();
        validate(&title, &director, year)?;

        Ok(Self {
            title,
            director,
            year,
            rating: 0.0,
        })
    }

    /// Replace title, director, and year in place. The rating is untouched.
    ///
    /// Uses the same bounds as [`Movie::new`]; on error nothing changes.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
    ) -> Result<(), StoreError> {
        let title = title.into();
        let director = director.into();
        validate(&title, &director, year)?;

        self.title = title;
        self.director = director;
        self.year = year;
        Ok(())
    }

    /// Rate the movie from a single keystroke.
    ///
    /// Accepts `'1'..='5'`. Any other input is rejected with
    /// [`StoreError::InvalidRating`] and the prior rating is kept, so
    /// the caller can re-prompt.
    pub fn rate(&mut self, input: char) -> Result<(), StoreError> {
        match input.to_digit(10) {
            Some(digit @ 1..=5) => {
                self.rating = digit as f32;
                Ok(())
            }
            _ => Err(StoreError::InvalidRating(input)),
        }
    }

    /// Set the rating directly, as read back from the catalog file.
    ///
    /// `0.0` means unrated; otherwise the value must lie in `1.0..=5.0`.
    pub fn set_rating(&mut self, rating: f32) -> Result<(), StoreError> {
        if rating == 0.0 || (1.0..=5.0).contains(&rating) {
            self.rating = rating;
            Ok(())
        } else {
            Err(StoreError::RatingOutOfRange(rating))
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

fn validate(title: &str, director: &str, year: i32) -> Result<(), StoreError> {
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    if director.is_empty() {
        return Err(StoreError::EmptyDirector);
    }
    if year <= MIN_YEAR {
        return Err(StoreError::YearOutOfRange(year));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_input() {
        let movie = Movie::new("Dune", "Villeneuve", 2021).unwrap();
        assert_eq!(movie.title(), "Dune");
        assert_eq!(movie.director(), "Villeneuve");
        assert_eq!(movie.year(), 2021);
        assert_eq!(movie.rating(), 0.0);
        assert!(!movie.is_rated());
    }

    #[test]
    fn new_rejects_invalid_input() {
        assert!(matches!(
            Movie::new("", "Villeneuve", 2021),
            Err(StoreError::EmptyTitle)
        ));
        assert!(matches!(
            Movie::new("Dune", "", 2021),
            Err(StoreError::EmptyDirector)
        ));
        assert!(matches!(
            Movie::new("Dune", "Villeneuve", 1800),
            Err(StoreError::YearOutOfRange(1800))
        ));
        assert!(matches!(
            Movie::new("Dune", "Villeneuve", -5),
            Err(StoreError::YearOutOfRange(-5))
        ));
    }

    #[test]
    fn update_applies_creation_bounds() {
        let mut movie = Movie::new("Dune", "Villeneuve", 2021).unwrap();
        movie.rate('4').unwrap();

        // Year 1700 was accepted by the old update path; it is not here.
        assert!(matches!(
            movie.update("Dune Part Two", "Villeneuve", 1700),
            Err(StoreError::YearOutOfRange(1700))
        ));
        assert_eq!(movie.title(), "Dune");

        movie.update("Dune: Part Two", "Villeneuve", 2024).unwrap();
        assert_eq!(movie.title(), "Dune: Part Two");
        assert_eq!(movie.year(), 2024);
        // Rating survives an update.
        assert_eq!(movie.rating(), 4.0);
    }

    #[test]
    fn rate_accepts_digits_one_through_five() {
        let mut movie = Movie::new("Alien", "Scott", 1979).unwrap();
        movie.rate('3').unwrap();
        assert_eq!(movie.rating(), 3.0);
        movie.rate('5').unwrap();
        assert_eq!(movie.rating(), 5.0);
    }

    #[test]
    fn rate_rejects_other_input_and_keeps_prior_rating() {
        let mut movie = Movie::new("Alien", "Scott", 1979).unwrap();
        movie.rate('2').unwrap();

        for bad in ['0', '6', '9', 'x', ' ', '\n'] {
            assert!(matches!(movie.rate(bad), Err(StoreError::InvalidRating(_))));
            assert_eq!(movie.rating(), 2.0);
        }
    }

    #[test]
    fn set_rating_validates_scale() {
        let mut movie = Movie::new("Alien", "Scott", 1979).unwrap();
        movie.set_rating(4.0).unwrap();
        assert_eq!(movie.rating(), 4.0);
        movie.set_rating(0.0).unwrap();
        assert!(!movie.is_rated());
        assert!(matches!(
            movie.set_rating(7.5),
            Err(StoreError::RatingOutOfRange(_))
        ));
    }
}
