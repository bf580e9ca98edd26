use serde::{Deserialize, Serialize};

/// Immutable snapshot of one movie's attributes.
///
/// Fields are only readable after construction; a registry entry is replaced
/// by removing it and adding a new record, never by editing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    title: String,
    director: String,
    genre: String,
    year_released: i32,
    box_office_earnings: f64,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        year_released: i32,
        box_office_earnings: f64,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            year_released,
            box_office_earnings,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year_released(&self) -> i32 {
        self.year_released
    }

    pub fn box_office_earnings(&self) -> f64 {
        self.box_office_earnings
    }
}
