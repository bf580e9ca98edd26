use crate::core::{CatalogSource, MovieRecord};
use crate::utils::error::{GuideError, Result};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// In-memory store of movie records keyed by title.
///
/// Iteration follows insertion order. Removing an entry keeps the relative
/// order of the entries that remain.
#[derive(Debug, Clone, Default)]
pub struct MovieRegistry {
    movies: IndexMap<String, MovieRecord>,
}

impl MovieRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a catalog, rejecting the whole catalog on the
    /// first repeated title.
    pub fn from_source<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        let mut registry = Self::new();
        for record in source.movies() {
            registry.add_record(record)?;
        }
        tracing::debug!(
            "Seeded registry from '{}' with {} movies",
            source.catalog_name(),
            registry.len()
        );
        Ok(registry)
    }

    pub fn add(
        &mut self,
        title: &str,
        director: &str,
        genre: &str,
        year_released: i32,
        box_office_earnings: f64,
    ) -> Result<()> {
        self.add_record(MovieRecord::new(
            title,
            director,
            genre,
            year_released,
            box_office_earnings,
        ))
    }

    pub fn add_record(&mut self, record: MovieRecord) -> Result<()> {
        if self.movies.contains_key(record.title()) {
            tracing::warn!("Rejected duplicate title '{}'", record.title());
            return Err(GuideError::DuplicateTitle {
                title: record.title().to_string(),
            });
        }

        tracing::debug!("Adding movie '{}'", record.title());
        self.movies.insert(record.title().to_string(), record);
        Ok(())
    }

    /// Deletes the entry for `title` and hands back the record it held.
    pub fn remove(&mut self, title: &str) -> Result<MovieRecord> {
        match self.movies.shift_remove(title) {
            Some(record) => {
                tracing::debug!("Removed movie '{}'", title);
                Ok(record)
            }
            None => {
                tracing::warn!("Cannot remove unknown title '{}'", title);
                Err(GuideError::MovieNotFound {
                    title: title.to_string(),
                })
            }
        }
    }

    pub fn find_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.movies.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.movies.contains_key(title)
    }

    /// All records, highest earnings first.
    ///
    /// The sort is stable, so records with equal earnings stay in insertion
    /// order. NaN of either sign ranks above every number, so NaN earnings
    /// come first.
    pub fn list_sorted_by_earnings_desc(&self) -> Vec<&MovieRecord> {
        let mut sorted: Vec<&MovieRecord> = self.movies.values().collect();
        sorted.sort_by(|a, b| earnings_desc(a.box_office_earnings(), b.box_office_earnings()));
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.values()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

fn earnings_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.total_cmp(&a),
    }
}
