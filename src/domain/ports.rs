use crate::domain::model::MovieRecord;

/// Anything that can hand the registry an initial set of movies.
pub trait CatalogSource {
    fn catalog_name(&self) -> &str;
    fn movies(&self) -> Vec<MovieRecord>;
}
