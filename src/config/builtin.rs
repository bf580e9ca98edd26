use crate::core::{CatalogSource, MovieRecord};

/// The five sample movies the demo uses when no catalog file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn catalog_name(&self) -> &str {
        "built-in sample"
    }

    fn movies(&self) -> Vec<MovieRecord> {
        let earnings = [1_000_000.0, 2_500_000.0, 1_500_000.0, 2_000_000.0, 3_000_000.0];
        earnings
            .iter()
            .enumerate()
            .map(|(i, &box_office)| {
                let n = i + 1;
                MovieRecord::new(
                    format!("Movie {}", n),
                    format!("Director {}", n),
                    format!("Genre {}", n),
                    2019 + n as i32,
                    box_office,
                )
            })
            .collect()
    }
}
