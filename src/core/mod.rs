pub mod registry;

pub use crate::domain::model::MovieRecord;
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
