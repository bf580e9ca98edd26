pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{console::ConsolePresenter, report::ReportFormat};
pub use crate::config::{builtin::BuiltinCatalog, toml_config::CatalogConfig};
pub use crate::core::registry::MovieRegistry;
pub use crate::domain::{model::MovieRecord, ports::CatalogSource};
pub use crate::utils::error::{GuideError, Result};
