use crate::core::{CatalogSource, MovieRecord};
use crate::utils::error::{GuideError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CATALOG_NAME: &str = "unnamed catalog";

/// A movie catalog loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: Option<CatalogMeta>,
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuideError::IoError)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded {} movies from {} ({}{})",
            config.movies.len(),
            path.as_ref().display(),
            config.name(),
            config
                .description()
                .map(|d| format!(": {}", d))
                .unwrap_or_default()
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuideError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GuideError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        self.catalog
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or(DEFAULT_CATALOG_NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.description.as_deref())
    }
}

impl CatalogSource for CatalogConfig {
    fn catalog_name(&self) -> &str {
        self.name()
    }

    fn movies(&self) -> Vec<MovieRecord> {
        self.movies.clone()
    }
}
