use crate::adapters::report::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "box-office-guide")]
#[command(about = "An in-memory guide to movies and their box office earnings")]
pub struct CliConfig {
    /// TOML catalog to seed the guide with; the built-in sample is used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    /// Title to look up
    #[arg(long, default_value = "Movie 2")]
    pub find: String,

    /// Title to remove before listing
    #[arg(long, default_value = "Movie 3")]
    pub remove: String,

    /// Format of the sorted listing
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_wait: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
            validate_file_extension("catalog", catalog, &["toml"])?;
        }
        Ok(())
    }
}
