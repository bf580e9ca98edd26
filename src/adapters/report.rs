use crate::adapters::console::format_earnings;
use crate::core::MovieRecord;
use crate::utils::error::{GuideError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Renders a sequence of records, keeping the order it is given.
pub fn render_report(records: &[&MovieRecord], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(records)),
        ReportFormat::Csv => render_csv(records),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

fn render_text(records: &[&MovieRecord]) -> String {
    let mut text = String::new();
    for movie in records {
        text.push_str(movie.title());
        text.push_str(": ");
        text.push_str(&format_earnings(movie.box_office_earnings()));
        text.push('\n');
    }
    text
}

fn render_csv(records: &[&MovieRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "title",
        "director",
        "genre",
        "year_released",
        "box_office_earnings",
    ])?;

    for movie in records {
        writer.write_record([
            movie.title().to_string(),
            movie.director().to_string(),
            movie.genre().to_string(),
            movie.year_released().to_string(),
            format_earnings(movie.box_office_earnings()),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GuideError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| GuideError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
