//! Rendering of analysis results for the terminal.

mod json;
mod text;

pub use json::render_json;
pub use text::{
    GRANTED_HEADER, GroupedDiff, LINE_SEPARATOR, NO_CHANGES, PrincipalGroup, REVOKED_HEADER,
    ResourceGroup, group, render_text, text_lines,
};

use clap::ValueEnum;

use crate::diff::AnalysisResponse;
use crate::error::SemdiffError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, human-readable report
    #[default]
    Text,
    /// Service response, pretty-printed
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

pub fn render(format: OutputFormat, response: &AnalysisResponse) -> Result<String, SemdiffError> {
    match format {
        OutputFormat::Text => Ok(render_text(response.diff())),
        OutputFormat::Json => render_json(response.raw()),
    }
}
