pub mod json;
pub mod text;

use std::path::Path;

use crate::cli::OutputFormat;
use crate::types::TagSet;

pub fn render(set: &TagSet, output: &Path, format: OutputFormat) {
    match format {
        OutputFormat::Text => text::render(set, output),
        OutputFormat::Json => json::render(set, output),
    }
}
