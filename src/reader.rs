use crate::error::ConvertError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Export shapes understood by the converter, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain-text highlight export (`.txt`)
    Highlights,
    /// Tabular quote export with `chapter` and `quote` columns (`.csv`)
    Quotes,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case("txt") {
            Ok(Self::Highlights)
        } else if extension.eq_ignore_ascii_case("csv") {
            Ok(Self::Quotes)
        } else {
            Err(ConvertError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Read a whole export file as UTF-8, dropping a leading byte-order mark
/// and turning CRLF or lone CR line endings into LF
pub fn read_export(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read export: {}", path.display()))?;

    log::debug!("Read {} bytes from {}", raw.len(), path.display());

    let text = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&raw);
    Ok(normalise_line_endings(text))
}

pub fn normalise_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
