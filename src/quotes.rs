use crate::error::ConvertError;
use serde::Deserialize;

const BLOCK_SEPARATOR: &str = "\n\n";

/// One exported quote; columns other than these two are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteRow {
    pub chapter: String,
    pub quote: String,
}

/// Convert a raw quote export, listed most-recent-first, into oldest-first
/// Markdown sections.
pub fn quotes_to_markdown(raw: &str) -> Result<String, ConvertError> {
    let cleaned = preclean(raw);
    let mut rows = parse_rows(&cleaned)?;
    rows.reverse();

    log::debug!("Parsed {} quote rows", rows.len());

    Ok(rows_to_markdown(&rows))
}

/// Blank lines inside exported cells break records apart, so every `\n\n`
/// becomes a single space before parsing.
pub fn preclean(raw: &str) -> String {
    raw.replace("\n\n", " ")
}

pub fn parse_rows(text: &str) -> Result<Vec<QuoteRow>, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Join rows, already in output order, into heading and quote blocks.
///
/// A heading opens a section whenever the chapter differs from the section
/// currently open, so a chapter that comes back after another one gets a
/// second heading. This is not a document-wide seen-set: skipping headings
/// already emitted earlier would file the returning quotes under the wrong
/// chapter.
pub fn rows_to_markdown(rows: &[QuoteRow]) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(rows.len() * 2);
    let mut open_heading: Option<String> = None;

    for row in rows {
        let heading = format!("## {}", row.chapter);
        if open_heading.as_deref() != Some(heading.as_str()) {
            blocks.push(heading.clone());
            open_heading = Some(heading);
        }
        blocks.push(row.quote.clone());
    }

    blocks.join(BLOCK_SEPARATOR)
}
