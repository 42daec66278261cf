use std::path::PathBuf;
use thiserror::Error;

/// Failures a conversion can hit before or while transforming an export.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input extension selects neither conversion path.
    #[error("Unsupported export format: {0} (expected a .txt or .csv file)")]
    UnsupportedFormat(String),

    /// The input path has no file name to derive the output name from.
    #[error("Input path has no file name: {0}")]
    MissingFileName(PathBuf),

    /// Malformed quote table or missing `chapter`/`quote` column.
    #[error("Failed to parse quote table: {0}")]
    Csv(#[from] csv::Error),
}
