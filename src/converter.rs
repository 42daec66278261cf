use crate::cli::Cli;
use crate::error::ConvertError;
use crate::markdown;
use crate::quotes;
use crate::reader::{self, ExportFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn convert(cli: &Cli) -> Result<()> {
    // Reject unknown formats before touching the filesystem
    let format = ExportFormat::from_path(&cli.input)?;
    let output_path = resolve_output_path(&cli.input, &cli.output_dir)?;
    log::debug!("Detected {:?} export: {}", format, cli.input.display());

    let raw = reader::read_export(&cli.input)?;
    let content = render(format, &raw)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    write_markdown(&output_path, &content)?;

    eprintln!(
        "Converted {} to {}",
        cli.input.display(),
        output_path.display()
    );

    Ok(())
}

fn render(format: ExportFormat, raw: &str) -> Result<String, ConvertError> {
    match format {
        ExportFormat::Highlights => Ok(markdown::highlights_to_markdown(raw)),
        ExportFormat::Quotes => quotes::quotes_to_markdown(raw),
    }
}

/// `<output_dir>/<input stem>.md`; the input's own directory is dropped.
fn resolve_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf, ConvertError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| ConvertError::MissingFileName(input.to_path_buf()))?
        .to_string_lossy();

    Ok(output_dir.join(format!("{}.md", stem)))
}

/// The output directory is expected to exist already and is never created.
fn write_markdown(output_path: &Path, content: &str) -> Result<()> {
    log::debug!("Writing {} bytes to {}", content.len(), output_path.display());

    fs::write(output_path, content)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))
}
