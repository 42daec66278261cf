use clap::Parser;
use std::path::PathBuf;

/// Convert e-reader highlight exports (.txt) and quote exports (.csv) to Markdown
#[derive(Parser, Debug)]
#[command(name = "highlights2md", version, about)]
pub struct Cli {
    /// Path to the input export file (.txt or .csv)
    pub input: PathBuf,

    /// Directory the Markdown file is written to. It must already exist.
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Log each conversion step
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
