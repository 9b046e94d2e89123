//!
//! The benchmark history converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark history converter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input `data.js` or JSON history files.
    /// If only one path is provided and it is a directory, it is searched for `data.js` files.
    pub input_paths: Vec<PathBuf>,

    /// Keeps only the suites whose names match the regular expression.
    #[arg(long)]
    pub suite: Option<String>,

    /// Keeps only the benches whose names match the regular expression.
    #[arg(long)]
    pub bench: Option<String>,

    /// Keeps only the newest entries of each suite.
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Output format: `data-js`, `json`, `csv`, or `xlsx`.
    #[arg(long, default_value_t = benchmark_history::OutputFormat::DataJs)]
    pub output_format: benchmark_history::OutputFormat,

    /// Output file.
    #[arg(short, long)]
    pub output_path: PathBuf,
}
