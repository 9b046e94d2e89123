//!
//! The benchmark history analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark history analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The analysis to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark history analysis.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compares two entries of a suite.
    Compare {
        /// The `data.js` history file.
        input_path: PathBuf,

        /// The suite name. Required if the history contains several suites.
        #[arg(long)]
        suite: Option<String>,

        /// The reference commit hash prefix. Defaults to the next-to-last entry.
        #[arg(long)]
        reference: Option<String>,

        /// The candidate commit hash prefix. Defaults to the last entry.
        #[arg(long)]
        candidate: Option<String>,

        /// The regression factor at which an alert is raised.
        #[arg(long, default_value_t = benchmark_history::analysis::DEFAULT_ALERT_THRESHOLD)]
        alert_threshold: f64,

        /// Exits with an error if any alert is raised.
        #[arg(long)]
        fail_on_alert: bool,

        /// Maximum number of results displayed in a group.
        #[arg(long, default_value_t = 100)]
        group_max: usize,

        /// The output file. If unset, the result is printed to `stdout`.
        #[arg(short, long)]
        output_path: Option<PathBuf>,
    },
    /// Summarizes the time series of every bench in a suite.
    Summary {
        /// The `data.js` history file.
        input_path: PathBuf,

        /// The suite name. Required if the history contains several suites.
        #[arg(long)]
        suite: Option<String>,

        /// Keeps only the benches whose names match the regular expression.
        #[arg(long)]
        bench: Option<String>,
    },
    /// Checks the history consistency.
    Validate {
        /// The `data.js` history file.
        input_path: PathBuf,
    },
}
