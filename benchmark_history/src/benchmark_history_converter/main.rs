//!
//! The benchmark history converter binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    let quiet = arguments.quiet;
    let output_path = arguments.output_path.clone();
    let output_format = arguments.output_format.clone();

    let history = convert(arguments)?;
    if !quiet {
        println!(
            "{} {} suites, {} entries to {output_path:?} as {output_format}",
            "Writing".bright_green().bold(),
            history.entries.len(),
            history.entries_count(),
        );
    }

    let output: benchmark_history::Output = (history, output_format).try_into()?;
    output.write_to_file(output_path)?;

    Ok(())
}

///
/// Reads, merges, and filters the input histories.
///
pub(crate) fn convert(arguments: Arguments) -> anyhow::Result<benchmark_history::History> {
    let suite_filter = arguments
        .suite
        .as_deref()
        .map(regex::Regex::new)
        .transpose()?;
    let bench_filter = arguments
        .bench
        .as_deref()
        .map(regex::Regex::new)
        .transpose()?;

    let mut history = benchmark_history::History::default();
    for path in benchmark_history::Input::resolve_paths(arguments.input_paths)?.into_iter() {
        match benchmark_history::Input::try_from(path.as_path()) {
            Ok(input) => {
                if !arguments.quiet {
                    println!(
                        "{} {:?}: {} suites, {} entries",
                        "Reading".bright_green().bold(),
                        input.path,
                        input.history.entries.len(),
                        input.history.entries_count(),
                    );
                }
                history.merge(input.history);
            }
            Err(benchmark_history::InputError::EmptyFile { path }) => {
                if !arguments.quiet {
                    eprintln!(
                        "{} Input file {path:?} is empty and will be skipped.",
                        "Warning:".bright_yellow().bold()
                    );
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }

    if let Some(suite_filter) = suite_filter {
        history.retain_suites(&suite_filter);
    }
    if let Some(bench_filter) = bench_filter {
        history.retain_benches(&bench_filter);
    }
    if let Some(max_items) = arguments.max_items {
        history.truncate(max_items);
    }

    if !arguments.quiet {
        for issue in history.validate().into_iter() {
            eprintln!("{} {issue}", "Warning:".bright_yellow().bold());
        }
    }

    Ok(history)
}
