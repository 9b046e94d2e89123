//!
//! The benchmark history analyzer binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    match arguments.command {
        Command::Compare {
            input_path,
            suite,
            reference,
            candidate,
            alert_threshold,
            fail_on_alert,
            group_max,
            output_path,
        } => {
            let history = read(input_path.as_path())?;
            let alerts = compare(
                &history,
                suite.as_deref(),
                reference.as_deref(),
                candidate.as_deref(),
                alert_threshold,
                group_max,
                output_path,
                arguments.quiet,
            )?;
            if fail_on_alert && alerts > 0 {
                anyhow::bail!("{alerts} benches regressed beyond the alert threshold {alert_threshold}");
            }
        }
        Command::Summary {
            input_path,
            suite,
            bench,
        } => {
            let history = read(input_path.as_path())?;
            let mut stdout = std::io::stdout();
            summary(&mut stdout, &history, suite.as_deref(), bench.as_deref())?;
        }
        Command::Validate { input_path } => {
            let history = read(input_path.as_path())?;
            let issues = history.validate();
            if !arguments.quiet {
                for issue in issues.iter() {
                    eprintln!("{} {issue}", "Error:".bright_red().bold());
                }
            }
            if !issues.is_empty() {
                anyhow::bail!("History file {input_path:?} has {} issues", issues.len());
            }
            if !arguments.quiet {
                println!(
                    "{} {input_path:?}: {} suites, {} entries",
                    "Valid".bright_green().bold(),
                    history.entries.len(),
                    history.entries_count()
                );
            }
        }
    }

    Ok(())
}

///
/// Reads a history file.
///
fn read(path: &Path) -> anyhow::Result<benchmark_history::History> {
    Ok(benchmark_history::Input::try_from(path)?.history)
}

///
/// Compares two entries of a suite and returns the number of alerts.
///
#[allow(clippy::too_many_arguments)]
pub(crate) fn compare(
    history: &benchmark_history::History,
    suite: Option<&str>,
    reference: Option<&str>,
    candidate: Option<&str>,
    alert_threshold: f64,
    group_max: usize,
    output_path: Option<PathBuf>,
    quiet: bool,
) -> anyhow::Result<usize> {
    let (suite, entries) = history.resolve_suite(suite)?;
    let candidate = match candidate {
        Some(prefix) => history.find_entry(suite, prefix)?,
        None => entries
            .last()
            .ok_or_else(|| anyhow::anyhow!("Suite `{suite}` has no entries"))?,
    };
    let reference = match reference {
        Some(prefix) => history.find_entry(suite, prefix)?,
        None => entries
            .iter()
            .rev()
            .find(|entry| entry.commit.id != candidate.commit.id)
            .ok_or_else(|| anyhow::anyhow!("Suite `{suite}` has no entry to compare {candidate} with"))?,
    };

    if !quiet {
        println!(
            "{} {reference} {} {candidate}",
            "Comparing".bright_green().bold(),
            "with".bright_green().bold(),
        );
        println!();
    }

    let mut groups_results = benchmark_history::analysis::compare(reference, candidate);
    let mut writer: Box<dyn Write> = match output_path {
        Some(output_path) => Box::new(std::fs::File::create(output_path.as_path()).map_err(
            |error| anyhow::anyhow!("Comparison file {output_path:?} creating: {error}"),
        )?),
        None => Box::new(std::io::stdout()),
    };
    for (group_name, results) in groups_results.iter_mut() {
        results.sort_worst();
        if !quiet {
            results.print_worst_results(group_max, group_name);
        }
        results.write_all(&mut writer, group_name)?;
        writeln!(writer)?;
    }

    let alerts = groups_results
        .get(benchmark_history::ALL_GROUP_NAME)
        .map(|results| results.alerts(alert_threshold))
        .unwrap_or_default();
    if !quiet {
        for comparison in alerts.iter() {
            eprintln!(
                "{} {comparison} is {:.2}x worse, beyond the threshold {alert_threshold:.2}x",
                "Alert:".bright_red().bold(),
                comparison.ratio
            );
        }
    }

    Ok(alerts.len())
}

///
/// Writes the statistics of every bench in a suite.
///
pub(crate) fn summary<W>(
    w: &mut W,
    history: &benchmark_history::History,
    suite: Option<&str>,
    bench: Option<&str>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let bench_filter = bench.map(regex::Regex::new).transpose()?;
    let (suite, _entries) = history.resolve_suite(suite)?;
    let series: BTreeMap<String, benchmark_history::Series> = history
        .series(suite)?
        .into_iter()
        .filter(|(name, _)| {
            bench_filter
                .as_ref()
                .map(|filter| filter.is_match(name.as_str()))
                .unwrap_or(true)
        })
        .collect();

    writeln!(w, "{}", suite.bright_white().bold())?;
    writeln!(
        w,
        "{:48} {:>8} {:>6} {:>14} {:>14} {:>14} {:>14} {:>9}",
        "Bench", "Unit", "Count", "Latest", "Min", "Max", "Median", "Change"
    )?;
    for (name, series) in series.iter() {
        let statistics = match series.statistics() {
            Some(statistics) => statistics,
            None => continue,
        };
        let change = match statistics.change {
            Some(change) => {
                let percent = format!("{:+8.2}%", (change - 1.0) * 100.0);
                let is_worse = if series.bigger_is_better {
                    change < 1.0
                } else {
                    change > 1.0
                };
                if change == 1.0 {
                    percent.white()
                } else if is_worse {
                    percent.bright_red()
                } else {
                    percent.green()
                }
            }
            None => format!("{:>9}", "-").white(),
        };
        writeln!(
            w,
            "{name:48} {:>8} {:>6} {:>14} {:>14} {:>14} {:>14} {change}",
            series.unit,
            statistics.count,
            statistics.latest,
            statistics.min,
            statistics.max,
            statistics.median,
        )?;
    }

    Ok(())
}
