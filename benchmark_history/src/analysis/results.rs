//!
//! The benchmark group comparison results.
//!

use std::cmp;

use colored::Colorize;

use super::comparison::Comparison;

///
/// The benchmark group comparison results.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// The best factor.
    pub best: f64,
    /// The worst factor.
    pub worst: f64,
    /// The geometric mean of all factors.
    pub total: f64,
    /// The benches that got worse.
    pub negatives: Vec<Comparison<'a>>,
    /// The benches that got better.
    pub positives: Vec<Comparison<'a>>,
    /// The number of compared benches.
    pub count: usize,
}

impl<'a> Results<'a> {
    /// The width of the results table.
    const TABLE_WIDTH: usize = 53;

    ///
    /// Aggregates the comparisons of a group.
    ///
    /// An empty group reports the neutral factor `1.0` everywhere.
    ///
    pub fn new(comparisons: Vec<Comparison<'a>>) -> Self {
        let count = comparisons.len();

        let mut best = f64::INFINITY;
        let mut worst = f64::NEG_INFINITY;
        let mut log_sum = 0.0;
        let mut negatives = Vec::with_capacity(count);
        let mut positives = Vec::with_capacity(count);

        for comparison in comparisons.into_iter() {
            if comparison.ratio < best {
                best = comparison.ratio;
            }
            if comparison.ratio > worst {
                worst = comparison.ratio;
            }
            log_sum += comparison.ratio.ln();

            if comparison.ratio > 1.0 {
                negatives.push(comparison);
            } else if comparison.ratio < 1.0 {
                positives.push(comparison);
            }
        }

        let total = if count == 0 {
            best = 1.0;
            worst = 1.0;
            1.0
        } else {
            (log_sum / (count as f64)).exp()
        };

        Self {
            best,
            worst,
            total,
            negatives,
            positives,
            count,
        }
    }

    ///
    /// Sorts the results so that the most extreme changes come first.
    ///
    pub fn sort_worst(&mut self) {
        self.negatives
            .sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        self.positives
            .sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
    }

    ///
    /// Returns the regressions at or above the alert `threshold`.
    ///
    pub fn alerts(&self, threshold: f64) -> Vec<&Comparison<'a>> {
        self.negatives
            .iter()
            .filter(|comparison| comparison.ratio >= threshold)
            .collect()
    }

    ///
    /// Writes the top benchmark results to the terminal.
    ///
    pub fn print_worst_results(&self, count: usize, group_name: &str) {
        println!(
            "Group '{group_name}' (-%) worst {} out of {}:",
            cmp::min(count, self.negatives.len()),
            self.negatives.len()
        );
        for comparison in self.negatives.iter().take(count) {
            println!("{:010}: {comparison}", Self::format_f64(comparison.ratio));
        }
        println!();

        println!(
            "Group '{group_name}' (-%) best {} out of {}:",
            cmp::min(count, self.positives.len()),
            self.positives.len()
        );
        for comparison in self.positives.iter().take(count) {
            println!("{:010}: {comparison}", Self::format_f64(comparison.ratio));
        }
        println!();
    }

    ///
    /// Prints the results summary table.
    ///
    pub fn write_all<W>(&self, w: &mut W, group_name: &str) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let caption = "Change (-%)";
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            caption.bright_white(),
            "═".repeat(
                Self::TABLE_WIDTH.saturating_sub(caption.chars().count() + group_name.chars().count() + 10)
            ),
            group_name.bright_white()
        )?;
        writeln!(
            w,
            "║ {:43} {:>7} ║",
            "Compared".bright_white(),
            self.count
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Best".bright_white(),
            Self::format_f64(self.best)
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Worst".bright_white(),
            Self::format_f64(self.worst)
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Total".bright_white(),
            Self::format_f64(self.total)
        )?;
        writeln!(w, "╚{}╝", "═".repeat(Self::TABLE_WIDTH))?;

        Ok(())
    }

    ///
    /// Formats and colorizes a factor as a reduction percentage.
    ///
    fn format_f64(value: f64) -> colored::ColoredString {
        let reduction = format!("{:7.3}", 100.0 - value * 100.0);
        if value > 1.0 {
            reduction.bright_red()
        } else if value == 1.0 {
            reduction.white()
        } else {
            reduction.green()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::entry::bench::Bench;

    use super::Comparison;
    use super::Results;

    fn bench(name: &str, value: f64) -> Bench {
        Bench::new(name.to_owned(), value, None, "ns/iter".to_owned())
    }

    #[test]
    fn aggregate() {
        let references = [bench("a", 100.0), bench("b", 100.0), bench("c", 100.0)];
        let candidates = [bench("a", 400.0), bench("b", 25.0), bench("c", 100.0)];
        let comparisons = references
            .iter()
            .zip(candidates.iter())
            .filter_map(|(reference, candidate)| Comparison::new(reference, candidate, false))
            .collect();

        let mut results = Results::new(comparisons);
        results.sort_worst();
        assert_eq!(results.count, 3);
        assert_eq!(results.worst, 4.0);
        assert_eq!(results.best, 0.25);
        assert!((results.total - 1.0).abs() < 1e-12);
        assert_eq!(results.negatives.len(), 1);
        assert_eq!(results.positives.len(), 1);
        assert_eq!(results.alerts(2.0).len(), 1);
        assert!(results.alerts(4.5).is_empty());
    }

    #[test]
    fn all_regressed() {
        let references = [bench("a", 100.0), bench("b", 100.0)];
        let candidates = [bench("a", 150.0), bench("b", 300.0)];
        let comparisons = references
            .iter()
            .zip(candidates.iter())
            .filter_map(|(reference, candidate)| Comparison::new(reference, candidate, false))
            .collect();

        let results = Results::new(comparisons);
        assert_eq!(results.best, 1.5);
        assert_eq!(results.worst, 3.0);
        assert!(results.positives.is_empty());
    }

    #[test]
    fn empty() {
        let results = Results::new(vec![]);
        assert_eq!(results.count, 0);
        assert_eq!(results.best, 1.0);
        assert_eq!(results.worst, 1.0);
        assert_eq!(results.total, 1.0);
    }

    #[test]
    fn sort_worst() {
        let references = [bench("a", 10.0), bench("b", 10.0), bench("c", 10.0)];
        let candidates = [bench("a", 11.0), bench("b", 30.0), bench("c", 20.0)];
        let comparisons = references
            .iter()
            .zip(candidates.iter())
            .filter_map(|(reference, candidate)| Comparison::new(reference, candidate, false))
            .collect();

        let mut results = Results::new(comparisons);
        results.sort_worst();
        assert_eq!(
            results
                .negatives
                .iter()
                .map(Comparison::name)
                .collect::<Vec<&str>>(),
            vec!["b", "c", "a"]
        );
    }

    #[test]
    fn write_all() {
        colored::control::set_override(false);
        let results = Results::new(vec![]);
        let mut buffer = Vec::new();
        results
            .write_all(&mut buffer, "cpt")
            .expect("Always valid");
        let text = String::from_utf8(buffer).expect("Always valid");
        assert!(text.contains("cpt"));
        assert!(text.contains("Total"));
        assert!(text.contains("  0.000"));
    }
}
