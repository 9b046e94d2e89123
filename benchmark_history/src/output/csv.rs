//!
//! The CSV output format.
//!

use std::fmt::Write;

use crate::model::history::History;

///
/// The CSV output format, with a row per bench measurement:
/// "suite", "commit", "date", "bench", "value", "range", "unit"
///
#[derive(Default)]
pub struct Csv {
    /// Serialized CSV.
    pub content: String,
}

impl Csv {
    /// The estimated length of a row.
    const ESTIMATED_ROW_LENGTH: usize = 128;

    ///
    /// Quotes a string field, doubling the inner quotes.
    ///
    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }
}

impl TryFrom<History> for Csv {
    type Error = std::fmt::Error;

    fn try_from(history: History) -> Result<Self, Self::Error> {
        let rows_count: usize = history
            .entries
            .values()
            .flatten()
            .map(|entry| entry.benches.len())
            .sum();

        let mut content = String::with_capacity((rows_count + 1) * Self::ESTIMATED_ROW_LENGTH);
        content.push_str(r#""suite", "commit", "date", "bench", "value", "range", "unit""#);
        content.push('\n');
        for (suite, entries) in history.entries.iter() {
            for entry in entries.iter() {
                for bench in entry.benches.iter() {
                    let range = bench
                        .range
                        .as_ref()
                        .map(|range| range.to_string())
                        .unwrap_or_default();
                    writeln!(
                        &mut content,
                        "{}, \"{}\", {}, {}, {}, {}, {}",
                        Self::quote(suite.as_str()),
                        entry.commit.id,
                        entry.date,
                        Self::quote(bench.name.as_str()),
                        bench.value,
                        Self::quote(range.as_str()),
                        Self::quote(bench.unit.as_str()),
                    )?;
                }
            }
        }
        Ok(Self { content })
    }
}
