//!
//! The benchmark entry, recorded once per CI run.
//!

pub mod bench;
pub mod commit;
pub mod tool;

use std::collections::BTreeMap;

use self::bench::Bench;
use self::commit::Commit;
use self::tool::Tool;

///
/// The benchmark entry, recorded once per CI run.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    /// The benchmarked commit.
    pub commit: Commit,
    /// The recording time in milliseconds since the Unix epoch.
    pub date: u64,
    /// The tool that produced the measurements.
    pub tool: Tool,
    /// The measurements.
    pub benches: Vec<Bench>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: Tool, benches: Vec<Bench>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// Returns the bench with the specified name.
    ///
    pub fn bench(&self, name: &str) -> Option<&Bench> {
        self.benches.iter().find(|bench| bench.name == name)
    }

    ///
    /// Returns the benches indexed by name.
    ///
    /// If a name is repeated, the last bench wins.
    ///
    pub fn benches_by_name(&self) -> BTreeMap<&str, &Bench> {
        self.benches
            .iter()
            .map(|bench| (bench.name.as_str(), bench))
            .collect()
    }

    ///
    /// Whether bigger values are better for the bench.
    ///
    pub fn is_bigger_better(&self, bench: &Bench) -> bool {
        bench.is_bigger_better(self.tool.is_bigger_better())
    }

    ///
    /// Returns the recording time.
    ///
    pub fn date_time(&self) -> anyhow::Result<chrono::DateTime<chrono::Utc>> {
        let milliseconds = i64::try_from(self.date)
            .map_err(|error| anyhow::anyhow!("Entry date {} is out of range: {error}", self.date))?;
        chrono::DateTime::from_timestamp_millis(milliseconds)
            .ok_or_else(|| anyhow::anyhow!("Entry date {} is out of range", self.date))
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({} benches)",
            self.commit.short_id(),
            self.commit.summary(),
            self.benches.len()
        )
    }
}
