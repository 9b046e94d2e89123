//!
//! The benchmark history, as stored in a `data.js` file.
//!

pub mod issue;

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::model::entry::Entry;
use crate::series::Series;

use self::issue::Issue;

///
/// The benchmark history, as stored in a `data.js` file.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// The last update time in milliseconds since the Unix epoch.
    pub last_update: u64,
    /// The benchmarked repository URL.
    pub repo_url: String,
    /// The entries of each suite, in recording order.
    pub entries: BTreeMap<String, Vec<Entry>>,
}

impl History {
    /// The JavaScript assignment wrapping the JSON document in `data.js` files.
    pub const DATA_JS_VARIABLE: &'static str = "window.BENCHMARK_DATA";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: BTreeMap::new(),
        }
    }

    ///
    /// Returns the JSON document, stripping the optional `data.js` assignment.
    ///
    pub fn unwrap_data_js(text: &str) -> &str {
        let text = text.trim();
        let text = match text.strip_prefix(Self::DATA_JS_VARIABLE) {
            Some(assignment) => assignment
                .trim_start()
                .strip_prefix('=')
                .unwrap_or(assignment),
            None => text,
        };
        let text = text.trim();
        text.strip_suffix(';').unwrap_or(text).trim_end()
    }

    ///
    /// Returns the total number of entries in all suites.
    ///
    pub fn entries_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    ///
    /// Returns the entries of the specified suite.
    ///
    pub fn suite(&self, name: &str) -> anyhow::Result<&[Entry]> {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Suite `{name}` not found. Available suites: {}",
                    self.suite_names().join(", ")
                )
            })
    }

    ///
    /// Returns the only suite of the history.
    ///
    pub fn only_suite(&self) -> anyhow::Result<(&str, &[Entry])> {
        match self.entries.len() {
            0 => anyhow::bail!("The history contains no suites"),
            1 => {
                let (name, entries) = self.entries.iter().next().expect("Always exists");
                Ok((name.as_str(), entries.as_slice()))
            }
            _ => anyhow::bail!(
                "The history contains several suites, select one of: {}",
                self.suite_names().join(", ")
            ),
        }
    }

    ///
    /// Returns the named suite, or the only one if no name is given.
    ///
    pub fn resolve_suite<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> anyhow::Result<(&'a str, &'a [Entry])> {
        match name {
            Some(name) => Ok((name, self.suite(name)?)),
            None => self.only_suite(),
        }
    }

    ///
    /// Returns the suite names.
    ///
    pub fn suite_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    ///
    /// Finds the suite entry whose commit hash starts with `commit_prefix`.
    ///
    pub fn find_entry(&self, suite: &str, commit_prefix: &str) -> anyhow::Result<&Entry> {
        if commit_prefix.is_empty() {
            anyhow::bail!("Empty commit hash prefix");
        }

        let mut candidates = self
            .suite(suite)?
            .iter()
            .filter(|entry| entry.commit.id.starts_with(commit_prefix));
        let entry = candidates.next().ok_or_else(|| {
            anyhow::anyhow!("Suite `{suite}`: no entry for commit `{commit_prefix}`")
        })?;
        if let Some(other) = candidates.find(|other| other.commit.id != entry.commit.id) {
            anyhow::bail!(
                "Suite `{suite}`: commit `{commit_prefix}` is ambiguous: {} and {}",
                entry.commit.short_id(),
                other.commit.short_id()
            );
        }
        Ok(entry)
    }

    ///
    /// Merges another history into this one.
    ///
    /// An entry of an already recorded commit replaces the existing one only if
    /// it is newer. Entries are kept in recording order.
    ///
    pub fn merge(&mut self, other: Self) {
        if self.repo_url.is_empty() {
            self.repo_url = other.repo_url;
        }
        self.last_update = self.last_update.max(other.last_update);

        for (suite, entries) in other.entries.into_iter() {
            let existing = self.entries.entry(suite).or_default();
            for entry in entries.into_iter() {
                match existing
                    .iter_mut()
                    .find(|existing| existing.commit.id == entry.commit.id)
                {
                    Some(existing) => {
                        if entry.date > existing.date {
                            *existing = entry;
                        }
                    }
                    None => existing.push(entry),
                }
            }
            existing.sort_by_key(|entry| entry.date);
        }
    }

    ///
    /// Keeps only the newest `max_items` entries of each suite.
    ///
    pub fn truncate(&mut self, max_items: usize) {
        for entries in self.entries.values_mut() {
            if entries.len() > max_items {
                entries.drain(..entries.len() - max_items);
            }
        }
        self.entries.retain(|_, entries| !entries.is_empty());
    }

    ///
    /// Keeps only the suites whose names match `regex`.
    ///
    pub fn retain_suites(&mut self, regex: &regex::Regex) {
        self.entries.retain(|name, _| regex.is_match(name.as_str()));
    }

    ///
    /// Keeps only the benches whose names match `regex`.
    ///
    /// Entries and suites left empty are removed.
    ///
    pub fn retain_benches(&mut self, regex: &regex::Regex) {
        for entries in self.entries.values_mut() {
            for entry in entries.iter_mut() {
                entry
                    .benches
                    .retain(|bench| regex.is_match(bench.name.as_str()));
            }
            entries.retain(|entry| !entry.benches.is_empty());
        }
        self.entries.retain(|_, entries| !entries.is_empty());
    }

    ///
    /// Returns the time series of every bench in the suite.
    ///
    pub fn series(&self, suite: &str) -> anyhow::Result<BTreeMap<String, Series>> {
        Ok(Series::collect(self.suite(suite)?))
    }

    ///
    /// Checks the history consistency.
    ///
    pub fn validate(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut newest_date = None;

        for (suite, entries) in self.entries.iter() {
            let mut commits = HashSet::with_capacity(entries.len());
            let mut previous_date: Option<u64> = None;

            for entry in entries.iter() {
                if let Some(previous_date) = previous_date {
                    if entry.date < previous_date {
                        issues.push(Issue::UnorderedEntry {
                            suite: suite.to_owned(),
                            commit: entry.commit.id.to_owned(),
                            previous_date,
                            date: entry.date,
                        });
                    }
                }
                previous_date = Some(entry.date);
                newest_date = newest_date.max(Some(entry.date));

                if !commits.insert(entry.commit.id.as_str()) {
                    issues.push(Issue::DuplicateCommit {
                        suite: suite.to_owned(),
                        commit: entry.commit.id.to_owned(),
                    });
                }

                let mut benches = HashSet::with_capacity(entry.benches.len());
                for bench in entry.benches.iter() {
                    if !benches.insert(bench.name.as_str()) {
                        issues.push(Issue::DuplicateBench {
                            suite: suite.to_owned(),
                            commit: entry.commit.id.to_owned(),
                            bench: bench.name.to_owned(),
                        });
                    }
                    if !bench.value.is_finite() {
                        issues.push(Issue::NonFiniteValue {
                            suite: suite.to_owned(),
                            commit: entry.commit.id.to_owned(),
                            bench: bench.name.to_owned(),
                        });
                    }
                }
            }
        }

        if let Some(newest_date) = newest_date {
            if self.last_update < newest_date {
                issues.push(Issue::StaleLastUpdate {
                    last_update: self.last_update,
                    newest_date,
                });
            }
        }

        issues
    }
}

impl std::str::FromStr for History {
    type Err = serde_json::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(Self::unwrap_data_js(string))
    }
}
