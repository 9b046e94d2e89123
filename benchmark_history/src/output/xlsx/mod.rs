//!
//! XLSX output format for benchmark history.
//!

pub mod worksheet;

use std::collections::HashSet;

use crate::model::history::History;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark history, with a worksheet per suite.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheets in suite order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    /// The maximal worksheet name length allowed by Excel.
    const WORKSHEET_NAME_MAX_LENGTH: usize = 31;

    /// Characters not allowed in worksheet names.
    const WORKSHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }

    ///
    /// Converts a suite name into a unique valid worksheet name.
    ///
    pub fn worksheet_name(suite: &str, used_names: &mut HashSet<String>) -> String {
        let sanitized: String = suite
            .chars()
            .map(|character| {
                if Self::WORKSHEET_NAME_FORBIDDEN.contains(&character) {
                    '_'
                } else {
                    character
                }
            })
            .collect();
        let sanitized = sanitized.trim_matches('\'');
        let sanitized = if sanitized.is_empty() {
            "Suite"
        } else {
            sanitized
        };

        let mut index = 1;
        loop {
            let suffix = if index == 1 {
                String::new()
            } else {
                format!(" ({index})")
            };
            let name: String = sanitized
                .chars()
                .take(Self::WORKSHEET_NAME_MAX_LENGTH - suffix.chars().count())
                .collect::<String>()
                + suffix.as_str();
            if used_names.insert(name.to_lowercase()) {
                return name;
            }
            index += 1;
        }
    }
}

impl TryFrom<History> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(history: History) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();
        let mut used_names = HashSet::with_capacity(history.entries.len());

        for (suite, entries) in history.entries.into_iter() {
            let name = Self::worksheet_name(suite.as_str(), &mut used_names);
            let mut worksheet = Worksheet::new(name.as_str(), vec![("Bench", 60), ("Unit", 10)])?;

            if entries.len() > worksheet.commit_capacity() {
                anyhow::bail!(
                    "Suite `{suite}` has {} entries, while a worksheet fits at most {}",
                    entries.len(),
                    worksheet.commit_capacity()
                );
            }
            let commit_count = entries.len() as u16;
            for (commit_index, entry) in entries.iter().enumerate() {
                let commit_index = commit_index as u16;
                let date = entry
                    .date_time()
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                worksheet.add_commit_column(
                    format!("{}\n{date}", entry.commit.short_id()).as_str(),
                    commit_index,
                )?;
                for bench in entry.benches.iter() {
                    worksheet.write_bench_value(
                        bench.name.as_str(),
                        bench.unit.as_str(),
                        commit_index,
                        bench.value,
                    )?;
                }
            }
            worksheet.set_changes(commit_count)?;

            xlsx.worksheets.push(worksheet);
        }

        Ok(xlsx)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::model::entry::bench::Bench;
    use crate::model::entry::commit::person::Person;
    use crate::model::entry::commit::Commit;
    use crate::model::entry::tool::Tool;
    use crate::model::entry::Entry;
    use crate::model::history::History;

    use super::worksheet::Row;
    use super::worksheet::Worksheet;
    use super::Xlsx;

    fn entry(id: &str, date: u64, benches: &[(&str, f64)]) -> Entry {
        let person = Person::new("sffc@google.com".to_owned(), "Shane F. Carr".to_owned(), None);
        let commit = Commit {
            author: person.clone(),
            committer: person,
            distinct: Some(true),
            id: id.to_owned(),
            message: String::new(),
            timestamp: "2021-03-16T10:22:11-07:00".to_owned(),
            tree_id: String::new(),
            url: String::new(),
        };
        let benches = benches
            .iter()
            .map(|(name, value)| Bench::new((*name).to_owned(), *value, None, "ns/iter".to_owned()))
            .collect();
        Entry::new(commit, date, Tool::Cargo, benches)
    }

    #[test]
    fn try_from() {
        let mut history = History::new("https://github.com/unicode-org/icu4x".to_owned());
        history.entries.insert(
            "Rust Benchmark".to_owned(),
            vec![
                entry("aaaaaaa1", 1614621600000, &[("cpt/get/small/eng", 100.0), ("uniset/removed", 5.0)]),
                entry("bbbbbbb2", 1615399200000, &[("cpt/get/small/eng", 90.0), ("uniset/added", 20.0)]),
                entry("ccccccc3", 1615914000000, &[("cpt/get/small/eng", 80.0), ("uniset/added", 10.0)]),
            ],
        );
        history.entries.insert(
            "Heap – macos-latest".to_owned(),
            vec![entry("aaaaaaa1", 1614621600000, &[("heap", 1.0)])],
        );

        let xlsx = Xlsx::try_from(history).expect("Always valid");
        assert_eq!(xlsx.worksheets.len(), 2);

        let worksheet = &xlsx.worksheets[1];
        assert_eq!(worksheet.rows.len(), 3);
        assert_eq!(
            worksheet.rows["cpt/get/small/eng"],
            Row {
                index: 1,
                first_column: 2,
                last_column: 4,
            }
        );
        assert_eq!(
            worksheet.rows["uniset/removed"],
            Row {
                index: 2,
                first_column: 2,
                last_column: 2,
            }
        );
        let added = worksheet.rows["uniset/added"];
        assert_eq!(added.first_column, 3);
        assert_eq!(added.last_column, 4);
        assert_eq!(Worksheet::change_formula(added), r#"=IF(D4<>0, E4/D4, "")"#);
    }

    #[test]
    fn too_many_entries() {
        let mut history = History::default();
        history.entries.insert(
            "Rust Benchmark".to_owned(),
            (0..(Worksheet::MAX_COLUMNS as u64))
                .map(|index| entry(format!("{index:040x}").as_str(), index, &[("cpt", 1.0)]))
                .collect(),
        );
        assert!(Xlsx::try_from(history).is_err());
    }

    #[test]
    fn worksheet_name() {
        let mut used_names = HashSet::new();
        assert_eq!(
            Xlsx::worksheet_name("Rust Benchmark", &mut used_names),
            "Rust Benchmark"
        );
        assert_eq!(
            Xlsx::worksheet_name("rust benchmark", &mut used_names),
            "rust benchmark (2)"
        );
        assert_eq!(
            Xlsx::worksheet_name("perf/components/collections [cpt]", &mut used_names),
            "perf_components_collections _cp"
        );
        assert_eq!(Xlsx::worksheet_name("''", &mut used_names), "Suite");
    }
}
