//!
//! The JSON series output format.
//!

use std::collections::BTreeMap;

use crate::model::history::History;
use crate::series::Series;

///
/// The JSON series output format, with a time series per bench of each suite.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<History> for Json {
    fn from(history: History) -> Self {
        let suites: BTreeMap<&str, BTreeMap<String, Series>> = history
            .entries
            .iter()
            .map(|(suite, entries)| (suite.as_str(), Series::collect(entries.as_slice())))
            .collect();
        let content = serde_json::to_string_pretty(&suites).expect("Always valid");
        Self { content }
    }
}
