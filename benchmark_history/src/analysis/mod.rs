//!
//! Provides tools for comparing benchmark entries.
//!

pub mod comparison;
pub mod results;

use std::collections::BTreeMap;

use crate::model::entry::Entry;
use crate::util::btreemap::intersect_map;

use self::comparison::Comparison;
use self::results::Results;

/// The name of the group containing every compared bench.
pub const ALL_GROUP_NAME: &str = "all";

/// The default alert threshold, the candidate being twice as slow.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 2.0;

///
/// Compares the benches measured in both `reference` and `candidate`.
///
/// The comparisons are grouped by bench family, with an additional group
/// named [`ALL_GROUP_NAME`] containing every comparison.
/// Benches missing from either entry, or with a zero measurement, are skipped.
///
pub fn compare<'a>(reference: &'a Entry, candidate: &'a Entry) -> BTreeMap<&'a str, Results<'a>> {
    let comparisons: Vec<Comparison<'a>> = intersect_map(
        reference.benches_by_name(),
        candidate.benches_by_name(),
        move |_name, reference_bench, candidate_bench| {
            Comparison::new(
                reference_bench,
                candidate_bench,
                candidate.is_bigger_better(candidate_bench),
            )
        },
    )
    .flatten()
    .collect();

    let mut groups: BTreeMap<&'a str, Vec<Comparison<'a>>> = BTreeMap::new();
    for comparison in comparisons.iter() {
        groups
            .entry(comparison.candidate.name().family())
            .or_default()
            .push(comparison.clone());
    }
    groups.insert(ALL_GROUP_NAME, comparisons);

    groups
        .into_iter()
        .map(|(group_name, comparisons)| (group_name, Results::new(comparisons)))
        .collect()
}
