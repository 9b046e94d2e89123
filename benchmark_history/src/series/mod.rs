//!
//! The bench time series.
//!

pub mod point;
pub mod statistics;

use std::collections::BTreeMap;

use crate::model::entry::Entry;

use self::point::Point;
use self::statistics::Statistics;

///
/// The time series of a single bench across the entries of a suite.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Series {
    /// The bench name.
    pub name: String,
    /// The unit of the latest measurement.
    pub unit: String,
    /// Whether bigger values are better.
    pub bigger_is_better: bool,
    /// The points in recording order.
    pub points: Vec<Point>,
}

impl Series {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, unit: String, bigger_is_better: bool) -> Self {
        Self {
            name,
            unit,
            bigger_is_better,
            points: Vec::new(),
        }
    }

    ///
    /// Collects the series of every bench of the entries.
    ///
    pub fn collect(entries: &[Entry]) -> BTreeMap<String, Self> {
        let mut series: BTreeMap<String, Self> = BTreeMap::new();

        for entry in entries.iter() {
            for bench in entry.benches.iter() {
                let bigger_is_better = entry.is_bigger_better(bench);
                let series = series.entry(bench.name.to_owned()).or_insert_with(|| {
                    Self::new(bench.name.to_owned(), bench.unit.to_owned(), bigger_is_better)
                });
                series.unit.clone_from(&bench.unit);
                series.bigger_is_better = bigger_is_better;
                series.points.push(Point {
                    commit: entry.commit.id.to_owned(),
                    date: entry.date,
                    value: bench.value,
                    margin: bench.margin(),
                });
            }
        }

        series
    }

    ///
    /// Computes the series statistics.
    ///
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::new(self.points.iter().map(|point| point.value))
    }

    ///
    /// Returns the newest point.
    ///
    pub fn latest(&self) -> Option<&Point> {
        self.points.last()
    }
}
