//!
//! The bench time series statistics.
//!

///
/// The bench time series statistics.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Statistics {
    /// The number of points.
    pub count: usize,
    /// The smallest value.
    pub min: f64,
    /// The largest value.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median.
    pub median: f64,
    /// The oldest value.
    pub first: f64,
    /// The newest value.
    pub latest: f64,
    /// The newest to oldest value ratio, `None` if the oldest value is zero.
    pub change: Option<f64>,
}

impl Statistics {
    ///
    /// Computes the statistics of values in recording order.
    ///
    /// Returns `None` if there are no finite values.
    ///
    pub fn new(values: impl Iterator<Item = f64>) -> Option<Self> {
        let values: Vec<f64> = values.filter(|value| value.is_finite()).collect();
        let first = *values.first()?;
        let latest = *values.last()?;

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        let count = sorted.len();
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        let mean = values.iter().sum::<f64>() / (count as f64);

        Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median,
            first,
            latest,
            change: if first == 0.0 {
                None
            } else {
                Some(latest / first)
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn odd() {
        let statistics =
            Statistics::new([40.0, 10.0, 30.0].into_iter()).expect("Always exists");
        assert_eq!(statistics.count, 3);
        assert_eq!(statistics.min, 10.0);
        assert_eq!(statistics.max, 40.0);
        assert_eq!(statistics.median, 30.0);
        assert_eq!(statistics.mean, 80.0 / 3.0);
        assert_eq!(statistics.first, 40.0);
        assert_eq!(statistics.latest, 30.0);
        assert_eq!(statistics.change, Some(0.75));
    }

    #[test]
    fn even() {
        let statistics =
            Statistics::new([0.0, 4.0, 2.0, f64::NAN, 8.0].into_iter()).expect("Always exists");
        assert_eq!(statistics.count, 4);
        assert_eq!(statistics.median, 3.0);
        assert_eq!(statistics.change, None);
    }

    #[test]
    fn empty() {
        assert!(Statistics::new(std::iter::empty()).is_none());
        assert!(Statistics::new([f64::INFINITY].into_iter()).is_none());
    }
}
