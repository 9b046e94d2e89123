//!
//! A bench measured in both compared entries.
//!

use crate::model::entry::bench::Bench;

///
/// A bench measured in both compared entries.
///
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    /// The reference measurement.
    pub reference: &'a Bench,
    /// The candidate measurement.
    pub candidate: &'a Bench,
    /// Whether bigger values are better.
    pub bigger_is_better: bool,
    /// The regression factor: above `1.0` is worse, below is better.
    pub ratio: f64,
}

impl<'a> Comparison<'a> {
    ///
    /// Compares two measurements of the same bench.
    ///
    /// Returns `None` if either measurement is zero, or the factor is not
    /// a positive finite number.
    ///
    pub fn new(reference: &'a Bench, candidate: &'a Bench, bigger_is_better: bool) -> Option<Self> {
        if reference.value == 0.0 || candidate.value == 0.0 {
            return None;
        }
        let ratio = if bigger_is_better {
            reference.value / candidate.value
        } else {
            candidate.value / reference.value
        };
        if !(ratio.is_finite() && ratio > 0.0) {
            return None;
        }

        Some(Self {
            reference,
            candidate,
            bigger_is_better,
            ratio,
        })
    }

    ///
    /// Returns the bench name.
    ///
    pub fn name(&self) -> &'a str {
        self.candidate.name.as_str()
    }

    ///
    /// Whether the difference exceeds the combined error margins.
    ///
    /// Measurements without margins are always significant.
    ///
    pub fn is_significant(&self) -> bool {
        let margin = self.reference.margin().unwrap_or_default()
            + self.candidate.margin().unwrap_or_default();
        (self.candidate.value - self.reference.value).abs() > margin
    }
}

impl std::fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.name(),
            self.reference.value,
            self.candidate.value,
            self.candidate.unit
        )?;
        if !self.is_significant() {
            write!(f, " (within margin)")?;
        }
        Ok(())
    }
}
