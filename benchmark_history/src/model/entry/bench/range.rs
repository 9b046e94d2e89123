//!
//! The measurement error margin.
//!

///
/// The measurement error margin, e.g. `± 2` or `±1.47%`.
///
/// The string written by the benchmark tool is kept verbatim, since its shape
/// depends on the tool, and is only interpreted when a margin is requested.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Range(pub String);

impl Range {
    /// The plus-minus sign prefix.
    pub const PLUS_MINUS: char = '±';

    ///
    /// Returns the absolute margin for the measured `value`.
    ///
    /// Relative margins like `±1.5%` are scaled by `value`.
    /// Returns `None` if the range is not a plus-minus expression.
    ///
    pub fn margin(&self, value: f64) -> Option<f64> {
        let margin = self.0.trim().strip_prefix(Self::PLUS_MINUS)?.trim();
        let (margin, is_relative) = match margin.strip_suffix('%') {
            Some(margin) => (margin.trim(), true),
            None => (margin, false),
        };
        let margin: f64 = margin.replace(',', "").parse().ok()?;
        if !margin.is_finite() {
            return None;
        }

        Some(if is_relative {
            value.abs() * margin / 100.0
        } else {
            margin
        })
    }
}

impl From<f64> for Range {
    fn from(margin: f64) -> Self {
        Self(format!("{} {margin}", Self::PLUS_MINUS))
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
