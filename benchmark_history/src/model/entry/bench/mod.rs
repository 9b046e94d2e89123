//!
//! The single benchmark measurement.
//!

pub mod name;
pub mod range;

use self::name::BenchName;
use self::range::Range;

///
/// The single benchmark measurement.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bench {
    /// The bench identifier, e.g. `cpt/get/small/eng`.
    pub name: String,
    /// The measured value.
    #[serde(serialize_with = "Bench::serialize_value")]
    pub value: f64,
    /// The error margin, absent for tools that do not report one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    /// The measurement unit, e.g. `ns/iter` or `bytes`.
    pub unit: String,
    /// Overrides the tool default direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bigger_is_better: Option<bool>,
    /// Free-form extra information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Bench {
    /// The largest integer exactly representable by `f64`.
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, value: f64, range: Option<Range>, unit: String) -> Self {
        Self {
            name,
            value,
            range,
            unit,
            bigger_is_better: None,
            extra: None,
        }
    }

    ///
    /// Returns the name view.
    ///
    pub fn name(&self) -> BenchName<'_> {
        BenchName(self.name.as_str())
    }

    ///
    /// Returns the absolute error margin, if the range can be interpreted.
    ///
    pub fn margin(&self) -> Option<f64> {
        self.range.as_ref().and_then(|range| range.margin(self.value))
    }

    ///
    /// Whether bigger values are better, falling back to the tool default.
    ///
    pub fn is_bigger_better(&self, tool_default: bool) -> bool {
        self.bigger_is_better.unwrap_or(tool_default)
    }

    ///
    /// Writes integral values without a fractional part, like JavaScript does.
    ///
    fn serialize_value<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if value.fract() == 0.0 && value.abs() <= Self::MAX_EXACT_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
