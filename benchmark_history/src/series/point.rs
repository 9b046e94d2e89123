//!
//! The bench time series point.
//!

///
/// The bench time series point.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// The commit hash.
    pub commit: String,
    /// The recording time in milliseconds since the Unix epoch.
    pub date: u64,
    /// The measured value.
    pub value: f64,
    /// The absolute error margin, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}
