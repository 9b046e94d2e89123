//!
//! The `data.js` output format.
//!

use crate::model::history::History;

///
/// The `data.js` output format, read by the benchmark dashboard.
///
#[derive(Default)]
pub struct DataJs {
    /// Serialized JavaScript.
    pub content: String,
}

impl From<History> for DataJs {
    fn from(history: History) -> Self {
        let json = serde_json::to_string_pretty(&history).expect("Always valid");
        let content = format!("{} = {json}", History::DATA_JS_VARIABLE);
        Self { content }
    }
}
