//!
//! Output history format.
//!

///
/// Output history format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// The `data.js` file read by the benchmark dashboard.
    #[default]
    DataJs,
    /// JSON with a time series per bench.
    Json,
    /// CSV format.
    Csv,
    /// Excel spreadsheet format.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "data-js" => Ok(Self::DataJs),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown history format `{string}`. Supported formats: {}",
                vec![Self::DataJs, Self::Json, Self::Csv, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::DataJs => write!(f, "data-js"),
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Format;

    #[test]
    fn parse() {
        assert_eq!(Format::from_str("data-js").expect("Always valid"), Format::DataJs);
        assert_eq!(Format::from_str("XLSX").expect("Always valid"), Format::Xlsx);

        let error = Format::from_str("html").expect_err("Always invalid");
        assert_eq!(
            error.to_string(),
            "Unknown history format `html`. Supported formats: data-js, json, csv, xlsx"
        );
    }
}
