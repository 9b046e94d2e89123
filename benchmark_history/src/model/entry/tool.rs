//!
//! The benchmark tool that produced an entry.
//!

///
/// The benchmark tool that produced an entry.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tool {
    /// `cargo bench` with the libtest harness.
    #[default]
    Cargo,
    /// `go test -bench`.
    Go,
    /// benchmark.js.
    BenchmarkJs,
    /// Luau benchmarks.
    BenchmarkLuau,
    /// pytest-benchmark.
    Pytest,
    /// Google C++ Benchmark Framework.
    GoogleCpp,
    /// Catch2.
    Catch2,
    /// BenchmarkTools.jl.
    Julia,
    /// Java Microbenchmark Harness.
    Jmh,
    /// BenchmarkDotNet.
    BenchmarkDotNet,
    /// Custom JSON where bigger values are better.
    CustomBiggerIsBetter,
    /// Custom JSON where smaller values are better.
    CustomSmallerIsBetter,
    /// Newline-delimited JSON, used for size and memory measurements.
    NdJson,
    /// Any tool unknown to this crate, preserved verbatim.
    Other(String),
}

impl Tool {
    ///
    /// Whether bigger values are better for benches of this tool by default.
    ///
    pub fn is_bigger_better(&self) -> bool {
        matches!(
            self,
            Self::BenchmarkJs | Self::BenchmarkLuau | Self::CustomBiggerIsBetter
        )
    }
}

impl From<String> for Tool {
    fn from(string: String) -> Self {
        match string.as_str() {
            "cargo" => Self::Cargo,
            "go" => Self::Go,
            "benchmarkjs" => Self::BenchmarkJs,
            "benchmarkluau" => Self::BenchmarkLuau,
            "pytest" => Self::Pytest,
            "googlecpp" => Self::GoogleCpp,
            "catch2" => Self::Catch2,
            "julia" => Self::Julia,
            "jmh" => Self::Jmh,
            "benchmarkdotnet" => Self::BenchmarkDotNet,
            "customBiggerIsBetter" => Self::CustomBiggerIsBetter,
            "customSmallerIsBetter" => Self::CustomSmallerIsBetter,
            "ndjson" => Self::NdJson,
            _ => Self::Other(string),
        }
    }
}

impl From<Tool> for String {
    fn from(tool: Tool) -> Self {
        tool.to_string()
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cargo => write!(f, "cargo"),
            Self::Go => write!(f, "go"),
            Self::BenchmarkJs => write!(f, "benchmarkjs"),
            Self::BenchmarkLuau => write!(f, "benchmarkluau"),
            Self::Pytest => write!(f, "pytest"),
            Self::GoogleCpp => write!(f, "googlecpp"),
            Self::Catch2 => write!(f, "catch2"),
            Self::Julia => write!(f, "julia"),
            Self::Jmh => write!(f, "jmh"),
            Self::BenchmarkDotNet => write!(f, "benchmarkdotnet"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
            Self::NdJson => write!(f, "ndjson"),
            Self::Other(tool) => write!(f, "{tool}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tool;

    #[test]
    fn known_and_unknown() {
        let tool: Tool = serde_json::from_str(r#""ndjson""#).expect("Always valid");
        assert_eq!(tool, Tool::NdJson);

        let tool: Tool = serde_json::from_str(r#""criterion""#).expect("Always valid");
        assert_eq!(tool, Tool::Other("criterion".to_owned()));
        assert_eq!(
            serde_json::to_string(&tool).expect("Always valid"),
            r#""criterion""#
        );
    }

    #[test]
    fn bigger_is_better() {
        assert!(!Tool::Cargo.is_bigger_better());
        assert!(!Tool::NdJson.is_bigger_better());
        assert!(Tool::BenchmarkJs.is_bigger_better());
        assert!(Tool::CustomBiggerIsBetter.is_bigger_better());
    }
}
