//!
//! The bench name view.
//!

///
/// The bench name view, splitting names like `cpt/get/small/eng` into segments.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchName<'a>(pub &'a str);

impl<'a> BenchName<'a> {
    /// The name segment separator.
    pub const SEPARATOR: char = '/';

    ///
    /// Returns the benchmark family, that is, the first name segment.
    ///
    pub fn family(&self) -> &'a str {
        self.0
            .split(Self::SEPARATOR)
            .next()
            .map(str::trim)
            .filter(|family| !family.is_empty())
            .unwrap_or(self.0)
    }

    ///
    /// Returns the name segments.
    ///
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.0.split(Self::SEPARATOR)
    }

    ///
    /// Returns the last name segment, usually the benchmarked input.
    ///
    pub fn case(&self) -> &'a str {
        self.0.rsplit(Self::SEPARATOR).next().unwrap_or(self.0)
    }
}

impl std::fmt::Display for BenchName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
