//!
//! The history consistency issue.
//!

///
/// The history consistency issue, found by validation.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// An entry is recorded earlier than its predecessor.
    UnorderedEntry {
        /// The suite name.
        suite: String,
        /// The entry commit hash.
        commit: String,
        /// The predecessor date.
        previous_date: u64,
        /// The entry date.
        date: u64,
    },
    /// A commit appears more than once in a suite.
    DuplicateCommit {
        /// The suite name.
        suite: String,
        /// The repeated commit hash.
        commit: String,
    },
    /// A bench name appears more than once in an entry.
    DuplicateBench {
        /// The suite name.
        suite: String,
        /// The entry commit hash.
        commit: String,
        /// The repeated bench name.
        bench: String,
    },
    /// A bench value is NaN or infinite.
    NonFiniteValue {
        /// The suite name.
        suite: String,
        /// The entry commit hash.
        commit: String,
        /// The bench name.
        bench: String,
    },
    /// The last update time precedes an entry.
    StaleLastUpdate {
        /// The recorded last update time.
        last_update: u64,
        /// The newest entry date.
        newest_date: u64,
    },
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnorderedEntry {
                suite,
                commit,
                previous_date,
                date,
            } => write!(
                f,
                "Suite `{suite}`: entry {commit} is dated {date}, before its predecessor {previous_date}"
            ),
            Self::DuplicateCommit { suite, commit } => {
                write!(f, "Suite `{suite}`: commit {commit} is recorded more than once")
            }
            Self::DuplicateBench {
                suite,
                commit,
                bench,
            } => write!(
                f,
                "Suite `{suite}`: entry {commit} contains bench `{bench}` more than once"
            ),
            Self::NonFiniteValue {
                suite,
                commit,
                bench,
            } => write!(
                f,
                "Suite `{suite}`: entry {commit} bench `{bench}` has a non-finite value"
            ),
            Self::StaleLastUpdate {
                last_update,
                newest_date,
            } => write!(
                f,
                "Last update {last_update} precedes the newest entry date {newest_date}"
            ),
        }
    }
}
