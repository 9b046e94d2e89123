//!
//! The benchmarked commit.
//!

pub mod person;

use self::person::Person;

///
/// The benchmarked commit, as reported by the GitHub push event.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Person,
    /// The commit committer.
    pub committer: Person,
    /// Whether the commit is distinct from any pushed before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit hash.
    pub id: String,
    /// The full commit message.
    pub message: String,
    /// The commit timestamp in RFC 3339 format, kept verbatim.
    pub timestamp: String,
    /// The tree hash.
    pub tree_id: String,
    /// The commit URL.
    pub url: String,
}

impl Commit {
    /// The length of an abbreviated commit hash.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        self.id
            .get(..Self::SHORT_ID_LENGTH)
            .unwrap_or(self.id.as_str())
    }

    ///
    /// Returns the first line of the commit message.
    ///
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default().trim_end()
    }

    ///
    /// Parses the commit timestamp.
    ///
    pub fn timestamp(&self) -> anyhow::Result<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(self.timestamp.as_str()).map_err(|error| {
            anyhow::anyhow!(
                "Commit {} timestamp `{}` parsing: {error}",
                self.short_id(),
                self.timestamp
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Commit;
    use super::Person;

    fn commit(id: &str, message: &str, timestamp: &str) -> Commit {
        let person = Person::new("sffc@google.com".to_owned(), "Shane F. Carr".to_owned(), None);
        Commit {
            author: person.clone(),
            committer: person,
            distinct: Some(true),
            id: id.to_owned(),
            message: message.to_owned(),
            timestamp: timestamp.to_owned(),
            tree_id: "1c1a87a7f25c4274b33bb9240b355444586557db".to_owned(),
            url: format!("https://github.com/unicode-org/icu4x/commit/{id}"),
        }
    }

    #[test]
    fn short_id() {
        let commit = commit(
            "b8b68b61b3372debda6911547f8fafd5bfcc08e2",
            "",
            "2020-10-12T12:16:42-07:00",
        );
        assert_eq!(commit.short_id(), "b8b68b6");

        let commit = self::commit("b8b6", "", "2020-10-12T12:16:42-07:00");
        assert_eq!(commit.short_id(), "b8b6");
    }

    #[test]
    fn summary() {
        let commit = commit(
            "cc50a71267baf23db4b636b2f9fcc147d",
            "Add CodePointTrie benchmarks (#573)\r\n\r\n* Add cpt/get benches",
            "2021-03-16T10:22:11-07:00",
        );
        assert_eq!(commit.summary(), "Add CodePointTrie benchmarks (#573)");
    }

    #[test]
    fn timestamp() {
        let commit = commit("b8b68b6", "", "2020-10-12T12:16:42-07:00");
        let timestamp = commit.timestamp().expect("Always valid");
        assert_eq!(timestamp.timestamp(), 1602530202);

        let commit = self::commit("b8b68b6", "", "yesterday");
        assert!(commit.timestamp().is_err());
    }
}
