//!
//! The commit author or committer.
//!

///
/// The commit author or committer.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Person {
    /// The e-mail address.
    pub email: String,
    /// The full name.
    pub name: String,
    /// The GitHub login, absent for users unknown to GitHub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Person {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(email: String, name: String, username: Option<String>) -> Self {
        Self {
            email,
            name,
            username,
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.username {
            Some(ref username) => write!(f, "{} (@{username})", self.name),
            None => write!(f, "{} <{}>", self.name, self.email),
        }
    }
}
