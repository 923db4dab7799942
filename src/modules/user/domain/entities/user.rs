use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A registered user. Friendships and likes reference users by id and are
/// stored outside the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: String,
    /// Display name; equals `login` when the caller left it blank
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub birthday: NaiveDate,
}

/// A user that has not been assigned an id yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub birthday: NaiveDate,
}

impl NewUser {
    pub fn new(login: impl Into<String>, email: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            login: login.into(),
            name: None,
            email: email.into(),
            birthday,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the identifier allocated by the store
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            login: self.login,
            name: self.name.unwrap_or_default(),
            email: self.email,
            birthday: self.birthday,
        }
    }
}
