use serde::{Deserialize, Serialize};

/// Represents a registered user in the system.
///
/// Fields are fixed at construction; the store only ever appends users and
/// hands out copies, so an entry never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Payload for registering a new user.
///
/// Both fields must be present in the request body. Their contents are not
/// checked: empty strings and malformed addresses are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
